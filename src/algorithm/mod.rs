/// Candidate domains as bitsets of tile ids
pub mod bitset;
/// Connection sets and the tile compatibility table
pub mod connectivity;
/// Backtracking grid generator
pub mod executor;
/// Orbit variables and arc-consistent candidate domains
pub mod propagation;
/// Candidate ranking policies
pub mod selection;
