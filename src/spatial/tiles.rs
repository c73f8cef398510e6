//! The kolam tile library
//!
//! Each tile is a curve drawn inside one unit cell around the cell's centre
//! dot. A tile is identified by its stubs: the edge midpoints where its curve
//! touches the cell border and may continue into a neighbour. The standard
//! library enumerates all sixteen stub combinations, from the blank tile
//! (no stubs) to the four-petal tile (every edge).

use crate::io::configuration::{
    BLANK_TILE, LOOP_RADIUS, SAMPLES_PER_QUARTER_TURN, STUB_RADIUS, TILE_COUNT,
};
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::math::geometry::Point;
use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::LazyLock;

/// One-based tile identifier (`1` is the blank tile)
pub type TileId = usize;

/// A cell edge, listed clockwise from North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top edge
    North,
    /// Right edge
    East,
    /// Bottom edge
    South,
    /// Left edge
    West,
}

impl Direction {
    /// All edges in clockwise order starting at North
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    const fn bit(self) -> u8 {
        match self {
            Self::North => 1,
            Self::East => 2,
            Self::South => 4,
            Self::West => 8,
        }
    }

    /// Position in clockwise order (North = 0)
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Screen-space angle from the cell centre (y grows downward)
    pub fn angle(self) -> f64 {
        (self.quarter_turns() as f64).mul_add(FRAC_PI_2, -FRAC_PI_2)
    }

    /// Edge midpoint in unit-cell coordinates
    pub const fn stub_point(self) -> Point {
        match self {
            Self::North => Point::new(0.5, 0.0),
            Self::East => Point::new(1.0, 0.5),
            Self::South => Point::new(0.5, 1.0),
            Self::West => Point::new(0.0, 0.5),
        }
    }
}

/// Set of edges a tile's curve touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stubs(u8);

impl Stubs {
    /// No stubs at all
    pub const NONE: Self = Self(0);
    /// Every edge
    pub const ALL: Self = Self(0b1111);

    /// Build from a bit mask (North = 1, East = 2, South = 4, West = 8)
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & 0b1111)
    }

    /// Build from a list of edges
    pub fn from_directions(directions: &[Direction]) -> Self {
        Self(directions.iter().fold(0, |mask, d| mask | d.bit()))
    }

    /// Underlying bit mask
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Whether the curve touches `direction`
    pub const fn has(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Number of edges touched
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Touched edges in clockwise order from North
    pub fn directions(self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.has(d))
            .collect()
    }
}

/// Immutable definition of one library tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileDefinition {
    /// One-based id within the library
    pub id: TileId,
    /// Curve samples in unit-cell coordinates (empty for the blank tile)
    pub points: Vec<Point>,
    /// The curve continues into the cell below
    pub has_down_connection: bool,
    /// The curve continues into the cell to the right
    pub has_right_connection: bool,
    /// Edges the curve touches
    pub stubs: Stubs,
}

impl TileDefinition {
    /// Build a tile whose curve loops around the centre dot through `stubs`
    pub fn from_stubs(id: TileId, stubs: Stubs) -> Self {
        Self {
            id,
            points: sample_tile_curve(stubs),
            has_down_connection: stubs.has(Direction::South),
            has_right_connection: stubs.has(Direction::East),
            stubs,
        }
    }

    /// Tile has a down or right connection
    pub const fn is_connecting(&self) -> bool {
        self.has_down_connection || self.has_right_connection
    }
}

// Stub masks of the standard library, indexed by id - 1
const STANDARD_STUBS: [u8; TILE_COUNT] = [
    0b0000, // blank
    0b0001, // N
    0b1000, // W
    0b0100, // S
    0b0010, // E
    0b1001, // N W
    0b1100, // S W
    0b0110, // E S
    0b0011, // N E
    0b1010, // E W
    0b0101, // N S
    0b1011, // N E W
    0b1101, // N S W
    0b1110, // E S W
    0b0111, // N E S
    0b1111, // N E S W
];

static STANDARD_LIBRARY: LazyLock<TileLibrary> = LazyLock::new(|| TileLibrary {
    tiles: STANDARD_STUBS
        .iter()
        .enumerate()
        .map(|(index, &mask)| TileDefinition::from_stubs(index + 1, Stubs::from_mask(mask)))
        .collect(),
});

/// Closed catalogue of tiles addressed by one-based id
#[derive(Debug, Clone, PartialEq)]
pub struct TileLibrary {
    tiles: Vec<TileDefinition>,
}

impl TileLibrary {
    /// The sixteen-tile library, built once per process
    pub fn standard() -> &'static Self {
        &STANDARD_LIBRARY
    }

    /// Build a custom library
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, if tile ids are not exactly
    /// `1..=len` in order, or if the blank tile has any stub.
    pub fn new(tiles: Vec<TileDefinition>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(invalid_parameter(
                "tiles",
                &0,
                &"library needs at least one tile",
            ));
        }
        for (index, tile) in tiles.iter().enumerate() {
            if tile.id != index + 1 {
                return Err(KolamError::InvalidTileIndex {
                    index: tile.id,
                    max_tiles: tiles.len(),
                });
            }
        }
        if tiles
            .first()
            .is_some_and(|blank| blank.stubs != Stubs::NONE || blank.is_connecting())
        {
            return Err(invalid_parameter(
                "tiles",
                &BLANK_TILE,
                &"tile 1 must be the blank tile",
            ));
        }
        Ok(Self { tiles })
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed library
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by id
    pub fn get(&self, id: TileId) -> Option<&TileDefinition> {
        id.checked_sub(1).and_then(|index| self.tiles.get(index))
    }

    /// Look up a tile by id, reporting an error for unknown ids
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `id` is outside `1..=len`.
    pub fn tile(&self, id: TileId) -> Result<&TileDefinition> {
        self.get(id).ok_or(KolamError::InvalidTileIndex {
            index: id,
            max_tiles: self.tiles.len(),
        })
    }

    /// All tiles in id order
    pub fn iter(&self) -> impl Iterator<Item = &TileDefinition> {
        self.tiles.iter()
    }
}

/// Sample the curve of a tile with the given stubs
///
/// The curve starts at the first stub clockwise from North, sweeps clockwise
/// around the centre dot to each following stub and finally returns to the
/// first one, so every non-blank tile is a closed loop enclosing its dot.
/// Between two stubs the radius dips from the edge to [`LOOP_RADIUS`].
pub fn sample_tile_curve(stubs: Stubs) -> Vec<Point> {
    let directions = stubs.directions();
    let Some(&first) = directions.first() else {
        return Vec::new();
    };

    let center = Point::new(0.5, 0.5);
    let mut points = vec![first.stub_point()];

    for (index, &from) in directions.iter().enumerate() {
        let to = directions
            .get(index + 1)
            .copied()
            .unwrap_or(first);

        let mut quarters = (to.quarter_turns() + 4 - from.quarter_turns()) % 4;
        if quarters == 0 {
            quarters = 4;
        }
        let steps = quarters * SAMPLES_PER_QUARTER_TURN;
        let sweep = quarters as f64 * FRAC_PI_2;

        for step in 1..steps {
            let t = step as f64 / steps as f64;
            let angle = t.mul_add(sweep, from.angle());
            let radius = (STUB_RADIUS - LOOP_RADIUS).mul_add(-(PI * t).sin(), STUB_RADIUS);
            points.push(Point::new(
                radius.mul_add(angle.cos(), center.x),
                radius.mul_add(angle.sin(), center.y),
            ));
        }
        points.push(to.stub_point());
    }

    points
}
