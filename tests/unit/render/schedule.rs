//! Tests for curve and dot reveal schedules

#[cfg(test)]
mod tests {
    use kolam::io::configuration::{DOT_FADE_MS, MIN_CURVE_STEP_MS};
    use kolam::render::schedule::{
        checked_duration, curve_schedule, curve_step_ms, dot_schedule,
    };

    // Tests curves start at even spacing and share one duration
    // Verified by starting every curve at zero
    #[test]
    fn test_curve_schedule_spacing() {
        let steps = curve_schedule(4, 2000.0).unwrap_or_else(|e| panic!("schedule: {e}"));

        let begins: Vec<f64> = steps.iter().map(|step| step.begin_ms).collect();
        assert_eq!(begins, vec![0.0, 500.0, 1000.0, 1500.0]);
        assert!(
            steps
                .iter()
                .all(|step| (step.duration_ms - 500.0).abs() < 1e-9)
        );
        assert!(steps.last().is_some_and(|step| (step.end_ms() - 2000.0).abs() < 1e-9));
    }

    // Tests short durations hit the per-curve floor
    // Verified by removing the minimum step
    #[test]
    fn test_curve_step_floor() {
        assert!((curve_step_ms(100, 500.0) - MIN_CURVE_STEP_MS).abs() < f64::EPSILON);
        assert!((curve_step_ms(0, 500.0) - 500.0).abs() < f64::EPSILON);

        let steps = curve_schedule(3, 0.0).unwrap_or_else(|e| panic!("schedule: {e}"));
        assert!(steps.iter().all(|step| step.begin_ms == 0.0));
        assert!(
            steps
                .iter()
                .all(|step| (step.duration_ms - MIN_CURVE_STEP_MS).abs() < f64::EPSILON)
        );
    }

    // Tests dots fade over a fixed time spread across the duration
    // Verified by using the curve step as the dot fade
    #[test]
    fn test_dot_schedule() {
        let steps = dot_schedule(5, 1000.0).unwrap_or_else(|e| panic!("schedule: {e}"));

        assert_eq!(steps.len(), 5);
        assert!(steps.get(2).is_some_and(|step| (step.begin_ms - 400.0).abs() < 1e-9));
        assert!(
            steps
                .iter()
                .all(|step| (step.duration_ms - DOT_FADE_MS).abs() < f64::EPSILON)
        );
        assert!(dot_schedule(0, 1000.0).is_ok_and(|s| s.is_empty()));
    }

    // Tests invalid durations are rejected
    // Verified by accepting negative durations
    #[test]
    fn test_invalid_duration() {
        assert!(checked_duration(-1.0).is_err());
        assert!(checked_duration(f64::NAN).is_err());
        assert!(curve_schedule(2, f64::INFINITY).is_err());
        assert!(checked_duration(0.0).is_ok());
    }
}
