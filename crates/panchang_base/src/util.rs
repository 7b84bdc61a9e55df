//! Shared helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Index of the equal segment of width `span` containing `deg`, clamped to `count - 1`.
pub(crate) fn segment_index(deg: f64, span: f64, count: u8) -> u8 {
    let idx = (normalize_360(deg) / span).floor() as u8;
    idx.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_values() {
        assert!(normalize_360(0.0).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!(normalize_360(360.0).abs() < 1e-15);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn segment_clamps_at_top() {
        assert_eq!(segment_index(359.999_999_999_999, 12.0, 30), 29);
        assert_eq!(segment_index(12.0, 12.0, 30), 1);
        assert_eq!(segment_index(-0.5, 12.0, 30), 29);
    }
}
