//! Bracketing and bisection shared by every boundary search.

use panchang_time::Instant;

use crate::anga_types::SearchDirection;
use crate::config::SearchConfig;
use crate::error::SearchError;

/// Normalize an angle difference to [-180, 180).
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Find where `f` rises through zero, walking from `from` in `direction`.
///
/// `f` is an angle difference already folded into [-180, 180). A bracket is
/// accepted only when `f` goes from negative to non-negative in time order
/// and the jump between samples is under 180°, so the antipodal wrap from
/// +180 to -180 is never mistaken for a root. Returns `None` when no
/// bracket is found within `window_days`.
///
/// The returned instant is the first sampled point at or past the root,
/// within `config.tolerance_seconds` of it.
pub(crate) fn find_zero_crossing(
    f: &dyn Fn(Instant) -> Result<f64, SearchError>,
    from: Instant,
    direction: SearchDirection,
    step_days: f64,
    window_days: f64,
    config: &SearchConfig,
) -> Result<Option<Instant>, SearchError> {
    let steps = (window_days / step_days).ceil().max(1.0) as u32;
    let mut prev_t = from;
    let mut prev_v = f(from)?;

    for i in 1..=steps {
        let t = from.add_days(direction.sign() * step_days * i as f64);
        let v = f(t)?;
        let (lo, f_lo, hi, f_hi) = match direction {
            SearchDirection::Forward => (prev_t, prev_v, t, v),
            SearchDirection::Backward => (t, v, prev_t, prev_v),
        };
        if f_lo < 0.0 && f_hi >= 0.0 && f_hi - f_lo < 180.0 {
            return bisect(f, lo, hi, config).map(Some);
        }
        prev_t = t;
        prev_v = v;
    }
    Ok(None)
}

/// Narrow `[lo, hi]` with `f(lo) < 0 <= f(hi)` until it is within tolerance.
fn bisect(
    f: &dyn Fn(Instant) -> Result<f64, SearchError>,
    mut lo: Instant,
    mut hi: Instant,
    config: &SearchConfig,
) -> Result<Instant, SearchError> {
    for _ in 0..config.max_iterations {
        if hi.seconds_since(lo) <= config.tolerance_seconds {
            break;
        }
        let mid = lo.midpoint(hi);
        if f(mid)? < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pm180_range() {
        assert_eq!(normalize_to_pm180(0.0), 0.0);
        assert_eq!(normalize_to_pm180(180.0), -180.0);
        assert_eq!(normalize_to_pm180(-190.0), 170.0);
        assert_eq!(normalize_to_pm180(350.0), -10.0);
    }

    #[test]
    fn finds_linear_root() {
        // 12°/day, root 1.3 days after the epoch
        let f = |t: Instant| -> Result<f64, SearchError> {
            let d = t.seconds_since(Instant::J2000) / 86_400.0;
            Ok(normalize_to_pm180(12.0 * (d - 1.3)))
        };
        let cfg = SearchConfig::default();
        let root = find_zero_crossing(&f, Instant::J2000, SearchDirection::Forward, 0.25, 3.0, &cfg)
            .unwrap()
            .unwrap();
        let err = root.seconds_since(Instant::J2000) - 1.3 * 86_400.0;
        assert!((0.0..=cfg.tolerance_seconds).contains(&err), "err = {err}");

        let start = Instant::J2000.add_days(2.0);
        let back = find_zero_crossing(&f, start, SearchDirection::Backward, 0.25, 3.0, &cfg)
            .unwrap()
            .unwrap();
        assert!((back.seconds_since(root)).abs() <= cfg.tolerance_seconds);
    }

    #[test]
    fn ignores_antipodal_wrap() {
        // Root at day 1; the +180/-180 wrap sits at day -14
        let f = |t: Instant| -> Result<f64, SearchError> {
            let d = t.seconds_since(Instant::J2000) / 86_400.0;
            Ok(normalize_to_pm180(12.0 * (d - 1.0)))
        };
        let cfg = SearchConfig::default();
        let from = Instant::J2000.add_days(-16.0);
        let found =
            find_zero_crossing(&f, from, SearchDirection::Forward, 0.5, 3.0, &cfg).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn none_when_window_too_short() {
        let f = |_: Instant| -> Result<f64, SearchError> { Ok(-5.0) };
        let cfg = SearchConfig::default();
        let found =
            find_zero_crossing(&f, Instant::J2000, SearchDirection::Forward, 0.25, 3.0, &cfg)
                .unwrap();
        assert!(found.is_none());
    }
}
