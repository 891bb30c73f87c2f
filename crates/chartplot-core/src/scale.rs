// File: crates/chartplot-core/src/scale.rs
// Summary: Linear data-to-pixel transform for one axis.

/// Maps a data range onto a pixel span. `start_px` is where `vmin` lands, so a
/// Y scale passes the plot bottom as `start_px` and the top as `end_px`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

/// Widens a range whose span is zero at the precision of its endpoints to
/// `max(0.5, 5% of |value|)` on each side. Any other range comes back as is.
pub fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() > f64::EPSILON * lo.abs().max(hi.abs()) {
        return (lo, hi);
    }
    let mid = lo + span * 0.5;
    let half = (mid.abs() * 0.05).max(0.5);
    (mid - half, mid + half)
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let (vmin, vmax) = nonsingular(vmin, vmax);
        Self { start_px, end_px, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_scale_is_inverted() {
        let s = LinearScale::new(500.0, 100.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 500.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert_eq!(s.to_px(5.0), 300.0);
    }

    #[test]
    fn zero_span_is_widened() {
        let s = LinearScale::new(0.0, 100.0, 3.0, 3.0);
        assert_eq!((s.vmin, s.vmax), (2.5, 3.5));
        assert_eq!(s.to_px(3.0), 50.0);
    }

    #[test]
    fn tiny_spans_are_kept() {
        let s = LinearScale::new(0.0, 100.0, 1e-10, 5e-10);
        assert_eq!((s.vmin, s.vmax), (1e-10, 5e-10));
        assert!((s.to_px(3e-10) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn huge_constant_gets_relative_span() {
        let (lo, hi) = nonsingular(1e17, 1e17);
        assert!(lo < 1e17 && hi > 1e17);
        assert!((hi - lo - 1e16).abs() < 1e3);

        let s = LinearScale::new(600.0, 0.0, 1e17, 1e17);
        assert!((s.to_px(1e17) - 300.0).abs() < 1e-3);
    }

    #[test]
    fn negative_constant_widens_by_magnitude() {
        assert_eq!(nonsingular(-40.0, -40.0), (-42.0, -38.0));
        assert_eq!(nonsingular(0.0, 0.0), (-0.5, 0.5));
    }
}
