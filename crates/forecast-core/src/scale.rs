// File: crates/forecast-core/src/scale.rs
// Summary: Index (X) and price (Y) linear scale transforms.

/// Logical X coordinate: position in the combined historical + forecast sequence.
pub type Logical = f64;
/// Value Y coordinate: price.
pub type Value = f64;

/// Horizontal scale spreading `count` indices evenly across `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub right_px: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f64, right_px: f64, count: usize) -> Self {
        Self { left_px, right_px, count }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f64 {
        // a single point sits at the left edge
        let span = self.count.saturating_sub(1).max(1) as f64;
        self.left_px + (x / span) * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { top_px, bottom_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        let span = self.vmax - self.vmin;
        self.bottom_px - (y - self.vmin) / span * (self.bottom_px - self.top_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_scale_spans_plot() {
        let s = IndexScale::new(80.0, 740.0, 150);
        assert_eq!(s.to_px(0.0), 80.0);
        assert!((s.to_px(149.0) - 740.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_sits_on_left_edge() {
        assert_eq!(IndexScale::new(80.0, 740.0, 1).to_px(0.0), 80.0);
    }

    #[test]
    fn value_scale_maps_min_to_bottom() {
        let s = ValueScale::new_linear(40.0, 340.0, 1000.0, 2000.0);
        assert_eq!(s.to_px(1000.0), 340.0);
        assert_eq!(s.to_px(2000.0), 40.0);
        assert!((s.to_px(1500.0) - 190.0).abs() < 1e-9);
    }

    #[test]
    fn flat_value_range_is_widened() {
        let s = ValueScale::new_linear(0.0, 100.0, 5.0, 5.0);
        assert!(s.to_px(5.0).is_finite());
    }
}
