#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `acos` with its argument clamped to [-1, 1].
///
/// Rounding can push a cosine a few ulps past ±1, which would make `acos`
/// return NaN. A NaN argument (0/0 from a degenerate geometry) maps to 0.
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(-1.0, 1.0).acos()
}
