use crate::angle::pow2;

/// Fractional bits of the gain annihilation constant.
///
/// The correction is a multiply by [`annihilation`] followed by a right
/// shift by this many bits.
pub const GAIN_FRACTION_BITS: u32 = 32;

/// Magnitude growth of an unscaled CORDIC pipeline.
///
/// Each stage `k` scales the vector by `sqrt(1 + 2^-2(k+1))`. Depends only on
/// the number of stages, not on the phase width.
pub fn gain(stages: u32) -> f64 {
    (0..stages)
        .map(|k| (1.0 + pow2(-2 * (i64::from(k) + 1))).sqrt())
        .product()
}

/// Fixed point reciprocal of the pipeline gain.
///
/// Saturates to `u32::MAX` for a unit gain (no stages).
pub fn annihilation(stages: u32) -> u32 {
    (1.0 / gain(stages) * (1u64 << GAIN_FRACTION_BITS) as f64) as u32
}
