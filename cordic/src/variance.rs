//! Quantization error models.

use crate::angle::{angles, pow2};

/// Variance of the accumulated phase quantization error in radians².
///
/// Each stage angle is truncated to the phase accumulator grid. The stage
/// errors are treated as independent and their squares summed. The bias of
/// the truncation is not captured.
pub fn phase_quantization_variance(stages: u32, phase_bits: u32) -> f64 {
    angles(stages, phase_bits)
        .map(|s| s.error() * s.error())
        .fold(0.0, |v, e| v + e)
}

/// Variance of the error from dropping low bits of the x and y datapath.
///
/// Every stage adds uniform noise of `1/3 * 2^-2d` on each of the two
/// coordinates, plus one final `1/12` rounding term per coordinate.
pub fn transform_quantization_variance(stages: u32, dropped_bits: u32) -> f64 {
    let stage_variance = 2.0 * stages as f64 / 3.0;
    let drop_scale = 1.0 / pow2(dropped_bits.into());
    stage_variance * (drop_scale * drop_scale) + 2.0 / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{phase_scale, quantize, stage_angle};
    use crate::testing::isclose;

    #[test]
    fn empty() {
        assert_eq!(phase_quantization_variance(0, 16), 0.0);
        assert_eq!(transform_quantization_variance(0, 0), 1.0 / 6.0);
    }

    #[test]
    fn phase_single_stage() {
        let scale = phase_scale(8);
        let x = stage_angle(0) * scale;
        let err = (quantize(0, 8) as f64 - x) / scale;
        assert_eq!(phase_quantization_variance(1, 8), err * err);
    }

    #[test]
    fn phase_nonnegative_nonincreasing() {
        for stages in 0..=32 {
            let mut prev = f64::INFINITY;
            for phase_bits in 3..=40 {
                let v = phase_quantization_variance(stages, phase_bits);
                assert!(v >= 0.0);
                // Each stage error is below one LSB
                let lsb = 1.0 / phase_scale(phase_bits);
                assert!(v <= stages as f64 * lsb * lsb);
                assert!(v <= prev, "{stages} {phase_bits}: {v} > {prev}");
                prev = v;
            }
        }
    }

    #[test]
    fn transform_closed_form() {
        for n in [0u32, 1, 7, 16, 64] {
            for d in [0u32, 1, 3, 8, 20] {
                let v = transform_quantization_variance(n, d);
                let want = 2.0 * n as f64 / 3.0 * 2f64.powi(-2 * d as i32)
                    + 1.0 / 6.0;
                assert!(isclose(v, want, 1e-15, 0.), "{n} {d}");
                assert_eq!(v, transform_quantization_variance(n, d));
            }
        }
        assert_eq!(transform_quantization_variance(3, 1), 0.5 + 1.0 / 6.0);
        assert_eq!(transform_quantization_variance(3, u32::MAX), 1.0 / 6.0);
    }
}
