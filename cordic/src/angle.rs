use core::f64::consts::PI;
use serde::Serialize;

/// `2^exp`, flushing to zero or infinity outside the `f64` range.
pub fn pow2(exp: i64) -> f64 {
    2f64.powi(exp.clamp(-1100, 1100) as i32)
}

/// Exact rotation angle of a CORDIC stage.
///
/// Stage `k` rotates by `atan(2^-(k+1))` radians.
pub fn stage_angle(stage: u32) -> f64 {
    1f64.atan2(pow2(i64::from(stage) + 1))
}

/// Phase accumulator units per radian.
///
/// A `phase_bits` wide accumulator spans one full turn.
pub fn phase_scale(phase_bits: u32) -> f64 {
    pow2(phase_bits.into()) / (PI * 2.0)
}

/// Quantized phase value of a stage angle, truncated toward zero.
pub fn quantize(stage: u32, phase_bits: u32) -> u64 {
    (stage_angle(stage) * phase_scale(phase_bits)) as u64
}

/// One row of the angle table.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Stage {
    pub index: u32,
    /// Exact rotation angle in radians
    pub radians: f64,
    /// Truncated phase accumulator value
    pub phase: u64,
    /// Phase accumulator units per radian
    #[serde(skip)]
    scale: f64,
}

impl Stage {
    pub fn new(index: u32, phase_bits: u32) -> Self {
        let radians = stage_angle(index);
        let scale = phase_scale(phase_bits);
        Self {
            index,
            radians,
            phase: (radians * scale) as u64,
            scale,
        }
    }

    pub fn degrees(&self) -> f64 {
        self.radians * 180.0 / PI
    }

    /// Quantization error in radians.
    ///
    /// Non-positive since the phase value is truncated.
    pub fn error(&self) -> f64 {
        let x = self.radians * self.scale;
        (self.phase as f64 - x) / self.scale
    }
}

/// The angle table of a pipeline, in ascending stage order.
pub fn angles(
    stages: u32,
    phase_bits: u32,
) -> impl Iterator<Item = Stage> + Clone {
    (0..stages).map(move |k| Stage::new(k, phase_bits))
}
