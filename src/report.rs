//! Machine readable summary of a CORDIC design.
use serde::Serialize;

use crate::{metadata::ApplicationMetadata, settings::Design};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Angle {
    pub index: u32,
    pub degrees: f64,
    pub phase: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub metadata: ApplicationMetadata,
    pub phase_bits: u32,
    pub stages: u32,
    pub gain: f64,
    /// Multiply by this and shift right by 32 to undo the gain
    pub annihilation: u32,
    /// Radians²
    pub phase_variance: f64,
    /// Radians
    pub phase_std_dev: f64,
    pub transform_variance: Option<f64>,
    pub angles: Vec<Angle>,
}

impl Report {
    pub fn new(design: &Design) -> Self {
        let Design {
            phase_bits,
            stages,
            dropped_bits,
        } = *design;
        let phase_variance =
            cordic::phase_quantization_variance(stages, phase_bits);
        Self {
            metadata: ApplicationMetadata::new(),
            phase_bits,
            stages,
            gain: cordic::gain(stages),
            annihilation: cordic::annihilation(stages),
            phase_variance,
            phase_std_dev: phase_variance.sqrt(),
            transform_variance: dropped_bits.map(|d| {
                cordic::transform_quantization_variance(stages, d)
            }),
            angles: cordic::angles(stages, phase_bits)
                .map(|s| Angle {
                    index: s.index,
                    degrees: s.degrees(),
                    phase: s.phase,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
