//! Generator configuration.
//!
//! A configuration names the output word width the CORDIC has to serve and
//! optionally pins the phase width or the stage count. Whatever is not pinned
//! is derived with the searches in [`cordic::select`]:
//!
//! 1. The phase width is the narrowest adequate for the output width.
//! 2. The stage count is the smallest at which another stage no longer
//!    rotates, bounded by the working width if one is given.
//!
//! Configurations are read from JSON and layered: later sources override the
//! fields they set.
use cordic::select::{self, MIN_PHASE_BITS, SEARCH_CEILING};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither a phase width nor an output width was given.
    #[error("Need a phase width or an output width to derive it from")]
    Width,
    /// The phase width is outside the supported range.
    #[error("Invalid phase width {0}")]
    PhaseBits(u32),
    #[error("Parameter search")]
    Search(#[from] cordic::Error),
    #[error("Configuration")]
    Json(#[from] serde_json::Error),
}

/// CORDIC generator configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Width of the output words in bits.
    pub output_width: Option<u32>,

    /// Width of the x/y datapath. Bounds the number of stages.
    pub working_width: Option<u32>,

    /// Phase accumulator width. Derived from `output_width` if not given.
    pub phase_bits: Option<u32>,

    /// Number of CORDIC stages. Derived from `phase_bits` if not given.
    pub stages: Option<u32>,

    /// Low datapath bits dropped, for the transform error estimate
    pub dropped_bits: Option<u32>,
}

/// The parameters of one CORDIC pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Design {
    pub phase_bits: u32,
    pub stages: u32,
    pub dropped_bits: Option<u32>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Layer `other` on top of `self`.
    pub fn merge(self, other: Config) -> Config {
        Config {
            output_width: other.output_width.or(self.output_width),
            working_width: other.working_width.or(self.working_width),
            phase_bits: other.phase_bits.or(self.phase_bits),
            stages: other.stages.or(self.stages),
            dropped_bits: other.dropped_bits.or(self.dropped_bits),
        }
    }

    /// Validate the configuration and derive the missing parameters.
    pub fn build(&self) -> Result<Design, Error> {
        let phase_bits = match (self.phase_bits, self.output_width) {
            (Some(phase_bits), _) => phase_bits,
            (None, Some(output_width)) => {
                select::phase_bits(output_width).ok()?
            }
            (None, None) => return Err(Error::Width),
        };
        if !(MIN_PHASE_BITS..=SEARCH_CEILING).contains(&phase_bits) {
            return Err(Error::PhaseBits(phase_bits));
        }

        let stages = match (self.stages, self.working_width) {
            (Some(stages), _) => stages,
            (None, Some(working_width)) => {
                select::stages_bounded(working_width, phase_bits).ok()?
            }
            (None, None) => select::stages(phase_bits).ok()?,
        };

        log::debug!("{self:?}: {phase_bits} phase bits, {stages} stages");

        Ok(Design {
            phase_bits,
            stages,
            dropped_bits: self.dropped_bits,
        })
    }
}
