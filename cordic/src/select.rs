//! Phase width and stage count selection.
//!
//! Both resources are grown one step at a time for as long as the extra step
//! still changes the fixed point output.

use core::f64::consts::PI;
use serde::Serialize;

use crate::{
    angle::{self, pow2},
    Error,
};

/// Upper bound on every scan.
pub const SEARCH_CEILING: u32 = 64;

/// Narrowest phase accumulator ever selected.
pub const MIN_PHASE_BITS: u32 = 3;

/// Outcome of a parameter scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Search {
    /// The adequacy condition holds at this value.
    Converged(u32),
    /// The working width budget stopped the scan at this value.
    Bounded(u32),
    /// The scan reached [`SEARCH_CEILING`] without the condition holding.
    Ceiling,
}

impl Search {
    /// The selected value, [`SEARCH_CEILING`] if the scan did not converge.
    pub fn value(&self) -> u32 {
        match *self {
            Self::Converged(v) | Self::Bounded(v) => v,
            Self::Ceiling => SEARCH_CEILING,
        }
    }

    /// Whether the scan stopped before the ceiling.
    pub fn converged(&self) -> bool {
        !matches!(self, Self::Ceiling)
    }

    /// Reject a scan that ran into the ceiling.
    pub fn ok(&self) -> Result<u32, Error> {
        match *self {
            Self::Ceiling => Err(Error::Ceiling(SEARCH_CEILING)),
            _ => Ok(self.value()),
        }
    }
}

/// Whether the smallest phase step is invisible in the output.
///
/// The sine of one phase LSB, at full scale amplitude of an `output_width`
/// word, must stay below half an output LSB.
pub fn phase_adequate(phase_bits: u32, output_width: u32) -> bool {
    let step = PI * 2.0 / pow2(phase_bits.into());
    step.sin() * (pow2(output_width.into()) - 1.0) < 0.5
}

/// Minimum phase accumulator width for an output word width.
///
/// Never selects fewer than [`MIN_PHASE_BITS`].
pub fn phase_bits(output_width: u32) -> Search {
    let search = (MIN_PHASE_BITS..SEARCH_CEILING)
        .find(|&b| phase_adequate(b, output_width))
        .map_or(Search::Ceiling, Search::Converged);
    match search {
        Search::Ceiling => {
            log::warn!("No phase width is adequate for {output_width} bit output")
        }
        s => log::debug!("Output width {output_width}: phase bits {s:?}"),
    }
    search
}

/// Minimum stage count for a phase accumulator width.
///
/// Stops at the first stage whose angle truncates to zero: that stage and
/// all later ones would not rotate at all.
pub fn stages(phase_bits: u32) -> Search {
    let search = (0..SEARCH_CEILING)
        .find(|&n| angle::quantize(n, phase_bits) == 0)
        .map_or(Search::Ceiling, Search::Converged);
    log::debug!("Phase bits {phase_bits}: stages {search:?}");
    search
}

/// Minimum stage count, additionally bounded by the datapath width.
///
/// The scan stops at the first stage whose angle truncates to zero or once
/// the stage index reaches `working_width`, whichever comes first.
pub fn stages_bounded(working_width: u32, phase_bits: u32) -> Search {
    let mut search = Search::Ceiling;
    for n in 0..SEARCH_CEILING {
        if angle::quantize(n, phase_bits) == 0 {
            search = Search::Converged(n);
            break;
        }
        if working_width <= n {
            search = Search::Bounded(n);
            break;
        }
    }
    log::debug!(
        "Phase bits {phase_bits}, working width {working_width}: stages {search:?}"
    );
    search
}
