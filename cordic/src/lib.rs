//! CORDIC pipeline parameter derivation.
//!
//! Given an output word width this crate selects the phase accumulator width
//! and the number of micro-rotation stages, models the pipeline gain and the
//! quantization error, and emits the per-stage rotation angles as a Verilog
//! table.

pub mod angle;
pub use angle::{angles, Stage};
pub mod gain;
pub use gain::{annihilation, gain};
pub mod literal;
pub mod select;
pub use select::Search;
pub mod table;
pub use table::{emit_angle_table, emit_preamble};
pub mod variance;
pub use variance::{
    phase_quantization_variance, transform_quantization_variance,
};

#[cfg(test)]
pub mod testing;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Search did not converge below {0}")]
    Ceiling(u32),
}
