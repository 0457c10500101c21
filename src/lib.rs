//! Host side generator for CORDIC angle tables.
//!
//! The numeric work lives in the [`cordic`] crate. This crate adds the
//! configuration layer, build metadata and the JSON report used by the
//! `cordicgen` binary.

pub mod metadata;
pub mod report;
pub mod settings;
