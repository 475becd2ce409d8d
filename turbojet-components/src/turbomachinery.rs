//! Turbomachinery component models.
//!
//! This module contains models for the compressor and turbine, plus the shaft
//! that couples them. Work is reported as a non-negative work type
//! (e.g., [`CompressionWork`]) rather than a signed value with a
//! convention-dependent meaning.

pub mod compressor;
pub mod shaft;
pub mod turbine;
mod work;

pub use work::{CompressionWork, ExpansionWork};

#[cfg(test)]
pub(crate) mod test_utils;
