//! Fluid marker types.

mod air;

pub use air::Air;
