//! Calorically perfect gas modeling for turbojet cycle analysis.

mod error;
mod state;

pub mod fluid;
pub mod model;
pub mod units;

pub use error::PropertyError;
pub use state::State;
