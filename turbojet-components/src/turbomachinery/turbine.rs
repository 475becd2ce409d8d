//! Turbine models.

mod types;
mod work_matched;

pub use types::{ExpansionError, ExpansionResult};
pub use work_matched::work_matched;
