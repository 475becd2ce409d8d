//! Single-shaft work balance.

use turbojet_core::constraint::{Constrained, UnitIntervalLeftOpen};
use uom::si::f64::Ratio;

use crate::turbomachinery::{CompressionWork, ExpansionWork};

/// Returns the turbine work required to drive a compressor through a shaft
/// with mechanical efficiency `eta`.
///
/// Bearing and accessory losses are lumped into `eta`, so `w_t = w_c/η`.
#[must_use]
pub fn turbine_work_required(
    compression: CompressionWork,
    eta: Constrained<Ratio, UnitIntervalLeftOpen>,
) -> ExpansionWork {
    ExpansionWork::to_drive(compression, eta)
}
