use uom::si::{
    f64::{Ratio, SpecificHeatCapacity},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};

/// Marker type for air, and for the combustion products that follow it
/// through a turbojet when a single set of gas properties is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl PerfectGasFluid for Air {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1004.5),
            Ratio::new::<ratio>(1.4),
        )
    }
}
