use turbojet_components::combustor::Fuel;
use turbojet_core::constraint::{Constrained, StrictlyPositive, UnitIntervalLeftOpen};
use turbojet_thermo::{fluid::Air, model::perfect_gas::PerfectGas};
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::CycleConfig;

/// Static ambient conditions, which are also the compressor-face total state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Constrained<Pressure, StrictlyPositive>,
}

/// Validated constants shared by every design point of an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleConstants {
    /// Property model for air and combustion products.
    pub gas: PerfectGas<Air>,

    /// Fuel heating value and combustion efficiency.
    pub fuel: Fuel,

    /// Shaft mechanical efficiency.
    pub mechanical_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,

    /// Ambient static conditions.
    pub ambient: Ambient,
}

/// Sea-level standard ambient conditions and a kerosene-like fuel.
///
/// | constant              | value            |
/// |-----------------------|------------------|
/// | `γ`                   | 1.4              |
/// | `cp`                  | 1004.5 J/(kg·K)  |
/// | lower heating value   | 43 MJ/kg         |
/// | combustion efficiency | 0.98             |
/// | mechanical efficiency | 0.99             |
/// | ambient temperature   | 288.15 K         |
/// | ambient pressure      | 101 325 Pa       |
impl Default for CycleConstants {
    fn default() -> Self {
        CycleConfig::default()
            .try_into()
            .expect("default cycle constants are physically valid")
    }
}
