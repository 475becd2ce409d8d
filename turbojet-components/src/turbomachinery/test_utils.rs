//! Shared fixtures for component unit tests.
//!
//! These helpers keep inline `#[cfg(test)]` modules small and make every test
//! use the same round-number test gas.

use turbojet_core::constraint::{Constrained, UnitIntervalLeftOpen};
use turbojet_thermo::{
    State,
    model::perfect_gas::{PerfectGas, PerfectGasFluid, PerfectGasParameters},
    units::SpecificEnthalpy,
};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, Pressure, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    pressure::kilopascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Perfect gas test fluid with `k = 1.4` and `cp = 1000 J/(kg·K)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct MockGas;

impl PerfectGasFluid for MockGas {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1000.0),
            Ratio::new::<ratio>(1.4),
        )
    }
}

pub(crate) fn mock_gas_model() -> PerfectGas<MockGas> {
    PerfectGas::<MockGas>::new().expect("mock gas parameters must be physically valid")
}

/// Constructs a specific enthalpy in SI units (J/kg).
pub(crate) fn enth_si(value: f64) -> SpecificEnthalpy {
    AvailableEnergy::new::<joule_per_kilogram>(value)
}

/// Constructs a mock gas state from kelvin and kilopascal.
pub(crate) fn state(t_kelvin: f64, p_kilopascal: f64) -> State<MockGas> {
    State::new(
        ThermodynamicTemperature::new::<kelvin>(t_kelvin),
        Pressure::new::<kilopascal>(p_kilopascal),
        MockGas,
    )
}

/// Constructs an efficiency, panicking if it is out of range.
pub(crate) fn eta(value: f64) -> Constrained<Ratio, UnitIntervalLeftOpen> {
    UnitIntervalLeftOpen::new(Ratio::new::<ratio>(value)).expect("test efficiency must be valid")
}
