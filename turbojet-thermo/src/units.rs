//! Unit aliases and helpers used across the cycle crates.

use uom::si::{
    f64::{AvailableEnergy, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval, thermodynamic_temperature,
};

/// Specific enthalpy, in energy per unit mass.
pub type SpecificEnthalpy = AvailableEnergy;

/// Difference between two absolute temperatures.
///
/// `uom` does not implement subtraction between two [`ThermodynamicTemperature`]
/// values, since the result is a different kind of quantity.
/// This trait provides that subtraction explicitly.
pub trait TemperatureDifference {
    /// Returns `self - other` as a [`TemperatureInterval`].
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<temperature_interval::kelvin>(
            self.get::<thermodynamic_temperature::kelvin>()
                - other.get::<thermodynamic_temperature::kelvin>(),
        )
    }
}
