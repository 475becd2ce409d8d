use std::path::Path;

use serde::{Deserialize, Serialize};
use turbojet_components::combustor::Fuel;
use turbojet_core::constraint::{ConstraintError, StrictlyPositive, UnitIntervalLeftOpen};
use turbojet_thermo::{
    fluid::Air,
    model::perfect_gas::{PerfectGas, PerfectGasFluid, PerfectGasParameters},
};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, Pressure, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{Ambient, ConfigError, CycleConstants};

/// Serializable cycle constants in SI units.
///
/// Every field is optional in TOML and falls back to the value used by
/// [`CycleConstants::default`]. Unknown keys are rejected.
///
/// ```toml
/// gamma = 1.4
/// cp_j_per_kg_k = 1004.5
/// lower_heating_value_j_per_kg = 43.0e6
/// combustion_efficiency = 0.98
/// mechanical_efficiency = 0.99
/// ambient_temperature_k = 288.15
/// ambient_pressure_pa = 101325.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CycleConfig {
    pub gamma: f64,
    pub cp_j_per_kg_k: f64,
    pub lower_heating_value_j_per_kg: f64,
    pub combustion_efficiency: f64,
    pub mechanical_efficiency: f64,
    pub ambient_temperature_k: f64,
    pub ambient_pressure_pa: f64,
}

/// Gas properties come from [`Air`]; the rest are sea-level standard
/// conditions and a kerosene-like fuel.
impl Default for CycleConfig {
    fn default() -> Self {
        let air = Air::parameters();
        Self {
            gamma: air.gamma.get::<ratio>(),
            cp_j_per_kg_k: air.cp.get::<joule_per_kilogram_kelvin>(),
            lower_heating_value_j_per_kg: 43.0e6,
            combustion_efficiency: 0.98,
            mechanical_efficiency: 0.99,
            ambient_temperature_k: 288.15,
            ambient_pressure_pa: 101_325.0,
        }
    }
}

impl CycleConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML for this type.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl TryFrom<CycleConfig> for CycleConstants {
    type Error = ConfigError;

    fn try_from(config: CycleConfig) -> Result<Self, Self::Error> {
        let gas = PerfectGas::with_parameters(PerfectGasParameters::new(
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(config.cp_j_per_kg_k),
            Ratio::new::<ratio>(config.gamma),
        ))?;

        let lower_heating_value = StrictlyPositive::new(AvailableEnergy::new::<
            joule_per_kilogram,
        >(config.lower_heating_value_j_per_kg))
        .map_err(invalid("lower_heating_value_j_per_kg", config.lower_heating_value_j_per_kg))?;

        let combustion_efficiency =
            UnitIntervalLeftOpen::new(Ratio::new::<ratio>(config.combustion_efficiency))
                .map_err(invalid("combustion_efficiency", config.combustion_efficiency))?;

        let mechanical_efficiency =
            UnitIntervalLeftOpen::new(Ratio::new::<ratio>(config.mechanical_efficiency))
                .map_err(invalid("mechanical_efficiency", config.mechanical_efficiency))?;

        let ambient_temperature = StrictlyPositive::new(config.ambient_temperature_k)
            .map_err(invalid("ambient_temperature_k", config.ambient_temperature_k))?;

        let ambient_pressure =
            StrictlyPositive::new(Pressure::new::<pascal>(config.ambient_pressure_pa))
                .map_err(invalid("ambient_pressure_pa", config.ambient_pressure_pa))?;

        Ok(CycleConstants {
            gas,
            fuel: Fuel {
                lower_heating_value,
                combustion_efficiency,
            },
            mechanical_efficiency,
            ambient: Ambient {
                temperature: ThermodynamicTemperature::new::<kelvin>(
                    ambient_temperature.into_inner(),
                ),
                pressure: ambient_pressure,
            },
        })
    }
}

fn invalid(name: &'static str, value: f64) -> impl FnOnce(ConstraintError) -> ConfigError {
    move |source| ConfigError::InvalidConstant {
        name,
        value,
        source,
    }
}
