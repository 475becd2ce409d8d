use turbojet_components::{
    combustor, nozzle,
    turbomachinery::{compressor, shaft, turbine},
};
use turbojet_thermo::{State, fluid::Air};
use uom::si::ratio::ratio;

use crate::{
    ConfigError, CycleConfig, CycleConstants, CyclePerformance, DesignPoint, PerformanceError,
    Stations,
};

/// A single-spool turbojet with fixed cycle constants.
///
/// Air enters at ambient total state, so the evaluation is for static
/// (zero flight speed) conditions with an ideal inlet. The nozzle is fully
/// expanded to ambient pressure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Turbojet {
    constants: CycleConstants,
}

impl Turbojet {
    #[must_use]
    pub fn new(constants: CycleConstants) -> Self {
        Self { constants }
    }

    /// Builds an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a constant is out of range.
    pub fn from_config(config: CycleConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.try_into()?))
    }

    #[must_use]
    pub fn constants(&self) -> &CycleConstants {
        &self.constants
    }

    /// Evaluates the engine at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceError::InvalidArgument`] if `point` fails
    /// validation, or a component variant if the cycle cannot close.
    pub fn evaluate(&self, point: &DesignPoint) -> Result<CyclePerformance, PerformanceError> {
        let point = point.validate()?;
        let CycleConstants {
            gas,
            fuel,
            mechanical_efficiency,
            ambient,
        } = &self.constants;
        let p_ambient = ambient.pressure.into_inner();

        let station_2 = State::new(ambient.temperature, p_ambient, Air);

        let compression = compressor::isentropic(
            &station_2,
            point.compressor_pressure_ratio,
            point.compressor_efficiency,
            gas,
        )?;

        let combustion = combustor::burn(
            &compression.outlet,
            point.turbine_inlet_temperature,
            point.combustor_pressure_ratio,
            fuel,
            gas,
        )?;

        let turbine_work = shaft::turbine_work_required(compression.work, *mechanical_efficiency);
        let expansion = turbine::work_matched(
            &combustion.outlet,
            turbine_work,
            point.turbine_efficiency,
            gas,
        )?;

        let jet = nozzle::expand(&expansion.outlet, p_ambient, point.nozzle_efficiency, gas)?;

        let f = combustion.fuel_air_ratio.get::<ratio>();
        let specific_thrust = jet.exhaust_velocity * (1.0 + f);

        Ok(CyclePerformance {
            stations: Stations {
                station_2,
                station_3: compression.outlet,
                station_4: combustion.outlet,
                station_5: expansion.outlet,
            },
            compressor_work: compression.work,
            turbine_work: expansion.work,
            fuel_air_ratio: combustion.fuel_air_ratio,
            nozzle_exit_temperature: jet.exit_temperature,
            exhaust_velocity: jet.exhaust_velocity,
            specific_thrust,
        })
    }
}
