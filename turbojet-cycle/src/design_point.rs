use std::fmt;

use serde::{Deserialize, Serialize};
use turbojet_core::constraint::{
    AboveUnity, Constrained, ConstraintError, StrictlyPositive, UnitIntervalLeftOpen,
};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::PerformanceError;

/// The six free parameters of a turbojet design point, as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignPoint {
    /// Compressor total-pressure ratio `πc`.
    pub compressor_pressure_ratio: f64,

    /// Turbine-inlet total temperature `Tt4`, in kelvin.
    pub turbine_inlet_temperature: f64,

    /// Compressor isentropic efficiency `ηc`.
    pub compressor_efficiency: f64,

    /// Turbine isentropic efficiency `ηt`.
    pub turbine_efficiency: f64,

    /// Nozzle kinetic-energy efficiency `ηn`.
    pub nozzle_efficiency: f64,

    /// Combustor total-pressure ratio `πb`.
    pub combustor_pressure_ratio: f64,
}

/// A [`DesignPoint`] whose inputs have passed range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidDesignPoint {
    pub compressor_pressure_ratio: Constrained<Ratio, AboveUnity>,
    pub turbine_inlet_temperature: ThermodynamicTemperature,
    pub compressor_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub turbine_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub nozzle_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub combustor_pressure_ratio: Constrained<Ratio, UnitIntervalLeftOpen>,
}

/// Identifies a design-point input in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    CompressorPressureRatio,
    TurbineInletTemperature,
    CompressorEfficiency,
    TurbineEfficiency,
    NozzleEfficiency,
    CombustorPressureRatio,
}

impl Input {
    /// Describes the values this input accepts.
    #[must_use]
    pub fn requirement(self) -> &'static str {
        match self {
            Self::CompressorPressureRatio => "greater than 1",
            Self::TurbineInletTemperature => "a positive temperature in kelvin",
            Self::CompressorEfficiency
            | Self::TurbineEfficiency
            | Self::NozzleEfficiency
            | Self::CombustorPressureRatio => "in (0, 1]",
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CompressorPressureRatio => "pressure_ratio",
            Self::TurbineInletTemperature => "tt4",
            Self::CompressorEfficiency => "eta_c",
            Self::TurbineEfficiency => "eta_t",
            Self::NozzleEfficiency => "eta_n",
            Self::CombustorPressureRatio => "pi_b",
        })
    }
}

impl DesignPoint {
    /// Checks every input against its allowed range.
    ///
    /// Inputs are checked in argument order, starting with the compressor
    /// pressure ratio, and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceError::InvalidArgument`] naming the offending input.
    pub fn validate(&self) -> Result<ValidDesignPoint, PerformanceError> {
        let compressor_pressure_ratio = AboveUnity::new(as_ratio(self.compressor_pressure_ratio))
            .map_err(invalid(
                Input::CompressorPressureRatio,
                self.compressor_pressure_ratio,
            ))?;

        let tt4 = StrictlyPositive::new(self.turbine_inlet_temperature).map_err(invalid(
            Input::TurbineInletTemperature,
            self.turbine_inlet_temperature,
        ))?;

        Ok(ValidDesignPoint {
            compressor_pressure_ratio,
            turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(tt4.into_inner()),
            compressor_efficiency: unit_interval(
                Input::CompressorEfficiency,
                self.compressor_efficiency,
            )?,
            turbine_efficiency: unit_interval(Input::TurbineEfficiency, self.turbine_efficiency)?,
            nozzle_efficiency: unit_interval(Input::NozzleEfficiency, self.nozzle_efficiency)?,
            combustor_pressure_ratio: unit_interval(
                Input::CombustorPressureRatio,
                self.combustor_pressure_ratio,
            )?,
        })
    }
}

fn as_ratio(value: f64) -> Ratio {
    Ratio::new::<ratio>(value)
}

fn unit_interval(
    input: Input,
    value: f64,
) -> Result<Constrained<Ratio, UnitIntervalLeftOpen>, PerformanceError> {
    UnitIntervalLeftOpen::new(as_ratio(value)).map_err(invalid(input, value))
}

fn invalid(input: Input, value: f64) -> impl FnOnce(ConstraintError) -> PerformanceError {
    move |source| PerformanceError::InvalidArgument {
        input,
        value,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DesignPoint {
        DesignPoint {
            compressor_pressure_ratio: 20.0,
            turbine_inlet_temperature: 1600.0,
            compressor_efficiency: 0.9,
            turbine_efficiency: 0.92,
            nozzle_efficiency: 0.95,
            combustor_pressure_ratio: 0.95,
        }
    }

    fn rejected_input(point: &DesignPoint) -> (Input, ConstraintError) {
        match point.validate().unwrap_err() {
            PerformanceError::InvalidArgument { input, source, .. } => (input, source),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reference_point_is_valid() {
        let valid = reference().validate().unwrap();
        assert_eq!(valid.turbine_inlet_temperature.get::<kelvin>(), 1600.0);
        assert_eq!(valid.compressor_pressure_ratio.into_inner().get::<ratio>(), 20.0);
    }

    #[test]
    fn unity_pressure_ratio_is_rejected() {
        let point = DesignPoint {
            compressor_pressure_ratio: 1.0,
            ..reference()
        };
        assert_eq!(
            rejected_input(&point),
            (Input::CompressorPressureRatio, ConstraintError::BelowMinimum)
        );
    }

    #[test]
    fn nan_pressure_ratio_is_rejected() {
        let point = DesignPoint {
            compressor_pressure_ratio: f64::NAN,
            ..reference()
        };
        assert_eq!(
            rejected_input(&point),
            (Input::CompressorPressureRatio, ConstraintError::NotANumber)
        );
    }

    #[test]
    fn pressure_ratio_is_reported_before_other_inputs() {
        let point = DesignPoint {
            compressor_pressure_ratio: 0.5,
            turbine_inlet_temperature: -1.0,
            compressor_efficiency: 2.0,
            ..reference()
        };
        assert_eq!(rejected_input(&point).0, Input::CompressorPressureRatio);
    }

    #[test]
    fn non_positive_temperature_is_rejected() {
        let point = DesignPoint {
            turbine_inlet_temperature: 0.0,
            ..reference()
        };
        assert_eq!(
            rejected_input(&point),
            (Input::TurbineInletTemperature, ConstraintError::Zero)
        );
    }

    #[test]
    fn efficiencies_must_be_in_unit_interval() {
        let cases = [
            (
                DesignPoint {
                    compressor_efficiency: 0.0,
                    ..reference()
                },
                Input::CompressorEfficiency,
            ),
            (
                DesignPoint {
                    turbine_efficiency: 1.01,
                    ..reference()
                },
                Input::TurbineEfficiency,
            ),
            (
                DesignPoint {
                    nozzle_efficiency: -0.5,
                    ..reference()
                },
                Input::NozzleEfficiency,
            ),
            (
                DesignPoint {
                    combustor_pressure_ratio: f64::NAN,
                    ..reference()
                },
                Input::CombustorPressureRatio,
            ),
        ];

        for (point, expected) in cases {
            assert_eq!(rejected_input(&point).0, expected);
        }
    }

    #[test]
    fn loads_from_toml() {
        let point: DesignPoint = toml::from_str(
            r#"
            compressor_pressure_ratio = 20.0
            turbine_inlet_temperature = 1600.0
            compressor_efficiency = 0.9
            turbine_efficiency = 0.92
            nozzle_efficiency = 0.95
            combustor_pressure_ratio = 0.95
            "#,
        )
        .unwrap();

        assert_eq!(point, reference());
    }

    #[test]
    fn toml_without_every_input_is_rejected() {
        let err = toml::from_str::<DesignPoint>(
            r#"
            compressor_pressure_ratio = 20.0
            turbine_inlet_temperature = 1600.0
            "#,
        )
        .unwrap_err();

        assert!(err.message().contains("compressor_efficiency"));
    }

    #[test]
    fn message_names_input_and_range() {
        let point = DesignPoint {
            compressor_pressure_ratio: 1.0,
            ..reference()
        };
        let message = point.validate().unwrap_err().to_string();
        assert_eq!(message, "invalid pressure_ratio: 1 (must be greater than 1)");
    }
}
