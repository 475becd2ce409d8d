//! Calorically perfect gas model.
//!
//! A perfect gas has constant `cp` and constant heat capacity ratio `γ`.
//! Every relation the cycle needs follows from those two numbers:
//!
//! - enthalpy change `Δh = cp·ΔT`,
//! - isentropic temperature ratio `T₂/T₁ = (p₂/p₁)^((γ−1)/γ)`,
//! - and its inverse `p₂/p₁ = (T₂/T₁)^(γ/(γ−1))`.

use std::marker::PhantomData;

use turbojet_core::constraint::{AboveUnity, Constrained, StrictlyPositive};
use uom::si::{
    f64::{Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::{
    PropertyError,
    units::{SpecificEnthalpy, TemperatureDifference},
};

/// Trait used to define the constant properties of a perfect gas.
///
/// Implement it for a zero-sized fluid marker to make that fluid usable with
/// [`PerfectGas::new`].
pub trait PerfectGasFluid {
    /// Returns the default property set for this fluid.
    fn parameters() -> PerfectGasParameters;
}

/// Unvalidated perfect gas properties.
///
/// Validation happens when a [`PerfectGas`] model is built from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    /// Specific heat capacity at constant pressure.
    pub cp: SpecificHeatCapacity,

    /// Ratio of specific heats `γ = cp/cv`.
    pub gamma: Ratio,
}

impl PerfectGasParameters {
    /// Creates a parameter set from `cp` and `γ`.
    #[must_use]
    pub fn new(cp: SpecificHeatCapacity, gamma: Ratio) -> Self {
        Self { cp, gamma }
    }
}

/// A property model for a calorically perfect gas.
///
/// Holds validated parameters: `cp > 0` and `γ > 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas<F> {
    cp: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    gamma: Constrained<Ratio, AboveUnity>,
    _fluid: PhantomData<F>,
}

impl<F: PerfectGasFluid> PerfectGas<F> {
    /// Builds the model from the fluid's default parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidParameter`] if the fluid's parameters
    /// are not physical.
    pub fn new() -> Result<Self, PropertyError> {
        Self::with_parameters(F::parameters())
    }
}

impl<F> PerfectGas<F> {
    /// Builds the model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidParameter`] if `cp <= 0` or `γ <= 1`.
    pub fn with_parameters(parameters: PerfectGasParameters) -> Result<Self, PropertyError> {
        let cp = StrictlyPositive::new(parameters.cp).map_err(|source| {
            PropertyError::InvalidParameter {
                parameter: "cp",
                source,
            }
        })?;

        let gamma =
            AboveUnity::new(parameters.gamma).map_err(|source| PropertyError::InvalidParameter {
                parameter: "gamma",
                source,
            })?;

        Ok(Self {
            cp,
            gamma,
            _fluid: PhantomData,
        })
    }

    /// Returns the constant-pressure specific heat `cp`.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp.into_inner()
    }

    /// Returns the heat capacity ratio `γ`.
    #[must_use]
    pub fn gamma(&self) -> Ratio {
        self.gamma.into_inner()
    }

    /// Computes the enthalpy change `cp·(T_to − T_from)`.
    #[must_use]
    pub fn enthalpy_change(
        &self,
        from: ThermodynamicTemperature,
        to: ThermodynamicTemperature,
    ) -> SpecificEnthalpy {
        self.cp() * to.minus(from)
    }

    /// Returns the temperature reached by adding `dh` to a gas at `temperature`.
    ///
    /// A negative `dh` removes enthalpy.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NonPositiveTemperature`] if the result is at
    /// or below absolute zero.
    pub fn temperature_after(
        &self,
        temperature: ThermodynamicTemperature,
        dh: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let result = temperature + dh / self.cp();

        if result.get::<kelvin>() > 0.0 {
            Ok(result)
        } else {
            Err(PropertyError::NonPositiveTemperature {
                temperature: result,
            })
        }
    }

    /// Returns the temperature reached by an isentropic process with pressure
    /// ratio `p_out/p_in`: `T·(p_out/p_in)^((γ−1)/γ)`.
    #[must_use]
    pub fn isentropic_temperature(
        &self,
        temperature: ThermodynamicTemperature,
        pressure_ratio: Ratio,
    ) -> ThermodynamicTemperature {
        let exponent = self.temperature_exponent();
        let t_ratio = pressure_ratio.get::<ratio>().powf(exponent);
        ThermodynamicTemperature::new::<kelvin>(temperature.get::<kelvin>() * t_ratio)
    }

    /// Returns the pressure ratio `p_out/p_in` of an isentropic process with
    /// temperature ratio `T_out/T_in`: `(T_out/T_in)^(γ/(γ−1))`.
    #[must_use]
    pub fn isentropic_pressure_ratio(&self, temperature_ratio: Ratio) -> Ratio {
        let exponent = 1.0 / self.temperature_exponent();
        Ratio::new::<ratio>(temperature_ratio.get::<ratio>().powf(exponent))
    }

    /// Returns `(γ−1)/γ`.
    fn temperature_exponent(&self) -> f64 {
        let gamma = self.gamma().get::<ratio>();
        (gamma - 1.0) / gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use turbojet_core::constraint::ConstraintError;
    use uom::si::{
        available_energy::joule_per_kilogram, f64::AvailableEnergy,
        specific_heat_capacity::joule_per_kilogram_kelvin,
    };

    use crate::fluid::Air;

    /// Perfect gas test fluid with `k = 1.4` and a round `cp`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct MockGas;

    impl PerfectGasFluid for MockGas {
        fn parameters() -> PerfectGasParameters {
            PerfectGasParameters::new(
                SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1000.0),
                Ratio::new::<ratio>(1.4),
            )
        }
    }

    fn mock_gas() -> PerfectGas<MockGas> {
        PerfectGas::<MockGas>::new().expect("mock gas parameters must be physically valid")
    }

    #[test]
    fn air_defaults() {
        let air = PerfectGas::<Air>::new().unwrap();
        assert_relative_eq!(air.cp().get::<joule_per_kilogram_kelvin>(), 1004.5);
        assert_relative_eq!(air.gamma().get::<ratio>(), 1.4);
    }

    #[test]
    fn rejects_non_physical_parameters() {
        let zero_cp = PerfectGasParameters::new(
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0),
            Ratio::new::<ratio>(1.4),
        );
        assert_eq!(
            PerfectGas::<MockGas>::with_parameters(zero_cp).unwrap_err(),
            PropertyError::InvalidParameter {
                parameter: "cp",
                source: ConstraintError::Zero,
            }
        );

        let unit_gamma = PerfectGasParameters::new(
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1000.0),
            Ratio::new::<ratio>(1.0),
        );
        assert_eq!(
            PerfectGas::<MockGas>::with_parameters(unit_gamma).unwrap_err(),
            PropertyError::InvalidParameter {
                parameter: "gamma",
                source: ConstraintError::BelowMinimum,
            }
        );
    }

    #[test]
    fn isentropic_relations_are_inverses() {
        let gas = mock_gas();

        // Pick `p2/p1 = 2^7` so that `T2/T1 = (2^7)^(2/7) = 4`.
        let t1 = ThermodynamicTemperature::new::<kelvin>(300.0);
        let t2 = gas.isentropic_temperature(t1, Ratio::new::<ratio>(128.0));
        assert_relative_eq!(t2.get::<kelvin>(), 1200.0, epsilon = 1e-9);

        let p_ratio = gas.isentropic_pressure_ratio(Ratio::new::<ratio>(4.0));
        assert_relative_eq!(p_ratio.get::<ratio>(), 128.0, epsilon = 1e-9);
    }

    #[test]
    fn enthalpy_change_and_temperature_after() {
        let gas = mock_gas();
        let t1 = ThermodynamicTemperature::new::<kelvin>(400.0);
        let t2 = ThermodynamicTemperature::new::<kelvin>(1000.0);

        let dh = gas.enthalpy_change(t1, t2);
        assert_relative_eq!(dh.get::<joule_per_kilogram>(), 600_000.0);

        let back = gas.temperature_after(t2, -dh).unwrap();
        assert_relative_eq!(back.get::<kelvin>(), 400.0, epsilon = 1e-9);
    }

    #[test]
    fn temperature_after_rejects_absolute_zero() {
        let gas = mock_gas();
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let too_much = AvailableEnergy::new::<joule_per_kilogram>(-300_000.0);

        let err = gas.temperature_after(t, too_much).unwrap_err();
        assert!(matches!(err, PropertyError::NonPositiveTemperature { .. }));
    }
}
