//! Combustor model.
//!
//! Raises the gas to a requested outlet temperature by burning fuel, and
//! reports the fuel-air ratio that takes.
//!
//! The energy balance per unit mass of air, with products treated as the same
//! perfect gas, is
//!
//! ```text
//! (1 + f)·cp·T_out = cp·T_in + f·η_b·LHV
//! ```
//!
//! which gives `f = cp·(T_out − T_in) / (η_b·LHV − cp·T_out)`.
//! Total pressure drops by the retention ratio `π_b = p_out/p_in`.

use thiserror::Error;
use turbojet_core::constraint::{Constrained, StrictlyPositive, UnitIntervalLeftOpen};
use turbojet_thermo::{State, model::perfect_gas::PerfectGas, units::SpecificEnthalpy};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

/// Fuel properties used by the combustor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fuel {
    /// Lower heating value of the fuel.
    pub lower_heating_value: Constrained<SpecificEnthalpy, StrictlyPositive>,

    /// Fraction of the heating value released into the gas.
    pub combustion_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
}

impl Fuel {
    /// Returns the heat released into the gas per unit mass of fuel, `η_b·LHV`.
    #[must_use]
    pub fn heat_release(&self) -> SpecificEnthalpy {
        let eta_b = self.combustion_efficiency.into_inner().get::<ratio>();
        self.lower_heating_value.into_inner() * eta_b
    }
}

/// Result of a combustor calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CombustionResult<Fluid> {
    /// Outlet total state.
    pub outlet: State<Fluid>,

    /// Fuel mass flow per unit air mass flow.
    pub fuel_air_ratio: Ratio,
}

/// Errors that may occur when calling the combustor model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CombustionError {
    /// The requested outlet is colder than the inlet, so the fuel-air ratio is negative.
    #[error(
        "outlet temperature is below inlet, fuel-air ratio is negative \
         (t_in={t_in:?}, t_out={t_out:?}, fuel_air_ratio={fuel_air_ratio:?})"
    )]
    NegativeFuelAirRatio {
        t_in: ThermodynamicTemperature,
        t_out: ThermodynamicTemperature,
        fuel_air_ratio: Ratio,
    },

    /// The fuel cannot heat its own products to the requested outlet temperature.
    #[error(
        "fuel heat release cannot reach the outlet temperature \
         (t_out={t_out:?}, heat_release={heat_release:?})"
    )]
    OutletTemperatureUnreachable {
        t_out: ThermodynamicTemperature,
        heat_release: SpecificEnthalpy,
    },
}

/// Burns fuel to raise `inlet` to `t_out`, applying the total-pressure retention `pressure_ratio`.
///
/// # Errors
///
/// Returns [`CombustionError::OutletTemperatureUnreachable`] if `η_b·LHV ≤ cp·T_out`,
/// and [`CombustionError::NegativeFuelAirRatio`] if `t_out` is below the inlet temperature.
pub fn burn<Fluid: Copy>(
    inlet: &State<Fluid>,
    t_out: ThermodynamicTemperature,
    pressure_ratio: Constrained<Ratio, UnitIntervalLeftOpen>,
    fuel: &Fuel,
    gas: &PerfectGas<Fluid>,
) -> Result<CombustionResult<Fluid>, CombustionError> {
    let heat_release = fuel.heat_release();
    let available = heat_release - gas.cp() * t_out;

    if available.value <= 0.0 {
        return Err(CombustionError::OutletTemperatureUnreachable {
            t_out,
            heat_release,
        });
    }

    let fuel_air_ratio: Ratio = gas.enthalpy_change(inlet.temperature, t_out) / available;

    if fuel_air_ratio.value < 0.0 {
        return Err(CombustionError::NegativeFuelAirRatio {
            t_in: inlet.temperature,
            t_out,
            fuel_air_ratio,
        });
    }

    let p_out = inlet.pressure * pressure_ratio.into_inner().get::<ratio>();

    Ok(CombustionResult {
        outlet: State::new(t_out, p_out, inlet.fluid),
        fuel_air_ratio,
    })
}
