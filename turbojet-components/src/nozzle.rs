//! Nozzle model.
//!
//! Expands the gas from its total state to ambient static pressure.
//! The ideal exit temperature follows the isentropic relation, and the nozzle
//! efficiency is applied to the kinetic energy:
//!
//! ```text
//! T_e,s = T_in·(p_amb/p_in)^((γ−1)/γ)
//! v_e   = sqrt(η_n)·sqrt(2·cp·(T_in − T_e,s))
//! ```

use std::cmp::Ordering;

use thiserror::Error;
use turbojet_core::constraint::{Constrained, UnitIntervalLeftOpen};
use turbojet_thermo::{PropertyError, State, model::perfect_gas::PerfectGas};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, Ratio, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    velocity::meter_per_second,
};

/// Result of a nozzle calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleResult {
    /// Jet velocity at the nozzle exit.
    pub exhaust_velocity: Velocity,

    /// Static temperature at the nozzle exit.
    pub exit_temperature: ThermodynamicTemperature,

    /// Static pressure at the nozzle exit, equal to ambient for a fully expanded nozzle.
    pub exit_pressure: Pressure,
}

/// Errors that may occur when calling the nozzle model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NozzleError {
    /// The gas reaching the nozzle cannot expand to ambient.
    #[error("nozzle inlet pressure must be above ambient (p_in={p_in:?}, p_ambient={p_ambient:?})")]
    InletPressureNotAboveAmbient { p_in: Pressure, p_ambient: Pressure },

    /// The exit temperature could not be placed.
    ///
    /// With `η ≤ 1` the exit lies between the ideal exit and the inlet, so
    /// this only happens for an inlet at or below absolute zero.
    #[error("thermodynamic model failed: {context}")]
    ThermodynamicModelFailed {
        context: String,
        #[source]
        source: PropertyError,
    },
}

/// Expands `inlet` to `p_ambient` with kinetic-energy efficiency `eta`.
///
/// # Errors
///
/// Returns [`NozzleError::InletPressureNotAboveAmbient`] if the inlet total
/// pressure is at or below ambient, or if either pressure is not a number,
/// and [`NozzleError::ThermodynamicModelFailed`] for a non-physical inlet temperature.
pub fn expand<Fluid>(
    inlet: &State<Fluid>,
    p_ambient: Pressure,
    eta: Constrained<Ratio, UnitIntervalLeftOpen>,
    gas: &PerfectGas<Fluid>,
) -> Result<NozzleResult, NozzleError> {
    let p_in = inlet.pressure;
    if p_in.partial_cmp(&p_ambient) != Some(Ordering::Greater) {
        return Err(NozzleError::InletPressureNotAboveAmbient { p_in, p_ambient });
    }

    let t_in = inlet.temperature;
    let expansion_ratio = Ratio::new::<ratio>(p_ambient.value / p_in.value);
    let t_exit_s = gas.isentropic_temperature(t_in, expansion_ratio);
    let dh_s = gas.enthalpy_change(t_exit_s, t_in);

    let eta = eta.into_inner().get::<ratio>();
    let v_ideal = (2.0 * dh_s.get::<joule_per_kilogram>()).sqrt();
    let exhaust_velocity = Velocity::new::<meter_per_second>(eta.sqrt() * v_ideal);

    let exit_temperature = gas.temperature_after(t_in, -(dh_s * eta)).map_err(|source| {
        NozzleError::ThermodynamicModelFailed {
            context: format!("exit temperature_after(inlet, dh_s={dh_s:?}, eta={eta})"),
            source,
        }
    })?;

    Ok(NozzleResult {
        exhaust_velocity,
        exit_temperature,
        exit_pressure: p_ambient,
    })
}
