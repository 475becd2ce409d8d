//! Work-matched turbine model.
//!
//! On a single shaft the turbine must deliver exactly the work the compressor
//! absorbs (plus mechanical losses), so the turbine is solved for its outlet
//! pressure rather than given one.
//!
//! Given an inlet state and the required work `w`, the model:
//! 1. places the actual outlet at `T_out = T_in − w/cp`,
//! 2. maps to the ideal enthalpy drop using `η = Δh / Δh_s` ⇒ `Δh_s = w/η`,
//! 3. places the ideal outlet at `T_out,s = T_in − Δh_s/cp`,
//! 4. recovers the outlet pressure from the isentropic relation
//!    `p_out = p_in·(T_out,s/T_in)^(γ/(γ−1))`.

use turbojet_core::constraint::{Constrained, UnitIntervalLeftOpen};
use turbojet_thermo::{State, model::perfect_gas::PerfectGas};
use uom::si::{f64::Ratio, ratio::ratio, thermodynamic_temperature::kelvin};

use crate::turbomachinery::{
    turbine::{ExpansionError, ExpansionResult},
    work::ExpansionWork,
};

/// Computes the turbine outlet state that delivers `work` at isentropic efficiency `eta`.
///
/// `eta` is constrained to `(0, 1]`. A less efficient turbine needs a larger
/// pressure drop to deliver the same work, so its outlet pressure is lower.
///
/// # Errors
///
/// Returns [`ExpansionError::ThermodynamicModelFailed`] if either the actual
/// or the ideal outlet temperature would be at or below absolute zero.
pub fn work_matched<Fluid: Copy>(
    inlet: &State<Fluid>,
    work: ExpansionWork,
    eta: Constrained<Ratio, UnitIntervalLeftOpen>,
    gas: &PerfectGas<Fluid>,
) -> Result<ExpansionResult<Fluid>, ExpansionError> {
    let t_in = inlet.temperature;
    let w = work.quantity();

    let t_out = gas
        .temperature_after(t_in, -w)
        .map_err(|source| ExpansionError::outlet_temperature_failed(w, source))?;

    let ideal_work = w / eta.into_inner().get::<ratio>();
    let t_out_s = gas
        .temperature_after(t_in, -ideal_work)
        .map_err(|source| ExpansionError::ideal_outlet_temperature_failed(ideal_work, source))?;

    let t_ratio = Ratio::new::<ratio>(t_out_s.get::<kelvin>() / t_in.get::<kelvin>());
    let p_ratio = gas.isentropic_pressure_ratio(t_ratio);
    let outlet = State::new(t_out, inlet.pressure * p_ratio.get::<ratio>(), inlet.fluid);

    Ok(ExpansionResult { outlet, work })
}
