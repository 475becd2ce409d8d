//! Isentropic compressor model.
//!
//! Computes an outlet state at a given pressure ratio using an isentropic
//! efficiency `eta`.
//!
//! Given an inlet state and a pressure ratio `π = p_out/p_in`, the model:
//! 1. computes the ideal outlet temperature `T_out,s = T_in·π^((γ−1)/γ)`,
//! 2. evaluates the ideal enthalpy rise `Δh_s = cp·(T_out,s − T_in)`,
//! 3. maps to an actual enthalpy rise using `η = Δh_s / Δh` ⇒ `Δh = Δh_s/η`,
//! 4. places the outlet at `(p_in·π, T_in + Δh/cp)` and reports the required work.

use turbojet_core::constraint::{AboveUnity, Constrained, UnitIntervalLeftOpen};
use turbojet_thermo::{State, model::perfect_gas::PerfectGas};
use uom::si::{f64::Ratio, ratio::ratio};

use crate::turbomachinery::{
    compressor::{CompressionError, CompressionResult},
    work::CompressionWork,
};

/// Computes the compressor outlet state and required work using an isentropic efficiency model.
///
/// `pressure_ratio` is the total-pressure ratio `p_out/p_in`, constrained to be above one.
/// `eta` is an isentropic efficiency constrained to `(0, 1]`.
/// Lower efficiencies raise both the outlet temperature and the required work.
///
/// # Errors
///
/// Returns [`CompressionError`] if the resulting work is non-physical or the
/// outlet temperature cannot be placed, both of which require a non-physical
/// inlet state.
pub fn isentropic<Fluid: Copy>(
    inlet: &State<Fluid>,
    pressure_ratio: Constrained<Ratio, AboveUnity>,
    eta: Constrained<Ratio, UnitIntervalLeftOpen>,
    gas: &PerfectGas<Fluid>,
) -> Result<CompressionResult<Fluid>, CompressionError> {
    let pi = pressure_ratio.into_inner();
    let t_in = inlet.temperature;

    let t_out_s = gas.isentropic_temperature(t_in, pi);
    let dh_s = gas.enthalpy_change(t_in, t_out_s);
    let raw_work = dh_s / eta.into_inner().get::<ratio>();

    let Ok(work) = CompressionWork::new(raw_work) else {
        return Err(CompressionError::NonPhysicalWork { raw_work });
    };

    let t_out = gas
        .temperature_after(t_in, raw_work)
        .map_err(|source| CompressionError::outlet_temperature_failed(raw_work, source))?;

    let outlet = State::new(t_out, inlet.pressure * pi.get::<ratio>(), inlet.fluid);

    Ok(CompressionResult { outlet, work })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram, pressure::kilopascal,
        thermodynamic_temperature::kelvin,
    };

    use crate::turbomachinery::test_utils::{eta, mock_gas_model, state};

    fn ratio_above_one(value: f64) -> Constrained<Ratio, AboveUnity> {
        AboveUnity::new(Ratio::new::<ratio>(value)).unwrap()
    }

    #[test]
    fn normal_compression_matches_expected_work() {
        let gas = mock_gas_model();
        let inlet = state(300.0, 100.0);

        // Pick `p2/p1 = 2^7` so that `T2s = T1*(2^7)^(2/7) = 4*T1`.
        let result = isentropic(&inlet, ratio_above_one(128.0), eta(0.9), &gas).unwrap();

        // Expected output:
        // ```
        // T2s = 1200 K
        // w = cp*(T2s - T1)/eta = 1000*900/0.9 = 1_000_000 J/kg
        // T2 = T1 + w/cp = 1300 K
        // ```
        assert_relative_eq!(
            result.work.quantity().get::<joule_per_kilogram>(),
            1_000_000.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            result.outlet.temperature.get::<kelvin>(),
            1300.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(result.outlet.pressure.get::<kilopascal>(), 12_800.0);
    }

    #[test]
    fn ideal_compressor_has_lower_outlet_temperature() {
        let gas = mock_gas_model();
        let inlet = state(288.15, 101.325);
        let pi = ratio_above_one(20.0);

        let ideal = isentropic(&inlet, pi, eta(1.0), &gas).unwrap();
        let real = isentropic(&inlet, pi, eta(0.85), &gas).unwrap();

        assert!(real.outlet.temperature > ideal.outlet.temperature);
        assert!(real.work.quantity() > ideal.work.quantity());
        assert_eq!(real.outlet.pressure, ideal.outlet.pressure);
    }

    #[test]
    fn negative_inlet_temperature_is_non_physical() {
        let gas = mock_gas_model();
        let inlet = state(-10.0, 100.0);

        let err = isentropic(&inlet, ratio_above_one(2.0), eta(0.9), &gas).unwrap_err();

        match err {
            CompressionError::NonPhysicalWork { raw_work } => {
                assert!(raw_work.get::<joule_per_kilogram>() < 0.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn absolute_zero_inlet_cannot_place_outlet() {
        let gas = mock_gas_model();
        let inlet = state(0.0, 100.0);

        let err = isentropic(&inlet, ratio_above_one(2.0), eta(0.9), &gas).unwrap_err();

        match err {
            CompressionError::ThermodynamicModelFailed { context, source } => {
                assert!(context.starts_with("temperature_after("));
                assert!(matches!(
                    source,
                    turbojet_thermo::PropertyError::NonPositiveTemperature { .. }
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
