//! Design-point performance of a single-spool turbojet.
//!
//! The engine is evaluated at static conditions: air enters at ambient total
//! state, passes through a compressor, combustor, turbine, and a fully
//! expanded nozzle, with the turbine driving the compressor on one shaft.
//!
//! Most callers want [`evaluate_performance`], which takes six plain numbers
//! and returns `(exhaust_velocity, specific_thrust)`:
//!
//! ```
//! use turbojet_cycle::evaluate_performance;
//!
//! let (ve, thrust) = evaluate_performance(20.0, 1600.0, 0.9, 0.92, 0.95, 0.95).unwrap();
//! assert!(ve > 0.0 && thrust > ve);
//!
//! let err = evaluate_performance(1.0, 1600.0, 0.9, 0.92, 0.95, 0.95).unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```
//!
//! [`Turbojet`] exposes the full station-by-station result and accepts
//! non-default [`CycleConstants`], which can be loaded from TOML through
//! [`CycleConfig`].

mod config;
mod constants;
mod design_point;
mod error;
mod performance;
mod turbojet;

pub use config::CycleConfig;
pub use constants::{Ambient, CycleConstants};
pub use design_point::{DesignPoint, Input, ValidDesignPoint};
pub use error::{ConfigError, PerformanceError};
pub use performance::{CyclePerformance, Stations};
pub use turbojet::Turbojet;

/// Evaluates a turbojet at its design point with the default cycle constants.
///
/// Arguments, in order:
///
/// - `pressure_ratio`: compressor total-pressure ratio, must be greater than 1.
/// - `tt4`: turbine-inlet total temperature in kelvin, must be positive.
/// - `eta_c`: compressor isentropic efficiency, in `(0, 1]`.
/// - `eta_t`: turbine isentropic efficiency, in `(0, 1]`.
/// - `eta_n`: nozzle efficiency, in `(0, 1]`.
/// - `pi_b`: combustor total-pressure ratio, in `(0, 1]`.
///
/// Returns `(ve, thrust)`: the exhaust velocity in m/s and the specific
/// thrust in N·s/kg (newtons per kilogram per second of air).
///
/// # Errors
///
/// Returns [`PerformanceError::InvalidArgument`] if an input is out of range,
/// with the pressure ratio checked first. Returns one of the component
/// variants if the inputs are valid but the cycle cannot close, for example
/// when the turbine exit pressure falls to ambient.
pub fn evaluate_performance(
    pressure_ratio: f64,
    tt4: f64,
    eta_c: f64,
    eta_t: f64,
    eta_n: f64,
    pi_b: f64,
) -> Result<(f64, f64), PerformanceError> {
    let point = DesignPoint {
        compressor_pressure_ratio: pressure_ratio,
        turbine_inlet_temperature: tt4,
        compressor_efficiency: eta_c,
        turbine_efficiency: eta_t,
        nozzle_efficiency: eta_n,
        combustor_pressure_ratio: pi_b,
    };

    let performance = Turbojet::default().evaluate(&point)?;
    Ok(performance.velocity_and_thrust())
}
