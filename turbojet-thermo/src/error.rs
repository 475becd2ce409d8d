use thiserror::Error;
use turbojet_core::constraint::ConstraintError;
use uom::si::f64::ThermodynamicTemperature;

/// Errors that may occur when building or evaluating a thermodynamic model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PropertyError {
    /// A model parameter is outside its physical range.
    #[error("invalid model parameter `{parameter}`")]
    InvalidParameter {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The requested state would have a non-positive absolute temperature.
    ///
    /// For example, removing more enthalpy from a perfect gas than it holds
    /// relative to absolute zero.
    #[error("state would have a non-positive absolute temperature ({temperature:?})")]
    NonPositiveTemperature {
        temperature: ThermodynamicTemperature,
    },
}
