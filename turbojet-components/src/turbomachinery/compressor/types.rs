use thiserror::Error;
use turbojet_thermo::{PropertyError, State, units::SpecificEnthalpy};

use crate::turbomachinery::work::CompressionWork;

/// Result of a compressor calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult<Fluid> {
    /// Outlet total state.
    pub outlet: State<Fluid>,

    /// Required specific shaft work.
    pub work: CompressionWork,
}

/// Errors that may occur when calling a compressor model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CompressionError {
    /// The computed work is negative or not a number.
    ///
    /// With a pressure ratio above one this only happens for a non-physical
    /// inlet state, such as a negative absolute temperature.
    #[error("computed compression work is non-physical (raw_work={raw_work:?})")]
    NonPhysicalWork { raw_work: SpecificEnthalpy },

    /// A thermodynamic model operation failed.
    #[error("thermodynamic model failed: {context}")]
    ThermodynamicModelFailed {
        context: String,
        #[source]
        source: PropertyError,
    },
}

impl CompressionError {
    /// Wrap a failure to place the outlet temperature from the target work.
    pub(crate) fn outlet_temperature_failed(
        raw_work: SpecificEnthalpy,
        source: PropertyError,
    ) -> Self {
        Self::ThermodynamicModelFailed {
            context: format!("temperature_after(inlet, work={raw_work:?})"),
            source,
        }
    }
}
