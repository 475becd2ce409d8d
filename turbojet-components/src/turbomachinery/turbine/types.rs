use thiserror::Error;
use turbojet_thermo::{PropertyError, State, units::SpecificEnthalpy};

use crate::turbomachinery::work::ExpansionWork;

/// Result of a turbine calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionResult<Fluid> {
    /// Outlet total state.
    pub outlet: State<Fluid>,

    /// Produced specific shaft work.
    pub work: ExpansionWork,
}

/// Errors that may occur when calling a turbine model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ExpansionError {
    /// A thermodynamic model operation failed.
    ///
    /// For a work-matched turbine this means the requested work would take
    /// the actual or the ideal outlet to or below absolute zero.
    #[error("thermodynamic model failed: {context}")]
    ThermodynamicModelFailed {
        context: String,
        #[source]
        source: PropertyError,
    },
}

impl ExpansionError {
    /// Wrap a failure to place the actual outlet temperature.
    pub(crate) fn outlet_temperature_failed(work: SpecificEnthalpy, source: PropertyError) -> Self {
        Self::ThermodynamicModelFailed {
            context: format!("outlet temperature_after(inlet, work={work:?})"),
            source,
        }
    }

    /// Wrap a failure to place the ideal (isentropic) outlet temperature.
    pub(crate) fn ideal_outlet_temperature_failed(
        ideal_work: SpecificEnthalpy,
        source: PropertyError,
    ) -> Self {
        Self::ThermodynamicModelFailed {
            context: format!("ideal outlet temperature_after(inlet, work={ideal_work:?})"),
            source,
        }
    }
}
