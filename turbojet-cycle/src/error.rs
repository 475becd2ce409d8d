use std::path::PathBuf;

use thiserror::Error;
use turbojet_components::{
    combustor::CombustionError,
    nozzle::NozzleError,
    turbomachinery::{compressor::CompressionError, turbine::ExpansionError},
};
use turbojet_core::constraint::ConstraintError;
use turbojet_thermo::PropertyError;

use crate::Input;

/// Errors returned when evaluating a turbojet design point.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PerformanceError {
    /// An input is outside its allowed range.
    #[error("invalid {input}: {value} (must be {})", .input.requirement())]
    InvalidArgument {
        input: Input,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The compressor could not be evaluated.
    #[error("compressor failed: {0}")]
    Compression(#[from] CompressionError),

    /// The combustor cannot reach the turbine-inlet temperature.
    #[error("combustor failed: {0}")]
    Combustion(#[from] CombustionError),

    /// The turbine cannot deliver the compressor work.
    #[error("turbine failed: {0}")]
    Expansion(#[from] ExpansionError),

    /// The nozzle cannot expand the turbine exit flow.
    #[error("nozzle failed: {0}")]
    Nozzle(#[from] NozzleError),
}

impl PerformanceError {
    /// Returns `true` if the error comes from input validation rather than
    /// from an infeasible cycle.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Errors returned when loading or validating cycle constants.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to parse cycle configuration")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid cycle constant `{name}`: {value}")]
    InvalidConstant {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid gas model")]
    GasModel(#[from] PropertyError),
}
