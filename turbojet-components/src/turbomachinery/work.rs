//! Direction-typed specific shaft work.
//!
//! A compressor absorbs [`CompressionWork`] and a turbine delivers
//! [`ExpansionWork`]. Both hold a non-negative [`SpecificEnthalpy`], so the
//! sign convention lives in the type rather than in the value.

use turbojet_core::constraint::{Constrained, ConstraintError, NonNegative, UnitIntervalLeftOpen};
use turbojet_thermo::units::SpecificEnthalpy;
use uom::si::{f64::Ratio, ratio::ratio};

/// Specific shaft work absorbed by a compressor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionWork(SpecificEnthalpy);

impl CompressionWork {
    /// Wraps `work`, which must be zero or positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] for negative work and
    /// [`ConstraintError::NotANumber`] for NaN.
    pub fn new(work: SpecificEnthalpy) -> Result<Self, ConstraintError> {
        NonNegative::new(work).map(|work| Self(work.into_inner()))
    }

    #[must_use]
    pub fn quantity(&self) -> SpecificEnthalpy {
        self.0
    }
}

/// Specific shaft work delivered by a turbine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionWork(SpecificEnthalpy);

impl ExpansionWork {
    /// Wraps `work`, which must be zero or positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] for negative work and
    /// [`ConstraintError::NotANumber`] for NaN.
    pub fn new(work: SpecificEnthalpy) -> Result<Self, ConstraintError> {
        NonNegative::new(work).map(|work| Self(work.into_inner()))
    }

    #[must_use]
    pub fn quantity(&self) -> SpecificEnthalpy {
        self.0
    }

    /// `w_t = w_c/η`. Dividing by a value in `(0, 1]` cannot make the work negative.
    pub(super) fn to_drive(
        compression: CompressionWork,
        eta: Constrained<Ratio, UnitIntervalLeftOpen>,
    ) -> Self {
        Self(compression.quantity() / eta.into_inner().get::<ratio>())
    }
}
