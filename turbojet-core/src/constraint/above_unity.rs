use std::cmp::Ordering;

use crate::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value is strictly greater than one.
///
/// A compressor pressure ratio at or below one describes no compression at
/// all, so compressor models take their ratio as `Constrained<_, AboveUnity>`.
///
/// # Examples
///
/// ```
/// use turbojet_core::constraint::{AboveUnity, ConstraintError};
///
/// assert!(AboveUnity::new(20.0).is_ok());
/// assert!(AboveUnity::new(1.000_1).is_ok());
///
/// assert_eq!(AboveUnity::new(1.0), Err(ConstraintError::BelowMinimum));
/// assert_eq!(AboveUnity::new(0.5), Err(ConstraintError::BelowMinimum));
/// assert_eq!(AboveUnity::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveUnity;

impl AboveUnity {
    /// Constructs `Constrained<T, AboveUnity>` if `value > 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, AboveUnity>, ConstraintError> {
        Constrained::<T, AboveUnity>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for AboveUnity {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn one_is_rejected() {
        assert_eq!(AboveUnity::new(1.0), Err(ConstraintError::BelowMinimum));
        assert!(matches!(
            AboveUnity::new(Ratio::new::<ratio>(1.0)),
            Err(ConstraintError::BelowMinimum)
        ));
    }

    #[test]
    fn infinity_is_accepted() {
        assert!(AboveUnity::new(f64::INFINITY).is_ok());
    }

    #[test]
    fn nan_is_not_a_number() {
        assert!(matches!(
            AboveUnity::new(Ratio::new::<ratio>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        ));
    }
}
