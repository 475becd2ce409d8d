use std::cmp::Ordering;

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (`x > 0`).
///
/// Works with any `T: PartialOrd + Zero`, which covers `f64` and the
/// dimensioned quantities from [`uom`].
///
/// # Examples
///
/// ```
/// use turbojet_core::constraint::{ConstraintError, StrictlyPositive};
///
/// let t = StrictlyPositive::new(1600.0).unwrap();
/// assert_eq!(t.into_inner(), 1600.0);
///
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
/// assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
///
/// [`uom`]: https://docs.rs/uom/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if less than zero.
    /// - [`ConstraintError::Zero`] if equal to zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::pascal};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn uom_pressure() {
        let p = StrictlyPositive::new(Pressure::new::<pascal>(101_325.0)).unwrap();
        assert_eq!(p.as_ref().get::<pascal>(), 101_325.0);

        assert!(matches!(
            StrictlyPositive::new(Pressure::new::<pascal>(0.0)),
            Err(ConstraintError::Zero)
        ));
    }
}
