use std::cmp::Ordering;

use crate::constraint::{Constrained, Constraint, ConstraintError};

use super::UnitBounds;

/// Marker type enforcing that a value lies in the left-open unit interval: `0 < x ≤ 1`.
///
/// This is the valid range of a component efficiency or a total-pressure
/// retention ratio: zero would mean the component does nothing useful, and
/// anything above one would create energy or pressure.
///
/// # Examples
///
/// ```
/// use turbojet_core::constraint::{Constrained, UnitIntervalLeftOpen};
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let eta = UnitIntervalLeftOpen::new(0.92).unwrap();
/// assert_eq!(eta.into_inner(), 0.92);
///
/// let pi_b = Constrained::<Ratio, UnitIntervalLeftOpen>::new(Ratio::new::<ratio>(0.95)).unwrap();
/// assert_eq!(pi_b.as_ref().get::<percent>(), 95.0);
///
/// assert!(UnitIntervalLeftOpen::new(0.0).is_err());
/// assert!(UnitIntervalLeftOpen::new(1.01).is_err());
/// assert!(UnitIntervalLeftOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLeftOpen;

impl UnitIntervalLeftOpen {
    /// Constructs `Constrained<T, UnitIntervalLeftOpen>` if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLeftOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLeftOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLeftOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    #[allow(clippy::float_cmp)]
    fn floats_valid() {
        assert!(Constrained::<f64, UnitIntervalLeftOpen>::new(1e-9).is_ok());
        assert!(Constrained::<f64, UnitIntervalLeftOpen>::new(0.9).is_ok());
        let one = UnitIntervalLeftOpen::new(1.0).unwrap();
        assert_eq!(one.into_inner(), 1.0);
    }

    #[test]
    fn floats_out_of_range() {
        assert!(matches!(
            UnitIntervalLeftOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLeftOpen::new(-0.5),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLeftOpen::new(1.000_001),
            Err(ConstraintError::AboveMaximum)
        ));
    }

    #[test]
    fn floats_nan_is_not_a_number() {
        assert!(matches!(
            UnitIntervalLeftOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn uom_ratio() {
        assert!(UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.5)).is_ok());
        assert!(matches!(
            UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.0)),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLeftOpen::new(Ratio::new::<ratio>(2.0)),
            Err(ConstraintError::AboveMaximum)
        ));

        let one = UnitIntervalLeftOpen::new(Ratio::new::<ratio>(1.0)).unwrap();
        assert_eq!(one.into_inner().get::<ratio>(), 1.0);
    }
}
