//! Numeric contract for key weights and costs
//!
//! The solver is generic over the number type so callers can pick between
//! floating point and exact rational arithmetic. Costs are computed in the
//! same type as the weights.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, ToPrimitive, Zero};

/// Number type usable as a key weight and as a search cost.
///
/// `Send + Sync` lets diagonals of the table be evaluated in parallel.
pub trait Weight:
    Clone
    + Debug
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Total order used for every cost comparison.
    ///
    /// Root selection never uses a tolerance: two candidates tie only when
    /// this returns [`Ordering::Equal`].
    fn total_order(&self, other: &Self) -> Ordering;

    /// Whether the value is an acceptable weight (a non-negative real).
    fn is_admissible(&self) -> bool;

    /// Lossy conversion for logging and display.
    fn approx_f64(&self) -> f64;
}

impl Weight for f64 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline]
    fn is_admissible(&self) -> bool {
        self.is_finite() && *self >= 0.0
    }

    #[inline]
    fn approx_f64(&self) -> f64 {
        *self
    }
}

impl Weight for f32 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline]
    fn is_admissible(&self) -> bool {
        self.is_finite() && *self >= 0.0
    }

    #[inline]
    fn approx_f64(&self) -> f64 {
        f64::from(*self)
    }
}

impl<T> Weight for Ratio<T>
where
    T: Clone + Debug + Send + Sync + Integer + ToPrimitive,
{
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn is_admissible(&self) -> bool {
        *self >= Self::zero()
    }

    fn approx_f64(&self) -> f64 {
        match (self.numer().to_f64(), self.denom().to_f64()) {
            (Some(numer), Some(denom)) => numer / denom,
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_reject_negative_and_non_finite() {
        assert!(0.0f64.is_admissible());
        assert!((-0.0f64).is_admissible());
        assert!(2.5f64.is_admissible());
        assert!(!(-1e-12f64).is_admissible());
        assert!(!f64::NAN.is_admissible());
        assert!(!f64::INFINITY.is_admissible());
        assert!(!(-1.0f32).is_admissible());
    }

    #[test]
    fn rationals_order_exactly() {
        let third = Ratio::new(1i64, 3);
        let also_third = Ratio::new(2i64, 6);
        assert_eq!(third.total_order(&also_third), Ordering::Equal);
        assert!(Ratio::new(0i64, 1).is_admissible());
        assert!(!Ratio::new(-1i64, 2).is_admissible());
        assert!((Ratio::new(1i64, 4).approx_f64() - 0.25).abs() < f64::EPSILON);
    }
}
