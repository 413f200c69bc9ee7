//! The commutative-ring seam the engine is generic over.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// A commutative coefficient ring.
///
/// Arithmetic is by reference (`ref_*`) so arbitrary-precision coefficients
/// are never cloned implicitly.
pub trait Ring: Clone + fmt::Debug + fmt::Display + PartialEq {
    /// Human-readable name of the ring, used by structure displays.
    const NAME: &'static str;

    fn zero() -> Self;
    fn one() -> Self;
    fn from_int(n: i64) -> Self;

    fn is_zero(&self) -> bool;

    fn ref_add(&self, rhs: &Self) -> Self;
    fn ref_mul(&self, rhs: &Self) -> Self;
    fn ref_neg(&self) -> Self;

    fn ref_sub(&self, rhs: &Self) -> Self {
        self.ref_add(&rhs.ref_neg())
    }
}

impl Ring for BigRational {
    const NAME: &'static str = "Rational Field";

    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn from_int(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn ref_add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn ref_mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn ref_neg(&self) -> Self {
        -self
    }

    fn ref_sub(&self, rhs: &Self) -> Self {
        self - rhs
    }
}

impl Ring for BigInt {
    const NAME: &'static str = "Integer Ring";

    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn from_int(n: i64) -> Self {
        BigInt::from(n)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn ref_add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn ref_mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn ref_neg(&self) -> Self {
        -self
    }

    fn ref_sub(&self, rhs: &Self) -> Self {
        self - rhs
    }
}
