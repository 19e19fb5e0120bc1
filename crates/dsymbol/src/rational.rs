//! Exact fractions on top of `num_rational::BigRational`.
//!
//! Curvature adds `1/m` for every flag, so the common denominator grows with the
//! number of distinct branching values; big integers keep the sum exact for any
//! symbol that parses.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// A fraction in lowest terms with a positive denominator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// `num/den`, normalized.
    ///
    /// Panics if `den == 0`.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "Rational with zero denominator");
        Self(BigRational::new(num.into(), den.into()))
    }

    pub fn from_int(n: i64) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i64 {
        if self.0.is_positive() {
            1
        } else if self.0.is_negative() {
            -1
        } else {
            0
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `Some(n)` when the value is an integer that fits `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        if self.0.is_integer() {
            self.0.to_integer().to_i64()
        } else {
            None
        }
    }

    /// The underlying `num_rational` value.
    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<BigRational> for Rational {
    fn from(r: BigRational) -> Self {
        Self(r)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, o: Rational) -> Rational {
        Rational(self.0 + o.0)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, o: Rational) -> Rational {
        Rational(self.0 - o.0)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, o: Rational) -> Rational {
        Rational(self.0 * o.0)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, o: Rational) -> Rational {
        Rational(self.0 / o.0)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_sign_and_gcd() {
        assert_eq!(Rational::new(6, -8).to_string(), "-3/4");
        assert_eq!(Rational::new(0, -5), Rational::zero());
        assert_eq!(Rational::new(4, 2), Rational::from_int(2));
    }

    #[test]
    fn arithmetic_and_order() {
        let a = Rational::new(1, 6);
        let b = Rational::new(1, 3);
        assert_eq!(a.clone() + b.clone(), Rational::new(1, 2));
        assert_eq!(a.clone() - b.clone(), Rational::new(-1, 6));
        assert_eq!(a.clone() * b.clone(), Rational::new(1, 18));
        assert_eq!(b.clone() / a.clone(), Rational::from_int(2));
        assert!(a < b);
        assert_eq!((a.clone() - b).signum(), -1);
        assert_eq!(Rational::new(4, 2).as_integer(), Some(2));
        assert_eq!(a.as_integer(), None);
        assert_eq!(format!("{}", Rational::new(-1, 42)), "-1/42");
        assert_eq!(format!("{}", Rational::from_int(3)), "3");
    }

    #[test]
    fn large_denominators_stay_exact() {
        let p = 4_294_967_311;
        let q = 4_294_967_357;
        let sum = Rational::new(1, p) + Rational::new(1, q);
        assert_eq!(sum.signum(), 1);
        assert_eq!(sum * Rational::from_int(p) * Rational::from_int(q), Rational::from_int(p + q));
    }
}
