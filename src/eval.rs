use crate::Operator;

use log::trace;
use num_bigint::{BigInt, ParseBigIntError};
use num_integer::Integer;
use num_traits::*;
use std::{
    fmt,
    str::FromStr
};
use thiserror::Error;

/// Text written in place of a result that doesn't exist
pub const NAN: &str = "NaN";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero
}

/// Compute `lhs op rhs`.
///
/// Division rounds towards negative infinity and the remainder takes the
/// sign of the divisor, so `lhs == (lhs / rhs) * rhs + lhs % rhs` for any
/// nonzero `rhs`.
/// ```rust
/// use bigint_vectors::{checked, EvalError, Operator};
/// use num_bigint::BigInt;
/// let (a, b) = (BigInt::from(-7), BigInt::from(3));
/// assert_eq!(checked(&a, Operator::Div, &b), Ok(BigInt::from(-3)));
/// assert_eq!(checked(&a, Operator::Rem, &b), Ok(BigInt::from(2)));
/// assert_eq!(checked(&a, Operator::Rem, &BigInt::from(0)), Err(EvalError::ModuloByZero));
/// ```
pub fn checked(lhs: &BigInt, op: Operator, rhs: &BigInt) -> Result<BigInt, EvalError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div if rhs.is_zero() => Err(EvalError::DivisionByZero),
        Operator::Div => Ok(lhs.div_floor(rhs)),
        Operator::Rem if rhs.is_zero() => Err(EvalError::ModuloByZero),
        Operator::Rem => Ok(lhs.mod_floor(rhs))
    }
}

/// The expected result column of a test vector
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Value(BigInt),
    /// No result exists, written as `NaN`
    Undefined
}
impl Outcome {
    /// Borrow the result, if there is one
    pub fn value(&self) -> Option<&BigInt> {
        match self {
            Outcome::Value(n) => Some(n),
            Outcome::Undefined => None
        }
    }
    pub fn is_undefined(&self) -> bool {
        *self == Outcome::Undefined
    }
}
impl From<Result<BigInt, EvalError>> for Outcome {
    fn from(result: Result<BigInt, EvalError>) -> Self {
        match result {
            Ok(n) => Outcome::Value(n),
            Err(_) => Outcome::Undefined
        }
    }
}
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Value(n) => write!(f, "{}", n),
            Outcome::Undefined => f.write_str(NAN)
        }
    }
}
impl FromStr for Outcome {
    type Err = ParseBigIntError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input == NAN {
            Ok(Outcome::Undefined)
        } else {
            input.parse().map(Outcome::Value)
        }
    }
}

/// Compute `lhs op rhs`, folding every failure into `Outcome::Undefined`
pub fn evaluate(lhs: &BigInt, op: Operator, rhs: &BigInt) -> Outcome {
    let result = checked(lhs, op, rhs);
    if let Err(ref err) = result {
        trace!("{} {} {}: {}", lhs, op, rhs, err);
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(a: i64, op: Operator, b: i64) -> Outcome {
        evaluate(&BigInt::from(a), op, &BigInt::from(b))
    }
    fn value(n: i64) -> Outcome {
        Outcome::Value(BigInt::from(n))
    }

    #[test]
    fn add_sub_mul() {
        assert_eq!(eval(5, Operator::Add, 3), value(8));
        assert_eq!(eval(-5, Operator::Add, 3), value(-2));
        assert_eq!(eval(1, Operator::Sub, 5), value(-4));
        assert_eq!(eval(-1, Operator::Sub, -1), value(0));
        assert_eq!(eval(-3, Operator::Mul, 3), value(-9));

        let big: BigInt = "999999999999999999999999999999".parse().unwrap();
        assert_eq!(evaluate(&BigInt::zero(), Operator::Mul, &big), value(0));
        assert_eq!(
            evaluate(&big, Operator::Mul, &big).to_string(),
            "999999999999999999999999999998000000000000000000000000000001"
        );
    }
    #[test]
    fn floor_div() {
        assert_eq!(eval(7, Operator::Div, 2), value(3));
        assert_eq!(eval(-7, Operator::Div, 2), value(-4));
        assert_eq!(eval(7, Operator::Div, -2), value(-4));
        assert_eq!(eval(-7, Operator::Div, -2), value(3));
        assert_eq!(eval(-81, Operator::Div, 9), value(-9));
        assert_eq!(eval(0, Operator::Div, -5), value(0));
        assert_eq!(eval(1, Operator::Div, 4294967295), value(0));
        assert_eq!(eval(-1, Operator::Div, 4294967295), value(-1));
    }
    #[test]
    fn floor_mod() {
        assert_eq!(eval(-7, Operator::Rem, 3), value(2));
        assert_eq!(eval(7, Operator::Rem, -3), value(-2));
        assert_eq!(eval(-7, Operator::Rem, -3), value(-1));
        assert_eq!(eval(7, Operator::Rem, 3), value(1));
        assert_eq!(eval(9, Operator::Rem, -3), value(0));
    }
    #[test]
    fn div_mod_identity() {
        let values = [-1_000_000_007i64, -12, -1, 1, 5, 13, 4294967295];
        for &a in &values {
            for &b in &values {
                let (a, b) = (BigInt::from(a), BigInt::from(b));
                let q = checked(&a, Operator::Div, &b).unwrap();
                let r = checked(&a, Operator::Rem, &b).unwrap();
                assert_eq!(&q * &b + &r, a);
                assert!(r.is_zero() || r.signum() == b.signum());
            }
        }
    }
    #[test]
    fn by_zero() {
        assert_eq!(eval(5, Operator::Div, 0), Outcome::Undefined);
        assert_eq!(eval(0, Operator::Div, 0), Outcome::Undefined);
        assert_eq!(eval(-5, Operator::Rem, 0), Outcome::Undefined);
        assert_eq!(
            checked(&BigInt::one(), Operator::Div, &BigInt::zero()),
            Err(EvalError::DivisionByZero)
        );
        // Zero only matters on the right
        assert_eq!(eval(0, Operator::Add, 0), value(0));
        assert_eq!(eval(0, Operator::Rem, 5), value(0));
    }
    #[test]
    fn format_and_parse() {
        assert_eq!(Outcome::Undefined.to_string(), "NaN");
        assert_eq!(value(-42).to_string(), "-42");
        assert_eq!("NaN".parse::<Outcome>().unwrap(), Outcome::Undefined);
        assert_eq!("-42".parse::<Outcome>().unwrap(), value(-42));
        assert!("nan".parse::<Outcome>().is_err());
        assert!(Outcome::Undefined.is_undefined());
        assert_eq!(value(3).value(), Some(&BigInt::from(3)));
    }
}
