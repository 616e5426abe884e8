use rand::Rng;
use std::{
    fmt,
    str::FromStr
};
use thiserror::Error;

/// One of the five binary operations a test vector can exercise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem
}
impl Operator {
    /// Every operator, in symbol order `+ - * / %`
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem
    ];

    /// Return the single-character text of this operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%'
        }
    }
    /// Position in `ALL`, handy for per-operator tallies
    pub fn index(self) -> usize {
        self as usize
    }
    /// Pick an operator uniformly at random
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}
impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown operator {0:?}")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "%" => Ok(Operator::Rem),
            _ => Err(ParseOperatorError(input.to_string()))
        }
    }
}
