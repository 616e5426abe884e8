use crate::{evaluate, Operator, Outcome, ParseOperatorError};

use num_bigint::{BigInt, ParseBigIntError};
use smallvec::SmallVec;
use std::{
    fmt,
    io::{self, Write},
    str::FromStr
};
use thiserror::Error;

/// Separator between the columns of a line
pub const SEPARATOR: char = '\t';

/// One test vector: two operands, an operator and the expected result
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    pub lhs: BigInt,
    pub op: Operator,
    pub rhs: BigInt,
    pub result: Outcome
}
impl Record {
    /// Construct a record, computing the expected result
    pub fn new(lhs: BigInt, op: Operator, rhs: BigInt) -> Self {
        let result = evaluate(&lhs, op, &rhs);
        Self { lhs, op, rhs, result }
    }
    /// Return true if the stored result is what evaluation actually gives.
    /// Always the case for records built with `new`, but not necessarily
    /// for parsed ones.
    pub fn is_consistent(&self) -> bool {
        evaluate(&self.lhs, self.op, &self.rhs) == self.result
    }
    /// Write this record followed by a newline
    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{lhs}{sep}{op}{sep}{rhs}{sep}{result}",
            lhs = self.lhs,
            op = self.op,
            rhs = self.rhs,
            result = self.result,
            sep = SEPARATOR
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    #[error("expected 4 tab-separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid left operand: {0}")]
    Lhs(#[source] ParseBigIntError),
    #[error(transparent)]
    Operator(#[from] ParseOperatorError),
    #[error("invalid right operand: {0}")]
    Rhs(#[source] ParseBigIntError),
    #[error("invalid result: {0}")]
    Result(#[source] ParseBigIntError)
}

impl FromStr for Record {
    type Err = ParseRecordError;

    /// Parse one line as written by `Display`. A trailing line terminator
    /// is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let fields: SmallVec<[&str; 4]> = line.split(SEPARATOR).collect();
        if fields.len() != 4 {
            return Err(ParseRecordError::FieldCount(fields.len()));
        }
        Ok(Self {
            lhs: fields[0].parse().map_err(ParseRecordError::Lhs)?,
            op: fields[1].parse()?,
            rhs: fields[2].parse().map_err(ParseRecordError::Rhs)?,
            result: fields[3].parse().map_err(ParseRecordError::Result)?
        })
    }
}
