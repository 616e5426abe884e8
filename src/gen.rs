use crate::{sample_operand, Operator, Record};

use log::debug;
use rand::Rng;
use std::io::{self, Write};

/// Number of records in a full run
pub const ITERATIONS: usize = 10_000;

/// Endless source of random records. Each record draws the left operand,
/// then the right operand, then the operator, from the same generator.
pub struct Generator<R> {
    rng: R
}
impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
    /// Draw the next record
    pub fn record(&mut self) -> Record {
        let lhs = sample_operand(&mut self.rng);
        let rhs = sample_operand(&mut self.rng);
        let op = Operator::sample(&mut self.rng);
        Record::new(lhs, op, rhs)
    }
}
impl<R: Rng> Iterator for Generator<R> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.record())
    }
}

/// Tally of what a run produced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records written per operator, indexed like `Operator::ALL`
    pub per_operator: [usize; 5],
    /// Records whose result was `NaN`
    pub undefined: usize
}
impl Summary {
    /// Count a record
    pub fn add(&mut self, record: &Record) {
        self.per_operator[record.op.index()] += 1;
        if record.result.is_undefined() {
            self.undefined += 1;
        }
    }
    /// Return the total number of records counted
    pub fn total(&self) -> usize {
        self.per_operator.iter().sum()
    }
    /// Return how many records used `op`
    pub fn count(&self, op: Operator) -> usize {
        self.per_operator[op.index()]
    }
}

/// Write `count` records to `out`, one per line, in generation order
pub fn run<R, W>(rng: R, out: &mut W, count: usize) -> io::Result<Summary>
where
    R: Rng,
    W: Write + ?Sized
{
    let mut summary = Summary::default();
    for record in Generator::new(rng).take(count) {
        record.write_line(out)?;
        summary.add(&record);
    }
    debug!("wrote {} records", summary.total());
    Ok(summary)
}
