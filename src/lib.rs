//! Random test vectors for arbitrary-precision integer arithmetic.
//!
//! Every vector is one line of `lhs<TAB>op<TAB>rhs<TAB>result`. Operands come
//! from three magnitude tiers (see [`Tier`]), the operator is one of
//! `+ - * / %`, and the result is computed with `num-bigint`. Division and
//! remainder use floor semantics; dividing by zero gives `NaN`.

mod eval;
mod gen;
mod operator;
mod record;
mod sample;

pub use self::eval::*;
pub use self::gen::*;
pub use self::operator::*;
pub use self::record::*;
pub use self::sample::*;
