use num_bigint::{BigInt, RandBigInt};
use num_traits::*;
use rand::Rng;

/// Largest magnitude of a `Word` operand, 2^32 - 1
pub const WORD_MAX: i64 = 0xffff_ffff;
/// `Huge` operands are bounded by 10^HUGE_DIGITS
pub const HUGE_DIGITS: usize = 130;

// Cumulative thresholds for the uniform draw that selects a tier
const UNIT_THRESHOLD: f64 = 0.1;
const WORD_THRESHOLD: f64 = 0.3;

/// Magnitude band an operand is drawn from. Draws are weighted 10/20/70
/// towards `Huge`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// One of -1, 0, 1
    Unit,
    /// Anything that fits in 32 bits of magnitude
    Word,
    /// Up to 130 decimal digits, a bit over 430 bits
    Huge
}
impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Unit, Tier::Word, Tier::Huge];

    /// Select a tier with probabilities 0.1, 0.2 and 0.7
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r: f64 = rng.gen();
        if r < UNIT_THRESHOLD {
            Tier::Unit
        } else if r < WORD_THRESHOLD {
            Tier::Word
        } else {
            Tier::Huge
        }
    }
    /// Return the inclusive magnitude bound of this tier
    pub fn bound(self) -> BigInt {
        match self {
            Tier::Unit => BigInt::one(),
            Tier::Word => BigInt::from(WORD_MAX),
            Tier::Huge => pow(BigInt::from(10u8), HUGE_DIGITS)
        }
    }
    /// Draw a uniform integer from `[-bound, bound]`
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> BigInt {
        match self {
            Tier::Unit => BigInt::from(rng.gen_range(-1i8..=1)),
            Tier::Word => BigInt::from(rng.gen_range(-WORD_MAX..=WORD_MAX)),
            Tier::Huge => {
                let bound = self.bound();
                // gen_bigint_range excludes the upper end
                rng.gen_bigint_range(&-&bound, &(bound + 1u8))
            }
        }
    }
    /// Return the smallest tier whose range contains `value`, or `None` if
    /// it's out of range for every tier.
    /// ```rust
    /// use bigint_vectors::Tier;
    /// use num_bigint::BigInt;
    /// assert_eq!(Tier::of(&BigInt::from(-1)), Some(Tier::Unit));
    /// assert_eq!(Tier::of(&BigInt::from(4294967295u32)), Some(Tier::Word));
    /// assert_eq!(Tier::of(&BigInt::from(4294967296u64)), Some(Tier::Huge));
    /// ```
    pub fn of(value: &BigInt) -> Option<Self> {
        let magnitude = value.abs();
        Self::ALL.iter().copied().find(|tier| magnitude <= tier.bound())
    }
}

/// Draw one operand: pick a tier, then a uniform value inside it
pub fn sample_operand<R: Rng + ?Sized>(rng: &mut R) -> BigInt {
    Tier::choose(rng).sample(rng)
}
