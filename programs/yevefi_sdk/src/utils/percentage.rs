/// A fraction used for slippage tolerances and dev fees.
///
/// Kept as an integer numerator/denominator pair so threshold math stays exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Percentage {
    pub numerator: u64,
    pub denominator: u64,
}

impl Percentage {
    #[inline(always)]
    pub const fn from_fraction(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Basis points, e.g. `from_bps(50)` is 0.5%.
    #[inline(always)]
    pub const fn from_bps(bps: u64) -> Self {
        Self::from_fraction(bps, 10_000)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self::from_fraction(0, 1)
    }

    /// True when the fraction is 100% or more.
    #[inline(always)]
    pub const fn is_at_least_whole(&self) -> bool {
        self.numerator >= self.denominator
    }

    // Display only.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}
