//! A single Sudoku digit, valid in the range `1..=N` for some grid side `N`.

use std::fmt;

/// A Sudoku digit in `1..=32` (the crate's bitset width caps the usable range;
/// targeted grids use `N` up to 9).
///
/// Unlike a fixed-`N=9` compile-time `Digit` enum, this wraps a runtime value
/// so the same type serves grids of side 4 and side 9 alike. Validity against
/// a particular grid's side is the caller's/`Grid`'s responsibility, not
/// `Digit`'s: a `Digit` only guarantees `1..=32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// The largest digit value this crate's bitsets can represent.
    pub const MAX_VALUE: u8 = 32;

    /// Builds a digit from its 1-based value.
    ///
    /// Returns `None` if `value` is `0` or greater than [`Digit::MAX_VALUE`].
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::MAX_VALUE).contains(&value).then_some(Self(value))
    }

    /// Returns the 1-based value of the digit.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the zero-based index of the digit (`value() - 1`), used to
    /// index into a [`DigitSet`](crate::DigitSet) bitmask.
    #[must_use]
    pub fn index(self) -> u8 {
        self.0 - 1
    }

    /// Iterates every digit `1..=side`, ascending.
    pub fn all(side: u8) -> impl Iterator<Item = Self> {
        (1..=side).map(Self)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}
