/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

pub type ScoreInternal = i32;

/// A numerical evaluation of a position, from the perspective of one side.
///
/// Ordinary scores are mobility differentials. Decided positions are scored [`Score::WIN`] or [`Score::LOSS`],
/// which dwarf any mobility count and survive repeated negation.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Score(ScoreInternal);

impl Score {
    /// Largest possible score ever achievable.
    ///
    /// Its negation is representable, so `-Score::INF` never overflows.
    pub const INF: Self = Self(ScoreInternal::MAX);

    /// Score of a position the side to move has won: the opponent has no legal moves.
    pub const WIN: Self = Self(1_000_000);

    /// Score of a position the side to move has lost: it has no legal moves.
    pub const LOSS: Self = Self(-Self::WIN.0);

    /// Score of a balanced position.
    pub const DRAW: Self = Self(0);

    /// Initial value of alpha in alpha-beta pruning.
    pub const ALPHA: Self = Self(-Self::INF.0);

    /// Initial value of beta in alpha-beta pruning.
    pub const BETA: Self = Self::INF;

    /// Constructs a new [`Score`] instance.
    #[inline(always)]
    pub const fn new(score: ScoreInternal) -> Self {
        Self(score)
    }

    /// The raw value of this score.
    #[inline(always)]
    pub const fn inner(&self) -> ScoreInternal {
        self.0
    }

    /// Returns `true` if this score marks a decided game, either way.
    #[inline(always)]
    pub const fn is_decisive(&self) -> bool {
        self.0.abs() >= Self::WIN.0
    }

    /// Returns the absolute value of this [`Score`].
    #[inline(always)]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

macro_rules! impl_binary_op {
    ($trait:tt, $fn:ident) => {
        impl std::ops::$trait for Score {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: Self) -> Self::Output {
                Self(self.0.$fn(rhs.0))
            }
        }

        impl std::ops::$trait<ScoreInternal> for Score {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, rhs: ScoreInternal) -> Self::Output {
                Self(self.0.$fn(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);

impl std::ops::Neg for Score {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

impl PartialEq<ScoreInternal> for Score {
    #[inline(always)]
    fn eq(&self, other: &ScoreInternal) -> bool {
        self.0.eq(other)
    }
}

impl PartialOrd<ScoreInternal> for Score {
    #[inline(always)]
    fn partial_cmp(&self, other: &ScoreInternal) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for Score {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::WIN {
            write!(f, "{} (win)", self.0)
        } else if *self == Self::LOSS {
            write!(f, "{} (loss)", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinities_negate_safely() {
        assert_eq!(-Score::ALPHA, Score::BETA);
        assert_eq!(-Score::BETA, Score::ALPHA);
        assert_eq!(-(-Score::INF), Score::INF);
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(-Score::WIN, Score::LOSS);
        assert!(Score::WIN.is_decisive());
        assert!(Score::LOSS.is_decisive());
        assert!(!Score::new(1232).is_decisive());
        assert!(Score::LOSS > Score::ALPHA);
        assert!(Score::WIN < Score::BETA);
    }
}
