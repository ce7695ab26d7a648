//! Position ranks

use std::{fmt, ops::Neg};

use serde::{Deserialize, Serialize};

/// Value of a position for the player who just moved into it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Loss,
    Draw,
    Win,
}

impl Rank {
    /// Scalar form in [-1, 1]
    pub fn value(self) -> f64 {
        match self {
            Rank::Loss => -1.0,
            Rank::Draw => 0.0,
            Rank::Win => 1.0,
        }
    }
}

impl Neg for Rank {
    type Output = Rank;

    fn neg(self) -> Rank {
        match self {
            Rank::Loss => Rank::Win,
            Rank::Draw => Rank::Draw,
            Rank::Win => Rank::Loss,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Loss => write!(f, "loss"),
            Rank::Draw => write!(f, "draw"),
            Rank::Win => write!(f, "win"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Rank::Win > Rank::Draw);
        assert!(Rank::Draw > Rank::Loss);
        assert_eq!([Rank::Draw, Rank::Win, Rank::Loss].into_iter().max(), Some(Rank::Win));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Rank::Win, Rank::Loss);
        assert_eq!(-Rank::Loss, Rank::Win);
        assert_eq!(-Rank::Draw, Rank::Draw);
        assert_eq!((-Rank::Win).value(), -1.0);
    }
}
