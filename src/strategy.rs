//! Player kinds and the three automated tiers

pub mod heuristic;
pub mod optimal;
pub mod random;

use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

pub use heuristic::HeuristicStrategy;
pub use optimal::OptimalStrategy;
pub use random::RandomStrategy;

use crate::{ports::Strategy, solver::SolverTable};

/// Who occupies a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves arrive as interface events
    #[default]
    Human,
    /// Tier 1: uniform among free cells
    Random,
    /// Tier 2: win, else block, else random
    Heuristic,
    /// Tier 3: best solver rank, ties broken at random
    Optimal,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::Human,
        PlayerKind::Random,
        PlayerKind::Heuristic,
        PlayerKind::Optimal,
    ];

    pub fn is_automated(self) -> bool {
        self != PlayerKind::Human
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Heuristic => "heuristic",
            PlayerKind::Optimal => "optimal",
        }
    }

    /// Instantiate the strategy behind an automated kind; `Human` has none
    pub fn build(self, table: &Arc<SolverTable>, seed: u64) -> Option<Box<dyn Strategy>> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(Box::new(RandomStrategy::with_seed(seed))),
            PlayerKind::Heuristic => Some(Box::new(HeuristicStrategy::with_seed(seed))),
            PlayerKind::Optimal => Some(Box::new(OptimalStrategy::with_seed(
                Arc::clone(table),
                seed,
            ))),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" | "bot1" | "tier1" => Ok(PlayerKind::Random),
            "heuristic" | "bot2" | "tier2" => Ok(PlayerKind::Heuristic),
            "optimal" | "bot3" | "tier3" => Ok(PlayerKind::Optimal),
            _ => Err(crate::Error::UnknownPlayerKind {
                input: s.to_string(),
                expected: "human, random, heuristic, optimal (or bot1-bot3)".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("bot1".parse::<PlayerKind>().unwrap(), PlayerKind::Random);
        assert_eq!("Tier2".parse::<PlayerKind>().unwrap(), PlayerKind::Heuristic);
        assert_eq!("optimal".parse::<PlayerKind>().unwrap(), PlayerKind::Optimal);
        assert!("genius".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in PlayerKind::ALL {
            assert_eq!(kind.to_string().parse::<PlayerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_only_bots_build_strategies() {
        let table = Arc::new(SolverTable::build());
        assert!(PlayerKind::Human.build(&table, 1).is_none());
        for kind in [PlayerKind::Random, PlayerKind::Heuristic, PlayerKind::Optimal] {
            let strategy = kind.build(&table, 1).expect("automated kind");
            assert_eq!(strategy.name(), kind.as_str());
        }
    }
}
