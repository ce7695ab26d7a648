//! Session flags shared across commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{app::SessionConfig, strategy::PlayerKind, tictactoe::Seat};

/// Flags that build a [`SessionConfig`]; explicit flags override the file
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// JSON session configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Strategy for seat A (human, random, heuristic, optimal)
    #[arg(long = "seat-a")]
    pub seat_a: Option<PlayerKind>,

    /// Strategy for seat B (human, random, heuristic, optimal)
    #[arg(long = "seat-b")]
    pub seat_b: Option<PlayerKind>,

    /// Delay before automated moves, in milliseconds
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionArgs {
    pub fn resolve(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(kind) = self.seat_a {
            config = config.with_seat(Seat::A, kind);
        }
        if let Some(kind) = self.seat_b {
            config = config.with_seat(Seat::B, kind);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_bot_delay_ms(delay_ms);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = SessionArgs {
            seat_b: Some(PlayerKind::Optimal),
            delay_ms: Some(0),
            seed: Some(7),
            ..SessionArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.kind(Seat::A), PlayerKind::Human);
        assert_eq!(config.kind(Seat::B), PlayerKind::Optimal);
        assert_eq!(config.bot_delay_ms, 0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let args = SessionArgs {
            config: Some(PathBuf::from("/nonexistent/xo.json")),
            ..SessionArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
