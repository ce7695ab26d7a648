//! Configuration types for session creation.

use std::{fs::File, io::BufReader, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Result, strategy::PlayerKind, tictactoe::Seat};

/// Delay before an automated seat moves.
pub const DEFAULT_BOT_DELAY_MS: u64 = 500;

/// Configuration for creating a session.
///
/// # Examples
///
/// ```
/// use xo::app::SessionConfig;
/// use xo::{strategy::PlayerKind, tictactoe::Seat};
///
/// let config = SessionConfig::default()
///     .with_seat(Seat::B, PlayerKind::Optimal)
///     .with_bot_delay_ms(0)
///     .with_seed(42);
/// assert_eq!(config.kind(Seat::A), PlayerKind::Human);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Strategy seated at A when the session starts
    pub seat_a: PlayerKind,
    /// Strategy seated at B when the session starts
    pub seat_b: PlayerKind,
    /// Visible delay before automated moves, in milliseconds
    pub bot_delay_ms: u64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Load a configuration from a JSON file; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file '{}'", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Set the strategy for one seat.
    pub fn with_seat(mut self, seat: Seat, kind: PlayerKind) -> Self {
        match seat {
            Seat::A => self.seat_a = kind,
            Seat::B => self.seat_b = kind,
        }
        self
    }

    /// Set the automated-move delay.
    pub fn with_bot_delay_ms(mut self, delay_ms: u64) -> Self {
        self.bot_delay_ms = delay_ms;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn kind(&self, seat: Seat) -> PlayerKind {
        match seat {
            Seat::A => self.seat_a,
            Seat::B => self.seat_b,
        }
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seat_a: PlayerKind::Human,
            seat_b: PlayerKind::Random,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lineup() {
        let config = SessionConfig::default();
        assert_eq!(config.kind(Seat::A), PlayerKind::Human);
        assert_eq!(config.kind(Seat::B), PlayerKind::Random);
        assert_eq!(config.bot_delay(), Duration::from_millis(500));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "seat_a": "optimal", "seed": 9 }"#).unwrap();
        assert_eq!(config.seat_a, PlayerKind::Optimal);
        assert_eq!(config.seat_b, PlayerKind::Random);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: std::result::Result<SessionConfig, _> =
            serde_json::from_str(r#"{ "seat_b": "grandmaster" }"#);
        assert!(result.is_err());
    }
}
