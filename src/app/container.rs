//! Application container owning the shared solver table.

use std::sync::Arc;

use super::config::SessionConfig;
use crate::{session::Session, solver::SolverTable};

/// Application root.
///
/// Builds the solver table once and hands it to every session it creates.
///
/// # Examples
///
/// ```
/// use xo::app::{App, SessionConfig};
///
/// let app = App::new();
/// let session = app.create_session(&SessionConfig::default().with_seed(42));
/// assert!(session.is_configuring());
/// ```
pub struct App {
    table: Arc<SolverTable>,
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app, building the solver table synchronously.
    pub fn new() -> Self {
        Self {
            table: Arc::new(SolverTable::build()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Shared handle to the solver table.
    pub fn table(&self) -> Arc<SolverTable> {
        Arc::clone(&self.table)
    }

    /// Create a session with the given configuration.
    ///
    /// A seed in `config` wins over the app's default seed.
    pub fn create_session(&self, config: &SessionConfig) -> Session {
        let mut config = config.clone();
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        Session::with_table(&config, self.table())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`App`]
pub struct AppBuilder {
    table: Option<Arc<SolverTable>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            table: None,
            default_seed: None,
        }
    }

    /// Reuse an already-built table.
    pub fn with_table(mut self, table: Arc<SolverTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Seed used by sessions whose config carries none.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        App {
            table: self
                .table
                .unwrap_or_else(|| Arc::new(SolverTable::build())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Seat;

    #[test]
    fn test_sessions_share_one_table() {
        let app = App::builder().with_default_seed(5).build();
        let first = app.create_session(&SessionConfig::default());
        let second = app.create_session(&SessionConfig::default());
        assert!(Arc::ptr_eq(first.table(), second.table()));
    }

    #[test]
    fn test_config_kinds_are_seated() {
        let app = App::builder()
            .with_table(Arc::new(SolverTable::build()))
            .build();
        let config = SessionConfig::default()
            .with_seat(Seat::A, crate::strategy::PlayerKind::Heuristic);
        let session = app.create_session(&config);
        assert_eq!(session.kind(Seat::A), crate::strategy::PlayerKind::Heuristic);
    }
}
