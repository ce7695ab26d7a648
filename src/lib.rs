//! Two-seat tic-tac-toe engine
//!
//! This crate provides:
//! - Board model with win-line detection and symmetry canonicalization
//! - Exhaustive negamax solver table over symmetry classes
//! - Turn state machine with cancellable deferred bot moves
//! - Three automated opponent tiers: random, heuristic and optimal
//! - Headless match simulation and a terminal front end
//!
//! ```
//! use xo::{
//!     app::{App, SessionConfig},
//!     session::{Event, MatchState},
//!     strategy::PlayerKind,
//!     tictactoe::Seat,
//! };
//!
//! let app = App::new();
//! let config = SessionConfig::default().with_seat(Seat::B, PlayerKind::Optimal);
//! let mut session = app.create_session(&config);
//! session.handle(Event::StartRequested);
//! session.handle(Event::CellChosen(4));
//! assert_eq!(session.state(), MatchState::InProgress(Seat::B));
//! assert!(session.pending_move().is_some());
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod session;
pub mod simulation;
pub mod solver;
pub mod strategy;
pub mod tictactoe;

pub use error::{Error, Result};
