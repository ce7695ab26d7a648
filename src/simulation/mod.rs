//! Headless match series between two automated seats
//!
//! A [`MatchSimulation`] drives a real [`Session`](crate::session::Session)
//! through reset, start and deferred-move firing for every game, so simulated
//! results follow exactly the rules an interactive session enforces.

pub mod observers;
pub mod series;

pub use observers::{GameRecord, JsonlObserver, ProgressObserver};
pub use series::{MatchSimulation, SeriesSummary};

pub use crate::ports::Observer;
