//! Series driver and results

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::Observer,
    session::{Event, MatchState, Notification, Outcome, Session},
    strategy::PlayerKind,
    tictactoe::Seat,
};

/// Result of a simulated series
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    /// Total games played
    pub total_games: usize,

    /// Strategy at seat A
    pub seat_a: PlayerKind,

    /// Strategy at seat B
    pub seat_b: PlayerKind,

    /// Games won by seat A
    pub wins_a: usize,

    /// Games won by seat B
    pub wins_b: usize,

    /// Drawn games
    pub draws: usize,

    /// Games opened by seat A
    pub started_a: usize,

    /// Wall time for the whole series
    pub elapsed: Duration,
}

impl SeriesSummary {
    fn new(session: &Session) -> Self {
        Self {
            total_games: 0,
            seat_a: session.kind(Seat::A),
            seat_b: session.kind(Seat::B),
            wins_a: 0,
            wins_b: 0,
            draws: 0,
            started_a: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn wins(&self, seat: Seat) -> usize {
        match seat {
            Seat::A => self.wins_a,
            Seat::B => self.wins_b,
        }
    }

    pub fn win_rate(&self, seat: Seat) -> f64 {
        rate(self.wins(seat), self.total_games)
    }

    pub fn draw_rate(&self) -> f64 {
        rate(self.draws, self.total_games)
    }

    fn record(&mut self, starter: Seat, outcome: &Outcome) {
        self.total_games += 1;
        if starter == Seat::A {
            self.started_a += 1;
        }
        match outcome.winner() {
            Some(Seat::A) => self.wins_a += 1,
            Some(Seat::B) => self.wins_b += 1,
            None => self.draws += 1,
        }
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Plays a series of games on one session, notifying observers
#[derive(Default)]
pub struct MatchSimulation {
    observers: Vec<Box<dyn Observer>>,
}

impl MatchSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer to the simulation
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play `games` games on `session`.
    ///
    /// Starters alternate through the session's own bookkeeping, and the
    /// session's scores keep accumulating across the series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SimulationStalled`] if either seat is human, and
    /// propagates strategy and observer errors.
    pub fn run(&mut self, session: &mut Session, games: usize) -> Result<SeriesSummary> {
        for seat in Seat::ALL {
            if !session.kind(seat).is_automated() {
                return Err(Error::SimulationStalled { seat });
            }
        }

        let started = Instant::now();
        let mut summary = SeriesSummary::new(session);
        for observer in &mut self.observers {
            observer.on_series_start(games)?;
        }

        for game_num in 1..=games {
            let (starter, outcome) = self.play_game(session, game_num)?;
            summary.record(starter, &outcome);
            for observer in &mut self.observers {
                observer.on_game_end(game_num, &outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }
        summary.elapsed = started.elapsed();
        info!(
            games = summary.total_games,
            wins_a = summary.wins_a,
            wins_b = summary.wins_b,
            draws = summary.draws,
            "series finished"
        );
        Ok(summary)
    }

    fn play_game(&mut self, session: &mut Session, game_num: usize) -> Result<(Seat, Outcome)> {
        session.handle(Event::ResetRequested);
        session.handle(Event::StartRequested);
        let starter = session.current_starter();
        for observer in &mut self.observers {
            observer.on_game_start(game_num, starter)?;
        }

        while let MatchState::InProgress(seat) = session.state() {
            let Some(pending) = session.pending_move() else {
                return Err(Error::SimulationStalled { seat });
            };
            for note in session.fire(pending.ticket)? {
                if let Notification::CellMarked { cell, .. } = note {
                    for observer in &mut self.observers {
                        observer.on_move(game_num, seat, cell)?;
                    }
                }
            }
        }

        match session.state().outcome() {
            Some(&outcome) => {
                debug!(game_num, %starter, ?outcome, "simulated game decided");
                Ok((starter, outcome))
            }
            None => Err(Error::SimulationStalled { seat: starter }),
        }
    }
}
