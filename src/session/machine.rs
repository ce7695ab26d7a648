//! Turn state machine
//!
//! [`Session`] owns the board, both seats and the deferred-move scheduler.
//! Every inbound [`Event`] is answered with the notifications it caused, in
//! emission order. Events that are not valid in the current state are ignored
//! and produce no notifications.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::{debug, warn};

use super::{
    Event, MatchState, MoveScheduler, Notification, Outcome, PendingMove, Player, Ticket,
};
use crate::{
    Result,
    app::SessionConfig,
    ports::TurnView,
    solver::SolverTable,
    strategy::PlayerKind,
    tictactoe::{BOARD_SIZE, Board, Line, Seat},
};

pub struct Session {
    board: Board,
    state: MatchState,
    players: [Player; 2],
    /// Seat that opens the next game
    next_starter: Seat,
    /// Seat that opened the game on the board
    current_starter: Seat,
    winning_line: Option<Line>,
    games_played: u32,
    scheduler: MoveScheduler,
    table: Arc<SolverTable>,
    rng: StdRng,
}

impl Session {
    /// Build the solver table and open a session in configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_table(config, Arc::new(SolverTable::build()))
    }

    /// Open a session that shares an already-built table.
    pub fn with_table(config: &SessionConfig, table: Arc<SolverTable>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(random::<u64>()),
        };
        let players = Seat::ALL.map(|seat| Player::new(seat, config.kind(seat), &table, rng.random()));

        Self {
            board: Board::new(),
            state: MatchState::AwaitingConfiguration,
            players,
            next_starter: Seat::A,
            current_starter: Seat::A,
            winning_line: None,
            games_played: 0,
            scheduler: MoveScheduler::new(config.bot_delay()),
            table,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_configuring(&self) -> bool {
        self.state == MatchState::AwaitingConfiguration
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn kind(&self, seat: Seat) -> PlayerKind {
        self.player(seat).kind()
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.player(seat).score()
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn next_starter(&self) -> Seat {
        self.next_starter
    }

    /// Seat that opened the game currently on the board
    pub fn current_starter(&self) -> Seat {
        self.current_starter
    }

    /// Line that decided the last game, kept until the board is cleared
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn pending_move(&self) -> Option<PendingMove> {
        self.scheduler.pending().copied()
    }

    pub fn bot_delay(&self) -> Duration {
        self.scheduler.delay()
    }

    pub fn table(&self) -> &Arc<SolverTable> {
        &self.table
    }

    /// Apply one interface event.
    pub fn handle(&mut self, event: Event) -> Vec<Notification> {
        let mut notes = Vec::new();
        match event {
            Event::ResetRequested => self.reset(&mut notes),
            Event::StartRequested => self.start(&mut notes),
            Event::CellChosen(cell) => self.choose_cell(cell, &mut notes),
            Event::PlayerTypeSelected(seat, kind) => self.select_kind(seat, kind, &mut notes),
        }
        notes
    }

    /// Fire the pending automated move if it is due at `now`.
    ///
    /// # Errors
    ///
    /// Propagates a strategy failure; see [`Session::fire`].
    pub fn poll(&mut self, now: Instant) -> Result<Vec<Notification>> {
        match self.scheduler.due_ticket(now) {
            Some(ticket) => self.fire(ticket),
            None => Ok(Vec::new()),
        }
    }

    /// Run the automated move identified by `ticket`.
    ///
    /// A ticket that was cancelled or superseded does nothing.
    ///
    /// # Errors
    ///
    /// Returns the strategy's error if it finds no free cell or its table
    /// lookup misses, and [`crate::Error::InvalidPosition`] or
    /// [`crate::Error::InvalidMove`] if it picks a cell that cannot be marked.
    pub fn fire(&mut self, ticket: Ticket) -> Result<Vec<Notification>> {
        let Some(pending) = self.scheduler.claim(ticket) else {
            debug!(?ticket, "ignoring stale automated move");
            return Ok(Vec::new());
        };
        if self.state != MatchState::InProgress(pending.seat) {
            debug!(?ticket, state = ?self.state, "automated move no longer applies");
            return Ok(Vec::new());
        }

        let seat = pending.seat;
        let view = TurnView::new(&self.board, seat, self.current_starter);
        let Some(strategy) = self.players[seat.index()].strategy_mut() else {
            return Ok(Vec::new());
        };
        let cell = strategy.choose_cell(&view).inspect_err(|err| {
            warn!(%seat, error = %err, "automated strategy failed");
        })?;
        if cell >= BOARD_SIZE {
            warn!(%seat, cell, "automated strategy chose a cell off the board");
            return Err(crate::Error::InvalidPosition { position: cell });
        }
        if !self.board.is_free(cell) {
            warn!(%seat, cell, "automated strategy chose an occupied cell");
            return Err(crate::Error::InvalidMove { position: cell });
        }

        let mut notes = Vec::new();
        self.apply_move(seat, cell, &mut notes);
        Ok(notes)
    }

    fn reset(&mut self, notes: &mut Vec<Notification>) {
        if let Some(pending) = self.scheduler.cancel() {
            debug!(ticket = ?pending.ticket, "cancelled pending automated move");
        }
        if self.state.active_seat().is_some() {
            notes.push(Notification::TurnChanged(None));
        }
        self.clear_board(notes);
        if !self.is_configuring() {
            self.state = MatchState::AwaitingConfiguration;
            notes.push(Notification::ConfigurationOpened);
            debug!("configuration opened");
        }
    }

    fn start(&mut self, notes: &mut Vec<Notification>) {
        if !self.is_configuring() {
            return;
        }
        self.clear_board(notes);
        notes.push(Notification::ConfigurationClosed);
        self.current_starter = self.next_starter;
        debug!(starter = %self.current_starter, "game started");
        self.enter_turn(self.current_starter, notes);
    }

    fn choose_cell(&mut self, cell: usize, notes: &mut Vec<Notification>) {
        let MatchState::InProgress(seat) = self.state else {
            return;
        };
        if !self.player(seat).is_human() || cell >= BOARD_SIZE || !self.board.is_free(cell) {
            return;
        }
        self.apply_move(seat, cell, notes);
    }

    fn select_kind(&mut self, seat: Seat, kind: PlayerKind, notes: &mut Vec<Notification>) {
        if !self.is_configuring() || self.kind(seat) == kind {
            return;
        }
        let seed = self.rng.random();
        self.players[seat.index()].reseat(kind, &self.table, seed);
        notes.push(Notification::PlayerTypeChanged { seat, kind });

        // A new lineup starts a fresh scoreboard.
        for player in &mut self.players {
            player.reset_score();
            notes.push(Notification::ScoreChanged {
                seat: player.seat(),
                score: 0,
            });
        }
        self.games_played = 0;
        notes.push(Notification::GamesPlayedChanged(0));
        self.next_starter = Seat::A;
        debug!(%seat, %kind, "seat reconfigured");
    }

    fn enter_turn(&mut self, seat: Seat, notes: &mut Vec<Notification>) {
        self.state = MatchState::InProgress(seat);
        notes.push(Notification::TurnChanged(Some(seat)));
        if !self.player(seat).is_human() {
            let pending = self.scheduler.schedule(seat, Instant::now());
            debug!(%seat, ticket = ?pending.ticket, "automated move scheduled");
        }
    }

    fn apply_move(&mut self, seat: Seat, cell: usize, notes: &mut Vec<Notification>) {
        let mark = seat.mark();
        self.board.place(cell, mark);
        notes.push(Notification::CellMarked { cell, mark });

        if let Some(line) = self.board.line_completed_at(cell) {
            let score = self.players[seat.index()].record_win();
            self.winning_line = Some(line);
            notes.push(Notification::LineWon { line, seat });
            notes.push(Notification::ScoreChanged { seat, score });
            self.decide(Outcome::WonBy { seat, line }, notes);
        } else if self.board.is_full() {
            self.decide(Outcome::Draw, notes);
        } else {
            self.enter_turn(seat.other(), notes);
        }
    }

    fn decide(&mut self, outcome: Outcome, notes: &mut Vec<Notification>) {
        self.games_played += 1;
        self.state = MatchState::Decided(outcome);
        self.next_starter = self.next_starter.other();
        notes.push(Notification::GamesPlayedChanged(self.games_played));
        notes.push(Notification::GameDecided(outcome));
        notes.push(Notification::TurnChanged(None));
        debug!(?outcome, games = self.games_played, "game decided");
    }

    fn clear_board(&mut self, notes: &mut Vec<Notification>) {
        self.board.clear();
        self.winning_line = None;
        notes.push(Notification::BoardCleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    fn session(a: PlayerKind, b: PlayerKind) -> Session {
        let config = SessionConfig::default()
            .with_seat(Seat::A, a)
            .with_seat(Seat::B, b)
            .with_bot_delay_ms(0)
            .with_seed(3);
        Session::new(&config)
    }

    fn play(session: &mut Session, cells: &[usize]) {
        for &cell in cells {
            session.handle(Event::CellChosen(cell));
        }
    }

    #[test]
    fn test_starts_in_configuration() {
        let session = session(PlayerKind::Human, PlayerKind::Human);
        assert!(session.is_configuring());
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.next_starter(), Seat::A);
    }

    #[test]
    fn test_start_hands_turn_to_starter() {
        let mut session = session(PlayerKind::Human, PlayerKind::Human);
        let notes = session.handle(Event::StartRequested);
        assert_eq!(
            notes,
            vec![
                Notification::BoardCleared,
                Notification::ConfigurationClosed,
                Notification::TurnChanged(Some(Seat::A)),
            ]
        );
        assert_eq!(session.state(), MatchState::InProgress(Seat::A));
    }

    #[test]
    fn test_win_updates_score_and_alternates_starter() {
        let mut session = session(PlayerKind::Human, PlayerKind::Human);
        session.handle(Event::StartRequested);
        play(&mut session, &[0, 3, 1, 4]);
        let notes = session.handle(Event::CellChosen(2));

        let line = Line([0, 1, 2]);
        assert_eq!(
            notes,
            vec![
                Notification::CellMarked {
                    cell: 2,
                    mark: Cell::X
                },
                Notification::LineWon {
                    line,
                    seat: Seat::A
                },
                Notification::ScoreChanged {
                    seat: Seat::A,
                    score: 1
                },
                Notification::GamesPlayedChanged(1),
                Notification::GameDecided(Outcome::WonBy {
                    seat: Seat::A,
                    line
                }),
                Notification::TurnChanged(None),
            ]
        );
        assert_eq!(session.winning_line(), Some(line));
        assert_eq!(session.next_starter(), Seat::B);
    }

    #[test]
    fn test_draw_counts_game_without_score() {
        let mut session = session(PlayerKind::Human, PlayerKind::Human);
        session.handle(Event::StartRequested);
        // X O X / X O O / O X X
        play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(session.state(), MatchState::Decided(Outcome::Draw));
        assert_eq!(session.games_played(), 1);
        assert_eq!(session.score(Seat::A), 0);
        assert_eq!(session.score(Seat::B), 0);
    }

    #[test]
    fn test_reset_in_configuration_only_clears() {
        let mut session = session(PlayerKind::Human, PlayerKind::Human);
        assert_eq!(
            session.handle(Event::ResetRequested),
            vec![Notification::BoardCleared]
        );
        assert!(session.is_configuring());
    }

    #[test]
    fn test_reset_mid_game_keeps_scores_and_starter() {
        let mut session = session(PlayerKind::Human, PlayerKind::Human);
        session.handle(Event::StartRequested);
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.handle(Event::ResetRequested);
        session.handle(Event::StartRequested);
        play(&mut session, &[4]);

        let notes = session.handle(Event::ResetRequested);
        assert_eq!(
            notes,
            vec![
                Notification::TurnChanged(None),
                Notification::BoardCleared,
                Notification::ConfigurationOpened,
            ]
        );
        assert_eq!(session.score(Seat::A), 1);
        assert_eq!(session.next_starter(), Seat::B);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_guards_ignore_invalid_input() {
        let mut session = session(PlayerKind::Human, PlayerKind::Human);
        assert!(session.handle(Event::CellChosen(0)).is_empty());

        session.handle(Event::StartRequested);
        assert!(session.handle(Event::StartRequested).is_empty());
        assert!(
            session
                .handle(Event::PlayerTypeSelected(Seat::B, PlayerKind::Optimal))
                .is_empty()
        );
        session.handle(Event::CellChosen(4));
        assert!(session.handle(Event::CellChosen(4)).is_empty());
        assert!(session.handle(Event::CellChosen(9)).is_empty());
        assert_eq!(session.kind(Seat::B), PlayerKind::Human);
    }

    #[test]
    fn test_human_cannot_move_for_bot() {
        let mut session = session(PlayerKind::Random, PlayerKind::Human);
        session.handle(Event::StartRequested);
        assert!(session.pending_move().is_some());
        assert!(session.handle(Event::CellChosen(0)).is_empty());
    }

    #[test]
    fn test_bot_move_fires_and_passes_turn() {
        let mut session = session(PlayerKind::Heuristic, PlayerKind::Human);
        session.handle(Event::StartRequested);
        let pending = session.pending_move().expect("bot opens");
        assert_eq!(pending.seat, Seat::A);

        let notes = session.fire(pending.ticket).unwrap();
        assert!(matches!(
            notes.first(),
            Some(Notification::CellMarked { mark: Cell::X, .. })
        ));
        assert_eq!(notes.last(), Some(&Notification::TurnChanged(Some(Seat::B))));
        assert!(session.pending_move().is_none());
        assert_eq!(session.board().occupied_count(), 1);
    }

    #[test]
    fn test_poll_waits_for_delay() {
        let config = SessionConfig::default()
            .with_seat(Seat::A, PlayerKind::Random)
            .with_bot_delay_ms(500)
            .with_seed(1);
        let mut session = Session::new(&config);
        session.handle(Event::StartRequested);
        let pending = session.pending_move().unwrap();

        assert!(session.poll(pending.due - Duration::from_millis(1)).unwrap().is_empty());
        assert_eq!(session.board().occupied_count(), 0);
        assert!(!session.poll(pending.due).unwrap().is_empty());
        assert_eq!(session.board().occupied_count(), 1);
    }

    #[test]
    fn test_lineup_change_resets_scoreboard() {
        let mut session = session(PlayerKind::Human, PlayerKind::Human);
        session.handle(Event::StartRequested);
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.handle(Event::ResetRequested);

        let notes = session.handle(Event::PlayerTypeSelected(Seat::B, PlayerKind::Optimal));
        assert_eq!(
            notes,
            vec![
                Notification::PlayerTypeChanged {
                    seat: Seat::B,
                    kind: PlayerKind::Optimal
                },
                Notification::ScoreChanged {
                    seat: Seat::A,
                    score: 0
                },
                Notification::ScoreChanged {
                    seat: Seat::B,
                    score: 0
                },
                Notification::GamesPlayedChanged(0),
            ]
        );
        assert_eq!(session.next_starter(), Seat::A);
        assert!(
            session
                .handle(Event::PlayerTypeSelected(Seat::B, PlayerKind::Optimal))
                .is_empty()
        );
    }
}
