//! Observers for simulated series
//!
//! Observers collect data while a series runs without coupling the driver to
//! any output format.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{Result, ports::Observer, session::Outcome, tictactoe::Seat};

/// Complete record of one simulated game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_num: usize,
    /// Seat that opened the game
    pub starter: Seat,
    /// Cells in the order they were marked
    pub moves: Vec<usize>,
    pub outcome: Outcome,
}

/// Progress bar observer - shows series progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins_a: usize,
    wins_b: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins_a: 0,
            wins_b: 0,
            draws: 0,
        }
    }

    fn message(&self) -> String {
        format!("A:{} D:{} B:{}", self.wins_a, self.draws, self.wins_b)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: &Outcome) -> Result<()> {
        match outcome.winner() {
            Some(Seat::A) => self.wins_a += 1,
            Some(Seat::B) => self.wins_b += 1,
            None => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// JSONL observer - writes one [`GameRecord`] per line
pub struct JsonlObserver<W: Write + Send = BufWriter<File>> {
    writer: W,
    current: Option<GameRecord>,
}

impl JsonlObserver {
    /// Create a JSONL file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create game log '{}'", path.display()),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> JsonlObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Observer for JsonlObserver<W> {
    fn on_game_start(&mut self, game_num: usize, starter: Seat) -> Result<()> {
        self.current = Some(GameRecord {
            game_num,
            starter,
            moves: Vec::new(),
            outcome: Outcome::Draw,
        });
        Ok(())
    }

    fn on_move(&mut self, _game_num: usize, _seat: Seat, cell: usize) -> Result<()> {
        if let Some(record) = &mut self.current {
            record.moves.push(cell);
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: &Outcome) -> Result<()> {
        let Some(mut record) = self.current.take() else {
            return Ok(());
        };
        record.outcome = *outcome;

        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
