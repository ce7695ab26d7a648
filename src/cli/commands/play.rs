//! Play command - interactive session in the terminal
//!
//! Typed lines become session events. Automated seats move after the
//! configured delay unless a reset arrives first.

use std::{
    io::{self, BufRead},
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Instant,
};

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    cli::{config::SessionArgs, output::render_board},
    session::{Event, Notification, Outcome, Session},
    strategy::PlayerKind,
    tictactoe::{BOARD_SIZE, Seat},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive session")]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Emit notifications as JSON lines instead of drawing the board
    #[arg(long)]
    pub json: bool,
}

const HELP: &str = "\
commands:
  0-8                  mark a cell
  start                start a game
  reset                abandon the game and open configuration
  seat <a|b> <kind>    seat human, random, heuristic or optimal
  board                show board and scores
  help                 show this list
  quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(Event),
    Show,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Command::Blank,
        ["start" | "s"] => Command::Event(Event::StartRequested),
        ["reset" | "r"] => Command::Event(Event::ResetRequested),
        ["board" | "b" | "status"] => Command::Show,
        ["help" | "h" | "?"] => Command::Help,
        ["quit" | "q" | "exit"] => Command::Quit,
        ["seat", seat, kind] => match (seat.parse::<Seat>(), kind.parse::<PlayerKind>()) {
            (Ok(seat), Ok(kind)) => Command::Event(Event::PlayerTypeSelected(seat, kind)),
            (Err(err), _) | (_, Err(err)) => Command::Unknown(err.to_string()),
        },
        [word] => match word.parse::<usize>() {
            Ok(cell) if cell < BOARD_SIZE => Command::Event(Event::CellChosen(cell)),
            _ => Command::Unknown(format!("unknown command '{word}'")),
        },
        _ => Command::Unknown(format!("unknown command '{}'", line.trim())),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session.resolve()?;
    let app = App::new();
    let mut session = app.create_session(&config);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    if !args.json {
        println!("{HELP}\n");
        print_status(&session);
    }

    let mut stdin_open = true;
    loop {
        let input = match session.pending_move() {
            Some(pending) => {
                let wait = pending.due.saturating_duration_since(Instant::now());
                if stdin_open {
                    match rx.recv_timeout(wait) {
                        Ok(line) => Some(line),
                        Err(RecvTimeoutError::Timeout) => None,
                        Err(RecvTimeoutError::Disconnected) => {
                            stdin_open = false;
                            continue;
                        }
                    }
                } else {
                    thread::sleep(wait);
                    None
                }
            }
            None if stdin_open => match rx.recv() {
                Ok(line) => Some(line),
                Err(_) => break,
            },
            None => break,
        };

        let notes = match input {
            None => session.poll(Instant::now())?,
            Some(line) => match parse_command(&line) {
                Command::Event(event) => session.handle(event),
                Command::Show => {
                    print_status(&session);
                    continue;
                }
                Command::Help => {
                    println!("{HELP}");
                    continue;
                }
                Command::Quit => break,
                Command::Blank => continue,
                Command::Unknown(message) => {
                    eprintln!("{message} (type 'help')");
                    continue;
                }
            },
        };
        render(&session, &notes, args.json)?;
    }
    Ok(())
}

fn render(session: &Session, notes: &[Notification], json: bool) -> Result<()> {
    if json {
        for note in notes {
            println!("{}", serde_json::to_string(note)?);
        }
        return Ok(());
    }

    for note in notes {
        if let Some(text) = describe(session, note) {
            println!("{text}");
        }
    }
    let board_changed = notes.iter().any(|note| {
        matches!(
            note,
            Notification::CellMarked { .. } | Notification::BoardCleared
        )
    });
    if board_changed {
        println!("\n{}\n", render_board(session.board(), session.winning_line()));
    }
    Ok(())
}

fn describe(session: &Session, note: &Notification) -> Option<String> {
    let text = match *note {
        Notification::CellMarked { cell, mark } => format!("{} takes cell {cell}", mark.to_char()),
        Notification::LineWon { line, seat } => format!("Seat {seat} completes {line}"),
        Notification::TurnChanged(Some(seat)) => {
            format!("Seat {seat} ({}) to move", session.kind(seat))
        }
        Notification::TurnChanged(None) | Notification::BoardCleared => return None,
        Notification::GameDecided(Outcome::WonBy { seat, .. }) => {
            format!("Game over: seat {seat} wins")
        }
        Notification::GameDecided(Outcome::Draw) => "Game over: draw".to_string(),
        Notification::ConfigurationOpened => {
            "Configuration open: 'seat <a|b> <kind>', then 'start'".to_string()
        }
        Notification::ConfigurationClosed => format!("Game {} begins", session.games_played() + 1),
        Notification::ScoreChanged { seat, score } => format!("Score {seat}: {score}"),
        Notification::GamesPlayedChanged(count) => format!("Games played: {count}"),
        Notification::PlayerTypeChanged { seat, kind } => format!("Seat {seat} is now {kind}"),
    };
    Some(text)
}

fn print_status(session: &Session) {
    for seat in Seat::ALL {
        println!(
            "Seat {seat} ({}) plays {}: {} won",
            session.kind(seat),
            seat.mark().to_char(),
            session.score(seat)
        );
    }
    println!(
        "Games played: {}, next starter: {}",
        session.games_played(),
        session.next_starter()
    );
    println!("\n{}\n", render_board(session.board(), session.winning_line()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SessionConfig;

    #[test]
    fn test_parse_cells_and_words() {
        assert_eq!(parse_command("4"), Command::Event(Event::CellChosen(4)));
        assert_eq!(parse_command(" start "), Command::Event(Event::StartRequested));
        assert_eq!(parse_command("r"), Command::Event(Event::ResetRequested));
        assert_eq!(parse_command(""), Command::Blank);
        assert_eq!(parse_command("q"), Command::Quit);
        assert!(matches!(parse_command("9"), Command::Unknown(_)));
        assert!(matches!(parse_command("dance"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_seat_selection() {
        assert_eq!(
            parse_command("seat b bot3"),
            Command::Event(Event::PlayerTypeSelected(Seat::B, PlayerKind::Optimal))
        );
        match parse_command("seat c random") {
            Command::Unknown(message) => assert!(message.contains("unknown seat")),
            other => panic!("expected an error, got {other:?}"),
        }
        assert!(matches!(parse_command("seat a wizard"), Command::Unknown(_)));
    }

    #[test]
    fn test_describe_turn_names_kind() {
        let session = App::new().create_session(&SessionConfig::default());
        let text = describe(&session, &Notification::TurnChanged(Some(Seat::B)));
        assert_eq!(text.as_deref(), Some("Seat B (random) to move"));
        assert_eq!(describe(&session, &Notification::BoardCleared), None);
    }
}
