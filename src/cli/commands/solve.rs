//! Solve command - build the solver table and report on it

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    ports::TurnView,
    solver::{Rank, SolverStats, SolverTable},
    strategy::OptimalStrategy,
    tictactoe::{Board, Cell, Seat},
};

#[derive(Parser, Debug)]
#[command(about = "Build the solver table and report statistics")]
pub struct SolveArgs {
    /// Rank every free cell of this position for the side to move (X opened)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MoveRank {
    cell: usize,
    rank: Rank,
    value: f64,
}

#[derive(Debug, Serialize)]
struct SolveReport<'a> {
    stats: &'a SolverStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<PositionReport>,
}

#[derive(Debug, Serialize)]
struct PositionReport {
    board: String,
    key: String,
    to_move: Cell,
    moves: Vec<MoveRank>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let spinner = create_spinner("Building solver table...")?;
    let table = Arc::new(SolverTable::build());
    spinner.finish_and_clear();

    let position = match &args.board {
        Some(text) => Some(rank_position(&table, text)?),
        None => None,
    };

    if args.json {
        let report = SolveReport {
            stats: table.stats(),
            position,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats = table.stats();
    print_section("Solver Table");
    print_kv("Entries", &format_number(stats.entries));
    print_kv("Positions expanded", &format_number(stats.positions_expanded));
    print_kv("Table hits", &format_number(stats.table_hits));
    if let Some(root) = stats.root_rank {
        print_kv("Empty board", &root.to_string());
    }
    print_kv(
        "Build time",
        &format!("{:.1} ms", stats.build_time.as_secs_f64() * 1000.0),
    );

    if let Some(position) = position {
        print_section("Position");
        print_kv("Board", &position.board);
        print_kv("Canonical key", &position.key);
        print_kv("To move", &position.to_move.to_char().to_string());
        for entry in &position.moves {
            print_kv(
                &format!("Cell {}", entry.cell),
                &format!("{} ({:+})", entry.rank, entry.value),
            );
        }
    }
    Ok(())
}

fn rank_position(table: &Arc<SolverTable>, text: &str) -> Result<PositionReport> {
    let board = Board::from_string(text)?;
    let Some(key) = table.key_for(&board) else {
        bail!("position '{}' is not reachable with X opening", board.encode());
    };
    if board.winning_line().is_some() || board.is_full() {
        bail!("position '{}' is already decided", board.encode());
    }

    let mover = if board.count(Cell::X) == board.count(Cell::O) {
        Seat::A
    } else {
        Seat::B
    };
    let optimal = OptimalStrategy::with_seed(Arc::clone(table), 0);
    let moves = optimal
        .rank_moves(&TurnView::new(&board, mover, Seat::A))?
        .into_iter()
        .map(|(cell, rank)| MoveRank {
            cell,
            rank,
            value: rank.value(),
        })
        .collect();

    Ok(PositionReport {
        board: board.encode(),
        key,
        to_move: mover.mark(),
        moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_position_reports_values() {
        let table = Arc::new(SolverTable::build());
        let report = rank_position(&table, "X.. ... ...").unwrap();

        assert_eq!(report.to_move, Cell::O);
        assert_eq!(report.moves.len(), 8);
        let centre = report.moves.iter().find(|entry| entry.cell == 4).unwrap();
        assert_eq!(centre.rank, Rank::Draw);
        assert_eq!(centre.value, 0.0);
        let edge = report.moves.iter().find(|entry| entry.cell == 1).unwrap();
        assert_eq!(edge.value, -1.0);
    }

    #[test]
    fn test_rank_position_rejects_decided_and_malformed_boards() {
        let table = Arc::new(SolverTable::build());
        assert!(rank_position(&table, "XXX OO. ...").is_err());
        assert!(rank_position(&table, "XO.......JUNK").is_err());
    }
}
