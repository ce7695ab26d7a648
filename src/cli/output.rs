//! Output formatting and progress indicators for the CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Line};

/// Create a spinner for blocking work such as building the solver table
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a count with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a ratio as a percentage
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Draw the board as a grid.
///
/// Free cells show their index so they can be typed; cells on the winning
/// line are bracketed.
pub fn render_board(board: &Board, winning: Option<Line>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (row * 3..row * 3 + 3)
            .map(|cell| {
                let glyph = if board.is_free(cell) {
                    cell.to_string()
                } else {
                    board.get(cell).to_char().to_string()
                };
                match winning {
                    Some(line) if line.contains(cell) => format!("[{glyph}]"),
                    _ => format!(" {glyph} "),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(765), "765");
        assert_eq!(format_number(5478), "5,478");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_render_marks_winning_line() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let text = render_board(&board, Some(Line([0, 1, 2])));
        let first = text.lines().next().unwrap();
        assert_eq!(first, "[X]|[X]|[X]");
        assert!(text.contains(" O | O | 5 "));
    }
}
