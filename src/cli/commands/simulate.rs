//! Simulate command - headless series between two automated seats

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    app::App,
    cli::{
        config::SessionArgs,
        output::{format_number, format_percent, print_kv, print_section},
    },
    simulation::{JsonlObserver, MatchSimulation, ProgressObserver, SeriesSummary},
    tictactoe::Seat,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series between two automated seats")]
pub struct SimulateArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Write one JSON record per game to this file
    #[arg(long, short = 'o')]
    pub log: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = args.session.resolve()?;
    for seat in Seat::ALL {
        if !config.kind(seat).is_automated() {
            bail!("seat {seat} is human; pass --seat-a and --seat-b with automated kinds");
        }
    }

    let app = App::new();
    let mut session = app.create_session(&config);

    let mut simulation = MatchSimulation::new();
    if !args.no_progress && !args.json {
        simulation = simulation.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.log {
        simulation = simulation.with_observer(Box::new(JsonlObserver::create(path)?));
    }

    let summary = simulation.run(&mut session, args.games)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
        if let Some(path) = &args.log {
            println!("\nGame log written to: {}", path.display());
        }
    }
    Ok(())
}

fn print_summary(summary: &SeriesSummary) {
    print_section(&format!("{} vs {}", summary.seat_a, summary.seat_b));
    print_kv("Games", &format_number(summary.total_games));
    for seat in Seat::ALL {
        print_kv(
            &format!("Seat {seat} wins"),
            &format!(
                "{} ({})",
                format_number(summary.wins(seat)),
                format_percent(summary.win_rate(seat))
            ),
        );
    }
    print_kv(
        "Draws",
        &format!(
            "{} ({})",
            format_number(summary.draws),
            format_percent(summary.draw_rate())
        ),
    );
    print_kv("Opened by A", &format_number(summary.started_a));
    print_kv(
        "Elapsed",
        &format!("{:.1} ms", summary.elapsed.as_secs_f64() * 1000.0),
    );
}
