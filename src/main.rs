//! Checkers GUI
//!
//! Play checkers against a heuristic CPU opponent.

use std::time::Duration;

use checkers::ui::{CheckersApp, GameConfig};
use clap::Parser;
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(name = "checkers", about = "Play checkers against the computer")]
struct Arguments {
    /// Seed for the CPU's tie-breaks (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause before the CPU moves, in milliseconds
    #[arg(long, default_value_t = 1000)]
    cpu_delay_ms: u64,
}

fn main() -> Result<(), eframe::Error> {
    let arguments = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = GameConfig {
        cpu_delay: Duration::from_millis(arguments.cpu_delay_ms),
        seed: arguments.seed,
    };
    info!("starting with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(move |cc| Ok(Box::new(CheckersApp::new(cc, config)))),
    )
}
