//! Cubego: play Go on an NxNxN lattice from the terminal.
//!
//! ## Usage
//!
//! - `cubego` - Two players share the terminal on a 3x3x3 board
//! - `cubego --size 5 --view 2d` - Larger board, layered 2D view
//! - `cubego --log-level debug` - Log captures and turn changes to stderr

use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use cubego::console::Console;
use cubego::constants::DEFAULT_BOARD_SIZE;
use cubego::game::{Game, GameConfig};
use cubego::notation::View;

/// Cubego: Go on a three-dimensional lattice
#[derive(Parser)]
#[command(name = "cubego")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side of the cubic board
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Board view
    #[arg(long, value_enum, default_value_t = ViewArg::ThreeD)]
    view: ViewArg,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    #[value(name = "2d")]
    TwoD,
    #[value(name = "3d")]
    ThreeD,
}

impl From<ViewArg> for View {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::TwoD => View::Flat,
            ViewArg::ThreeD => View::Cube,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let game = Game::with_config(GameConfig::with_size(cli.size))?;

    println!("Cubego: Go on a {0}x{0}x{0} lattice\n", cli.size);
    let mut console = Console::new(game).with_view(cli.view.into());
    console.run(io::stdin().lock(), io::stdout().lock())
}
