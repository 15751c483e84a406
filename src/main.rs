//! Go-Rules: a Go rules engine with a text protocol front end.
//!
//! ## Usage
//!
//! - `go-rules` - Show a demo
//! - `go-rules gtp` - Start a GTP server for GUI integration
//! - `go-rules demo` - Play a short scripted game and score it
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use go_rules::board::Color;
use go_rules::constants::DEFAULT_SIZE;
use go_rules::engine::{BoardEngine, EngineConfig, RuleSet};
use go_rules::gtp::{GtpEngine, format_vertex};

/// Go-Rules: a renderer-agnostic Go rules engine
#[derive(Parser)]
#[command(name = "go-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Reject self-capture moves
        #[arg(long)]
        strict: bool,
    },
    /// Run a simple demo of the engine
    Demo {
        /// Board size
        #[arg(long, default_value_t = 5)]
        size: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp { size, strict }) => {
            let rules = if strict {
                RuleSet::Strict
            } else {
                RuleSet::Permissive
            };
            let mut engine = GtpEngine::with_config(EngineConfig { size, rules })
                .context("cannot start GTP engine")?;
            engine
                .run(std::io::stdin().lock(), std::io::stdout())
                .context("GTP session failed")?;
        }
        Some(Commands::Demo { size }) => run_demo(size)?,
        None => run_demo(5)?,
    }
    Ok(())
}

fn run_demo(size: usize) -> Result<()> {
    println!("Go-Rules: Go rules engine demo\n");

    let mut game = BoardEngine::new(size).with_context(|| format!("invalid board size {size}"))?;

    // Black surrounds the white stone in the centre and takes it.
    let c = size / 2;
    let moves = [(c, c - 1), (c, c), (c - 1, c), (c + 1, c + 1), (c + 1, c)];
    for (x, y) in moves {
        game.play(x, y)?;
    }
    let result = game.apply_move(c, c + 1, Color::Black)?;
    for pt in result.captured() {
        println!("Captured: {}", format_vertex(pt, size));
    }
    println!("{}", game.board());

    let outcome = game.finish()?;
    println!("Result: {outcome:?}");
    println!("Score: {}", game.count_score());
    Ok(())
}
