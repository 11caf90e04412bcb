// SPDX-License-Identifier: MIT OR Apache-2.0
//! `StepDeck` - keyboard-driven console presentation decks.
//!
//! Plays a storyboard of illustrated steps, one progressive-reveal
//! animation per step:
//! - Built-in decks for the RAG, finetuning, and AI-governance sessions
//! - Custom decks loadable from RON files
//! - Step navigation with an in-flight animation gate
//!
//! ## Architecture
//!
//! All sequencing logic lives in the `stepdeck_sequencer` crate; this
//! binary supplies the console render surface, the key map, and the
//! fixed-interval tick loop that drives playback.

mod console_surface;
mod controls;
mod decks;
mod runner;

use clap::Parser;
use runner::Runner;
use stepdeck_sequencer::{Storyboard, StoryboardError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keyboard-driven presentation decks
#[derive(Debug, Parser)]
#[command(name = "stepdeck", version, about)]
struct Args {
    /// Built-in deck to play
    #[arg(long, default_value = "rag")]
    deck: String,

    /// Play a deck from a RON file instead of a built-in
    #[arg(long, value_name = "PATH")]
    file: Option<std::path::PathBuf>,

    /// List the built-in decks and exit
    #[arg(long)]
    list: bool,
}

/// Startup failures; all of them refuse the session
#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("unknown deck {0:?}; use --list to see the built-in decks")]
    UnknownDeck(String),

    #[error(transparent)]
    Storyboard(#[from] StoryboardError),
}

fn load_storyboard(args: &Args) -> Result<Storyboard, LoadError> {
    if let Some(path) = &args.file {
        return Ok(Storyboard::load(path)?);
    }
    Ok(decks::find(&args.deck)
        .ok_or_else(|| LoadError::UnknownDeck(args.deck.clone()))?
        .storyboard()?)
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("stepdeck_app=info".parse().unwrap())
        .add_directive("stepdeck_sequencer=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if args.list {
        for deck in decks::BUILTIN_DECKS {
            println!("{:<12} {}", deck.slug, deck.summary);
        }
        return;
    }

    let storyboard = match load_storyboard(&args) {
        Ok(board) => board,
        Err(e) => {
            tracing::error!("refusing to start: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting StepDeck v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = Runner::new(storyboard).run() {
        tracing::error!("session failed: {e}");
        std::process::exit(1);
    }
}
