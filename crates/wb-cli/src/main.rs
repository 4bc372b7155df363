//! Chat-style dice roller CLI for Würfelbecher.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wb",
    about = "Würfelbecher — dice-notation recognition and evaluation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate dice expressions in the given text and print the reply
    Roll {
        /// Text to scan (several arguments are joined with spaces)
        text: Vec<String>,

        /// RNG seed for deterministic replies
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print structured outcomes as JSON instead of the reply line
        #[arg(long)]
        json: bool,
    },

    /// Read messages line by line from stdin and reply to each
    Listen {
        /// RNG seed for deterministic replies
        #[arg(short, long)]
        seed: Option<u64>,

        /// Treat input as coming from this channel (default: direct messages)
        #[arg(short, long)]
        channel: Option<String>,

        /// Disable automatic evaluation (messages are read but never answered)
        #[arg(long)]
        no_auto: bool,
    },

    /// List the supported dice-notation grammars
    Notation,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { text, seed, json } => commands::roll::run(&text.join(" "), seed, json),
        Commands::Listen {
            seed,
            channel,
            no_auto,
        } => commands::listen::run(seed, channel.as_deref(), no_auto),
        Commands::Notation => commands::notation::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
