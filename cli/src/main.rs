use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod wav;

use commands::{capacity, decode, encode};

#[derive(Parser)]
#[command(name = "stego")]
#[command(about = "Hide and recover files inside mono 16-bit PCM WAV audio", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a payload file inside a carrier WAV.
    Encode(encode::EncodeArgs),
    /// Recover a payload previously hidden with `encode`.
    Decode(decode::DecodeArgs),
    /// Report how many payload bytes a carrier can hold under an algorithm.
    Capacity(capacity::CapacityArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => encode::handle(args),
        Commands::Decode(args) => decode::handle(args),
        Commands::Capacity(args) => capacity::handle(args),
    }
}
