use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use stego::Algorithm;

use super::encode::AlgorithmArg;
use crate::wav;

#[derive(Parser)]
pub struct CapacityArgs {
    /// Carrier WAV file to measure.
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Embedding scheme to measure capacity for.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Lsb)]
    pub algorithm: AlgorithmArg,

    /// Echo: samples per embedded bit.
    #[arg(long, default_value_t = 2048)]
    pub chunk_size: u16,
}

pub fn handle(args: CapacityArgs) -> Result<()> {
    let carrier = wav::read_mono(&args.carrier)?;

    let algorithm = match args.algorithm {
        AlgorithmArg::Lsb => Algorithm::Lsb,
        AlgorithmArg::Echo => Algorithm::Echo {
            chunk_size: args.chunk_size,
            delay_0: 50,
            delay_1: 200,
            alpha: 0.5,
        },
        AlgorithmArg::Phase => Algorithm::Phase,
        AlgorithmArg::Dsss => Algorithm::Dsss,
    };

    let bytes = stego::capacity::bytes_available(carrier.samples.len(), algorithm);
    println!(
        "{} samples under {} -> {} payload bytes",
        carrier.samples.len(),
        algorithm.name(),
        bytes
    );
    Ok(())
}
