use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use stego::{Algorithm, EncodeConfig};

use crate::wav;

#[derive(Clone, Copy, ValueEnum)]
pub enum AlgorithmArg {
    Lsb,
    Echo,
    Phase,
    Dsss,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Carrier WAV file.
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// File whose bytes will be hidden in the carrier.
    #[arg(short, long)]
    pub payload: PathBuf,

    /// Output stego WAV file.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Embedding scheme.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Lsb)]
    pub algorithm: AlgorithmArg,

    /// Echo: samples per embedded bit.
    #[arg(long, default_value_t = 2048)]
    pub chunk_size: u16,

    /// Echo: delay, in samples, for bit 0.
    #[arg(long, default_value_t = 50)]
    pub delay0: u16,

    /// Echo: delay, in samples, for bit 1.
    #[arg(long, default_value_t = 200)]
    pub delay1: u16,

    /// Echo: gain, in [0.1, 1.0].
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f32,
}

pub fn handle(args: EncodeArgs) -> Result<()> {
    let carrier = wav::read_mono(&args.carrier)?;
    let payload = fs::read(&args.payload)
        .with_context(|| format!("reading payload {}", args.payload.display()))?;

    let algorithm = match args.algorithm {
        AlgorithmArg::Lsb => Algorithm::Lsb,
        AlgorithmArg::Echo => Algorithm::Echo {
            chunk_size: args.chunk_size,
            delay_0: args.delay0,
            delay_1: args.delay1,
            alpha: args.alpha,
        },
        AlgorithmArg::Phase => Algorithm::Phase,
        AlgorithmArg::Dsss => Algorithm::Dsss,
    };

    println!(
        "Encoding {} bytes from {:?} into {:?} using {}",
        payload.len(),
        args.payload,
        args.carrier,
        algorithm.name()
    );

    let stego = stego::encode(&carrier.samples, &payload, EncodeConfig { algorithm })?;
    wav::write_mono(&args.out, &stego, carrier.sample_rate)?;

    println!("Wrote stego audio to {:?}", args.out);
    Ok(())
}
