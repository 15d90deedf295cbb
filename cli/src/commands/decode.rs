use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::wav;

#[derive(Parser)]
pub struct DecodeArgs {
    /// Stego WAV file produced by `encode`.
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Where to write the recovered payload.
    #[arg(short, long)]
    pub out: PathBuf,
}

pub fn handle(args: DecodeArgs) -> Result<()> {
    let carrier = wav::read_mono(&args.carrier)?;

    println!("Decoding {:?}", args.carrier);
    let payload = stego::decode(&carrier.samples)?;

    fs::write(&args.out, &payload)
        .with_context(|| format!("writing payload to {}", args.out.display()))?;

    println!("Recovered {} bytes -> {:?}", payload.len(), args.out);
    Ok(())
}
