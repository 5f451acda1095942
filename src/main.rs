use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aeondasm::buffer::FileBuffer;
use aeondasm::dasm::{Decoder, listing_line};
use aeondasm::isa;

/// Disassembles raw Aeon R2 firmware images.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Firmware images to disassemble, in order.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = isa::aeon_r2();

    for path in &cli.files {
        println!("*** {} ***", path.display());

        let buffer = FileBuffer::open(path)
            .with_context(|| format!("could not open '{}'", path.display()))?;
        let mut decoder = Decoder::new(table, buffer)
            .with_context(|| format!("could not size '{}'", path.display()))?;
        while let Some((offset, insn)) = decoder
            .try_next()
            .with_context(|| format!("could not decode '{}'", path.display()))?
        {
            println!("{}", listing_line(offset, &insn));
        }

        println!("\n");
    }

    Ok(())
}
