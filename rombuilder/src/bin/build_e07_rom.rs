use rom_lib::{OUTPUT_FILE, Summary, build};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

/// Taito E07-11 internal ROM builder
///
/// Writes a stand-in for the undumped 4K-word TMS320C51 internal ROM: a vector table, a fallback
/// reset handler, a bare interrupt handler, and RET stubs everywhere else.
#[derive(Parser)]
#[command(about, version)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let Args {} = Args::parse();

    let rom = build();
    rom.save(OUTPUT_FILE)
        .with_context(|| format!("Failed to write ROM image to {OUTPUT_FILE}"))?;
    info!("Saved internal ROM image to {OUTPUT_FILE}");

    let summary = Summary::of(&rom);
    println!("{summary}");
    for probe in summary.mismatches() {
        warn!("Unexpected word in image: {probe}");
    }

    Ok(())
}
