//! Command-line shell: reads instructions, prints REPORT lines.
//!
//! Run with: cargo run -- directions.txt

use anyhow::{Context, Result};
use clap::Parser;
use gridwalk::checkpoint::Checkpoint;
use gridwalk::{Agent, Config};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridwalk", version, about = "Drive an agent around a bounded grid")]
struct Cli {
    /// Instruction file, one instruction per line ("-" for stdin)
    #[arg(default_value = "directions.txt")]
    input: PathBuf,

    /// JSON configuration file with grid bounds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resume from a JSON checkpoint before reading instructions
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Write a JSON checkpoint after the last instruction
    #[arg(long)]
    checkpoint: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut agent = match &cli.resume {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading checkpoint {}", path.display()))?;
            Agent::resume(Checkpoint::from_json(&json)?)?
        }
        None => {
            let config = match &cli.config {
                Some(path) => Config::load(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => Config::default(),
            };
            Agent::from_config(&config)
        }
    };
    if cli.resume.is_some() && cli.config.is_some() {
        warn!("--config is ignored when resuming; bounds come from the checkpoint");
    }

    let reader: Box<dyn BufRead> = if cli.input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = std::fs::File::open(&cli.input)
            .with_context(|| format!("opening {}", cli.input.display()))?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let count = run_instructions(&mut agent, reader, &mut stdout.lock())
        .context("reading instructions")?;
    info!(
        instructions = count,
        transitions = agent.history().map_or(0, |h| h.len()),
        "Finished"
    );

    if let Some(path) = &cli.checkpoint {
        std::fs::write(path, agent.checkpoint().to_json()?)
            .with_context(|| format!("writing checkpoint {}", path.display()))?;
        info!(path = %path.display(), "Checkpoint written");
    }

    Ok(())
}

/// Feed every line of `reader` to the agent, writing REPORT output to `out`.
///
/// Lines that are not valid UTF-8 are decoded lossily and then ignored by the
/// parser like any other malformed instruction. Only I/O failures stop the run.
fn run_instructions<R: BufRead, W: Write>(
    agent: &mut Agent,
    reader: R,
    out: &mut W,
) -> io::Result<usize> {
    let mut count = 0usize;
    for bytes in reader.split(b'\n') {
        let bytes = bytes?;
        count += 1;
        if let Some(pose) = agent.instruct(&String::from_utf8_lossy(&bytes)) {
            writeln!(out, "{pose}")?;
        }
    }
    Ok(count)
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "gridwalk=warn",
        1 => "gridwalk=debug",
        _ => "gridwalk=trace",
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
