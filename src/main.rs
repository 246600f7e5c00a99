//! pagesim - command-line front end for the page replacement simulator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;
use pagesim::{
    compare, load_reference_file, parse_reference_string, simulate, PageRef, Policy,
    DEFAULT_FRAME_COUNT,
};

/// pagesim - Simulate FIFO, LRU and Optimal page replacement
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one policy and print the step-by-step frame trace
    Simulate {
        /// Replacement policy: FIFO, LRU or Optimal
        #[arg(short, long)]
        policy: String,

        #[command(flatten)]
        input: Input,
    },

    /// Run every policy and print fault counts side by side
    Compare {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Number of frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT, allow_negative_numbers = true)]
    frames: i64,

    /// Read the reference string from a file
    #[arg(long, conflicts_with = "pages")]
    file: Option<PathBuf>,

    /// Page references, separated by spaces or commas
    pages: Vec<String>,
}

impl Input {
    fn reference_string(&self) -> Result<Vec<PageRef>> {
        match &self.file {
            Some(path) => load_reference_file(path),
            None => Ok(parse_reference_string(&self.pages.join(" "))?),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Command::Simulate { policy, input } => {
            let policy: Policy = policy.parse()?;
            let pages = input.reference_string()?;
            info!(
                "Simulate request: {} over {} references with {} frames",
                policy,
                pages.len(),
                input.frames
            );

            let result = simulate(policy, &pages, input.frames)?;

            println!("{:>4}  {:>6}  {:<5}  frames", "step", "page", "");
            for step in result.steps() {
                println!("{}", step);
            }
            println!();
            println!("{} with {} frames: {}", result.policy(), result.capacity(), result.stats());

            info!("Simulation complete. Faults: {}", result.fault_count());
        }
        Command::Compare { input } => {
            let pages = input.reference_string()?;
            info!(
                "Compare request: {} references with {} frames",
                pages.len(),
                input.frames
            );

            let result = compare(&pages, input.frames)?;
            println!("{}", result);

            info!("Comparison complete: {:?}", result);
        }
    }

    Ok(())
}
