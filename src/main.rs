pub mod bigtext;
pub mod cli;
pub mod countdown;
pub mod programs;
pub mod prompt;
pub mod style;
pub mod term;
pub mod utils;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
    cli::{Cli, Program},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let cli = Cli::parse();
    let program = cli.program.unwrap_or_default();
    log::info!("starting {program}");

    match program {
        Program::Countdown(args) => countdown::run(args.into()).await,
        Program::TwelveDays => programs::twelve_days::run(),
        Program::HeartRate => programs::heart_rate::run(),
        Program::Payoff => programs::payoff::run(),
        Program::Madlib => programs::madlib::run(),
        Program::Trivia => programs::trivia::run(),
        Program::Astros => programs::astros::run().await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
