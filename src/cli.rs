use clap::{Args, Parser, Subcommand};
use strum::Display;

use crate::countdown::{strand::DEFAULT_BULB_COUNT, CountdownConfig};

#[derive(Parser, Debug)]
#[command(name = "yuletide", version, about = "Holiday console toybox")]
pub struct Cli {
    #[command(subcommand)]
    pub program: Option<Program>,
}

#[derive(Subcommand, Display, Debug)]
pub enum Program {
    /// Christmas-lights countdown animation (the default)
    Countdown(CountdownArgs),
    /// Sing "The 12 Days of Christmas"
    TwelveDays,
    /// Karvonen target-heart-rate table
    HeartRate,
    /// Credit-card payoff calculator
    Payoff,
    /// A Christmas tale, mad-lib style
    Madlib,
    /// Christmas trivia quiz
    Trivia,
    /// Who is in space right now?
    Astros,
}

impl Default for Program {
    fn default() -> Self {
        Self::Countdown(CountdownArgs::default())
    }
}

#[derive(Args, Debug)]
pub struct CountdownArgs {
    /// Light every bulb and hold steady, no flicker
    #[arg(short = 'a', long = "all-on")]
    pub all_on: bool,

    /// Blank lines between the strands and the countdown text
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    pub gap: i64,

    /// Number of light strands
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub strands: u8,

    /// Bulbs per strand
    #[arg(long, default_value_t = DEFAULT_BULB_COUNT)]
    pub bulbs: usize,

    /// Fixed random seed for reproducible flicker
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for CountdownArgs {
    fn default() -> Self {
        Self { all_on: false, gap: 3, strands: 2, bulbs: DEFAULT_BULB_COUNT, seed: None }
    }
}

impl From<CountdownArgs> for CountdownConfig {
    fn from(args: CountdownArgs) -> Self {
        Self {
            all_on: args.all_on,
            // Negative gaps clamp to zero rather than erroring.
            gap: args.gap.max(0).min(u16::MAX as i64) as u16,
            strands: args.strands as usize,
            bulbs: args.bulbs.max(1),
            seed: args.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_to_countdown() {
        let cli = Cli::parse_from(["yuletide"]);
        assert!(cli.program.is_none());
        let config: CountdownConfig = match Program::default() {
            Program::Countdown(args) => args.into(),
            other => panic!("unexpected default {other}"),
        };
        assert!(!config.all_on);
        assert_eq!(config.gap, 3);
        assert_eq!(config.strands, 2);
        assert_eq!(config.bulbs, DEFAULT_BULB_COUNT);
    }

    #[test]
    fn test_countdown_flags() {
        let cli = Cli::parse_from(["yuletide", "countdown", "-a", "-g", "5", "--strands", "1"]);
        let Some(Program::Countdown(args)) = cli.program else {
            panic!("expected countdown");
        };
        assert!(args.all_on);
        assert_eq!(args.gap, 5);
        assert_eq!(args.strands, 1);
    }

    #[test]
    fn test_negative_gap_clamps_to_zero() {
        let cli = Cli::parse_from(["yuletide", "countdown", "--gap", "-2"]);
        let Some(Program::Countdown(args)) = cli.program else {
            panic!("expected countdown");
        };
        let config: CountdownConfig = args.into();
        assert_eq!(config.gap, 0);
    }

    #[test]
    fn test_three_strands_is_rejected() {
        assert!(Cli::try_parse_from(["yuletide", "countdown", "--strands", "3"]).is_err());
    }
}
