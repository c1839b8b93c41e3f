//! Command-line interface parsing and validation
//!
//! This module handles CLI argument parsing using clap and validates
//! user inputs for correctness.

use crate::constants::{MAX_CLI_HOURS, MAX_CLI_MIN_SEC};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tickdown")]
#[command(version = "0.1.0")]
#[command(about = "A fullscreen countdown clock for your terminal", long_about = None)]
pub struct Cli {
    /// Prefill the hours input field (0-999)
    #[arg(short = 'H', long, value_name = "N")]
    pub hours: Option<u64>,

    /// Prefill the minutes input field (0-59)
    #[arg(short = 'M', long, value_name = "N")]
    pub minutes: Option<u64>,

    /// Prefill the seconds input field (0-59)
    #[arg(short = 'S', long, value_name = "N")]
    pub seconds: Option<u64>,

    /// Start windowed instead of fullscreen
    #[arg(short = 'w', long)]
    pub windowed: bool,

    /// Start in landscape orientation
    #[arg(long)]
    pub landscape: bool,

    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<String>,
}

impl Cli {
    /// Validate CLI arguments
    /// Returns error if a duration flag is out of bounds
    pub fn validate(&self) -> Result<(), String> {
        if let Some(hours) = self.hours {
            if hours > MAX_CLI_HOURS {
                return Err(format!("Hours too large (maximum {})", MAX_CLI_HOURS));
            }
        }
        if let Some(minutes) = self.minutes {
            if minutes > MAX_CLI_MIN_SEC {
                return Err(format!("Minutes too large (maximum {})", MAX_CLI_MIN_SEC));
            }
        }
        if let Some(seconds) = self.seconds {
            if seconds > MAX_CLI_MIN_SEC {
                return Err(format!("Seconds too large (maximum {})", MAX_CLI_MIN_SEC));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_in_range_flags() {
        let cli = Cli {
            hours: Some(999),
            minutes: Some(59),
            seconds: Some(0),
            windowed: false,
            landscape: false,
            log_file: None,
        };
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_minutes() {
        let cli = Cli {
            hours: None,
            minutes: Some(60),
            seconds: None,
            windowed: false,
            landscape: false,
            log_file: None,
        };
        assert!(cli.validate().is_err());
    }
}
