use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// Age and zodiac calculator.
#[derive(Debug, Parser)]
#[command(name = "agecalc", version, about = "Exact age in years, months and days")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) instead of today's local date.
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Output format; overrides the config file.
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate an age from a birth date.
    Age(AgeArgs),
    /// Show the zodiac sign for a date.
    Zodiac(ZodiacArgs),
    /// List all zodiac signs.
    Signs,
}

/// Arguments for the `age` subcommand.
#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Birth date as YYYY-MM-DD.
    #[arg(long, conflicts_with_all = ["day", "month", "year"])]
    pub date: Option<NaiveDate>,

    /// Birth day of month (manual entry).
    #[arg(long)]
    pub day: Option<String>,

    /// Birth month, 1-12 (manual entry).
    #[arg(long)]
    pub month: Option<String>,

    /// Birth year (manual entry).
    #[arg(long)]
    pub year: Option<String>,

    /// Also show the zodiac sign; overrides the config file.
    #[arg(long)]
    pub zodiac: bool,
}

impl AgeArgs {
    pub fn is_manual(&self) -> bool {
        self.day.is_some() || self.month.is_some() || self.year.is_some()
    }
}

/// Arguments for the `zodiac` subcommand.
#[derive(Debug, Args)]
pub struct ZodiacArgs {
    /// Date as YYYY-MM-DD.
    #[arg(long, conflicts_with_all = ["month", "day"], required_unless_present_all = ["month", "day"])]
    pub date: Option<NaiveDate>,

    /// Month, 1-12.
    #[arg(long, requires = "day")]
    pub month: Option<u32>,

    /// Day of month.
    #[arg(long, requires = "month")]
    pub day: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_manual_age() {
        let cli = Cli::try_parse_from([
            "agecalc", "age", "--day", "15", "--month", "6", "--year", "1990", "--zodiac",
        ])
        .unwrap();
        let Command::Age(args) = cli.command else {
            panic!("expected age subcommand");
        };
        assert!(args.is_manual());
        assert!(args.zodiac);
        assert_eq!(args.day.as_deref(), Some("15"));
    }

    #[test]
    fn date_conflicts_with_manual_fields() {
        assert!(
            Cli::try_parse_from(["agecalc", "age", "--date", "1990-06-15", "--day", "1"]).is_err()
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "agecalc", "age", "--date", "1990-06-15", "--today", "2024-06-10", "-f", "json", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn zodiac_needs_date_or_month_day() {
        assert!(Cli::try_parse_from(["agecalc", "zodiac"]).is_err());
        assert!(Cli::try_parse_from(["agecalc", "zodiac", "--month", "3"]).is_err());
        assert!(Cli::try_parse_from(["agecalc", "zodiac", "--month", "3", "--day", "21"]).is_ok());
    }
}
