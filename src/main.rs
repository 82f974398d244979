mod logging;

use std::process;

use agecalc::cli::{AgeArgs, Cli, Command, ZodiacArgs};
use agecalc::render;
use agecalc::zodiac::ZODIAC_SIGNS;
use agecalc::{AgeForm, AppConfig, InputMethod, OutputFormat, classify_zodiac, zodiac_for_month_day};
use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Captured once so validation and arithmetic agree on the day.
    let today = cli.today.unwrap_or_else(agecalc::today);

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    config.validate()?;
    let min_year = config.form.min_year;
    if today.year() < min_year {
        bail!("reference date {today} is before {min_year}-01-01, the earliest accepted birth date");
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    let format = config.output.format;

    let output = match cli.command {
        Command::Age(args) => age(args, config, today)?,
        Command::Zodiac(args) => zodiac(args, format)?,
        Command::Signs => match format {
            OutputFormat::Text => render::signs_table_text(),
            OutputFormat::Json => render::to_json(&ZODIAC_SIGNS[..])?,
        },
    };

    print!("{output}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn age(args: AgeArgs, mut config: AppConfig, today: NaiveDate) -> Result<String> {
    if args.zodiac {
        config.form.show_zodiac = true;
    }
    let format = config.output.format;

    let mut form = AgeForm::new(config.form);
    if args.is_manual() {
        form.select_method(InputMethod::Manual);
        form.set_manual_fields(
            args.day.unwrap_or_default(),
            args.month.unwrap_or_default(),
            args.year.unwrap_or_default(),
        );
    } else {
        form.pick_date(args.date);
    }

    let calc = form.calculate(today)?;
    Ok(match format {
        OutputFormat::Text => render::calculation_text(calc),
        OutputFormat::Json => render::to_json(calc)?,
    })
}

fn zodiac(args: ZodiacArgs, format: OutputFormat) -> Result<String> {
    let sign = match (args.date, args.month, args.day) {
        (Some(date), _, _) => classify_zodiac(date),
        (None, Some(month), Some(day)) => zodiac_for_month_day(month, day)?,
        _ => bail!("either --date or both --month and --day are required"),
    };
    Ok(match format {
        OutputFormat::Text => render::sign_text(sign),
        OutputFormat::Json => render::to_json(sign)?,
    })
}
