use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::age::AgeResult;
use crate::form::{Calculation, InputMethod};
use crate::zodiac::{ZODIAC_SIGNS, ZodiacSign};

const MIN_ROW_CHARS: usize = 40;

// Utilities for building the text card

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count());
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(&'static str),
    Blank,
    Stat { key: &'static str, value: String },
}

fn render_lines(lines: &[Line]) -> String {
    let align_width = lines
        .iter()
        .map(|line| match line {
            Line::Stat { key, value } => key.len() + 2 + value.chars().count(),
            _ => 0,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_ROW_CHARS);

    let mut out = String::new();
    for line in lines {
        match line {
            Line::Header(label) => out.push_str(&build_header_line(label, align_width)),
            Line::Blank => {}
            Line::Stat { key, value } => out.push_str(&build_stat_row(key, value, align_width)),
        }
        out.push('\n');
    }
    out
}

/// "Friday, June 15th, 1990"
pub fn born_on(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.format("%A"),
        date.format("%B"),
        ordinal(date.day()),
        date.year()
    )
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn unit(n: u32, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

fn describe_sign(sign: &ZodiacSign) -> String {
    format!("{sign} ({}, {})", sign.element, sign.range)
}

/// Text card for a finished calculation.
pub fn calculation_text(calc: &Calculation) -> String {
    let AgeResult {
        years,
        months,
        days,
    } = calc.age;

    let mut lines = vec![
        Line::Header("Your Age"),
        Line::Stat {
            key: "Years",
            value: unit(years, "year"),
        },
        Line::Stat {
            key: "Months",
            value: unit(months, "month"),
        },
        Line::Stat {
            key: "Days",
            value: unit(days, "day"),
        },
        Line::Blank,
    ];
    // Typed dates are echoed back by the fields themselves.
    if calc.input_method == InputMethod::Calendar {
        lines.push(Line::Stat {
            key: "Born on",
            value: born_on(calc.birth_date),
        });
    }
    lines.push(Line::Stat {
        key: "As of",
        value: calc.today.to_string(),
    });
    if let Some(sign) = calc.zodiac {
        lines.push(Line::Stat {
            key: "Zodiac",
            value: describe_sign(sign),
        });
    }
    render_lines(&lines)
}

pub fn sign_text(sign: &ZodiacSign) -> String {
    render_lines(&[
        Line::Header("Zodiac"),
        Line::Stat {
            key: "Sign",
            value: sign.to_string(),
        },
        Line::Stat {
            key: "Element",
            value: sign.element.to_string(),
        },
        Line::Stat {
            key: "Dates",
            value: sign.range.to_string(),
        },
    ])
}

pub fn signs_table_text() -> String {
    let mut out = String::new();
    for sign in &ZODIAC_SIGNS {
        out.push_str(&format!(
            "{} {:<12} {:<6} {}\n",
            sign.symbol,
            sign.name,
            sign.element.to_string(),
            sign.range
        ));
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
