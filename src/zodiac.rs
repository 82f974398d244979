//! Western zodiac signs and the (month, day) ranges they cover.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        f.write_str(name)
    }
}

/// Inclusive (month, day) interval. A range whose end precedes its start
/// wraps across the new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacRange {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl ZodiacRange {
    const fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    pub fn start(&self) -> (u32, u32) {
        (self.start_month, self.start_day)
    }

    pub fn end(&self) -> (u32, u32) {
        (self.end_month, self.end_day)
    }

    pub fn wraps_year(&self) -> bool {
        self.end() < self.start()
    }

    pub fn contains(&self, month: u32, day: u32) -> bool {
        let key = (month, day);
        if self.wraps_year() {
            key >= self.start() || key <= self.end()
        } else {
            key >= self.start() && key <= self.end()
        }
    }
}

impl fmt::Display for ZodiacRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            month_abbrev(self.start_month),
            self.start_day,
            month_abbrev(self.end_month),
            self.end_day
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub range: ZodiacRange,
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.name)
    }
}

const CAPRICORN: usize = 9;

/// The twelve signs, Aries first.
pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    sign("Aries", "♈", Element::Fire, ZodiacRange::new(3, 21, 4, 19)),
    sign("Taurus", "♉", Element::Earth, ZodiacRange::new(4, 20, 5, 20)),
    sign("Gemini", "♊", Element::Air, ZodiacRange::new(5, 21, 6, 20)),
    sign("Cancer", "♋", Element::Water, ZodiacRange::new(6, 21, 7, 22)),
    sign("Leo", "♌", Element::Fire, ZodiacRange::new(7, 23, 8, 22)),
    sign("Virgo", "♍", Element::Earth, ZodiacRange::new(8, 23, 9, 22)),
    sign("Libra", "♎", Element::Air, ZodiacRange::new(9, 23, 10, 22)),
    sign("Scorpio", "♏", Element::Water, ZodiacRange::new(10, 23, 11, 21)),
    sign("Sagittarius", "♐", Element::Fire, ZodiacRange::new(11, 22, 12, 21)),
    sign("Capricorn", "♑", Element::Earth, ZodiacRange::new(12, 22, 1, 19)),
    sign("Aquarius", "♒", Element::Air, ZodiacRange::new(1, 20, 2, 18)),
    sign("Pisces", "♓", Element::Water, ZodiacRange::new(2, 19, 3, 20)),
];

const fn sign(
    name: &'static str,
    symbol: &'static str,
    element: Element,
    range: ZodiacRange,
) -> ZodiacSign {
    ZodiacSign {
        name,
        symbol,
        element,
        range,
    }
}

/// Returns the sign whose range contains `date`'s month and day.
pub fn classify_zodiac(date: NaiveDate) -> &'static ZodiacSign {
    classify(date.month(), date.day())
}

/// Like [`classify_zodiac`] for a bare (month, day) pair. Feb 29 is accepted.
pub fn zodiac_for_month_day(month: u32, day: u32) -> Result<&'static ZodiacSign, InputError> {
    // 2000 is a leap year, so every real (month, day) pair resolves.
    NaiveDate::from_ymd_opt(2000, month, day)
        .map(classify_zodiac)
        .ok_or_else(|| InputError::invalid(format!("{month}/{day} is not a day of the year")))
}

fn classify(month: u32, day: u32) -> &'static ZodiacSign {
    let key = (month, day);
    // Latest start on or before the key; Jan 1-19 precede every start and
    // belong to the one range that crosses the new year.
    ZODIAC_SIGNS
        .iter()
        .filter(|s| s.range.start() <= key)
        .max_by_key(|s| s.range.start())
        .unwrap_or(&ZODIAC_SIGNS[CAPRICORN])
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}
