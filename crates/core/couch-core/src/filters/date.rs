//! `formatDate`: date parsing and moment-style pattern formatting.
//!
//! Patterns use the moment.js token vocabulary the templates were written
//! against (`MM/DD/YYYY hh:mm`, `Do MMMM`, `[at] HH:mm`...). Inputs that do
//! not parse produce no output.

use super::{coerce_value, is_empty, Filter};
use crate::config::DEFAULT_DATE_FORMAT;
use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike,
};
use serde_json::Value;
use std::fmt::Write;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// Longest tokens first so `MMMM` wins over `MM`.
const TOKENS: &[&str] = &[
    "YYYY", "YY", "MMMM", "MMM", "MM", "M", "Do", "DD", "D", "dddd", "ddd", "dd", "d", "HH",
    "H", "hh", "h", "mm", "m", "ss", "s", "SSS", "SS", "S", "A", "a", "ZZ", "Z", "X", "x",
];

/// Formats `value` with `format`, or `MM/DD/YYYY hh:mm` when no pattern is
/// given. Empty or unparseable values yield `None`.
pub fn format_date(value: Option<&str>, format: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !is_empty(v))?;
    let Some(date) = parse_date(value) else {
        log::debug!("formatDate: cannot parse {:?} as a date", value);
        return None;
    };
    Some(format_moment(&date, format.unwrap_or(DEFAULT_DATE_FORMAT)))
}

/// Parses ISO 8601 / RFC 3339 date-times, plain dates and RFC 2822 strings.
///
/// Values carrying an offset are converted to local time; values without one
/// are read as local wall-clock time.
pub fn parse_date(input: &str) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(to_local(date));
    }
    for format in OFFSET_FORMATS {
        if let Ok(date) = DateTime::parse_from_str(input, format) {
            return Some(to_local(date));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(from_local_naive(naive));
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(from_local_naive);
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(input) {
        return Some(to_local(date));
    }
    None
}

fn to_local(date: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    date.with_timezone(&Local).fixed_offset()
}

fn from_local_naive(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.fixed_offset(),
        // Wall time skipped by a DST transition
        None => naive.and_utc().fixed_offset(),
    }
}

/// Renders `date` with a moment.js style pattern. Text inside `[...]` is
/// copied verbatim; characters that are not tokens pass through.
pub fn format_moment(date: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                out.push_str(&rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
        }
        match TOKENS.iter().find(|token| rest.starts_with(**token)) {
            Some(token) => {
                write_token(&mut out, date, token);
                rest = &rest[token.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

fn write_token(out: &mut String, date: &DateTime<FixedOffset>, token: &str) {
    let hour12 = match date.hour() % 12 {
        0 => 12,
        h => h,
    };
    let weekday = date.weekday().num_days_from_sunday() as usize;
    let month = date.month0() as usize;
    let millis = date.timestamp_subsec_millis();

    // Writing into a String cannot fail
    let _ = match token {
        "YYYY" => write!(out, "{:04}", date.year()),
        "YY" => write!(out, "{:02}", date.year().rem_euclid(100)),
        "MMMM" => write!(out, "{}", MONTHS[month]),
        "MMM" => write!(out, "{}", &MONTHS[month][..3]),
        "MM" => write!(out, "{:02}", date.month()),
        "M" => write!(out, "{}", date.month()),
        "Do" => write!(out, "{}{}", date.day(), ordinal_suffix(date.day())),
        "DD" => write!(out, "{:02}", date.day()),
        "D" => write!(out, "{}", date.day()),
        "dddd" => write!(out, "{}", WEEKDAYS[weekday]),
        "ddd" => write!(out, "{}", &WEEKDAYS[weekday][..3]),
        "dd" => write!(out, "{}", &WEEKDAYS[weekday][..2]),
        "d" => write!(out, "{}", weekday),
        "HH" => write!(out, "{:02}", date.hour()),
        "H" => write!(out, "{}", date.hour()),
        "hh" => write!(out, "{:02}", hour12),
        "h" => write!(out, "{}", hour12),
        "mm" => write!(out, "{:02}", date.minute()),
        "m" => write!(out, "{}", date.minute()),
        "ss" => write!(out, "{:02}", date.second()),
        "s" => write!(out, "{}", date.second()),
        "SSS" => write!(out, "{:03}", millis),
        "SS" => write!(out, "{:02}", millis / 10),
        "S" => write!(out, "{}", millis / 100),
        "A" => out.write_str(if date.hour() < 12 { "AM" } else { "PM" }),
        "a" => out.write_str(if date.hour() < 12 { "am" } else { "pm" }),
        "ZZ" => write!(out, "{}", date.format("%z")),
        "Z" => write!(out, "{}", date.format("%:z")),
        "X" => write!(out, "{}", date.timestamp()),
        "x" => write!(out, "{}", date.timestamp_millis()),
        other => out.write_str(other),
    };
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[derive(Debug)]
pub struct FormatDateFilter {
    pub default_format: String,
}

impl Filter for FormatDateFilter {
    fn name(&self) -> &str {
        "formatDate"
    }

    fn description(&self) -> &str {
        "Format a date/time with a moment-style pattern (default from settings)"
    }

    fn apply(&self, value: Option<&str>, args: &[Value]) -> Option<String> {
        // A falsy pattern argument falls back to the default one
        let format = args.first().and_then(coerce_value);
        format_date(
            value,
            Some(format.as_deref().unwrap_or(&self.default_format)),
        )
    }
}
