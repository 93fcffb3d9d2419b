use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::{date, format_description};
use time::{Date, Month, OffsetDateTime, Time};

use crate::error::{validation, AppError};

/// Meal slots of the diary. The Dutch labels from earlier form revisions are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    #[serde(alias = "Ontbijt")]
    Breakfast,
    #[serde(alias = "Middagmaal")]
    Lunch,
    #[serde(alias = "Avondmaal")]
    Dinner,
    #[serde(alias = "Tussendoortje")]
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountUnit {
    Gr,
    Ml,
    Tas,
    Snede,
    El,
    Kl,
    Stuk,
}

impl AmountUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            AmountUnit::Gr => "gr",
            AmountUnit::Ml => "ml",
            AmountUnit::Tas => "tas",
            AmountUnit::Snede => "snede",
            AmountUnit::El => "el",
            AmountUnit::Kl => "kl",
            AmountUnit::Stuk => "stuk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodDayType {
    Match,
    Training,
    Rest,
}

impl FoodDayType {
    pub fn as_str(self) -> &'static str {
        match self {
            FoodDayType::Match => "Match",
            FoodDayType::Training => "Training",
            FoodDayType::Rest => "Rest",
        }
    }
}

/// Weight registrations know no rest days. `Wedstrijd` is the Dutch alias for
/// a match day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightDayType {
    #[serde(alias = "Wedstrijd")]
    Match,
    Training,
}

impl WeightDayType {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightDayType::Match => "Match",
            WeightDayType::Training => "Training",
        }
    }
}

/// One line of a meal: what was eaten, when, and how much. Lives in the
/// session's pending list until the meal is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub time: String,
    pub food_product: String,
    pub amount_value: f64,
    pub amount_unit: AmountUnit,
}

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]");
const TIME_FORMAT_LOOSE: &[FormatItem<'static>] =
    format_description!("[hour padding:none]:[minute]");

/// Entries are accepted for any date from 1900-01-01 up to today.
const EARLIEST_ENTRY_DATE: Date = date!(1900 - 01 - 01);

pub fn parse_entry_date(input: &str) -> Result<Date, AppError> {
    Date::parse(input.trim(), DATE_FORMAT)
        .map_err(|_| validation(format!("invalid date {input:?}, expected YYYY-MM-DD")))
}

pub fn check_entry_date(date: Date) -> Result<(), AppError> {
    let today = OffsetDateTime::now_utc().date();
    if date < EARLIEST_ENTRY_DATE || date > today {
        return Err(validation(format!(
            "date must fall between {EARLIEST_ENTRY_DATE} and today"
        )));
    }
    Ok(())
}

/// Encodes a calendar date as the YYYYMMDD integer stored in entries.
pub fn encode_date(date: Date) -> i32 {
    date.year() * 10_000 + date.month() as i32 * 100 + i32::from(date.day())
}

pub fn decode_date(encoded: i32) -> Option<Date> {
    let year = encoded / 10_000;
    let month = Month::try_from((encoded / 100 % 100) as u8).ok()?;
    let day = (encoded % 100) as u8;
    Date::from_calendar_date(year, month, day).ok()
}

/// Parses a clock time and re-formats it zero-padded, so "8:05" becomes
/// "08:05" in stored entries.
pub fn normalize_clock_time(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    let parsed = Time::parse(trimmed, TIME_FORMAT)
        .or_else(|_| Time::parse(trimmed, TIME_FORMAT_LOOSE))
        .map_err(|_| validation(format!("invalid time {input:?}, expected HH:MM")))?;
    Ok(format!("{:02}:{:02}", parsed.hour(), parsed.minute()))
}
