use super::error::AppError;
use chrono::{Days, Local, NaiveDate};

/// Calendar date format used for the `now` override and cache keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a one-day navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// The real current calendar date in the user's time zone.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses an override date such as `2024-03-10`.
pub fn parse_override(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| AppError::MalformedDate(format!("{value:?}: {e}")))
}

/// Derives the first reference date of a session.
///
/// A missing, malformed or future override falls back to `today`.
pub fn initial_reference_date(query_override: Option<&str>, today: NaiveDate) -> NaiveDate {
    query_override
        .and_then(|value| parse_override(value).ok())
        .filter(|date| *date <= today)
        .unwrap_or(today)
}

/// Three-day window centred on a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    reference: NaiveDate,
}

impl DateWindow {
    /// Creates a window, clamping `reference` to `today`.
    pub fn new(reference: NaiveDate, today: NaiveDate) -> Self {
        Self {
            reference: reference.min(today),
        }
    }

    pub fn from_override(query_override: Option<&str>, today: NaiveDate) -> Self {
        Self {
            reference: initial_reference_date(query_override, today),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }

    pub fn yesterday(&self) -> Option<NaiveDate> {
        self.reference.checked_sub_days(Days::new(1))
    }

    pub fn tomorrow(&self) -> Option<NaiveDate> {
        self.reference.checked_add_days(Days::new(1))
    }

    /// Moves the window one day. Returns `None` when the step is rejected:
    /// forward past `today`, or off the end of the calendar.
    pub fn step(&self, direction: Direction, today: NaiveDate) -> Option<Self> {
        let next = match direction {
            Direction::Back => self.yesterday()?,
            Direction::Forward => self.tomorrow().filter(|date| *date <= today)?,
        };
        Some(Self { reference: next })
    }

    pub fn can_step_forward(&self, today: NaiveDate) -> bool {
        self.step(Direction::Forward, today).is_some()
    }

    /// ISO 8601 calendar string of the reference date.
    pub fn date_param(&self) -> String {
        self.reference.format(DATE_FORMAT).to_string()
    }
}
