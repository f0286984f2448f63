use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A calendar month, used as the agenda's grouping key.
///
/// Variants are declared in calendar order, so the derived `Ord` sorts
/// January first and December last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// The month a date falls in.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::ALL[date.month0() as usize]
    }

    /// Look a month up by its calendar number (1 = January).
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Calendar number, 1 through 12.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Upper-case English name, as shown in agenda listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no month.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown month '{0}'")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    /// Accepts a full or three-letter English name (any case) or a number 1-12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number).ok_or_else(|| UnknownMonth(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|month| {
                let name = month.name();
                name.eq_ignore_ascii_case(trimmed)
                    || (trimmed.len() == 3 && name[..3].eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}
