use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::ValidationError;
use crate::taxonomy::{Month, Style};

const SEPARATOR: &str = "----------------------------------------";

/// A music festival: where and when it happens, and what it plays.
///
/// The name is stored capitalized per word and the venue upper-cased, so
/// sorting and venue matching work on the normalized forms. Everything but
/// the style set is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Festival {
    name: String,
    venue: String,
    start: NaiveDate,
    /// First day after the festival (`start + duration`).
    end: NaiveDate,
    duration: u32,
    styles: BTreeSet<Style>,
}

/// Where a festival stands relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Upcoming { days_remaining: i64 },
    Ongoing,
    Concluded,
}

impl Festival {
    pub fn new(
        name: &str,
        venue: &str,
        start: NaiveDate,
        duration: u32,
        styles: impl IntoIterator<Item = Style>,
    ) -> Result<Self, ValidationError> {
        let name = capitalize_words(name);
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let venue = venue.trim().to_uppercase();
        if venue.is_empty() {
            return Err(ValidationError::EmptyVenue);
        }
        if duration == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        let styles: BTreeSet<Style> = styles.into_iter().collect();
        if styles.is_empty() {
            return Err(ValidationError::NoStyles);
        }
        let end = start
            .checked_add_days(Days::new(u64::from(duration)))
            .ok_or(ValidationError::DateOverflow)?;

        Ok(Self {
            name,
            venue,
            start,
            end,
            duration,
            styles,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub const fn styles(&self) -> &BTreeSet<Style> {
        &self.styles
    }

    /// Tag the festival with one more style. Returns `false` if it already had it.
    pub fn add_style(&mut self, style: Style) -> bool {
        self.styles.insert(style)
    }

    /// The month the festival starts in.
    #[must_use]
    pub fn month(&self) -> Month {
        Month::from_date(self.start)
    }

    #[must_use]
    pub fn starts_before(&self, other: &Self) -> bool {
        self.start < other.start
    }

    #[must_use]
    pub fn starts_after(&self, other: &Self) -> bool {
        self.start > other.start
    }

    #[must_use]
    pub fn has_concluded(&self, as_of: NaiveDate) -> bool {
        self.end < as_of
    }

    #[must_use]
    pub fn is_ongoing(&self, as_of: NaiveDate) -> bool {
        self.start <= as_of && as_of < self.end
    }

    /// Status as shown in listings.
    ///
    /// This differs from the predicates on the end date itself
    /// (`as_of == end_date()`): [`has_concluded`](Self::has_concluded) and
    /// [`is_ongoing`](Self::is_ongoing) are both false there, while `status`
    /// reports [`Status::Concluded`]. Listings never show a festival as
    /// upcoming once it has started.
    #[must_use]
    pub fn status(&self, as_of: NaiveDate) -> Status {
        if as_of < self.start {
            Status::Upcoming {
                days_remaining: (self.start - as_of).num_days(),
            }
        } else if as_of < self.end {
            Status::Ongoing
        } else {
            Status::Concluded
        }
    }

    /// Render the festival as of `today`.
    #[must_use]
    pub const fn display(&self, today: NaiveDate) -> FestivalDisplay<'_> {
        FestivalDisplay {
            festival: self,
            today,
        }
    }
}

/// Helper returned by [`Festival::display`].
#[derive(Debug, Clone, Copy)]
pub struct FestivalDisplay<'a> {
    festival: &'a Festival,
    today: NaiveDate,
}

impl fmt::Display for FestivalDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let festival = self.festival;
        let styles: Vec<&str> = festival.styles.iter().map(|s| s.name()).collect();
        writeln!(f, "{}\t\t [{}]", festival.name, styles.join(", "))?;
        writeln!(f, "{}", festival.venue)?;

        if festival.duration == 1 {
            write!(f, "{}", festival.start.format("%d %b. %Y"))?;
        } else {
            write!(
                f,
                "{} - {}",
                festival.start.format("%d %b."),
                festival.end.format("%d %b. %Y")
            )?;
        }

        match festival.status(self.today) {
            Status::Concluded => write!(f, " (concluded)")?,
            Status::Ongoing => write!(f, " (ON)")?,
            Status::Upcoming { days_remaining } => {
                write!(f, " ({days_remaining} days remaining)")?;
            }
        }

        write!(f, "\n{SEPARATOR}")
    }
}

/// Trim, collapse inner whitespace and capitalize each word.
fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
