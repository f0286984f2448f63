//! Parser for one-line festival records.
//!
//! A record is a `:`-separated line:
//!
//! ```text
//! name : venue : dd-mm-yyyy : duration : style1 : style2 : ...
//! ```
//!
//! Whitespace around every field is ignored. At least one style is
//! required, and every style token must name a known [`Style`].

use chrono::NaiveDate;
use std::str::FromStr;

use crate::error::ParseError;
use crate::model::Festival;
use crate::taxonomy::Style;

const FIELD_SEPARATOR: char = ':';
const MIN_FIELDS: usize = 5;

/// Parse a record line into a [`Festival`].
pub fn parse_line(line: &str) -> Result<Festival, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    }

    let start = parse_date(fields[2])?;
    let duration = parse_duration(fields[3])?;
    let styles = fields[4..]
        .iter()
        .map(|token| {
            token
                .parse::<Style>()
                .map_err(|_| ParseError::Style((*token).to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Festival::new(fields[0], fields[1], start, duration, styles)?)
}

/// Plain decimal digits only; no sign.
fn parse_duration(field: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::Duration(field.to_string());
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

/// Strict `dd-mm-yyyy`: two-digit day and month, four-digit year.
pub fn parse_date(field: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::Date(field.to_string());

    let bytes = field.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            2 | 5 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(field, "%d-%m-%Y").map_err(|_| invalid())
}

impl FromStr for Festival {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}
