//! Core domain model for the festival agenda.
//!
//! This crate defines the festival record, the month and style
//! vocabularies, the month-keyed [`Agenda`] index, the line-oriented
//! record parser and the loader that feeds records into an agenda.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod agenda;
pub mod clock;
pub mod error;
pub mod io;
pub mod model;
pub mod parse;
pub mod taxonomy;

pub use agenda::Agenda;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, ParseError, Result, ValidationError};
pub use io::{LoadPolicy, LoadReport};
pub use model::{Festival, Status};
pub use parse::parse_line;
pub use taxonomy::{Month, Style};
