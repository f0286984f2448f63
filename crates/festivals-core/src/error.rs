use thiserror::Error;

/// Reasons a [`Festival`](crate::model::Festival) cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("festival name is empty")]
    EmptyName,

    #[error("festival venue is empty")]
    EmptyVenue,

    #[error("duration must be at least one day")]
    ZeroDuration,

    #[error("a festival needs at least one style")]
    NoStyles,

    #[error("end date falls outside the supported calendar")]
    DateOverflow,
}

/// Reasons a record line cannot be turned into a festival.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected at least 5 ':'-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid date '{0}', expected dd-mm-yyyy")]
    Date(String),

    #[error("invalid duration '{0}'")]
    Duration(String),

    #[error("unknown style '{0}'")]
    Style(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid festival: {0}")]
    Validation(#[from] ValidationError),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
