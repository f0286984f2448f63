pub mod agenda;
pub mod config;

pub use agenda::{cancel_festivals, count_months, load_agenda, show_agenda, show_styles};
