pub mod festival;

pub use festival::{Festival, FestivalDisplay, Status};
