pub mod errors;

pub use errors::{GameError, AppResult};
