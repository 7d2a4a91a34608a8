pub mod core;
pub mod ui;
pub mod config;
pub mod utils;

pub use crate::core::{GameEngine, GameResult, GameSnapshot, MoveOutcome, MoveRejection, Board, Cell, Player};
pub use crate::ui::{GameInterface, GameSession, Presenter, SessionTally};
pub use crate::config::Config;

// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
