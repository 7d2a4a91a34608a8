pub mod components;
pub mod interface;
pub mod presenter;
pub mod session;
pub mod theme;

pub use components::Display;
pub use interface::GameInterface;
pub use presenter::Presenter;
pub use session::{GameSession, SessionTally};
pub use theme::{Theme, ThemeManager};
