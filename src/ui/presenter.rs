use crate::core::{GameResult, GameSnapshot};
use crate::utils::AppResult;

/// What the game needs from whatever shows it to the players.
///
/// `next_cell` must only ever yield an index in `0..9`; every other call
/// is an effect the session requests after a move.
pub trait Presenter {
    /// Blocks until a player picks a cell.
    fn next_cell(&mut self, snapshot: &GameSnapshot) -> AppResult<usize>;

    fn render(&mut self, snapshot: &GameSnapshot) -> AppResult<()>;

    fn announce_outcome(&mut self, result: GameResult) -> AppResult<()>;

    /// Asks whether to start another game after `result`.
    fn confirm_replay(&mut self, result: GameResult) -> AppResult<bool>;
}
