use crate::core::{GameEngine, GameEventType, GameResult, MoveOutcome, Player};
use crate::ui::Presenter;
use crate::utils::AppResult;
use tracing::{debug, info};

/// Results of the games played since the process started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub games_played: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SessionTally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::InProgress => return,
            GameResult::Win(Player::X) => self.x_wins += 1,
            GameResult::Win(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games_played += 1;
    }

    pub fn summary(&self) -> String {
        format!(
            "Games: {} | X: {} | O: {} | Draws: {}",
            self.games_played, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Feeds cell selections from a [`Presenter`] into the engine and turns
/// each outcome back into presenter effects.
pub struct GameSession<P: Presenter> {
    engine: GameEngine,
    presenter: P,
    tally: SessionTally,
}

impl<P: Presenter> GameSession<P> {
    pub fn new(engine: GameEngine, presenter: P) -> Self {
        Self {
            engine,
            presenter,
            tally: SessionTally::default(),
        }
    }

    /// Plays games until the players decline a rematch.
    pub fn run(&mut self) -> AppResult<SessionTally> {
        info!("Session started");
        self.presenter.render(&self.engine.current_state())?;

        loop {
            let index = self.presenter.next_cell(&self.engine.current_state())?;

            match self.engine.attempt_move(index) {
                MoveOutcome::Continued => {
                    self.presenter.render(&self.engine.current_state())?;
                }
                MoveOutcome::Ended(result) => {
                    self.presenter.render(&self.engine.current_state())?;
                    self.tally.record(result);
                    self.presenter.announce_outcome(result)?;

                    if !self.presenter.confirm_replay(result)? {
                        break;
                    }

                    self.engine.reset();
                    self.presenter.render(&self.engine.current_state())?;
                }
                MoveOutcome::Rejected(reason) => {
                    debug!("Ignoring click on cell {}: {}", index, reason);
                }
            }
        }

        let events = self.engine.event_log();
        info!(
            "Session ended: {} ({} events, {} ignored clicks)",
            self.tally.summary(),
            events.get_event_count(),
            events.get_event_count_by_type(GameEventType::MoveRejected)
        );
        Ok(self.tally)
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
