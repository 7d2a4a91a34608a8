use dialoguer::{Confirm, Input};

use crate::config::Config;
use crate::core::{GameResult, GameSnapshot, CELL_COUNT};
use crate::ui::{Display, Presenter, SessionTally, ThemeManager};
use crate::utils::AppResult;
use tracing::{info, warn};

/// Terminal front end: draws the board and reads cell picks from stdin.
pub struct GameInterface {
    display: Display,
    clear_screen: bool,
}

impl GameInterface {
    pub fn new(config: &Config) -> Self {
        info!("Initializing game interface");

        let mut theme_manager = ThemeManager::new();
        if !theme_manager.set_theme(&config.ui.theme) {
            warn!(
                "Unknown theme '{}' (available: {}), using default",
                config.ui.theme,
                theme_manager.list_themes().join(", ")
            );
        }
        info!("Using theme '{}'", theme_manager.current_theme_name());

        let display = Display::new(theme_manager, config.ui.show_cell_numbers);

        Self {
            display,
            clear_screen: config.ui.clear_screen,
        }
    }

    pub fn show_farewell(&self, tally: &SessionTally) -> AppResult<()> {
        self.display.show_message(&tally.summary(), "info")?;
        self.display.show_message("Thanks for playing!", "success")?;
        Ok(())
    }
}

impl Presenter for GameInterface {
    fn next_cell(&mut self, snapshot: &GameSnapshot) -> AppResult<usize> {
        let cell: usize = Input::new()
            .with_prompt(format!("{}, pick a cell (1-{})", snapshot.turn, CELL_COUNT))
            .validate_with(|input: &usize| -> Result<(), String> {
                if (1..=CELL_COUNT).contains(input) {
                    Ok(())
                } else {
                    Err(format!("Cells are numbered 1 to {}", CELL_COUNT))
                }
            })
            .interact_text()?;

        Ok(cell - 1)
    }

    fn render(&mut self, snapshot: &GameSnapshot) -> AppResult<()> {
        if self.clear_screen {
            self.display.clear_screen()?;
        }
        self.display.show_title()?;
        self.display.show_board(snapshot)?;
        Ok(())
    }

    fn announce_outcome(&mut self, result: GameResult) -> AppResult<()> {
        match result {
            GameResult::Win(_) => self.display.show_success(&result.message())?,
            GameResult::Draw => self.display.show_message(&result.message(), "warning")?,
            GameResult::InProgress => self.display.show_error("Game is still in progress")?,
        }
        Ok(())
    }

    fn confirm_replay(&mut self, _result: GameResult) -> AppResult<bool> {
        let play_again = Confirm::new()
            .with_prompt("Play Again?")
            .default(true)
            .interact()?;

        Ok(play_again)
    }
}
