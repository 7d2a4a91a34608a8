use console::Term;
use std::io::{self, Write};
use crate::ui::ThemeManager;
use crate::core::{Board, Cell, GameSnapshot, Player};

const TITLE: &str = r#"
 _____ _      _____            _____
|_   _(_) __ |_   _|_ _  ___  |_   _|__   ___
  | | | |/ __|  | |/ _` |/ __|   | |/ _ \ / _ \
  | | | | (__   | | (_| | (__    | | (_) |  __/
  |_| |_|\___|  |_|\__,_|\___|   |_|\___/ \___|
"#;

pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    show_cell_numbers: bool,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, show_cell_numbers: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme_manager,
            show_cell_numbers,
        }
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    pub fn show_title(&self) -> io::Result<()> {
        let mut out = io::stdout();
        writeln!(out, "{}", self.theme_manager.apply_style(TITLE, "title"))?;
        Ok(())
    }

    pub fn show_board(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        let mut out = io::stdout();
        writeln!(out, "{}", self.render_board(&snapshot.board))?;
        writeln!(out)?;

        if !snapshot.result.is_over() {
            let turn = format!("{} to move", snapshot.turn);
            writeln!(out, "{}", self.theme_manager.apply_style(&turn, "turn"))?;
        }

        Ok(())
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        let styled_message = self.theme_manager.apply_style(message, style);
        writeln!(io::stdout(), "{}", styled_message)?;
        Ok(())
    }

    pub fn show_error(&self, error: &str) -> io::Result<()> {
        self.show_message(&format!("✗ {}", error), "error")
    }

    pub fn show_success(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("★ {}", message), "success")
    }

    pub fn render_board(&self, board: &Board) -> String {
        let separator = self.theme_manager.apply_style("───┼───┼───", "grid");
        let bar = self.theme_manager.apply_style("│", "grid");

        let rows: Vec<String> = board
            .cells()
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| format!(" {} ", self.render_cell(row * 3 + col, cell)))
                    .collect::<Vec<_>>()
                    .join(bar.as_str())
            })
            .collect();

        rows.join(format!("\n{}\n", separator).as_str())
    }

    fn render_cell(&self, index: usize, cell: Cell) -> String {
        match cell {
            Cell::Taken(Player::X) => self.theme_manager.apply_style("X", "mark_x"),
            Cell::Taken(Player::O) => self.theme_manager.apply_style("O", "mark_o"),
            Cell::Empty if self.show_cell_numbers => {
                self.theme_manager.apply_style(&(index + 1).to_string(), "cell_empty")
            }
            Cell::Empty => " ".to_string(),
        }
    }
}
