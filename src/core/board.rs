use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board, indexed 0-8 in row-major order.
pub const CELL_COUNT: usize = 9;

/// Every line that wins the game: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Score a cell owned by this player contributes to a line sum.
    pub fn weight(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn weight(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(player) => player.weight(),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Title shown to the players when the game ends.
    pub fn message(self) -> String {
        match self {
            GameResult::InProgress => "Game in progress".to_string(),
            GameResult::Win(player) => format!("{} Wins!", player),
            GameResult::Draw => "Draw!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics if `index` is not a cell index.
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Taken(player);
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Sums the cell weights of each line; a sum of +3 or -3 means one
    /// player holds the whole line. The first such line decides.
    pub fn winner(&self) -> Option<Player> {
        for line in LINES {
            let sum: i8 = line.iter().map(|&index| self.cells[index].weight()).sum();
            match sum {
                3 => return Some(Player::X),
                -3 => return Some(Player::O),
                _ => {}
            }
        }
        None
    }

    /// Win check first: a full board can still hold a winning line.
    pub fn evaluate(&self) -> GameResult {
        if let Some(player) = self.winner() {
            GameResult::Win(player)
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }
}
