use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    X,
    O,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

/// Two-player 3×3 board. X moves first.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    cells: [Option<Player>; 9],
    x_next: bool,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            x_next: true,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn next_player(&self) -> Player {
        if self.x_next {
            Player::X
        } else {
            Player::O
        }
    }

    /// Place the next player's mark on `cell` (0-8). Filled cells, out of
    /// range cells and moves after the game ended are ignored.
    pub fn play(&mut self, cell: usize) -> bool {
        if self.outcome() != Outcome::InProgress {
            return false;
        }
        let player = self.next_player();
        match self.cells.get_mut(cell) {
            Some(slot @ None) => {
                *slot = Some(player);
                self.x_next = !self.x_next;
                true
            }
            _ => false,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let p = self.cells[a]?;
            (self.cells[b] == Some(p) && self.cells[c] == Some(p)).then_some(p)
        })
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(p) = self.winner() {
            Outcome::Won(p)
        } else if self.cells.iter().all(Option::is_some) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Won(p) => format!("Winner: {p}"),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.next_player()),
        }
    }
}
