//! Plain-text screens for the terminal host.

use std::fmt::Write as _;

use arcade::{GameOverReason, GameOverSummary, Round};
use arcade_games::color_match::{Color, ColorPrompt};
use arcade_games::memory_match::MemoryBoard;
use arcade_games::speed_math::Problem;
use arcade_games::tic_tac_toe::TicTacToe;
use arcade_games::word_scramble::ScramblePrompt;
use arcade_games::GameKind;

const RESET: &str = "\x1b[0m";

fn ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[1;31m",
        Color::Blue => "\x1b[1;34m",
        Color::Green => "\x1b[1;32m",
        Color::Yellow => "\x1b[1;33m",
        Color::Purple => "\x1b[1;35m",
        Color::Orange => "\x1b[1;38;5;208m",
    }
}

pub fn catalog() -> String {
    let mut s = String::new();
    for game in GameKind::ALL {
        let _ = writeln!(
            s,
            "{:<14} {:<14} {:<7} {:<7} {}",
            game.id(),
            game.title(),
            game.difficulty().label(),
            game.category().label(),
            game.description()
        );
    }
    s
}

pub fn best_scores(scores: &[(GameKind, u32)]) -> String {
    let mut s = String::new();
    for (game, best) in scores {
        let _ = writeln!(s, "{:<14} {}", game.title(), best);
    }
    s
}

/// The word printed in its ink. Only the escape code gives the ink away.
pub fn color_round(round: &Round<ColorPrompt, Color>) -> String {
    let word = round.prompt.word;
    let mut s = format!(
        "What colour is this word?  {}{}{}\n",
        ansi(round.prompt.ink),
        word.name(),
        RESET
    );
    for (i, option) in round.options.iter().enumerate() {
        let _ = write!(s, "  {}) {}", i + 1, option.name());
    }
    s.push('\n');
    s
}

pub fn math_round(round: &Round<Problem, i64>) -> String {
    let options: Vec<String> = round.options.iter().map(|o| o.to_string()).collect();
    format!("{} = ?    [{}]\n", round.prompt, options.join("  "))
}

pub fn scramble_round(round: &Round<ScramblePrompt, String>) -> String {
    let mut s = format!("Unscramble: {}\n", round.prompt.scrambled);
    if !round.prompt.hint.is_empty() {
        let _ = writeln!(s, "  hint: {}", round.prompt.hint);
    }
    s
}

/// 4×4 grid, numbered from 1. Hidden cards show their number.
pub fn memory_board(board: &MemoryBoard) -> String {
    let mut s = String::new();
    for (i, card) in board.cards().iter().enumerate() {
        if board.is_revealed(i) {
            let _ = write!(s, "[{:^8}]", card.symbol.name());
        } else {
            let _ = write!(s, "[{:^8}]", i + 1);
        }
        if i % 4 == 3 {
            s.push('\n');
        }
    }
    let _ = writeln!(s, "Moves: {}  Matches: {}/8", board.moves(), board.matches());
    s
}

pub fn tic_tac_toe(board: &TicTacToe) -> String {
    let mut s = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let i = row * 3 + col;
                board
                    .cell(i)
                    .map_or_else(|| (i + 1).to_string(), |p| p.to_string())
            })
            .collect();
        let _ = writeln!(s, " {}", cells.join(" | "));
        if row < 2 {
            s.push_str("---+---+---\n");
        }
    }
    let _ = writeln!(s, "{}", board.status());
    s
}

pub fn game_over(summary: &GameOverSummary) -> String {
    let why = match summary.reason {
        GameOverReason::WrongAnswer => "wrong answer",
        GameOverReason::TimeUp => "time's up",
        GameOverReason::Forfeit => "you quit",
        GameOverReason::Aborted => "no more rounds",
    };
    let mut s = format!(
        "Game over ({why}). Score: {}  Best: {}",
        summary.score, summary.best_score
    );
    if summary.new_best {
        s.push_str("  New best!");
    }
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade::Prng;

    #[test]
    fn color_round_hides_ink_name() {
        let round = Round::with_options(
            ColorPrompt {
                word: Color::Red,
                ink: Color::Blue,
            },
            Color::Blue,
            vec![Color::Green, Color::Blue, Color::Red, Color::Orange],
        );
        let s = color_round(&round);
        assert!(s.contains("\x1b[1;34mRED\x1b[0m"));
        assert!(s.contains("2) BLUE"));
    }

    #[test]
    fn fresh_boards_show_numbers() {
        let board = MemoryBoard::new(&mut Prng::new(3));
        let s = memory_board(&board);
        assert!(s.contains("[   16   ]"));
        assert!(s.ends_with("Moves: 0  Matches: 0/8\n"));

        let mut t = TicTacToe::new();
        t.play(4);
        let s = tic_tac_toe(&t);
        assert!(s.contains(" 4 | X | 6"));
        assert!(s.ends_with("Next player: O\n"));
    }

    #[test]
    fn summary_mentions_new_best() {
        let s = game_over(&GameOverSummary {
            score: 7,
            best_score: 7,
            new_best: true,
            reason: GameOverReason::TimeUp,
        });
        assert_eq!(s, "Game over (time's up). Score: 7  Best: 7  New best!\n");
    }

    #[test]
    fn catalog_lists_every_game() {
        let s = catalog();
        assert_eq!(s.lines().count(), GameKind::ALL.len());
        assert!(s.contains("speed-math"));
    }
}
