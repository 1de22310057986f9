//! The game list shown by hosts, and the session settings each game plays with.

use arcade::{Difficulty, FailurePolicy, ScoringRule, SessionConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Countdown for the timed games.
pub const ROUND_TIME_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Memory,
    Puzzle,
    Word,
    Math,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Memory => "Memory",
            Category::Puzzle => "Puzzle",
            Category::Word => "Word",
            Category::Math => "Math",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GameKind {
    TicTacToe,
    MemoryMatch,
    WordScramble,
    ColorMatch,
    SimonSays,
    SpeedMath,
}

impl GameKind {
    pub const ALL: [GameKind; 6] = [
        GameKind::TicTacToe,
        GameKind::MemoryMatch,
        GameKind::WordScramble,
        GameKind::ColorMatch,
        GameKind::SimonSays,
        GameKind::SpeedMath,
    ];

    /// Stable identifier; also the best-score key prefix.
    pub fn id(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::MemoryMatch => "memory-match",
            GameKind::WordScramble => "word-scramble",
            GameKind::ColorMatch => "color-match",
            GameKind::SimonSays => "simon-says",
            GameKind::SpeedMath => "speed-math",
        }
    }

    pub fn parse(v: &str) -> Option<GameKind> {
        let v = v.trim();
        GameKind::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(v))
    }

    pub fn title(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic Tac Toe",
            GameKind::MemoryMatch => "Memory Match",
            GameKind::WordScramble => "Word Scramble",
            GameKind::ColorMatch => "Color Match",
            GameKind::SimonSays => "Simon Says",
            GameKind::SpeedMath => "Speed Math",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Classic two-player game of X's and O's.",
            GameKind::MemoryMatch => {
                "Test your memory by matching pairs of cards. How fast can you clear the board?"
            }
            GameKind::WordScramble => {
                "Unscramble letters to discover hidden words. Race against the clock!"
            }
            GameKind::ColorMatch => {
                "Quick! Match the color with the word. But watch out - it's trickier than it seems!"
            }
            GameKind::SimonSays => {
                "Remember and repeat the pattern. How long a sequence can you remember?"
            }
            GameKind::SpeedMath => "Test your mental math skills against the clock.",
        }
    }

    /// Listed difficulty, not the speed-math setting.
    pub fn difficulty(self) -> Difficulty {
        match self {
            GameKind::TicTacToe | GameKind::ColorMatch => Difficulty::Easy,
            GameKind::MemoryMatch | GameKind::WordScramble | GameKind::SimonSays => {
                Difficulty::Medium
            }
            GameKind::SpeedMath => Difficulty::Hard,
        }
    }

    pub fn category(self) -> Category {
        match self {
            GameKind::TicTacToe => Category::Puzzle,
            GameKind::MemoryMatch | GameKind::ColorMatch | GameKind::SimonSays => Category::Memory,
            GameKind::WordScramble => Category::Word,
            GameKind::SpeedMath => Category::Math,
        }
    }

    pub fn path(self) -> String {
        format!("/fun/{}", self.id())
    }

    pub fn is_timed(self) -> bool {
        matches!(
            self,
            GameKind::WordScramble | GameKind::ColorMatch | GameKind::SpeedMath
        )
    }

    /// Games played through a round session and so tracking a best score.
    /// The two board games keep their own state.
    pub fn keeps_score(self) -> bool {
        !matches!(self, GameKind::TicTacToe | GameKind::MemoryMatch)
    }

    pub fn session_config(self, difficulty: Difficulty) -> SessionConfig {
        let mut config = SessionConfig::new(self.id()).with_difficulty(difficulty);
        if self.is_timed() {
            config = config.with_time_limit(ROUND_TIME_SECS);
        }
        if self == GameKind::SpeedMath {
            config = config.with_scoring(ScoringRule::Streak);
        }
        if self == GameKind::MemoryMatch {
            config = config.with_failure_policy(FailurePolicy::RetryPair);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for g in GameKind::ALL {
            assert_eq!(GameKind::parse(g.id()), Some(g));
        }
        assert_eq!(GameKind::parse("Speed-Math"), Some(GameKind::SpeedMath));
        assert_eq!(GameKind::parse("snake"), None);
    }

    #[test]
    fn session_settings_per_game() {
        let math = GameKind::SpeedMath.session_config(Difficulty::Hard);
        assert_eq!(math.game_id, "speed-math");
        assert_eq!(math.time_limit_secs, Some(ROUND_TIME_SECS));
        assert_eq!(math.score_weight(), 3);

        let simon = GameKind::SimonSays.session_config(Difficulty::Easy);
        assert_eq!(simon.time_limit_secs, None);
        assert_eq!(simon.failure_policy, FailurePolicy::EndsGame);

        let memory = GameKind::MemoryMatch.session_config(Difficulty::Medium);
        assert_eq!(memory.failure_policy, FailurePolicy::RetryPair);

        let colors = GameKind::ColorMatch.session_config(Difficulty::Medium);
        assert_eq!(colors.score_weight(), 1);
    }

    // The core's serde impls follow this crate's `serde` feature.
    #[cfg(feature = "serde")]
    #[test]
    fn serde_feature_reaches_the_core() {
        fn serializable<T: Serialize + for<'de> Deserialize<'de>>(_: &T) {}
        let config = GameKind::SpeedMath.session_config(Difficulty::Hard);
        serializable(&GameKind::SpeedMath);
        serializable(&config);
        serializable(&config.difficulty);
    }

    #[test]
    fn paths() {
        assert_eq!(GameKind::WordScramble.path(), "/fun/word-scramble");
    }
}
