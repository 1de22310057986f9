use tracing::info;

use crate::store::{read_best_score, write_best_score, ScoreStore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a correct answer turns into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoringRule {
    /// `weight` points per correct answer.
    #[default]
    Flat,
    /// `streak * weight` points, counting the answer just given.
    Streak,
}

/// Current score, streak and the best score seen for one game.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    rule: ScoringRule,
    score: u32,
    streak: u32,
    best: u32,
}

impl ScoreTracker {
    pub fn new(rule: ScoringRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    /// Zero score and streak. The best score survives.
    pub fn reset(&mut self) {
        self.score = 0;
        self.streak = 0;
    }

    /// Record one answer and return the points awarded.
    pub fn record(&mut self, correct: bool, weight: u32) -> u32 {
        if !correct {
            self.streak = 0;
            return 0;
        }
        self.streak = self.streak.saturating_add(1);
        let points = match self.rule {
            ScoringRule::Flat => weight,
            ScoringRule::Streak => self.streak.saturating_mul(weight),
        };
        self.score = self.score.saturating_add(points);
        points
    }

    pub fn load_best(&mut self, game_id: &str, store: &dyn ScoreStore) -> u32 {
        self.best = read_best_score(store, game_id);
        self.best
    }

    /// Persist the score if it beats the best. Returns whether it did.
    ///
    /// Committing the same score twice writes at most once. A failed write
    /// still raises the in-memory best.
    pub fn commit_if_best(&mut self, game_id: &str, store: &mut dyn ScoreStore) -> bool {
        if self.score <= self.best {
            return false;
        }
        self.best = self.score;
        if write_best_score(store, game_id, self.score) {
            info!("New best score for {}: {}", game_id, self.score);
        }
        true
    }
}
