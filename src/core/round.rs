//! Rounds and the per-game strategy that produces them.
//!
//! A [`Round`] is one prompt/answer unit. Games plug into the shared session
//! by implementing [`RoundGenerator`]; the session never looks inside the
//! prompt, it only compares answers through [`RoundGenerator::is_correct`].

use crate::error::GameError;
use crate::prng::RandomSource;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Score multiplier used by streak-weighted games.
    pub fn weight(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn parse(v: &str) -> Option<Difficulty> {
        match v.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// One prompt with its correct answer.
///
/// `options` is empty for games without discrete choices (typed words,
/// sequence replay). Otherwise it contains `answer` exactly once and no
/// duplicates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Round<P, A> {
    pub prompt: P,
    pub answer: A,
    pub options: Vec<A>,
}

impl<P, A: PartialEq> Round<P, A> {
    /// A round answered by free input rather than by picking an option.
    pub fn free_form(prompt: P, answer: A) -> Self {
        Self {
            prompt,
            answer,
            options: Vec::new(),
        }
    }

    pub fn with_options(prompt: P, answer: A, options: Vec<A>) -> Self {
        Self {
            prompt,
            answer,
            options,
        }
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// True when the option list honours the generator contract.
    pub fn options_are_valid(&self) -> bool {
        if self.options.is_empty() {
            return true;
        }
        let correct = self.options.iter().filter(|o| **o == self.answer).count();
        if correct != 1 {
            return false;
        }
        self.options
            .iter()
            .enumerate()
            .all(|(i, a)| self.options[i + 1..].iter().all(|b| a != b))
    }
}

/// Per-game strategy producing rounds.
///
/// Implementations must be deterministic for a given random source: the same
/// seed yields the same sequence of rounds.
pub trait RoundGenerator {
    type Prompt;
    type Answer: PartialEq;

    /// Build the next round. `previous` is the round that was just answered
    /// correctly (or `None` at session start).
    fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        previous: Option<&Round<Self::Prompt, Self::Answer>>,
        difficulty: Difficulty,
    ) -> Result<Round<Self::Prompt, Self::Answer>, GameError>;

    fn is_correct(
        &self,
        round: &Round<Self::Prompt, Self::Answer>,
        answer: &Self::Answer,
    ) -> bool {
        round.answer == *answer
    }

    /// Checked once when a session is created.
    fn validate(&self) -> Result<(), GameError> {
        Ok(())
    }
}

impl<G: RoundGenerator + ?Sized> RoundGenerator for Box<G> {
    type Prompt = G::Prompt;
    type Answer = G::Answer;

    fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        previous: Option<&Round<Self::Prompt, Self::Answer>>,
        difficulty: Difficulty,
    ) -> Result<Round<Self::Prompt, Self::Answer>, GameError> {
        (**self).generate(rng, previous, difficulty)
    }

    fn is_correct(
        &self,
        round: &Round<Self::Prompt, Self::Answer>,
        answer: &Self::Answer,
    ) -> bool {
        (**self).is_correct(round, answer)
    }

    fn validate(&self) -> Result<(), GameError> {
        (**self).validate()
    }
}
