use arcade::prng::{shuffle, RandomSource};
use arcade::{Difficulty, GameError, Round, RoundGenerator};
use tracing::debug;

use crate::words::{builtin_words, WordCategory, WordEntry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shuffles before falling back to a rotation.
const MAX_SHUFFLES: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScramblePrompt {
    pub scrambled: String,
    pub hint: String,
    pub category: Option<WordCategory>,
}

/// Unscramble-the-word rounds. Answers are typed, so rounds carry no options.
#[derive(Debug, Clone)]
pub struct WordScramble {
    pool: Vec<WordEntry>,
}

impl WordScramble {
    pub fn new(pool: Vec<WordEntry>) -> Self {
        let pool = pool
            .into_iter()
            .map(|mut e| {
                e.word = normalize(&e.word);
                e
            })
            .collect();
        Self { pool }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_words())
    }

    pub fn pool(&self) -> &[WordEntry] {
        &self.pool
    }

    fn pick(&self, rng: &mut dyn RandomSource, previous: Option<&str>) -> usize {
        let n = self.pool.len();
        let skip = previous.and_then(|w| self.pool.iter().position(|e| e.word == w));
        match skip {
            // Draw from the other n-1 words.
            Some(skip) if n > 1 => {
                let i = rng.gen_range_usize(0, n - 1);
                if i >= skip {
                    i + 1
                } else {
                    i
                }
            }
            _ => rng.gen_range_usize(0, n),
        }
    }
}

impl Default for WordScramble {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Trimmed, upper-cased form used for comparison.
pub fn normalize(s: &str) -> String {
    s.trim().to_uppercase()
}

/// A permutation of `word` that differs from it.
///
/// Needs at least two distinct letters; with a single repeated letter the
/// result is the word itself.
pub fn scramble(rng: &mut dyn RandomSource, word: &str) -> String {
    let original: Vec<char> = word.chars().collect();
    let mut letters = original.clone();
    for _ in 0..MAX_SHUFFLES {
        shuffle(rng, &mut letters);
        if letters != original {
            return letters.into_iter().collect();
        }
    }
    // Rotating by one only reproduces a word made of one repeated letter.
    debug!(word, "shuffles kept reproducing the word, rotating instead");
    let mut rotated = original;
    rotated.rotate_left(1);
    rotated.into_iter().collect()
}

fn distinct_letters(word: &str) -> usize {
    let mut seen: Vec<char> = word.chars().collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

impl RoundGenerator for WordScramble {
    type Prompt = ScramblePrompt;
    type Answer = String;

    fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        previous: Option<&Round<ScramblePrompt, String>>,
        _difficulty: Difficulty,
    ) -> Result<Round<ScramblePrompt, String>, GameError> {
        if self.pool.is_empty() {
            return Err(GameError::GenerationExhausted(
                "word pool is empty".to_string(),
            ));
        }
        let idx = self.pick(rng, previous.map(|r| r.answer.as_str()));
        let entry = &self.pool[idx];
        let prompt = ScramblePrompt {
            scrambled: scramble(rng, &entry.word),
            hint: entry.hint.clone(),
            category: entry.category,
        };
        Ok(Round::free_form(prompt, entry.word.clone()))
    }

    fn is_correct(&self, round: &Round<ScramblePrompt, String>, answer: &String) -> bool {
        normalize(answer) == round.answer
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.pool.is_empty() {
            return Err(GameError::GenerationExhausted(
                "word pool is empty".to_string(),
            ));
        }
        if let Some(bad) = self.pool.iter().find(|e| distinct_letters(&e.word) < 2) {
            return Err(GameError::GenerationExhausted(format!(
                "{:?} cannot be scrambled into a different word",
                bad.word
            )));
        }
        Ok(())
    }
}
