use arcade::prng::{choose, RandomSource};
use arcade::time::Duration;
use arcade::{Difficulty, GameError, Round, RoundGenerator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pause before the first pad of a playback lights up.
pub const LEAD_IN: Duration = Duration::from_millis(1000);
/// Gap before each pad and time each pad stays lit.
pub const STEP: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pad {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Pad {
    pub const ALL: [Pad; 4] = [Pad::Red, Pad::Blue, Pad::Green, Pad::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Pad::Red => "red",
            Pad::Blue => "blue",
            Pad::Green => "green",
            Pad::Yellow => "yellow",
        }
    }

    /// Accepts the full name or its first letter.
    pub fn parse(v: &str) -> Option<Pad> {
        let v = v.trim().to_ascii_lowercase();
        Pad::ALL
            .into_iter()
            .find(|p| p.name() == v || (v.len() == 1 && p.name().starts_with(v.as_str())))
    }
}

/// Memory sequence game. Each correct replay grows the sequence by one pad;
/// the round's answer is the whole sequence.
#[derive(Debug, Clone)]
pub struct SimonSays {
    pads: Vec<Pad>,
}

impl SimonSays {
    pub fn new(pads: Vec<Pad>) -> Self {
        Self { pads }
    }
}

impl Default for SimonSays {
    fn default() -> Self {
        Self::new(Pad::ALL.to_vec())
    }
}

impl RoundGenerator for SimonSays {
    type Prompt = Vec<Pad>;
    type Answer = Vec<Pad>;

    fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        previous: Option<&Round<Vec<Pad>, Vec<Pad>>>,
        _difficulty: Difficulty,
    ) -> Result<Round<Vec<Pad>, Vec<Pad>>, GameError> {
        let next = *choose(rng, &self.pads)
            .ok_or_else(|| GameError::GenerationExhausted("no pads to choose from".to_string()))?;
        let mut sequence = previous.map(|r| r.answer.clone()).unwrap_or_default();
        sequence.push(next);
        Ok(Round::free_form(sequence.clone(), sequence))
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.pads.is_empty() {
            return Err(GameError::GenerationExhausted(
                "simon-says needs at least one pad".to_string(),
            ));
        }
        Ok(())
    }
}

/// When one pad of a playback lights up and goes dark, relative to the start
/// of the playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStep {
    pub pad: Pad,
    pub on_at: Duration,
    pub off_at: Duration,
}

pub fn playback(sequence: &[Pad]) -> Vec<PlaybackStep> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, &pad)| {
            let on_at = LEAD_IN + STEP * (2 * i as u32 + 1);
            PlaybackStep {
                pad,
                on_at,
                off_at: on_at + STEP,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Correct so far; more presses needed.
    Pending,
    /// The whole sequence was entered correctly.
    Complete,
    /// The last press was wrong.
    Mismatch,
}

/// Collects pad presses for one replay so a miss can be caught on the press
/// that causes it rather than after the full sequence.
#[derive(Debug, Clone, Default)]
pub struct SimonInput {
    pressed: Vec<Pad>,
}

impl SimonInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, expected: &[Pad], pad: Pad) -> PressOutcome {
        self.pressed.push(pad);
        let i = self.pressed.len() - 1;
        if expected.get(i) != Some(&pad) {
            PressOutcome::Mismatch
        } else if self.pressed.len() == expected.len() {
            PressOutcome::Complete
        } else {
            PressOutcome::Pending
        }
    }

    pub fn pressed(&self) -> &[Pad] {
        &self.pressed
    }

    /// Hand the presses over for submission and start a fresh replay.
    pub fn take(&mut self) -> Vec<Pad> {
        std::mem::take(&mut self.pressed)
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
