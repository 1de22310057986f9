use arcade::prng::{shuffle, RandomSource};
use arcade::{Difficulty, GameError, Round, RoundGenerator};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Purple => "PURPLE",
            Color::Orange => "ORANGE",
        }
    }

    pub fn parse(v: &str) -> Option<Color> {
        let v = v.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(v))
    }
}

/// A colour word shown in some ink. The player must pick the ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorPrompt {
    pub word: Color,
    pub ink: Color,
}

impl ColorPrompt {
    /// Word and ink disagree.
    pub fn is_conflicting(&self) -> bool {
        self.word != self.ink
    }
}

#[derive(Debug, Clone)]
pub struct ColorMatch {
    palette: Vec<Color>,
}

impl ColorMatch {
    pub fn new(mut palette: Vec<Color>) -> Self {
        let given = palette.len();
        let mut seen = Vec::with_capacity(palette.len());
        palette.retain(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(*c);
                true
            }
        });
        if palette.len() < given {
            debug!(dropped = given - palette.len(), "duplicate colours removed from palette");
        }
        Self { palette }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    fn exhausted(&self) -> GameError {
        GameError::GenerationExhausted(format!(
            "color-match needs {} distinct colours, palette has {}",
            OPTION_COUNT,
            self.palette.len()
        ))
    }
}

impl Default for ColorMatch {
    fn default() -> Self {
        Self::new(Color::ALL.to_vec())
    }
}

impl RoundGenerator for ColorMatch {
    type Prompt = ColorPrompt;
    type Answer = Color;

    fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        _previous: Option<&Round<ColorPrompt, Color>>,
        _difficulty: Difficulty,
    ) -> Result<Round<ColorPrompt, Color>, GameError> {
        if self.palette.len() < OPTION_COUNT {
            return Err(self.exhausted());
        }

        let mut shuffled = self.palette.clone();
        shuffle(rng, &mut shuffled);
        let word = shuffled[0];
        // Half the rounds show the word in its own colour.
        let ink = if rng.gen_bool() { word } else { shuffled[1] };

        let mut options: Vec<Color> = shuffled
            .iter()
            .copied()
            .filter(|c| *c != ink)
            .take(OPTION_COUNT - 1)
            .collect();
        options.push(ink);
        shuffle(rng, &mut options);

        Ok(Round::with_options(ColorPrompt { word, ink }, ink, options))
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.palette.len() < OPTION_COUNT {
            return Err(self.exhausted());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade::{AnswerOutcome, GameSession, MemoryScoreStore, Prng, SessionConfig, SessionState};

    #[test]
    fn options_hold_the_ink_once() {
        let mut g = ColorMatch::default();
        let mut rng = Prng::new(31);
        for _ in 0..500 {
            let r = g.generate(&mut rng, None, Difficulty::Easy).unwrap();
            assert_eq!(r.options.len(), OPTION_COUNT);
            assert!(r.options_are_valid());
            assert_eq!(r.answer, r.prompt.ink);
            // The word's own colour is always on offer as the trap.
            assert!(r.options.contains(&r.prompt.word));
        }
    }

    #[test]
    fn same_seed_same_rounds() {
        let mut a = ColorMatch::default();
        let mut b = ColorMatch::default();
        let mut ra = Prng::new(58);
        let mut rb = Prng::new(58);
        for _ in 0..20 {
            let x = a.generate(&mut ra, None, Difficulty::Medium).unwrap();
            let y = b.generate(&mut rb, None, Difficulty::Medium).unwrap();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn ink_is_the_answer_not_the_word() {
        let g = ColorMatch::default();
        let round = Round::with_options(
            ColorPrompt {
                word: Color::Red,
                ink: Color::Blue,
            },
            Color::Blue,
            vec![Color::Green, Color::Blue, Color::Red, Color::Orange],
        );
        assert!(g.is_correct(&round, &Color::Blue));
        assert!(!g.is_correct(&round, &Color::Red));
    }

    #[test]
    fn red_word_in_blue_ink_through_a_session() {
        let config = SessionConfig::new("color-match").with_time_limit(30).with_seed(123);
        let mut s = GameSession::new(config, ColorMatch::default(), MemoryScoreStore::new())
            .unwrap();
        s.start().unwrap();

        let mut found = false;
        for _ in 0..10_000 {
            let r = s.current_round().unwrap();
            if r.prompt.word == Color::Red && r.prompt.ink == Color::Blue {
                found = true;
                break;
            }
            let answer = r.answer;
            assert!(matches!(
                s.submit_answer(&answer).unwrap(),
                AnswerOutcome::Correct { .. }
            ));
        }
        assert!(found);

        let score = s.score();
        let outcome = s.submit_answer(&Color::Red).unwrap();
        let AnswerOutcome::GameOver(summary) = outcome else {
            panic!("clicking the word colour should end the game");
        };
        assert_eq!(summary.score, score);
        assert_eq!(s.state(), SessionState::GameOver);
    }

    #[test]
    fn both_congruent_and_conflicting_rounds_appear() {
        let mut g = ColorMatch::default();
        let mut rng = Prng::new(5);
        let rounds: Vec<_> = (0..200)
            .map(|_| g.generate(&mut rng, None, Difficulty::Easy).unwrap())
            .collect();
        assert!(rounds.iter().any(|r| r.prompt.is_conflicting()));
        assert!(rounds.iter().any(|r| !r.prompt.is_conflicting()));
    }

    #[test]
    fn small_palette_is_rejected() {
        let g = ColorMatch::new(vec![Color::Red, Color::Blue, Color::Red, Color::Green]);
        assert_eq!(g.palette().len(), 3);
        assert!(g.validate().is_err());
        assert!(ColorMatch::default().validate().is_ok());
    }

    #[test]
    fn parse_names() {
        assert_eq!(Color::parse("blue"), Some(Color::Blue));
        assert_eq!(Color::parse(" ORANGE "), Some(Color::Orange));
        assert_eq!(Color::parse("teal"), None);
    }
}
