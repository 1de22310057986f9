use std::fmt;

use arcade::prng::{choose, shuffle, RandomSource};
use arcade::{Difficulty, GameError, Round, RoundGenerator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wrong options per round.
pub const DISTRACTORS: usize = 3;
/// Wrong options stay within this distance of the answer.
pub const DISTRACTOR_SPREAD: i64 = 5;
/// Random draws before distractors are filled in deterministically.
const MAX_DISTRACTOR_DRAWS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '×',
            Operator::Div => '÷',
        }
    }

    /// Integer result. Division truncates; generated problems always divide
    /// exactly.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => {
                if rhs == 0 {
                    0
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

/// Operand range and operators unlocked at a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathSettings {
    pub min: i64,
    pub max: i64,
    pub operators: &'static [Operator],
}

impl MathSettings {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                min: 1,
                max: 10,
                operators: &[Operator::Add, Operator::Sub],
            },
            Difficulty::Medium => Self {
                min: 1,
                max: 20,
                operators: &[Operator::Add, Operator::Sub, Operator::Mul],
            },
            Difficulty::Hard => Self {
                min: 1,
                max: 50,
                operators: &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem {
    pub lhs: i64,
    pub op: Operator,
    pub rhs: i64,
}

impl Problem {
    pub fn answer(&self) -> i64 {
        self.op.apply(self.lhs, self.rhs)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op.symbol(), self.rhs)
    }
}

/// Multiple-choice arithmetic against the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedMath;

impl SpeedMath {
    pub fn new() -> Self {
        Self
    }

    fn problem(rng: &mut dyn RandomSource, difficulty: Difficulty) -> Result<Problem, GameError> {
        let settings = MathSettings::for_difficulty(difficulty);
        let op = *choose(rng, settings.operators).ok_or_else(|| {
            GameError::GenerationExhausted("no operators for difficulty".to_string())
        })?;

        let problem = if op == Operator::Div {
            // Build the dividend from the quotient so the result is exact.
            let rhs = rng.gen_range_i64(2, 10);
            let quotient = rng.gen_range_i64(1, 10);
            Problem {
                lhs: quotient * rhs,
                op,
                rhs,
            }
        } else {
            Problem {
                lhs: rng.gen_range_i64(settings.min, settings.max),
                op,
                rhs: rng.gen_range_i64(settings.min, settings.max),
            }
        };
        Ok(problem)
    }
}

/// `answer` followed by `DISTRACTORS` distinct values within the spread.
fn options_around(rng: &mut dyn RandomSource, answer: i64) -> Vec<i64> {
    let mut options = Vec::with_capacity(DISTRACTORS + 1);
    options.push(answer);

    let mut draws = 0;
    while options.len() <= DISTRACTORS && draws < MAX_DISTRACTOR_DRAWS {
        draws += 1;
        let candidate = answer + rng.gen_range_i64(-DISTRACTOR_SPREAD, DISTRACTOR_SPREAD);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    // A degenerate source can keep colliding; walk outward instead.
    let mut step = 1;
    while options.len() <= DISTRACTORS && step <= DISTRACTOR_SPREAD {
        for candidate in [answer + step, answer - step] {
            if options.len() <= DISTRACTORS && !options.contains(&candidate) {
                options.push(candidate);
            }
        }
        step += 1;
    }
    options
}

impl RoundGenerator for SpeedMath {
    type Prompt = Problem;
    type Answer = i64;

    fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        _previous: Option<&Round<Problem, i64>>,
        difficulty: Difficulty,
    ) -> Result<Round<Problem, i64>, GameError> {
        let problem = Self::problem(rng, difficulty)?;
        let answer = problem.answer();
        let mut options = options_around(rng, answer);
        shuffle(rng, &mut options);
        Ok(Round::with_options(problem, answer, options))
    }
}
