//! The shared round-based game state machine.
//!
//! ```text
//! Idle ──start──▶ Playing ──wrong answer / time up / forfeit──▶ GameOver
//!                   ▲  │ correct: next round                        │
//!                   │  └────────────────────────────────────────────┘
//!                   └──────────────────start (replay)───────────────┘
//! ```
//!
//! The current round lives inside the `Playing` phase, so a session holds a
//! round exactly while it is playing.

use tracing::debug;

use crate::error::GameError;
use crate::prng::{Prng, RandomSource};
use crate::round::{Difficulty, Round, RoundGenerator};
use crate::score::{ScoreTracker, ScoringRule};
use crate::store::ScoreStore;
use crate::timer::{CountdownTimer, TickOutcome};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionState {
    Idle,
    Playing,
    GameOver,
}

/// What a wrong answer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailurePolicy {
    /// First miss ends the session.
    #[default]
    EndsGame,
    /// A miss only clears the attempt; the same round stays up.
    RetryPair,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Storage identifier, e.g. `"speed-math"`.
    pub game_id: String,
    /// `None` for games without a clock.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_limit_secs: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub failure_policy: FailurePolicy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scoring: ScoringRule,
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible rounds; `None` seeds from the clock.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            time_limit_secs: None,
            failure_policy: FailurePolicy::EndsGame,
            scoring: ScoringRule::Flat,
            difficulty: Difficulty::Easy,
            seed: None,
        }
    }

    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Weight handed to the score tracker for each correct answer.
    pub fn score_weight(&self) -> u32 {
        match self.scoring {
            ScoringRule::Flat => 1,
            ScoringRule::Streak => self.difficulty.weight(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameOverReason {
    WrongAnswer,
    TimeUp,
    Forfeit,
    /// The generator failed mid-session.
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOverSummary {
    pub score: u32,
    pub best_score: u32,
    pub new_best: bool,
    pub reason: GameOverReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Points awarded; the next round is up.
    Correct { points: u32 },
    /// Wrong under `RetryPair`; same round, streak reset.
    Retry,
    GameOver(GameOverSummary),
}

enum Phase<P, A> {
    Idle,
    Playing(Round<P, A>),
    GameOver,
}

pub struct GameSession<G: RoundGenerator> {
    config: SessionConfig,
    generator: G,
    rng: Box<dyn RandomSource>,
    tracker: ScoreTracker,
    timer: CountdownTimer,
    store: Box<dyn ScoreStore>,
    phase: Phase<G::Prompt, G::Answer>,
    last_game_over: Option<GameOverSummary>,
}

impl<G: RoundGenerator> GameSession<G> {
    /// Validates the generator and reads the stored best score.
    pub fn new(
        config: SessionConfig,
        generator: G,
        store: impl ScoreStore + 'static,
    ) -> Result<Self, GameError> {
        generator.validate()?;

        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(Prng::new(seed)),
            None => Box::new(Prng::from_entropy()),
        };
        let store: Box<dyn ScoreStore> = Box::new(store);

        let mut tracker = ScoreTracker::new(config.scoring);
        tracker.load_best(&config.game_id, &*store);

        Ok(Self {
            config,
            generator,
            rng,
            tracker,
            timer: CountdownTimer::new(),
            store,
            phase: Phase::Idle,
            last_game_over: None,
        })
    }

    /// Replace the random source (scripted sources in tests, shared streams).
    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Idle => SessionState::Idle,
            Phase::Playing(_) => SessionState::Playing,
            Phase::GameOver => SessionState::GameOver,
        }
    }

    pub fn current_round(&self) -> Option<&Round<G::Prompt, G::Answer>> {
        match &self.phase {
            Phase::Playing(round) => Some(round),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.tracker.score()
    }

    pub fn streak(&self) -> u32 {
        self.tracker.streak()
    }

    pub fn best_score(&self) -> u32 {
        self.tracker.best()
    }

    /// Seconds left, or `None` for untimed games.
    pub fn time_remaining(&self) -> Option<u32> {
        self.config.time_limit_secs.map(|_| self.timer.remaining())
    }

    /// Whether the host's 1 Hz clock should be delivering ticks.
    pub fn wants_ticks(&self) -> bool {
        self.config.time_limit_secs.is_some()
            && self.timer.is_running()
            && matches!(self.phase, Phase::Playing(_))
    }

    pub fn last_game_over(&self) -> Option<&GameOverSummary> {
        self.last_game_over.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn store(&self) -> &dyn ScoreStore {
        &*self.store
    }

    /// Begin a fresh play-through from Idle or GameOver.
    ///
    /// If the first round cannot be generated the session stays where it was.
    pub fn start(&mut self) -> Result<(), GameError> {
        if matches!(self.phase, Phase::Playing(_)) {
            return Err(self.invalid("start"));
        }

        let first = self
            .generator
            .generate(&mut *self.rng, None, self.config.difficulty)?;
        debug_assert!(first.options_are_valid());

        self.tracker.reset();
        self.last_game_over = None;
        match self.config.time_limit_secs {
            Some(secs) => self.timer.start(secs),
            None => self.timer.stop(),
        }
        self.phase = Phase::Playing(first);
        debug!(game = %self.config.game_id, "session started");
        Ok(())
    }

    pub fn submit_answer(&mut self, answer: &G::Answer) -> Result<AnswerOutcome, GameError> {
        let Phase::Playing(round) = &self.phase else {
            return Err(self.invalid("submit_answer"));
        };

        let correct = self.generator.is_correct(round, answer);
        let points = self.tracker.record(correct, self.config.score_weight());

        if correct {
            let next = self
                .generator
                .generate(&mut *self.rng, Some(round), self.config.difficulty);
            return match next {
                Ok(next) => {
                    debug_assert!(next.options_are_valid());
                    self.phase = Phase::Playing(next);
                    debug!(
                        game = %self.config.game_id,
                        score = self.tracker.score(),
                        streak = self.tracker.streak(),
                        "correct answer"
                    );
                    Ok(AnswerOutcome::Correct { points })
                }
                Err(e) => {
                    self.finish(GameOverReason::Aborted);
                    Err(e)
                }
            };
        }

        match self.config.failure_policy {
            FailurePolicy::EndsGame => Ok(AnswerOutcome::GameOver(
                self.finish(GameOverReason::WrongAnswer),
            )),
            FailurePolicy::RetryPair => Ok(AnswerOutcome::Retry),
        }
    }

    /// Advance the countdown by one second. Untimed sessions ignore ticks.
    pub fn tick(&mut self) -> Result<Option<GameOverSummary>, GameError> {
        if !matches!(self.phase, Phase::Playing(_)) {
            return Err(self.invalid("tick"));
        }
        if self.config.time_limit_secs.is_none() {
            return Ok(None);
        }
        match self.timer.tick() {
            TickOutcome::Expired => Ok(Some(self.finish(GameOverReason::TimeUp))),
            TickOutcome::Running(_) | TickOutcome::AlreadyExpired | TickOutcome::Stopped => {
                Ok(None)
            }
        }
    }

    /// End a running session early. The best score is still committed.
    pub fn forfeit(&mut self) -> Result<GameOverSummary, GameError> {
        if !matches!(self.phase, Phase::Playing(_)) {
            return Err(self.invalid("forfeit"));
        }
        Ok(self.finish(GameOverReason::Forfeit))
    }

    fn finish(&mut self, reason: GameOverReason) -> GameOverSummary {
        self.timer.stop();
        let new_best = self
            .tracker
            .commit_if_best(&self.config.game_id, &mut *self.store);
        let summary = GameOverSummary {
            score: self.tracker.score(),
            best_score: self.tracker.best(),
            new_best,
            reason,
        };
        self.phase = Phase::GameOver;
        self.last_game_over = Some(summary.clone());
        debug!(game = %self.config.game_id, ?reason, score = summary.score, "game over");
        summary
    }

    fn invalid(&self, operation: &'static str) -> GameError {
        GameError::InvalidState {
            operation,
            state: self.state(),
        }
    }
}
