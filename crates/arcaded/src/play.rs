//! Terminal game loops.
//!
//! Round games multiplex a 1 Hz interval and input lines on one task, so
//! every session call happens in order. Board games only read lines.

use std::time::Duration;

use arcade::{AnswerOutcome, GameOverSummary, GameSession, Round, RoundGenerator};
use arcade_games::color_match::{Color, ColorMatch, ColorPrompt};
use arcade_games::memory_match::{FlipOutcome, MemoryBoard};
use arcade_games::simon_says::{self, Pad, PlaybackStep, PressOutcome, SimonInput, SimonSays};
use arcade_games::speed_math::{Problem, SpeedMath};
use arcade_games::tic_tac_toe::{Outcome, TicTacToe};
use arcade_games::word_scramble::{ScramblePrompt, WordScramble};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};
use tokio::time::{self, Instant};
use tracing::debug;

use crate::error::CliError;
use crate::render;

const SECOND: Duration = Duration::from_secs(1);
/// How long a mismatched memory pair stays face up.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// What one input line meant for the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<A> {
    Answer(A),
    /// Valid so far; wait for more input.
    Pending,
    Invalid(String),
}

/// Terminal presentation of one round game.
pub trait Frontend<G: RoundGenerator> {
    fn prompt(&self, round: &Round<G::Prompt, G::Answer>) -> String;

    fn parse(&mut self, round: &Round<G::Prompt, G::Answer>, line: &str) -> Parsed<G::Answer>;

    /// Timed reveal played before the prompt.
    fn playback(&self, _round: &Round<G::Prompt, G::Answer>) -> Vec<PlaybackStep> {
        Vec::new()
    }
}

/// Option number or colour name.
#[derive(Debug, Default)]
pub struct ColorFrontend;

impl Frontend<ColorMatch> for ColorFrontend {
    fn prompt(&self, round: &Round<ColorPrompt, Color>) -> String {
        render::color_round(round)
    }

    fn parse(
        &mut self,
        round: &Round<ColorPrompt, Color>,
        line: &str,
    ) -> Parsed<Color> {
        if let Some(color) = Color::parse(line) {
            return Parsed::Answer(color);
        }
        match option_number(line, round.options.len()) {
            Some(i) => Parsed::Answer(round.options[i]),
            None => Parsed::Invalid(format!("pick 1-{} or a colour name", round.options.len())),
        }
    }
}

/// The result itself, typed out.
#[derive(Debug, Default)]
pub struct MathFrontend;

impl Frontend<SpeedMath> for MathFrontend {
    fn prompt(&self, round: &Round<Problem, i64>) -> String {
        render::math_round(round)
    }

    fn parse(
        &mut self,
        _round: &Round<Problem, i64>,
        line: &str,
    ) -> Parsed<i64> {
        match line.parse() {
            Ok(v) => Parsed::Answer(v),
            Err(_) => Parsed::Invalid("type the result as a whole number".to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrambleFrontend;

impl Frontend<WordScramble> for ScrambleFrontend {
    fn prompt(&self, round: &Round<ScramblePrompt, String>) -> String {
        render::scramble_round(round)
    }

    fn parse(
        &mut self,
        _round: &Round<ScramblePrompt, String>,
        line: &str,
    ) -> Parsed<String> {
        Parsed::Answer(line.to_string())
    }
}

/// Pads separated by spaces, over one or more lines. A wrong pad is
/// submitted straight away.
#[derive(Debug, Default)]
pub struct SimonFrontend {
    input: SimonInput,
}

impl Frontend<SimonSays> for SimonFrontend {
    fn prompt(&self, round: &Round<Vec<Pad>, Vec<Pad>>) -> String {
        format!(
            "Repeat the {} pad(s): r(ed) b(lue) g(reen) y(ellow)\n",
            round.answer.len()
        )
    }

    fn parse(&mut self, round: &Round<Vec<Pad>, Vec<Pad>>, line: &str) -> Parsed<Vec<Pad>> {
        let mut pads = Vec::new();
        for word in line.split_whitespace() {
            match Pad::parse(word) {
                Some(pad) => pads.push(pad),
                None => return Parsed::Invalid(format!("{word:?} is not a pad")),
            }
        }
        for pad in pads {
            match self.input.press(&round.answer, pad) {
                PressOutcome::Pending => {}
                PressOutcome::Complete | PressOutcome::Mismatch => {
                    return Parsed::Answer(self.input.take());
                }
            }
        }
        Parsed::Pending
    }

    fn playback(&self, round: &Round<Vec<Pad>, Vec<Pad>>) -> Vec<PlaybackStep> {
        simon_says::playback(&round.answer)
    }
}

fn option_number(line: &str, len: usize) -> Option<usize> {
    let n: usize = line.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

async fn say<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> Result<(), CliError> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

async fn play_back<W: AsyncWrite + Unpin>(
    steps: &[PlaybackStep],
    out: &mut W,
) -> Result<(), CliError> {
    if steps.is_empty() {
        return Ok(());
    }
    let start = Instant::now();
    for step in steps {
        time::sleep_until(start + step.on_at).await;
        say(out, &format!("\r  {:<8}", step.pad.name().to_uppercase())).await?;
        time::sleep_until(start + step.off_at).await;
        say(out, "\r          ").await?;
    }
    say(out, "\r").await
}

async fn show_round<G, F, W>(
    session: &GameSession<G>,
    frontend: &F,
    out: &mut W,
) -> Result<(), CliError>
where
    G: RoundGenerator,
    F: Frontend<G>,
    W: AsyncWrite + Unpin,
{
    let Some(round) = session.current_round() else {
        return Ok(());
    };
    play_back(&frontend.playback(round), out).await?;
    let mut text = frontend.prompt(round);
    if let Some(left) = session.time_remaining() {
        text = format!("[{left}s] {text}");
    }
    say(out, &text).await
}

/// Play one session to game over. `quit` or end of input forfeits.
pub async fn play_rounds<G, F, R, W>(
    session: &mut GameSession<G>,
    frontend: &mut F,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<GameOverSummary, CliError>
where
    G: RoundGenerator,
    F: Frontend<G>,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    session.start()?;
    say(
        out,
        &format!("{} (best {})\n", session.config().game_id, session.best_score()),
    )
    .await?;
    show_round(session, frontend, out).await?;

    let mut ticker = time::interval_at(Instant::now() + SECOND, SECOND);
    loop {
        tokio::select! {
            _ = ticker.tick(), if session.wants_ticks() => {
                if let Some(summary) = session.tick()? {
                    return Ok(summary);
                }
                if let Some(left @ (10 | 5 | 3 | 2 | 1)) = session.time_remaining() {
                    say(out, &format!("  {left}s left\n")).await?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    return Ok(session.forfeit()?);
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit") {
                    return Ok(session.forfeit()?);
                }

                let Some(round) = session.current_round() else {
                    return Ok(session.forfeit()?);
                };
                let answer = match frontend.parse(round, line) {
                    Parsed::Answer(answer) => answer,
                    Parsed::Pending => continue,
                    Parsed::Invalid(msg) => {
                        say(out, &format!("  {msg}\n")).await?;
                        continue;
                    }
                };

                match session.submit_answer(&answer)? {
                    AnswerOutcome::Correct { points } => {
                        say(out, &format!("  correct! +{points} (score {})\n", session.score())).await?;
                        show_round(session, frontend, out).await?;
                    }
                    AnswerOutcome::Retry => say(out, "  not quite, try again\n").await?,
                    AnswerOutcome::GameOver(summary) => return Ok(summary),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryResult {
    pub moves: u32,
    pub complete: bool,
}

/// Flip cards by number (1-16) until the board is clear.
pub async fn play_memory<R, W>(
    board: &mut MemoryBoard,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<MemoryResult, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    say(out, &render::memory_board(board)).await?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        let Some(index) = option_number(line, board.cards().len()) else {
            say(out, "  pick a card number\n").await?;
            continue;
        };
        match board.flip(index) {
            FlipOutcome::Ignored => say(out, "  that card can't be flipped now\n").await?,
            FlipOutcome::FirstCard | FlipOutcome::Matched => {
                say(out, &render::memory_board(board)).await?
            }
            FlipOutcome::Mismatch => {
                say(out, &render::memory_board(board)).await?;
                time::sleep(MISMATCH_DELAY).await;
                board.hide_mismatch();
                say(out, "  no match\n").await?;
            }
            FlipOutcome::Complete => {
                say(out, &render::memory_board(board)).await?;
                say(out, &format!("Board cleared in {} moves!\n", board.moves())).await?;
                break;
            }
        }
    }
    Ok(MemoryResult {
        moves: board.moves(),
        complete: board.is_complete(),
    })
}

/// Two players sharing the keyboard: cells 1-9, `reset` to start over.
pub async fn play_tic_tac_toe<R, W>(
    board: &mut TicTacToe,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<Outcome, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    say(out, &render::tic_tac_toe(board)).await?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.eq_ignore_ascii_case("reset") {
            board.reset();
        } else {
            let played = option_number(line, 9).is_some_and(|cell| board.play(cell));
            if !played {
                say(out, "  pick an empty cell 1-9\n").await?;
                continue;
            }
        }
        say(out, &render::tic_tac_toe(board)).await?;
        if board.outcome() != Outcome::InProgress {
            break;
        }
    }
    Ok(board.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade::{GameOverReason, MemoryScoreStore, Prng, SessionConfig};
    use arcade_games::memory_match::CARDS;
    use arcade_games::tic_tac_toe::Player;
    use arcade_games::words::WordEntry;
    use arcade_games::GameKind;
    use tokio::io::{AsyncBufReadExt, BufReader};

    fn lines(input: &str) -> Lines<BufReader<&[u8]>> {
        BufReader::new(input.as_bytes()).lines()
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn scramble_answers_then_quits() {
        let pool = vec![WordEntry::new("REACT", "ui library")];
        let config = GameKind::WordScramble
            .session_config(Default::default())
            .with_seed(4);
        let mut session =
            GameSession::new(config, WordScramble::new(pool), MemoryScoreStore::new()).unwrap();
        let mut out = Vec::new();

        let summary = play_rounds(
            &mut session,
            &mut ScrambleFrontend,
            &mut lines("react\n\nReact\nquit\n"),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(summary.score, 2);
        assert_eq!(summary.reason, GameOverReason::Forfeit);
        assert!(summary.new_best);
        assert_eq!(
            session.store().get("word-scramble-best-score").unwrap().as_deref(),
            Some("2")
        );
        let out = text(out);
        assert!(out.contains("[30s] Unscramble: "));
        assert!(out.contains("hint: ui library"));
    }

    #[test]
    fn color_option_numbers_pick_options() {
        let config = GameKind::ColorMatch
            .session_config(Default::default())
            .with_seed(8);
        let mut session =
            GameSession::new(config, ColorMatch::default(), MemoryScoreStore::new()).unwrap();
        session.start().unwrap();
        let round = session.current_round().unwrap().clone();
        let pos = round.options.iter().position(|c| *c == round.answer).unwrap();

        let mut f = ColorFrontend;
        assert_eq!(f.parse(&round, &(pos + 1).to_string()), Parsed::Answer(round.answer));
        assert_eq!(f.parse(&round, "purple"), Parsed::Answer(Color::Purple));
        assert!(matches!(f.parse(&round, "9"), Parsed::Invalid(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn clock_ends_an_idle_timed_game() {
        let config = SessionConfig::new("speed-math")
            .with_time_limit(3)
            .with_seed(1);
        let mut session = GameSession::new(config, SpeedMath::new(), MemoryScoreStore::new())
            .unwrap();
        // Keep the writer alive so reads stay pending.
        let (_keep, reader) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();
        let mut out = Vec::new();

        let summary = play_rounds(&mut session, &mut MathFrontend, &mut lines, &mut out)
            .await
            .unwrap();

        assert_eq!(summary.reason, GameOverReason::TimeUp);
        assert_eq!(summary.score, 0);
        assert!(text(out).contains("2s left"));
    }

    #[tokio::test(start_paused = true)]
    async fn simon_accepts_presses_across_lines() {
        // Same seed as the session, so the probe sees the same sequences.
        let mut probe = SimonSays::default();
        let mut rng = Prng::new(12);
        let r1 = probe.generate(&mut rng, None, Default::default()).unwrap();
        let r2 = probe.generate(&mut rng, Some(&r1), Default::default()).unwrap();
        let first = r1.answer[0];

        // Full name for the first round, one initial per line for the second.
        let mut script = format!("{}\n", first.name());
        for pad in &r2.answer {
            script.push_str(&format!("{}\n", &pad.name()[..1]));
        }
        let wrong = Pad::ALL.into_iter().find(|p| *p != first).unwrap();
        script.push_str(&format!("{}\n", wrong.name()));

        let config = GameKind::SimonSays
            .session_config(Default::default())
            .with_seed(12);
        let mut session =
            GameSession::new(config, SimonSays::default(), MemoryScoreStore::new()).unwrap();
        let mut out = Vec::new();
        let summary = play_rounds(
            &mut session,
            &mut SimonFrontend::default(),
            &mut lines(&script),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(summary.reason, GameOverReason::WrongAnswer);
        assert_eq!(summary.score, 2);
        assert!(text(out).contains(&first.name().to_uppercase()));
    }

    #[tokio::test(start_paused = true)]
    async fn memory_board_clears() {
        let mut board = MemoryBoard::new(&mut Prng::new(5));
        let mut script = String::new();
        // One miss first.
        let miss = (1..CARDS)
            .find(|&j| board.cards()[j].symbol != board.cards()[0].symbol)
            .unwrap();
        script.push_str(&format!("1\n{}\n", miss + 1));
        let mut done = vec![false; CARDS];
        for i in 0..CARDS {
            if done[i] {
                continue;
            }
            let j = (i + 1..CARDS)
                .find(|&j| board.cards()[j].symbol == board.cards()[i].symbol)
                .unwrap();
            done[i] = true;
            done[j] = true;
            script.push_str(&format!("{}\n{}\n", i + 1, j + 1));
        }

        let mut out = Vec::new();
        let result = play_memory(&mut board, &mut lines(&script), &mut out)
            .await
            .unwrap();
        assert_eq!(
            result,
            MemoryResult {
                moves: 9,
                complete: true
            }
        );
        let out = text(out);
        assert!(out.contains("no match"));
        assert!(out.contains("Board cleared in 9 moves!"));
    }

    #[tokio::test]
    async fn tic_tac_toe_until_a_win() {
        let mut board = TicTacToe::new();
        let mut out = Vec::new();
        let outcome = play_tic_tac_toe(
            &mut board,
            &mut lines("1\n1\n4\n2\n5\n3\n9\n"),
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Won(Player::X));
        let out = text(out);
        assert!(out.contains("pick an empty cell 1-9"));
        assert!(out.contains("Winner: X"));
    }
}
