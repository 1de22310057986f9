//! Arcade - play the mini-games from a terminal
//!
//! Best scores and the optional config live in the OS data dir:
//! - Linux: ~/.local/share/arcade/
//! - Windows: %APPDATA%\arcade\
//! - MacOS: ~/Library/Application Support/arcade/

use arcade::store::{best_score_key, read_best_score};
use arcade::{GameSession, Prng};
use arcade_games::color_match::ColorMatch;
use arcade_games::memory_match::MemoryBoard;
use arcade_games::simon_says::SimonSays;
use arcade_games::speed_math::SpeedMath;
use arcade_games::tic_tac_toe::TicTacToe;
use arcade_games::word_scramble::WordScramble;
use arcade_games::GameKind;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

mod cli;
mod config;
mod error;
mod file_store;
mod paths;
mod play;
mod render;

use cli::Command;
use config::{HostConfig, PlayOverrides};
use error::CliError;
use file_store::JsonFileScoreStore;
use paths::AppPaths;
use play::{ColorFrontend, MathFrontend, ScrambleFrontend, SimonFrontend};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stderr keeps it off the game screen.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}\n\n{}", cli::USAGE);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let paths = AppPaths::new()?;
    run(command, &paths).await?;
    Ok(())
}

async fn run(command: Command, paths: &AppPaths) -> Result<(), CliError> {
    let mut stdout = tokio::io::stdout();
    match command {
        Command::Help => stdout.write_all(format!("{}\n", cli::USAGE).as_bytes()).await?,
        Command::List => stdout.write_all(render::catalog().as_bytes()).await?,
        Command::Scores => {
            let store = JsonFileScoreStore::open(paths.scores_file());
            let scores: Vec<(GameKind, u32)> = GameKind::ALL
                .into_iter()
                .filter(|g| g.keeps_score())
                .map(|g| (g, read_best_score(&store, g.id())))
                .collect();
            stdout
                .write_all(render::best_scores(&scores).as_bytes())
                .await?;
        }
        Command::Reset { game } => {
            let mut store = JsonFileScoreStore::open(paths.scores_file());
            if reset_best_score(&mut store, game)? {
                info!("Cleared best score for {}", game.id());
            } else {
                info!("No best score stored for {}", game.id());
            }
        }
        Command::Play { game, overrides } => {
            let config = HostConfig::load(&paths.config_file())?;
            play(game, &overrides, &config, paths).await?;
        }
    }
    stdout.flush().await?;
    Ok(())
}

/// Drop the stored best score. Returns whether one was stored.
fn reset_best_score(store: &mut JsonFileScoreStore, game: GameKind) -> Result<bool, CliError> {
    Ok(store.remove(&best_score_key(game.id()))?)
}

async fn play(
    game: GameKind,
    overrides: &PlayOverrides,
    config: &HostConfig,
    paths: &AppPaths,
) -> Result<(), CliError> {
    info!("Starting {}", game.title());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    let session_config = overrides.session_config(game, config);
    let store = JsonFileScoreStore::open(paths.scores_file());
    let summary = match game {
        GameKind::WordScramble => {
            let mut session = GameSession::new(session_config, WordScramble::builtin(), store)?;
            play::play_rounds(&mut session, &mut ScrambleFrontend, &mut lines, &mut out).await?
        }
        GameKind::ColorMatch => {
            let mut session = GameSession::new(session_config, ColorMatch::default(), store)?;
            play::play_rounds(&mut session, &mut ColorFrontend, &mut lines, &mut out).await?
        }
        GameKind::SpeedMath => {
            let mut session = GameSession::new(session_config, SpeedMath::new(), store)?;
            play::play_rounds(&mut session, &mut MathFrontend, &mut lines, &mut out).await?
        }
        GameKind::SimonSays => {
            let mut session = GameSession::new(session_config, SimonSays::default(), store)?;
            let mut frontend = SimonFrontend::default();
            play::play_rounds(&mut session, &mut frontend, &mut lines, &mut out).await?
        }
        GameKind::MemoryMatch => {
            let mut rng = match overrides.seed(config) {
                Some(seed) => Prng::new(seed),
                None => Prng::from_entropy(),
            };
            let mut board = MemoryBoard::new(&mut rng);
            let result = play::play_memory(&mut board, &mut lines, &mut out).await?;
            info!(moves = result.moves, complete = result.complete, "memory-match finished");
            return Ok(());
        }
        GameKind::TicTacToe => {
            let mut board = TicTacToe::new();
            let outcome = play::play_tic_tac_toe(&mut board, &mut lines, &mut out).await?;
            info!(?outcome, "tic-tac-toe finished");
            return Ok(());
        }
    };

    out.write_all(render::game_over(&summary).as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade::store::write_best_score;
    use std::fs;

    #[test]
    fn reset_clears_only_the_named_game() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scores.json");
        let mut store = JsonFileScoreStore::open(&path);
        write_best_score(&mut store, GameKind::SpeedMath.id(), 8);
        write_best_score(&mut store, GameKind::SimonSays.id(), 5);

        assert!(reset_best_score(&mut store, GameKind::SpeedMath).unwrap());
        assert!(!reset_best_score(&mut store, GameKind::SpeedMath).unwrap());

        let reopened = JsonFileScoreStore::open(&path);
        assert_eq!(read_best_score(&reopened, GameKind::SpeedMath.id()), 0);
        assert_eq!(read_best_score(&reopened, GameKind::SimonSays.id()), 5);
    }

    #[test]
    fn reset_reports_a_failed_write() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scores.json");
        let mut store = JsonFileScoreStore::open(&path);
        write_best_score(&mut store, GameKind::ColorMatch.id(), 3);

        // A directory where the file should be makes the rewrite fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let err = reset_best_score(&mut store, GameKind::ColorMatch).unwrap_err();
        assert!(matches!(err, CliError::Store(_)), "{err:?}");
    }
}
