use arcade::Difficulty;
use arcade_games::GameKind;

use crate::config::PlayOverrides;
use crate::error::CliError;

pub const USAGE: &str = "\
usage:
  arcade list
  arcade scores
  arcade play <game> [--difficulty easy|medium|hard] [--seed N] [--time SECS]
  arcade reset <game>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Scores,
    Play { game: GameKind, overrides: PlayOverrides },
    Reset { game: GameKind },
    Help,
}

pub fn parse<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };

    let command = match command.as_str() {
        "list" => Command::List,
        "scores" => Command::Scores,
        "help" | "-h" | "--help" => Command::Help,
        "reset" => Command::Reset {
            game: game_arg(args.next())?,
        },
        "play" => {
            let game = game_arg(args.next())?;
            let mut overrides = PlayOverrides::default();
            while let Some(flag) = args.next() {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))?;
                match flag.as_str() {
                    "--difficulty" | "-d" => {
                        overrides.difficulty = Some(Difficulty::parse(&value).ok_or_else(|| {
                            CliError::Usage(format!("unknown difficulty {value:?}"))
                        })?);
                    }
                    "--seed" => overrides.seed = Some(number(&flag, &value)?),
                    "--time" | "-t" => overrides.time_limit_secs = Some(number(&flag, &value)?),
                    _ => return Err(CliError::Usage(format!("unknown flag {flag:?}"))),
                }
            }
            Command::Play { game, overrides }
        }
        other => return Err(CliError::Usage(format!("unknown command {other:?}"))),
    };

    if let Some(extra) = args.next() {
        return Err(CliError::Usage(format!("unexpected argument {extra:?}")));
    }
    Ok(command)
}

fn game_arg(arg: Option<String>) -> Result<GameKind, CliError> {
    let arg = arg.ok_or_else(|| CliError::Usage("missing game name".to_string()))?;
    GameKind::parse(&arg).ok_or_else(|| CliError::Usage(format!("unknown game {arg:?}")))
}

fn number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a number, got {value:?}")))
}
