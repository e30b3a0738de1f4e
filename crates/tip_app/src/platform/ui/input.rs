use thiserror::Error;
use tip_core::{JobId, Msg};

use crate::platform::config::StartDefaults;

/// Everything the controller loop consumes, from the backend or the user.
#[derive(Debug, Clone, PartialEq)]
pub enum AppInput {
    Msg(Msg),
    Resize { width: f64, height: f64 },
    Density(f64),
    Help,
    Quit,
    BackendClosed,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    Missing {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

pub const HELP: &str = "\
commands:
  file                               queue one image
  folder                             queue every image in a folder
  start [points] [max_time] [max_size]
                                     start the batch, or stop it while running
  remove <id>                        drop a job
  resize <width> <height>            resize the preview area
  density <ratio>                    set the device pixel ratio
  quit";

/// Parses one terminal line. Blank lines map to `Ok(None)`.
pub fn parse_input(line: &str, defaults: StartDefaults) -> Result<Option<AppInput>, InputError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let input = match command {
        "file" => AppInput::Msg(Msg::SelectFileClicked),
        "folder" => AppInput::Msg(Msg::SelectFolderClicked),
        "start" | "stop" => AppInput::Msg(Msg::StartClicked {
            points: number_or(words.next(), defaults.points)?,
            max_time_seconds: number_or(words.next(), defaults.max_time_seconds)?,
            max_size_bytes: number_or(words.next(), defaults.max_size_bytes)?,
        }),
        "remove" => {
            let id = words.next().ok_or(InputError::Missing {
                command: "remove",
                what: "a job id",
            })?;
            AppInput::Msg(Msg::RemoveClicked {
                job_id: JobId::new(id),
            })
        }
        "resize" => {
            let missing = InputError::Missing {
                command: "resize",
                what: "a width and a height",
            };
            let width = words.next().ok_or_else(|| missing.clone())?;
            let height = words.next().ok_or(missing)?;
            AppInput::Resize {
                width: float(width)?,
                height: float(height)?,
            }
        }
        "density" => {
            let ratio = words.next().ok_or(InputError::Missing {
                command: "density",
                what: "a ratio",
            })?;
            AppInput::Density(float(ratio)?)
        }
        "help" | "?" => AppInput::Help,
        "quit" | "exit" => AppInput::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(input))
}

/// Integer coercion only; the backend owns range checks.
fn number_or(word: Option<&str>, default: u32) -> Result<u32, InputError> {
    match word {
        None => Ok(default),
        Some(word) => word
            .parse()
            .map_err(|_| InputError::NotANumber(word.to_string())),
    }
}

fn float(word: &str) -> Result<f64, InputError> {
    word.parse()
        .map_err(|_| InputError::NotANumber(word.to_string()))
}
