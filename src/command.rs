//! Parsing of yard commands
//!
//! A line is split on whitespace into a command name and its arguments and
//! validated once here. Anything wrong with the shape of the arguments is a
//! [`CommandError`]; whether the train accepts the command is decided later.

use thiserror::Error;

/// A validated command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddStation { name: String, distance: f64 },
    SetSpeed { speed: f64 },
    AddCar { content: String, destination: String },
    ShowRoute,
    ShowTrain,
    Start,
    Help,
    Quit,
}

/// Argument-shape problems found while parsing a line
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Illegal command name.")]
    UnknownCommand { name: String },

    #[error("Incorrect number of arguments.")]
    ArgCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{argument} is not a number")]
    NotANumber {
        argument: &'static str,
        text: String,
    },
}

impl CommandError {
    /// Whether the command name itself was recognized
    pub fn is_known_command(&self) -> bool {
        !matches!(self, CommandError::UnknownCommand { .. })
    }
}

/// Usage lines printed by `help`
pub const USAGE: [&str; 8] = [
    "add_car <content> <station>",
    "set_speed <speed>",
    "add_station <station> <distance>",
    "show_route",
    "show_train",
    "start",
    "help",
    "quit",
];

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        match name {
            "add_station" => {
                let [station, distance] = expect_args::<2>("add_station", &args)?;
                Ok(Command::AddStation {
                    name: station.to_string(),
                    distance: parse_decimal("Distance", distance)?,
                })
            }
            "set_speed" => {
                let [speed] = expect_args::<1>("set_speed", &args)?;
                Ok(Command::SetSpeed {
                    speed: parse_decimal("Argument", speed)?,
                })
            }
            "add_car" => {
                let [content, destination] = expect_args::<2>("add_car", &args)?;
                Ok(Command::AddCar {
                    content: content.to_string(),
                    destination: destination.to_string(),
                })
            }
            "show_route" => expect_args::<0>("show_route", &args).map(|_| Command::ShowRoute),
            "show_train" => expect_args::<0>("show_train", &args).map(|_| Command::ShowTrain),
            "start" => expect_args::<0>("start", &args).map(|_| Command::Start),
            "help" => expect_args::<0>("help", &args).map(|_| Command::Help),
            "quit" => expect_args::<0>("quit", &args).map(|_| Command::Quit),
            other => Err(CommandError::UnknownCommand {
                name: other.to_string(),
            }),
        }
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::ArgCount {
        command,
        expected: N,
        found: args.len(),
    })
}

/// Parse a plain decimal: an optional `-`, then digits with at most one `.`
///
/// Exponents, `inf` and `nan` are not numbers here, and neither is a
/// literal too large to be finite.
pub fn parse_decimal(argument: &'static str, text: &str) -> Result<f64, CommandError> {
    let not_a_number = || CommandError::NotANumber {
        argument,
        text: text.to_string(),
    };

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let well_formed = unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;
    if !well_formed {
        return Err(not_a_number());
    }

    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(not_a_number)
}
