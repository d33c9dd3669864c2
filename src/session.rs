//! Interactive yard session
//!
//! The session owns the train and turns input lines into replies. It never
//! exits the process: `quit` comes back as [`Control::Quit`] and the caller
//! decides what to do with it.
//!
//! A session is single-threaded. It holds no locks, so sharing one between
//! threads needs external synchronization.

use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

use crate::command::{Command, CommandError, USAGE};
use crate::simulation::{format_quantity, Train, TrainError, TripSimulator};

pub const WELCOME: &str = "Welcome to the train yard.";
pub const GOODBYE: &str = "Train yard simulation ending.";
pub const ILLEGAL_FORM: &str = "Illegal use or form for this command.";
pub const PROMPT: &str = "> ";

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Output lines for one handled input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub control: Control,
}

impl Reply {
    fn output(lines: Vec<String>) -> Self {
        Self {
            lines,
            control: Control::Continue,
        }
    }

    fn quit() -> Self {
        Self {
            lines: vec![GOODBYE.to_string()],
            control: Control::Quit,
        }
    }
}

/// One train and the commands that operate it
#[derive(Debug, Default)]
pub struct Session {
    train: Train,
    simulator: TripSimulator,
    prompt: bool,
}

impl Session {
    pub fn new(simulator: TripSimulator) -> Self {
        Self {
            train: Train::new(),
            simulator,
            prompt: false,
        }
    }

    /// Write a prompt before reading each line
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn train(&self) -> &Train {
        &self.train
    }

    pub fn train_mut(&mut self) -> &mut Train {
        &mut self.train
    }

    /// Parse and execute one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::output(Vec::new());
        }

        match Command::parse(line) {
            Ok(command) => match self.execute(command) {
                Ok(reply) => reply,
                Err(e) => {
                    info!("Rejected {:?}: {}", line.trim(), e);
                    Reply::output(vec![e.to_string(), ILLEGAL_FORM.to_string()])
                }
            },
            Err(e) => {
                info!("Rejected {:?}: {:?}", line.trim(), e);
                Reply::output(Self::command_error_lines(&e))
            }
        }
    }

    fn command_error_lines(e: &CommandError) -> Vec<String> {
        if e.is_known_command() {
            vec![e.to_string(), ILLEGAL_FORM.to_string()]
        } else {
            vec![e.to_string()]
        }
    }

    /// Run a parsed command against the train
    pub fn execute(&mut self, command: Command) -> Result<Reply, TrainError> {
        let lines = match command {
            Command::AddStation { name, distance } => {
                self.train.add_station(name, distance)?;
                Vec::new()
            }
            Command::SetSpeed { speed } => {
                self.train.set_speed(speed)?;
                Vec::new()
            }
            Command::AddCar {
                content,
                destination,
            } => {
                self.train.add_car(content, destination)?;
                Vec::new()
            }
            Command::ShowRoute => self.show_route(),
            Command::ShowTrain => self.show_train(),
            Command::Start => {
                let report = self.simulator.run(&mut self.train)?;
                report
                    .events
                    .iter()
                    .map(ToString::to_string)
                    .chain(std::iter::once(report.summary()))
                    .collect()
            }
            Command::Help => USAGE.iter().map(ToString::to_string).collect(),
            Command::Quit => return Ok(Reply::quit()),
        };
        Ok(Reply::output(lines))
    }

    fn show_route(&self) -> Vec<String> {
        if self.train.route().is_empty() {
            return Vec::new();
        }
        vec![self.train.route().to_string()]
    }

    fn show_train(&self) -> Vec<String> {
        std::iter::once(format!(
            "engine( {} )",
            format_quantity(self.train.speed())
        ))
        .chain(self.train.manifest().iter().map(ToString::to_string))
        .collect()
    }

    /// Drive the session from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", WELCOME).context("Failed to write banner")?;

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(output, "{}", PROMPT).context("Failed to write prompt")?;
                output.flush().context("Failed to flush output")?;
            }

            let Some(line) = lines.next() else {
                writeln!(output, "{}", GOODBYE).context("Failed to write output")?;
                break;
            };
            let line = line.context("Failed to read command")?;

            let reply = self.handle_line(&line);
            for text in &reply.lines {
                writeln!(output, "{}", text).context("Failed to write output")?;
            }
            if reply.control == Control::Quit {
                break;
            }
        }

        output.flush().context("Failed to flush output")?;
        Ok(())
    }
}
