use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

use crate::level::{LevelParseError, SeverityLevel};
use crate::parser::LogParser;

pub const GET_PATH: &str = "Enter the path of your log file: ";
pub const GET_LOG_LEVEL: &str = "Enter the log level you want to filter by: ";
pub const GET_COMMAND: &str =
    "Enter `next` for seeing the next line or `quit` for quitting the app: ";
pub const DIVIDER: &str = "------";
pub const END_OF_FILE: &str = "Reached the end of the log file.";

/// Per-step commands accepted by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Quit,
}

/// Rejected loop command, carrying the offending input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{input} is not a valid action, enter next or quit.")]
pub struct CommandError {
    pub input: String,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(Command::Next),
            "quit" => Ok(Command::Quit),
            _ => Err(CommandError {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Errors that abort the interactive session. Streaming failures are not
/// represented here: the engine absorbs those and the loop keeps running.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    InvalidLevel(#[from] LevelParseError),
    #[error(transparent)]
    InvalidCommand(#[from] CommandError),
    #[error("failed to read user input: {0}")]
    Io(#[from] io::Error),
}

/// Collects user input and drives a [`LogParser`] one matching line at a
/// time. Generic over the input/output streams so the loop can be exercised
/// against in-memory buffers; production wiring uses locked stdin/stdout.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Prompt for the log file path. The raw value is returned unvalidated;
    /// normalization happens in the engine's setter.
    pub fn prompt_path(&mut self) -> Result<String, ViewError> {
        let path = self.prompt(GET_PATH)?;
        writeln!(self.output, "{DIVIDER}")?;
        Ok(path)
    }

    /// Prompt for the severity level and validate it against the engine's
    /// vocabulary before the engine ever sees it.
    pub fn prompt_level(&mut self) -> Result<SeverityLevel, ViewError> {
        let raw = self.prompt(GET_LOG_LEVEL)?;
        let level = raw.parse::<SeverityLevel>().inspect_err(|_| {
            info!(value = raw.as_str(), "rejected log level from the prompt");
        })?;
        self.clear()?;
        Ok(level)
    }

    /// Prompt for the next loop command, accepting only `next` or `quit`.
    pub fn prompt_command(&mut self) -> Result<Command, ViewError> {
        let raw = self.prompt(GET_COMMAND)?;
        let command = raw.parse::<Command>().inspect_err(|_| {
            info!(input = raw.as_str(), "rejected loop command");
        })?;
        self.clear()?;
        Ok(command)
    }

    /// Configure an engine from the pre-supplied values (prompting for
    /// whatever is missing) and step through its matching lines until `quit`
    /// or end of file. The first match is printed eagerly.
    pub fn run(
        &mut self,
        file: Option<PathBuf>,
        level: Option<SeverityLevel>,
    ) -> Result<(), ViewError> {
        let path = match file {
            Some(path) => path,
            None => PathBuf::from(self.prompt_path()?),
        };
        let level = match level {
            Some(level) => level,
            None => self.prompt_level()?,
        };

        let mut parser = LogParser::new();
        parser.set_file_path(path);
        parser.set_log_level(level.as_str())?;

        if !self.print_next(&mut parser)? {
            return Ok(());
        }

        loop {
            match self.prompt_command()? {
                Command::Quit => {
                    debug!("user quit the session");
                    break;
                }
                Command::Next => {
                    if !self.print_next(&mut parser)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Print the next matching line, or the end-of-file notice once the
    /// sequence is exhausted. Returns whether a line was printed.
    fn print_next(&mut self, parser: &mut LogParser) -> Result<bool, ViewError> {
        match parser.parse().next() {
            Some(line) => {
                writeln!(self.output, "{line}")?;
                Ok(true)
            }
            None => {
                writeln!(self.output, "{END_OF_FILE}")?;
                Ok(false)
            }
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut raw = String::new();
        self.input.read_line(&mut raw)?;
        Ok(raw.trim_end_matches(['\r', '\n']).to_string())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            // ANSI clear plus cursor home; cosmetic only.
            write!(self.output, "\x1b[2J\x1b[1;1H")?;
            self.output.flush()?;
        }
        Ok(())
    }
}
