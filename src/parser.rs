use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::level::{LevelParseError, SeverityLevel};
use crate::paths;

pub const WRONG_PATH: &str = "The given path is wrong. Please provide a valid file path.";
pub const NO_PERMISSION: &str = "You do not have the permission to read this file!";

/// Streams the lines of one log file that contain a configured severity token.
///
/// The source is opened on the first element request, and the open handle is
/// instance state: every iterator handed out by [`parse`](LogParser::parse)
/// continues from the current file position instead of reopening the file.
/// Reaching end of file releases the handle and exhausts the instance for
/// good.
#[derive(Debug, Default)]
pub struct LogParser {
    file_path: Option<PathBuf>,
    log_level: Option<SeverityLevel>,
    session: Session,
}

/// Lifecycle of the underlying handle. There is no edge back to `Unopened`
/// within one instance.
#[derive(Debug, Default)]
enum Session {
    #[default]
    Unopened,
    Streaming(BufReader<File>),
    Exhausted,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Store the source path, normalized to an owned `PathBuf`. No filesystem
    /// access happens here; existence is checked when the first line is
    /// requested.
    pub fn set_file_path(&mut self, value: impl Into<PathBuf>) {
        let path = paths::to_path(value);
        debug!(path = %path.display(), "source log file configured");
        self.file_path = Some(path);
    }

    pub fn log_level(&self) -> Option<SeverityLevel> {
        self.log_level
    }

    /// Validate and store the severity filter. The raw value is matched
    /// case-insensitively against the closed level set; rejected values never
    /// reach the instance state.
    pub fn set_log_level(&mut self, value: &str) -> Result<(), LevelParseError> {
        let level = value.parse::<SeverityLevel>()?;
        debug!(%level, "severity filter configured");
        self.log_level = Some(level);
        Ok(())
    }

    /// Lazy sequence of matching lines, one read per element request.
    pub fn parse(&mut self) -> MatchingLines<'_> {
        MatchingLines { parser: self }
    }

    fn next_match(&mut self) -> Option<String> {
        let level = self.log_level?;
        loop {
            match &mut self.session {
                Session::Unopened => {
                    let path = self.file_path.as_deref()?;
                    match File::open(path) {
                        Ok(file) => self.session = Session::Streaming(BufReader::new(file)),
                        Err(err) => {
                            self.report_open_failure(&err);
                            self.session = Session::Exhausted;
                            return None;
                        }
                    }
                }
                Session::Streaming(reader) => {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => {
                            debug!("log file fully consumed, releasing the handle");
                            self.session = Session::Exhausted;
                            return None;
                        }
                        Ok(_) => {
                            trim_line_ending(&mut line);
                            if line.contains(level.as_str()) {
                                debug!("yielding the next matching line");
                                return Some(line);
                            }
                        }
                        Err(err) => {
                            warn!(error = %err, "read failed mid-stream, ending the sequence");
                            self.session = Session::Exhausted;
                            return None;
                        }
                    }
                }
                Session::Exhausted => return None,
            }
        }
    }

    fn report_open_failure(&self, err: &io::Error) {
        let path = self.file_path.as_deref().unwrap_or(Path::new(""));
        if err.kind() == ErrorKind::PermissionDenied {
            println!("{NO_PERMISSION}");
            info!(path = %path.display(), "user lacks read permission on the log file");
        } else {
            println!("{WRONG_PATH}");
            info!(path = %path.display(), "log file path cannot be opened");
        }
    }
}

/// Produces-on-demand view over a [`LogParser`]'s matching lines. Dropping it
/// leaves the parser's position intact; a later `parse()` call picks up where
/// this one stopped.
#[derive(Debug)]
pub struct MatchingLines<'a> {
    parser: &'a mut LogParser,
}

impl Iterator for MatchingLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.parser.next_match()
    }
}

fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
