pub mod cli;
pub mod config;
pub mod level;
pub mod parser;
pub mod paths;
pub mod view;

pub use cli::{Cli, cli_parse};
pub use config::{ConfigError, LoggingConfig, load_logging_config, setup_logging};
pub use level::{LevelParseError, SeverityLevel};
pub use parser::{LogParser, MatchingLines};
pub use view::{Command, CommandError, ConsoleView, ViewError};
