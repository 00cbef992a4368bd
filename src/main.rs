use std::io::{self, IsTerminal};
use std::process;

use anyhow::Context;
use colored::Colorize;

use log_viewer::{ConsoleView, cli_parse, setup_logging};

fn main() -> anyhow::Result<()> {
    let cli = cli_parse();

    if let Err(err) = setup_logging(&cli.log_config) {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let clear_screen = !cli.no_clear && stdout.is_terminal();

    let mut view = ConsoleView::new(stdin.lock(), stdout.lock(), clear_screen);
    view.run(cli.file, cli.level)
        .context("interactive session failed")?;

    Ok(())
}
