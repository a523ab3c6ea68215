use clap::{CommandFactory, Parser};
use colored::Colorize;

use pomo::cli::args::Cli;
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::error::PomoError;
use pomo::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();

    let paths = Paths::resolve(cli.data_dir)?;
    paths.ensure_dirs()?;

    // Help never depends on the config file.
    let Some(command) = cli.command else {
        Cli::command().print_long_help()?;
        return Ok(());
    };

    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    logging::enable_logging(cli.verbose, config.general.log_level.as_deref())
        .map_err(|e| PomoError::Config(format!("{e:#}")))?;

    let format = cli.output.unwrap_or(config.general.default_output);
    let output = commands::dispatch(command, &paths, format)?;

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
