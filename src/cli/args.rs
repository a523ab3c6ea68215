use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer for the command line")]
#[command(long_about = "pomo - a Pomodoro timer for the command line

Runs a countdown for a work session or a break and records every completed
session in a journal for the day. Sessions interrupted before the countdown
reaches zero are not recorded.

QUICK START:
  pomo p    Start a 25-minute Pomodoro
  pomo s    Start a 5-minute short break
  pomo l    Start a 15-minute long break
  pomo t    Show today's timeline

TIMELINE:
  O  Pomodoro
  .  Short break
  X  Long break")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for terminal output or 'json' for scripting.
    /// Defaults to the config file's setting, or 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding the session journals
    ///
    /// Defaults to $XDG_DATA_HOME/pomodoro or ~/.local/share/pomodoro.
    #[arg(long, global = true, env = "POMO_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start a Pomodoro (25 minutes)
    #[command(name = "p", alias = "pomodoro")]
    Pomodoro,

    /// Start a short break (5 minutes)
    #[command(name = "s", alias = "short")]
    ShortBreak,

    /// Start a long break (15 minutes)
    #[command(name = "l", alias = "long")]
    LongBreak,

    /// Show the timeline of today's sessions
    ///
    /// Prints one glyph per completed session in the order they finished.
    ///
    /// Examples:
    ///   pomo t
    ///   pomo t --date 2024-03-01
    #[command(name = "t", alias = "timeline")]
    Timeline(TimelineArgs),

    /// Generate shell completions
    ///
    /// Example: pomo completions zsh > ~/.zsh/completions/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Any other command word, with the arguments that followed it
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct TimelineArgs {
    /// Day to show instead of today (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_has_no_command() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_session_commands() {
        for (word, command) in [
            ("p", Commands::Pomodoro),
            ("s", Commands::ShortBreak),
            ("l", Commands::LongBreak),
            ("pomodoro", Commands::Pomodoro),
            ("short", Commands::ShortBreak),
            ("long", Commands::LongBreak),
        ] {
            let cli = Cli::try_parse_from(["pomo", word]).unwrap();
            assert_eq!(cli.command, Some(command), "{word}");
        }
    }

    #[test]
    fn test_timeline_command() {
        let cli = Cli::try_parse_from(["pomo", "t"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Timeline(TimelineArgs::default())));

        let cli = Cli::try_parse_from(["pomo", "timeline", "--date", "2024-03-01"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Timeline(TimelineArgs {
                date: Some("2024-03-01".to_string())
            }))
        );
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["pomo", "t", "-o", "json", "--data-dir", "/tmp/x", "-vv"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_command_is_captured() {
        let cli = Cli::try_parse_from(["pomo", "--data-dir", "/tmp/x", "zzz", "now"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Unknown(vec!["zzz".to_string(), "now".to_string()]))
        );
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
