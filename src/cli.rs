use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "focus", about = "Browse, join and chat in focus groups (CLI + TUI)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Print the group list, optionally toggling membership first
    Groups {
        /// Group id to join or leave; repeat to toggle several in order
        #[arg(long = "toggle", value_name = "ID")]
        toggle: Vec<String>,
    },
    /// Print one group's conversation, optionally sending messages first
    Chat {
        group_id: String,
        /// Message to send; repeat to send several in order
        #[arg(long = "send", value_name = "TEXT")]
        send: Vec<String>,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["focus"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["focus", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_repeated_toggles_in_order() {
        let cli = Cli::parse_from(["focus", "groups", "--toggle", "2", "--toggle", "5"]);

        match cli.command_or_default() {
            Command::Groups { toggle } => assert_eq!(toggle, vec!["2", "5"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_chat_with_messages() {
        let cli = Cli::parse_from(["focus", "chat", "3", "--send", "hi", "--send", "bye"]);

        match cli.command_or_default() {
            Command::Chat { group_id, send } => {
                assert_eq!(group_id, "3");
                assert_eq!(send, vec!["hi", "bye"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn chat_requires_a_group_id() {
        assert!(Cli::try_parse_from(["focus", "chat"]).is_err());
    }
}
