//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// ponto - Terminal client for the ponto time-clock service
#[derive(Parser, Debug)]
#[command(name = "ponto")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive TUI
    Tui {
        /// Screen to open first (e.g. Login, ViewPontos); unknown names open Home
        #[arg(short, long, default_value = "Home")]
        screen: String,

        /// Start with this user id in the session
        #[arg(long)]
        user_id: Option<String>,

        /// Start with this display name in the session
        #[arg(long)]
        user_name: Option<String>,
    },

    /// Log in and store the session token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Remove the stored session token
    Logout,

    /// List public check-in points
    Pontos {
        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List partner institutions
    Faculdades {
        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a user's profile
    Profile {
        /// User ID
        id: String,

        /// Print the profile as JSON (password omitted)
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., api.base_url)
        key: String,

        /// Value to set
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tui_defaults_to_home() {
        let cli = Cli::parse_from(["ponto", "tui"]);
        match cli.command {
            Commands::Tui {
                screen,
                user_id,
                user_name,
            } => {
                assert_eq!(screen, "Home");
                assert!(user_id.is_none());
                assert!(user_name.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
