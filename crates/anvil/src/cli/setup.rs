use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "anvil",
    bin_name = "anvil",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inspect view resolution and menus of an Anvil site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root (directory holding anvil.toml)
    #[arg(short, long, global = true, value_name = "DIR", help_heading = "Options")]
    pub root: Option<PathBuf>,

    /// Theme to use instead of the configured one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub theme: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a view identifier (e.g. `home`, `blog::post`) to its template file
    Resolve {
        view: String,

        /// Extra location searched before all others (repeatable)
        #[arg(short = 'l', long = "location", value_name = "DIR")]
        locations: Vec<PathBuf>,
    },

    /// Show every directory and file probed for a view, in search order
    Candidates {
        view: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print a menu tree
    Menu {
        name: String,

        /// Requester's power; omit for an unfiltered menu
        #[arg(short, long, allow_negative_numbers = true)]
        power: Option<i64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List the site's menus
    Menus,

    /// Show the effective configuration
    Config,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_locations() {
        let cli = Cli::try_parse_from([
            "anvil", "resolve", "blog::post", "-l", "/a", "--location", "/b",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve { view, locations } => {
                assert_eq!(view, "blog::post");
                assert_eq!(locations, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_menu_with_negative_power() {
        let cli = Cli::try_parse_from(["anvil", "menu", "main", "--power", "-1", "-o", "json"])
            .unwrap();
        match cli.command {
            Commands::Menu {
                name,
                power,
                output,
            } => {
                assert_eq!(name, "main");
                assert_eq!(power, Some(-1));
                assert_eq!(output, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["anvil", "menus", "--root", "/site", "-t", "dark", "-v"])
            .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/site")));
        assert_eq!(cli.theme.as_deref(), Some("dark"));
        assert!(cli.verbose);
    }

    #[test]
    fn menu_power_defaults_to_unfiltered() {
        let cli = Cli::try_parse_from(["anvil", "menu", "main"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Menu {
                power: None,
                output: OutputFormat::Text,
                ..
            }
        ));
    }
}
