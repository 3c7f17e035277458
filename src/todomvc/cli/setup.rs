use clap::{Parser, Subcommand, ValueEnum};
use todomvc::config::ColorChoice;
use todomvc::model::Filter;

#[derive(Parser, Debug)]
#[command(name = "todomvc", bin_name = "todomvc", version)]
#[command(about = "A to-do list you drive one line at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start from the demo list instead of an empty one
    #[arg(long)]
    pub demo: bool,

    /// Filter to start with
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,

    /// Render styled text or one JSON frame per update
    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or set configuration
    Config {
        /// Configuration key (line-width, color, demo, filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Active => Filter::Active,
            FilterArg::Completed => Filter::Completed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_runs_a_plain_session() {
        let cli = Cli::try_parse_from(["todomvc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.demo);
        assert_eq!(cli.filter, None);
        assert_eq!(cli.output, OutputMode::Text);
    }

    #[test]
    fn session_flags_parse() {
        let cli = Cli::try_parse_from([
            "todomvc",
            "--demo",
            "--filter",
            "completed",
            "--color",
            "never",
            "--output",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(cli.demo && cli.verbose);
        assert_eq!(cli.filter.map(Filter::from), Some(Filter::Completed));
        assert_eq!(cli.color.map(ColorChoice::from), Some(ColorChoice::Never));
        assert_eq!(cli.output, OutputMode::Json);
    }

    #[test]
    fn config_subcommand_takes_optional_key_and_value() {
        let cli = Cli::try_parse_from(["todomvc", "config", "line-width", "100"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("line-width"));
                assert_eq!(value.as_deref(), Some("100"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_filter_is_rejected() {
        assert!(Cli::try_parse_from(["todomvc", "--filter", "done"]).is_err());
    }
}
