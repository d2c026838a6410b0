//! Command-line interface for people-search
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and CLI overrides
//! - Subcommands (version, completion, config, one-shot search)

pub mod completion;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::{ConfigError, Result};
use crate::oneshot;

/// Search people with live suggestions
#[derive(Parser, Debug)]
#[command(
    name = "people-search",
    version,
    about = "Search people with live autocomplete",
    long_about = "A terminal search box that fetches a list of people once, suggests matches
as you type, and shows the selected people's contact details."
)]
pub struct CliArgs {
    /// Endpoint returning a JSON array of people
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Read people from a local JSON file instead of the endpoint
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Number of suggestions shown under the input
    #[arg(long, value_name = "N")]
    pub max_suggestions: Option<usize>,

    /// Match names only, not usernames
    #[arg(long)]
    pub name_only: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for people-search
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Search once and print the results
    Search {
        /// Text to search for (at least two characters)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Output format (cards, table, json, json-pretty)
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;
        Self::apply_args_to_config(&mut config, args)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the configuration file in use
    pub fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }

    /// Whether the run is the interactive widget rather than a subcommand
    pub fn is_interactive(&self) -> bool {
        self.args.command.is_none()
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) -> Result<()> {
        Self::apply_source_args(config, args);
        Self::apply_display_args(config, args)?;
        Self::apply_logging_args(config, args);
        Ok(())
    }

    /// Apply source-related CLI arguments to configuration
    fn apply_source_args(config: &mut Config, args: &CliArgs) {
        if let Some(url) = &args.url {
            config.source.url = url.clone();
            // An explicit URL beats a file from the config file
            config.source.file = None;
        }
        if let Some(file) = &args.file {
            config.source.file = Some(file.clone());
        }
        if let Some(timeout) = args.timeout {
            config.source.timeout = timeout;
        }
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) -> Result<()> {
        if let Some(n) = args.max_suggestions {
            config.display.max_suggestions = n;
        }
        if args.name_only {
            config.display.match_username = false;
        }
        if args.no_color {
            config.display.color_output = false;
        }
        if let Some(Commands::Search {
            format: Some(format),
            ..
        }) = &args.command
        {
            config.display.format = Self::parse_output_format(format)?;
        }
        Ok(())
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Parse output format string
    fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
        match format_str.to_lowercase().as_str() {
            "cards" => Ok(OutputFormat::Cards),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Ok(OutputFormat::JsonPretty),
            _ => Err(ConfigError::InvalidValue {
                field: "format".to_string(),
                value: format_str.to_string(),
            }
            .into()),
        }
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub async fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Search { query, .. }) => {
                oneshot::run(&self.config, query, !self.args.quiet).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("people-search version {}", env!("CARGO_PKG_VERSION"));
    }

    /// Handle config subcommand
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file(&self.config_path())?;
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self, path: &Path) -> Result<()> {
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist, defaults apply");
            return Ok(());
        }

        match Config::load_from_file(Some(path)) {
            Ok(config) => match config.validate() {
                Ok(()) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {}", e),
            },
            Err(e) => println!("Failed to load configuration: {}", e),
        }

        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        println!("Configuration file: {}", self.config_path().display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args).unwrap();
        CliInterface { args, config }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(vec!["people-search"]).unwrap();
        assert!(args.url.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_with_flags() {
        let args =
            CliArgs::try_parse_from(vec!["people-search", "--no-color", "--quiet"]).unwrap();
        assert!(args.no_color);
        assert!(args.quiet);
    }

    #[test]
    fn test_overrides() {
        let cli = cli(&[
            "people-search",
            "--url",
            "http://localhost:8080/users",
            "--timeout",
            "3",
            "--max-suggestions",
            "8",
            "--name-only",
            "--no-color",
            "-v",
        ]);
        let config = cli.config();
        assert_eq!(config.source.url, "http://localhost:8080/users");
        assert_eq!(config.source.timeout, 3);
        assert_eq!(config.display.max_suggestions, 8);
        assert!(!config.display.match_username);
        assert!(!config.display.color_output);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_file_override() {
        let cli = cli(&["people-search", "--file", "people.json"]);
        assert_eq!(
            cli.config().source.file.as_deref(),
            Some(Path::new("people.json"))
        );
    }

    #[test]
    fn test_search_subcommand_format() {
        let cli = cli(&["people-search", "search", "an", "--format", "table"]);
        assert_eq!(cli.config().display.format, OutputFormat::Table);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let args =
            CliArgs::try_parse_from(vec!["people-search", "search", "an", "--format", "xml"])
                .unwrap();
        let mut config = Config::default();
        assert!(CliInterface::apply_args_to_config(&mut config, &args).is_err());
    }

    #[test]
    fn test_quiet_lowers_log_level() {
        let cli = cli(&["people-search", "-q"]);
        assert_eq!(cli.config().logging.level, LogLevel::Error);
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        let cli = cli(&["people-search", "-q", "--vv"]);
        assert_eq!(cli.config().logging.level, LogLevel::Trace);
    }
}
