//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::consts::{DEFAULT_RELOAD_DELAY_MS, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::page::ReloadPolicy;
use crate::render::{OutputFormat, RenderOptions};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum FormatArg {
    /// Terminal table (default)
    #[default]
    Table,
    /// HTML entry blocks
    Html,
    /// JSON document
    Json,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ReloadMode {
    /// Wait for the entry to be stored, then reload (default)
    #[default]
    Await,
    /// Reload after a fixed delay without waiting for the write
    Delay,
}

#[derive(Parser, Debug)]
#[command(name = "guestbook")]
#[command(about = "Read and sign a flat-text guestbook", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Guestbook URL (GET reads it, POST signs it)
    #[arg(short = 'U', long, global = true, value_name = "URL")]
    pub(crate) url: Option<String>,

    /// Use a local guestbook file instead of a URL
    #[arg(short = 'F', long, global = true, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub(crate) format: FormatArg,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Escape markup in names and messages for HTML output
    #[arg(long, global = true)]
    pub(crate) escape_html: bool,

    /// Enable debug output (dump parse state and request timings)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Suppress status lines on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// When to reload after signing
    #[arg(long, global = true, value_enum, default_value = "await")]
    pub(crate) reload: ReloadMode,

    /// Delay before reloading with --reload=delay
    #[arg(long, global = true, value_name = "MS")]
    pub(crate) reload_delay_ms: Option<u64>,
}

fn parse_config_value<T: ValueEnum>(key: &'static str, input: &str) -> Result<T, AppError> {
    T::from_str(input, true).map_err(|_| AppError::InvalidConfig {
        key,
        input: input.to_string(),
    })
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Result<Self, AppError> {
        // A store named on the command line replaces the configured one entirely
        if self.url.is_none() && self.file.is_none() {
            self.url = config.url.clone();
            self.file = config.file.clone();
        }

        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.escape_html && config.escape_html {
            self.escape_html = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, only override if CLI is at default
        if let Some(ref format) = config.format
            && self.format == FormatArg::Table
        {
            self.format = parse_config_value("format", format)?;
        }
        if let Some(ref color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = parse_config_value("color", color)?;
        }
        if let Some(ref reload) = config.reload
            && self.reload == ReloadMode::Await
        {
            self.reload = parse_config_value("reload", reload)?;
        }

        if self.timeout.is_none() {
            self.timeout = config.timeout_secs;
        }
        if self.reload_delay_ms.is_none() {
            self.reload_delay_ms = config.reload_delay_ms;
        }

        Ok(self)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub(crate) fn reload_policy(&self) -> ReloadPolicy {
        match self.reload {
            ReloadMode::Await => ReloadPolicy::AwaitWrite,
            ReloadMode::Delay => ReloadPolicy::FixedDelay(Duration::from_millis(
                self.reload_delay_ms.unwrap_or(DEFAULT_RELOAD_DELAY_MS),
            )),
        }
    }

    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: match self.format {
                FormatArg::Table => OutputFormat::Table,
                FormatArg::Html => OutputFormat::Html,
                FormatArg::Json => OutputFormat::Json,
            },
            use_color: self.use_color(),
            escape_html: self.escape_html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("guestbook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, FormatArg::Table);
        assert_eq!(cli.reload_policy(), ReloadPolicy::AwaitWrite);
        assert_eq!(cli.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn delay_reload_defaults_to_one_second() {
        let cli = parse(&["--reload", "delay"]);
        assert_eq!(
            cli.reload_policy(),
            ReloadPolicy::FixedDelay(Duration::from_millis(1000))
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["sign", "-n", "Alice", "-m", "Hi", "--url", "http://x/g.txt", "-f", "json"]);
        assert!(matches!(cli.command, Some(Commands::Sign { .. })));
        assert_eq!(cli.url.as_deref(), Some("http://x/g.txt"));
        assert_eq!(cli.format, FormatArg::Json);
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            url: Some("http://configured/g.txt".to_string()),
            format: Some("HTML".to_string()),
            reload: Some("delay".to_string()),
            reload_delay_ms: Some(50),
            escape_html: true,
            ..Config::default()
        };
        let cli = parse(&[]).with_config(&config).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://configured/g.txt"));
        assert_eq!(cli.format, FormatArg::Html);
        assert!(cli.escape_html);
        assert_eq!(
            cli.reload_policy(),
            ReloadPolicy::FixedDelay(Duration::from_millis(50))
        );
    }

    #[test]
    fn cli_store_overrides_config_store() {
        let config = Config {
            url: Some("http://configured/g.txt".to_string()),
            ..Config::default()
        };
        let cli = parse(&["--file", "local.txt"]).with_config(&config).unwrap();
        assert!(cli.url.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("local.txt")));
    }

    #[test]
    fn invalid_config_value_is_an_error() {
        let config = Config {
            format: Some("yaml".to_string()),
            ..Config::default()
        };
        let err = parse(&[]).with_config(&config).unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid format "yaml" in config"#);
    }

    #[test]
    fn no_color_wins() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }
}
