//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::defaults;

/// Transifex CLI
#[derive(Parser, Debug)]
#[command(name = "txctl")]
#[command(version)]
#[command(about = "Explore Transifex projects, languages and translation statistics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project slug
    #[arg(short, long, global = true, default_value = defaults::PROJECT)]
    pub project: String,

    /// Transifex API host
    #[arg(short = 'H', long, global = true, default_value = defaults::HOST)]
    pub host: String,

    /// API credential as user:password (overrides env vars and credentials file)
    #[arg(short, long, global = true)]
    pub credential: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode - disables the progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Suppress the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the project's languages (resolved one team at a time)
    #[command(visible_alias = "langs")]
    Languages(LanguagesArgs),

    /// Translation statistics for the project, one resource or one locale
    Stats(StatsArgs),

    /// Contributor counts, or one role's contributor list
    #[command(visible_alias = "contrib")]
    Contributors(ContributorsArgs),

    /// Translation detail for one locale, with completion percentage
    Locale(LocaleArgs),

    /// Project details
    #[command(visible_alias = "prj")]
    Project(ProjectArgs),

    /// List the project's resources
    #[command(visible_alias = "res")]
    Resources(ResourcesArgs),

    /// Translated content for a resource and locale
    #[command(visible_alias = "tr")]
    Translation(TranslationArgs),

    /// Language catalogue info (all languages, or one code)
    #[command(visible_alias = "lang")]
    LanguageInfo(LanguageInfoArgs),
}

/// Arguments for the 'languages' command
#[derive(Parser, Debug)]
pub struct LanguagesArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for the 'stats' command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Resource slug (alone: that resource's statistics for every locale)
    #[arg(short, long)]
    pub resource: Option<String>,

    /// Locale code (alone: that locale's statistics across every resource)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for the 'contributors' command
#[derive(Parser, Debug)]
pub struct ContributorsArgs {
    /// Locale code (with --kind: list that role's contributors)
    #[arg(short, long, requires = "kind")]
    pub locale: Option<String>,

    /// Contributor role: coordinators, reviewers or translators
    #[arg(short, long, requires = "locale")]
    pub kind: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for the 'locale' command
#[derive(Parser, Debug)]
pub struct LocaleArgs {
    /// Locale code
    pub code: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for the 'project' command
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Include team and resource details
    #[arg(long, default_value_t = false)]
    pub details: bool,
}

/// Arguments for the 'resources' command
#[derive(Parser, Debug)]
pub struct ResourcesArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for the 'translation' command
#[derive(Parser, Debug)]
pub struct TranslationArgs {
    /// Resource slug
    #[arg(short, long)]
    pub resource: String,

    /// Locale code
    #[arg(short, long)]
    pub locale: String,

    /// Translation mode (e.g. reviewed), passed through as a query parameter
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Print only the file content, not the JSON envelope
    #[arg(long, default_value_t = false)]
    pub content_only: bool,
}

/// Arguments for the 'language-info' command
#[derive(Parser, Debug)]
pub struct LanguageInfoArgs {
    /// Language code (omit to list the full catalogue)
    pub code: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["txctl", "languages"]);
        assert_eq!(cli.project, defaults::PROJECT);
        assert_eq!(cli.host, defaults::HOST);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.credential.is_none());
        assert!(!cli.batch);
        assert!(!cli.no_header);
    }

    #[test]
    fn test_cli_with_project_and_credential() {
        let cli = Cli::parse_from([
            "txctl",
            "languages",
            "-p",
            "thimble",
            "-c",
            "alice:secret",
        ]);
        assert_eq!(cli.project, "thimble");
        assert_eq!(cli.credential.as_deref(), Some("alice:secret"));
    }

    #[test]
    fn test_stats_args_resource_and_locale() {
        let cli = Cli::parse_from(["txctl", "stats", "-r", "ui-strings", "-l", "fr"]);
        let Command::Stats(args) = &cli.command else {
            panic!("expected stats command");
        };
        assert_eq!(args.resource.as_deref(), Some("ui-strings"));
        assert_eq!(args.locale.as_deref(), Some("fr"));
        assert_eq!(args.output, OutputFormat::Table);
    }

    #[test]
    fn test_contributors_kind_requires_locale() {
        let result = Cli::try_parse_from(["txctl", "contributors", "-k", "translators"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_contributors_with_locale_and_kind() {
        let cli = Cli::parse_from(["txctl", "contributors", "-l", "fr", "-k", "reviewers"]);
        let Command::Contributors(args) = &cli.command else {
            panic!("expected contributors command");
        };
        assert_eq!(args.locale.as_deref(), Some("fr"));
        assert_eq!(args.kind.as_deref(), Some("reviewers"));
    }

    #[test]
    fn test_locale_command_positional_code() {
        let cli = Cli::parse_from(["txctl", "locale", "pt_BR", "-o", "json"]);
        let Command::Locale(args) = &cli.command else {
            panic!("expected locale command");
        };
        assert_eq!(args.code, "pt_BR");
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_translation_args() {
        let cli = Cli::parse_from([
            "txctl",
            "translation",
            "-r",
            "ui-strings",
            "-l",
            "fr",
            "-m",
            "reviewed",
            "--content-only",
        ]);
        let Command::Translation(args) = &cli.command else {
            panic!("expected translation command");
        };
        assert_eq!(args.resource, "ui-strings");
        assert_eq!(args.locale, "fr");
        assert_eq!(args.mode.as_deref(), Some("reviewed"));
        assert!(args.content_only);
    }

    #[test]
    fn test_language_info_optional_code() {
        let cli = Cli::parse_from(["txctl", "language-info"]);
        let Command::LanguageInfo(args) = &cli.command else {
            panic!("expected language-info command");
        };
        assert!(args.code.is_none());
    }
}
