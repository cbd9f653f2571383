use std::path::PathBuf;

use anon_core::AnonTask;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "anonymize")]
#[command(about = "Redact personal data in text files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source file (`-` for stdin; `.gz` and `.zst` are decompressed)
    #[arg(required_unless_present = "list")]
    pub infile: Option<PathBuf>,

    /// Destination file (`-` for stdout; `.gz` and `.zst` are compressed)
    #[arg(required_unless_present = "list")]
    pub outfile: Option<PathBuf>,

    /// Document language (default from config)
    #[arg(long, help_heading = "Language")]
    pub lang: Option<String>,

    /// Countries to use, or `all` for every country of the language
    #[arg(long, num_args = 1.., help_heading = "Language")]
    pub country: Vec<String>,

    /// Anonymization tasks, e.g. CREDIT_CARD BANK_ACCOUNT
    #[arg(long, num_args = 1.., help_heading = "Tasks")]
    pub tasks: Vec<AnonTask>,

    /// Add every anonymization task available for the language
    #[arg(long, conflicts_with = "tasks", help_heading = "Tasks")]
    pub all_tasks: bool,

    /// Substitution template; `{id}` is replaced by the task name
    #[arg(long)]
    pub template: Option<String>,

    /// Show installed tasks before processing
    #[arg(long)]
    pub show_tasks: bool,

    /// Show statistics after processing
    #[arg(long)]
    pub show_stats: bool,

    /// Statistics output format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Config file (default: the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List every registered task by scope and exit
    #[arg(long)]
    pub list: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tasks() {
        let cli = Cli::try_parse_from([
            "anonymize",
            "in.txt",
            "out.txt.gz",
            "--lang",
            "es",
            "--country",
            "ES",
            "--tasks",
            "CREDIT_CARD",
            "bank_account",
        ])
        .unwrap();

        assert_eq!(cli.lang.as_deref(), Some("es"));
        assert_eq!(cli.country, vec!["ES"]);
        assert_eq!(cli.tasks, vec![AnonTask::CreditCard, AnonTask::BankAccount]);
        assert_eq!(cli.stats_format, StatsFormat::Text);
    }

    #[test]
    fn test_rejects_bad_combinations() {
        assert!(Cli::try_parse_from(["anonymize", "in.txt"]).is_err());
        assert!(
            Cli::try_parse_from([
                "anonymize", "in", "out", "--tasks", "GOV_ID", "--all-tasks"
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["anonymize", "in", "out", "--tasks", "SHOE_SIZE"]).is_err());
        assert!(Cli::try_parse_from(["anonymize", "--list"]).is_ok());
    }
}
