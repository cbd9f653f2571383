use std::io::{BufRead, Write};
use std::path::Path;

use anon_config::Config;
use anon_core::{CountrySelection, TaskSelection};
use anon_engine::{Stats, TextAnonymizer};
use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::cli::{Cli, StatsFormat};
use crate::io::{open_input, open_output};

/// Command-line flags merged over the config file
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub lang: String,
    pub countries: CountrySelection,
    pub tasks: TaskSelection,
    pub template: String,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let lang = cli
            .lang
            .clone()
            .or_else(|| config.lang.clone())
            .context("No document language: pass --lang or set `lang` in the config file")?;

        let countries = if cli.country.is_empty() {
            &config.countries
        } else {
            &cli.country
        };
        let countries = CountrySelection::from_codes(countries)?;

        let tasks = if cli.all_tasks {
            TaskSelection::All
        } else if !cli.tasks.is_empty() {
            TaskSelection::Tasks(cli.tasks.clone())
        } else if !config.tasks.is_empty() {
            TaskSelection::Tasks(config.tasks.clone())
        } else {
            bail!("No anonymization tasks: pass --tasks or --all-tasks");
        };

        let template = cli.template.clone().unwrap_or_else(|| config.template.clone());

        Ok(Self {
            lang,
            countries,
            tasks,
            template,
        })
    }
}

pub fn handle(cli: &Cli, config: &Config) -> Result<()> {
    let (Some(infile), Some(outfile)) = (&cli.infile, &cli.outfile) else {
        bail!("Both an input and an output file are required");
    };

    let settings = Settings::resolve(cli, config)?;
    let mut anon = TextAnonymizer::new(
        &settings.lang,
        settings.countries,
        settings.tasks,
        Some(&settings.template),
    )?;

    if anon.tasks().is_empty() {
        warn!(lang = anon.lang(), "No anonymization task available, output will match input");
    }
    if cli.show_tasks {
        show_tasks(&anon);
    }

    process(&mut anon, infile, outfile)?;
    info!(lines = anon.stats().calls(), "Done");

    if cli.show_stats {
        show_stats(anon.stats(), cli.stats_format)?;
    }

    Ok(())
}

/// Anonymize `infile` into `outfile` line by line, keeping line terminators
pub fn process(anon: &mut TextAnonymizer<'_>, infile: &Path, outfile: &Path) -> Result<()> {
    let mut input = open_input(infile)?;
    let mut output = open_output(outfile)?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {}", infile.display()))?;
        if read == 0 {
            break;
        }
        output
            .write_all(anon.process(&line).as_bytes())
            .with_context(|| format!("Failed to write {}", outfile.display()))?;
    }

    output
        .finish()
        .with_context(|| format!("Failed to write {}", outfile.display()))?;

    Ok(())
}

fn show_tasks(anon: &TextAnonymizer<'_>) {
    eprintln!("\n. Installed tasks:");
    for (task, description) in anon.task_descriptions() {
        eprintln!("  {}\n    {}", task, description);
    }
}

fn show_stats(stats: &Stats, format: StatsFormat) -> Result<()> {
    match format {
        StatsFormat::Text => {
            eprintln!("\n. Statistics:");
            for (key, count) in stats.iter() {
                eprintln!("  {:20} : {:5}", key, count);
            }
        }
        StatsFormat::Json => eprintln!("{}", serde_json::to_string_pretty(stats)?),
    }
    Ok(())
}
