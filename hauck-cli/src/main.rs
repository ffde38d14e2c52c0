#![warn(clippy::all)]
#![allow(clippy::pedantic)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hauck_common::config::{Config, ObservabilityConfig};
use hauck_common::logging::init_logging_with_writer;
use hauck_common::Validate;
use hauck_core::{hauck_anderson_test, ComparisonInput, Report, TestMode, ABOUT};
use std::path::PathBuf;

/// Hauck-Anderson test for comparing two proportions.
#[derive(Parser, Debug)]
#[command(name = "hauck-cli")]
#[command(version)]
#[command(about = "Hauck-Anderson two-proportion test with Bonferroni adjustment.", long_about = None)]
struct Cli {
    /// Config file (default: ~/.hauck/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log calculation details (forces debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two proportions
    Test {
        /// Proportion of the first group (0.0 - 1.0)
        #[arg(long)]
        p1: f64,

        /// Sample size of the first group
        #[arg(long)]
        n1: u32,

        /// Proportion of the second group (0.0 - 1.0)
        #[arg(long)]
        p2: f64,

        /// Sample size of the second group
        #[arg(long)]
        n2: u32,

        /// Run a one-tailed test in the given direction (two-tailed if omitted)
        #[arg(long, value_name = "DIRECTION", value_parser = ["less-than", "greater-than"])]
        one_tailed: Option<String>,

        /// Number of tests performed, for the Bonferroni correction
        #[arg(long)]
        tests: Option<u32>,

        /// Significance level (default from config, 0.05)
        #[arg(long)]
        alpha: Option<f64>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show background on the test and the Bonferroni correction
    About,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let logging = log_settings(&config, cli.verbose);
    init_logging_with_writer(
        &logging.log_level,
        &logging.log_format,
        &logging.excluded_targets,
        std::io::stderr,
    );

    let output = execute(&cli.command, &config)?;
    println!("{output}");
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

/// Logging settings for this run. Logs go to stderr so stdout stays parseable.
fn log_settings(config: &Config, verbose: bool) -> ObservabilityConfig {
    let mut logging = config.observability.clone();
    if verbose {
        logging.log_level = "debug".into();
    }
    logging
}

fn execute(command: &Commands, config: &Config) -> Result<String> {
    match command {
        Commands::Test {
            p1,
            n1,
            p2,
            n2,
            one_tailed,
            tests,
            alpha,
            json,
        } => {
            let mode = match one_tailed {
                Some(direction) => TestMode::parse("one-tailed", Some(direction.as_str()))?,
                None => TestMode::TwoTailed,
            };
            let comparisons = tests.unwrap_or(config.calculator.default_comparisons);
            let alpha = alpha.unwrap_or(config.calculator.significance_level);
            if !(alpha > 0.0 && alpha < 1.0) {
                anyhow::bail!("alpha must be strictly between 0 and 1, got {alpha}");
            }

            let input = ComparisonInput::from_raw(*p1, *n1, *p2, *n2, mode, comparisons)?;
            let result = hauck_anderson_test(&input)?;
            let report = Report::new(result, mode, alpha);

            tracing::debug!(
                z = result.z,
                raw_p_value = result.raw_p_value,
                adjusted_p_value = result.adjusted_p_value,
                "Calculation completed"
            );

            if *json {
                serde_json::to_string_pretty(&report).context("Failed to serialize report")
            } else {
                Ok(report.to_text())
            }
        }
        Commands::About => Ok(ABOUT.to_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hauck_core::CalcError;
    use std::io::Write;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args.iter().copied())?;
        execute(&cli.command, &Config::default())
    }

    #[test]
    fn test_two_tailed_text() {
        let out = run(&[
            "hauck-cli", "test", "--p1", "0.5", "--n1", "30", "--p2", "0.3", "--n2", "30",
        ])
        .unwrap();
        assert!(out.starts_with("Z value: 1.750\nAdjusted p-value: 0.08016\n"));
        assert!(out.contains("not statistically significant"));
    }

    #[test]
    fn test_one_tailed_json() {
        let out = run(&[
            "hauck-cli",
            "test",
            "--p1",
            "0.5",
            "--n1",
            "30",
            "--p2",
            "0.3",
            "--n2",
            "30",
            "--one-tailed",
            "greater-than",
            "--json",
        ])
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["direction"], "greater-than");
        assert_eq!(json["adjusted_p_value"], "0.04008");
        assert_eq!(json["significant"], true);
    }

    #[test]
    fn test_bonferroni_flag() {
        let out = run(&[
            "hauck-cli", "test", "--p1", "0.5", "--n1", "30", "--p2", "0.3", "--n2", "30",
            "--tests", "3",
        ])
        .unwrap();
        assert!(out.contains("Adjusted p-value: 0.24049"));
    }

    #[test]
    fn test_invalid_direction_rejected_by_parser() {
        let err = Cli::try_parse_from([
            "hauck-cli", "test", "--p1", "0.5", "--n1", "30", "--p2", "0.3", "--n2", "30",
            "--one-tailed", "sideways",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_undefined_result_surfaces() {
        let err = run(&[
            "hauck-cli", "test", "--p1", "0", "--n1", "10", "--p2", "0", "--n2", "10",
        ])
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CalcError>(),
            Some(CalcError::UndefinedResult { .. })
        ));
    }

    #[test]
    fn test_out_of_range_alpha() {
        let err = run(&[
            "hauck-cli", "test", "--p1", "0.5", "--n1", "30", "--p2", "0.3", "--n2", "30",
            "--alpha", "1.5",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn test_verbose_overrides_configured_level() {
        let mut config = Config::default();
        config.observability.log_level = "error".into();
        config.observability.log_format = "json".into();

        let quiet = log_settings(&config, false);
        assert_eq!(quiet.log_level, "error");
        assert_eq!(quiet.log_format, "json");

        let verbose = log_settings(&config, true);
        assert_eq!(verbose.log_level, "debug");
        assert_eq!(verbose.log_format, "json");
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"calculator": {{"significance_level": 2.0}}}}"#).unwrap();

        let err = load_config(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("calculator.significance_level"));
    }

    #[test]
    fn test_load_config_reads_observability() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"observability": {{"log_format": "json"}}}}"#).unwrap();

        let config = load_config(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.observability.log_format, "json");
    }

    #[test]
    fn test_about() {
        let out = run(&["hauck-cli", "about"]).unwrap();
        assert!(out.starts_with("About the Hauck-Anderson test"));
    }
}
