//! Generate command implementation for the sommelier CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sommelier_data::{DEFAULT_COUNT, DEFAULT_SEED, GeneratorConfig, write_generated_catalog};

use crate::{ARG_COUNT, ARG_CREATED_DATE, ARG_OUTPUT, ARG_SEED, CliError, ENV_GENERATE_OUTPUT};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Write a synthetic catalog whose prices, ratings and \
                 flavor notes follow brand positioning and origin profiles. \
                 The same seed always produces the same catalog.",
    about = "Generate a synthetic catalog"
)]
#[ortho_config(prefix = "SOMMELIER")]
pub(crate) struct GenerateArgs {
    /// Destination for the catalog JSON file.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Seed for the random number generator.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Number of chocolates to generate.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Creation date recorded in the catalog metadata.
    #[arg(long = ARG_CREATED_DATE, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) created_date: Option<String>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    pub(crate) output: Utf8PathBuf,
    pub(crate) generator: GeneratorConfig,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_GENERATE_OUTPUT,
        })?;
        let count = args.count.unwrap_or(DEFAULT_COUNT);
        if count == 0 {
            return Err(CliError::OutOfRange {
                field: ARG_COUNT,
                expected: "at least 1",
                value: count,
            });
        }
        let mut generator = GeneratorConfig {
            count,
            seed: args.seed.unwrap_or(DEFAULT_SEED),
            ..GeneratorConfig::default()
        };
        match args.created_date {
            Some(date) if !is_calendar_date(&date) => {
                return Err(CliError::InvalidDate {
                    field: ARG_CREATED_DATE,
                    value: date,
                });
            }
            Some(date) => generator.created_date = date,
            None => {}
        }
        Ok(Self { output, generator })
    }
}

/// Check the `YYYY-MM-DD` shape and the month and day ranges.
fn is_calendar_date(value: &str) -> bool {
    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let digits =
        |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2)) {
        return false;
    }
    matches!(
        (month.parse::<u8>(), day.parse::<u8>()),
        (Ok(1..=12), Ok(1..=31))
    )
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_generate_with(args, &mut stdout)
}

pub(crate) fn run_generate_with(
    args: GenerateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = write_generated_catalog(&config.output, &config.generator)?;
    let metadata = catalog.metadata();
    writeln!(
        writer,
        "wrote {} chocolates ({} origins, {} brands) to {}",
        catalog.len(),
        metadata.origins_covered.unwrap_or_default(),
        metadata.brands_covered.unwrap_or_default(),
        config.output
    )
    .map_err(CliError::WriteOutput)
}
