//! Recommend command implementation for the sommelier CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sommelier_core::{MAX_SCORE, PreferenceRecord};
use sommelier_data::load_catalog;
use sommelier_fs::open_utf8_file;
use sommelier_scorer::{DEFAULT_LIMIT, PreferenceScorer, RecommendOptions, RecommendationSet};

use crate::{
    ARG_CATALOG, ARG_LIMIT, ARG_MIN_SCORE, ARG_NO_DIVERSITY, ARG_PREFERENCES, CliError,
    ENV_RECOMMEND_CATALOG, ENV_RECOMMEND_PREFERENCES, require_existing,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every chocolate in a catalog against a JSON object \
                 of questionnaire answers and print the shortlist as JSON. \
                 Unknown or malformed answers count as no preference.",
    about = "Recommend chocolates for a preferences file"
)]
#[ortho_config(prefix = "SOMMELIER")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON object mapping question ids to answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to the catalog JSON file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of recommendations.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Drop chocolates scoring below this value.
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<u8>,
    /// Keep the top scores even when they repeat a brand and origin.
    #[arg(long = ARG_NO_DIVERSITY)]
    #[serde(default)]
    pub(crate) no_diversity: bool,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the preferences file.
    pub(crate) preferences: Utf8PathBuf,
    /// Path to the catalog file.
    pub(crate) catalog: Utf8PathBuf,
    /// Shortlist tuning.
    pub(crate) options: RecommendOptions,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.preferences, ARG_PREFERENCES)?;
        require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_RECOMMEND_PREFERENCES,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        let limit = resolve_limit(args.limit)?;
        let min_score = args.min_score.unwrap_or(0);
        if min_score > MAX_SCORE {
            return Err(CliError::OutOfRange {
                field: ARG_MIN_SCORE,
                expected: "between 0 and 100",
                value: usize::from(min_score),
            });
        }
        Ok(Self {
            preferences,
            catalog,
            options: RecommendOptions {
                limit,
                min_score,
                diversity: !args.no_diversity,
            },
        })
    }
}

/// Apply the default shortlist length and reject zero.
pub(crate) fn resolve_limit(limit: Option<usize>) -> Result<usize, CliError> {
    match limit.unwrap_or(DEFAULT_LIMIT) {
        0 => Err(CliError::OutOfRange {
            field: ARG_LIMIT,
            expected: "at least 1",
            value: 0,
        }),
        value => Ok(value),
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let preferences = load_preferences(&config.preferences)?;
    let load = load_catalog(&config.catalog)?;
    let items = load.catalog.items();
    let set = PreferenceScorer::default().recommend(items, &preferences, config.options);
    info!(
        "recommended {} of {} chocolates",
        set.recommendations().len(),
        set.total_analyzed()
    );
    write_response(writer, &set)
}

/// Load a JSON-encoded [`PreferenceRecord`] from disk.
pub(crate) fn load_preferences(path: &Utf8Path) -> Result<PreferenceRecord, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPreferences {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePreferences {
        path: path.to_path_buf(),
        source,
    })
}

fn write_response(writer: &mut dyn Write, set: &RecommendationSet<'_>) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(set).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
