//! Interactive consultation over a line-oriented terminal.

use std::io::{BufRead, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sommelier_core::{Consultation, PreferenceRecord, Question};
use sommelier_data::load_catalog;
use sommelier_scorer::{PreferenceScorer, RecommendOptions, Recommendation, RecommendationSet};

use crate::recommend::{load_preferences, resolve_limit};
use crate::{ARG_CATALOG, ARG_KNOWN, ARG_LIMIT, CliError, ENV_CONSULT_CATALOG, require_existing};

/// CLI arguments for the `consult` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Walk through the questionnaire one question at a time, \
                 answering with option numbers, then print a shortlist. \
                 Questions already answered in a --known file are skipped.",
    about = "Answer the questionnaire interactively"
)]
#[ortho_config(prefix = "SOMMELIER")]
pub(crate) struct ConsultArgs {
    /// Path to the catalog JSON file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of recommendations.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// JSON preferences whose questions are not asked again.
    #[arg(long = ARG_KNOWN, value_name = "path")]
    #[serde(default)]
    pub(crate) known: Option<Utf8PathBuf>,
}

impl ConsultArgs {
    pub(crate) fn into_config(self) -> Result<ConsultConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ConsultConfig::try_from(merged)
    }
}

/// Resolved `consult` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConsultConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) limit: usize,
    pub(crate) known: Option<Utf8PathBuf>,
}

impl ConsultConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(known) = &self.known {
            require_existing(known, ARG_KNOWN)?;
        }
        Ok(())
    }
}

impl TryFrom<ConsultArgs> for ConsultConfig {
    type Error = CliError;

    fn try_from(args: ConsultArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CONSULT_CATALOG,
        })?;
        Ok(Self {
            catalog,
            limit: resolve_limit(args.limit)?,
            known: args.known,
        })
    }
}

pub(crate) fn run_consult(args: ConsultArgs) -> Result<(), CliError> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_consult_with(args, &mut stdin, &mut stdout)
}

pub(crate) fn run_consult_with(
    args: ConsultArgs,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let known = match &config.known {
        Some(path) => load_preferences(path)?,
        None => PreferenceRecord::new(),
    };
    let load = load_catalog(&config.catalog)?;

    let preferences = interview(Consultation::with_known(known), input, output)?;
    let options = RecommendOptions {
        limit: config.limit,
        ..RecommendOptions::default()
    };
    let set = PreferenceScorer::default().recommend(load.catalog.items(), &preferences, options);
    render_shortlist(output, &set).map_err(CliError::WriteOutput)
}

/// Ask every pending question and return the collected answers.
pub(crate) fn interview(
    mut consultation: Consultation,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<PreferenceRecord, CliError> {
    while let Some(question) = consultation.current() {
        render_question(output, &consultation, question).map_err(CliError::WriteOutput)?;
        let line = read_line(input)?;
        let Some(choices) = parse_choices(&line) else {
            retry(output, "answer with option numbers, e.g. 1 or 1,3")?;
            continue;
        };
        match question.select(&choices) {
            Ok(answer) => {
                consultation.answer(answer)?;
            }
            Err(err) => retry(output, &err.to_string())?,
        }
    }
    Ok(consultation.into_record())
}

fn retry(output: &mut dyn Write, message: &str) -> Result<(), CliError> {
    writeln!(output, "  {message}; please try again.").map_err(CliError::WriteOutput)
}

fn read_line(input: &mut dyn BufRead) -> Result<String, CliError> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(CliError::ReadInput)?;
    if read == 0 {
        return Err(CliError::InputClosed);
    }
    Ok(line)
}

/// Split an answer line into one-based option numbers.
///
/// Numbers may be separated by commas or whitespace; a blank line yields an
/// empty selection. Returns `None` when any token is not a number.
pub(crate) fn parse_choices(line: &str) -> Option<Vec<usize>> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().ok())
        .collect()
}

fn render_question(
    output: &mut dyn Write,
    consultation: &Consultation,
    question: &Question,
) -> std::io::Result<()> {
    let (answered, total) = consultation.position();
    writeln!(
        output,
        "\nQuestion {} of {total} ({}% complete)",
        answered.saturating_add(1),
        consultation.progress_percent()
    )?;
    writeln!(output, "{}", question.prompt())?;
    for (number, option) in (1_usize..).zip(question.options()) {
        writeln!(output, "  {number}. {option}")?;
    }
    if question.allows_multiple() {
        write!(output, "Choose any number (comma separated, blank for none): ")?;
    } else {
        write!(output, "Choose one: ")?;
    }
    output.flush()
}

fn render_shortlist(output: &mut dyn Write, set: &RecommendationSet<'_>) -> std::io::Result<()> {
    writeln!(output)?;
    if set.is_empty() {
        writeln!(
            output,
            "No chocolate matched your answers ({} analysed).",
            set.total_analyzed()
        )?;
        return Ok(());
    }
    writeln!(
        output,
        "Your recommendations ({} chocolates analysed):",
        set.total_analyzed()
    )?;
    for (rank, recommendation) in (1_usize..).zip(set.recommendations()) {
        render_recommendation(output, rank, recommendation)?;
    }
    Ok(())
}

fn render_recommendation(
    output: &mut dyn Write,
    rank: usize,
    recommendation: &Recommendation<'_>,
) -> std::io::Result<()> {
    let item = recommendation.item;
    writeln!(
        output,
        "{rank}. {} by {} ({}% match)",
        item.name, item.brand, recommendation.match_score
    )?;
    let mut facts = vec![item.kind.as_str().to_owned()];
    facts.extend(item.origin.clone());
    facts.extend(item.cocoa_percentage.map(|cocoa| format!("{cocoa}% cocoa")));
    facts.extend(item.price_range.map(|tier| tier.to_string()));
    facts.extend(item.rating.map(|rating| format!("rated {rating:.1}")));
    writeln!(output, "   {}", facts.join(" | "))?;
    if !item.flavor_notes.is_empty() {
        writeln!(output, "   Notes: {}", item.flavor_notes.join(", "))?;
    }
    if !item.description.is_empty() {
        writeln!(output, "   {}", item.description)?;
    }
    Ok(())
}
