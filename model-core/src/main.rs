//! wdbc - command line front end for the WDBC classifier

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use wdbc_core::api;
use wdbc_core::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_FILTER, MODEL_PARAMS_ENV};
use wdbc_core::logic::features::{catalog, FeatureCategory, FeatureSet, ImportanceTier};
use wdbc_core::logic::model::{Classifier, ModelParams};

#[derive(Parser, Debug)]
#[command(name = "wdbc", version, about = "Classify WDBC cell measurements as malignant or benign")]
struct Cli {
    /// JSON file with custom ranges, weights and bias
    #[arg(long, global = true, env = MODEL_PARAMS_ENV)]
    params: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and score a submission
    Predict {
        #[command(flatten)]
        input: InputArgs,

        /// Score even when some values are not numeric
        #[arg(long)]
        lenient: bool,
    },
    /// Check a submission without scoring it
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show how complete a submission is
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show model metadata
    Info {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the feature catalog
    Features {
        #[arg(long)]
        category: Option<FeatureCategory>,

        #[arg(long)]
        importance: Option<ImportanceTier>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Comma-separated values in layout order
    #[arg(long, conflicts_with_all = ["json", "sample"])]
    csv: Option<String>,

    /// JSON object of feature values ("-" for stdin)
    #[arg(long, conflicts_with = "sample")]
    json: Option<PathBuf>,

    /// Use the built-in sample row
    #[arg(long)]
    sample: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    log::debug!("{} v{}", APP_NAME, APP_VERSION);

    let classifier = load_classifier(cli.params.as_deref())?;

    match cli.command {
        Command::Predict { input, lenient } => {
            let features = read_features(&input)?;
            match api::submit(&classifier, &features, !lenient) {
                Ok(report) => match input.format {
                    OutputFormat::Json => print_json(&report)?,
                    OutputFormat::Text => print_report(&report),
                },
                Err(rejected) => {
                    if input.format == OutputFormat::Json {
                        print_json(&rejected.validation)?;
                    }
                    bail!(rejected);
                }
            }
        }
        Command::Validate { input } => {
            let features = read_features(&input)?;
            let validation = classifier.validate_features(&features);
            match input.format {
                OutputFormat::Json => print_json(&validation)?,
                OutputFormat::Text => {
                    println!(
                        "valid: {} ({} valid, {} invalid)",
                        validation.is_valid, validation.valid_features, validation.invalid_features
                    );
                    for e in &validation.errors {
                        println!("  error:   {}", e);
                    }
                    for w in &validation.warnings {
                        println!("  warning: {}", w);
                    }
                }
            }
        }
        Command::Summary { input } => {
            let features = read_features(&input)?;
            let summary = api::summarize_input(&features);
            match input.format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Text => println!(
                    "{}/{} features ({:.0}%) - mean {}, se {}, worst {} - {}",
                    summary.entered_features,
                    summary.total_features,
                    summary.completion_percentage,
                    summary.mean_features,
                    summary.se_features,
                    summary.worst_features,
                    summary.message
                ),
            }
        }
        Command::Info { format } => {
            let info = classifier.get_model_info();
            match format {
                OutputFormat::Json => print_json(&info)?,
                OutputFormat::Text => {
                    println!("{} v{}", info.name, info.version);
                    println!("  algorithm: {}", info.algorithm);
                    println!("  dataset:   {}", info.dataset);
                    println!("  features:  {}", info.features);
                    println!(
                        "  accuracy {:.2}, precision {:.2}, recall {:.2}, f1 {:.2}",
                        info.accuracy, info.precision, info.recall, info.f1_score
                    );
                }
            }
        }
        Command::Features { category, importance, format } => {
            let specs = api::get_feature_catalog(category, importance);
            match format {
                OutputFormat::Json => print_json(&specs)?,
                OutputFormat::Text => {
                    for f in specs {
                        println!("{:<26} {:<10} {:<6} {}", f.key, f.unit, f.category.as_str(), f.importance);
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_classifier(params: Option<&Path>) -> Result<Classifier> {
    match params {
        Some(path) => {
            let params = ModelParams::from_json_file(path)
                .with_context(|| format!("loading model parameters from {}", path.display()))?;
            Ok(Classifier::new(params))
        }
        None => Ok(Classifier::shared().clone()),
    }
}

fn read_features(input: &InputArgs) -> Result<FeatureSet> {
    if input.sample {
        return Ok(api::parse_bulk_input(api::get_sample_data()));
    }
    if let Some(csv) = &input.csv {
        return Ok(api::parse_bulk_input(csv));
    }
    if let Some(path) = &input.json {
        let content = if path.as_os_str() == "-" {
            std::io::read_to_string(std::io::stdin()).context("reading stdin")?
        } else {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        };
        return serde_json::from_str(&content).context("parsing feature JSON");
    }
    bail!("no input: pass --csv, --json or --sample")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &api::PredictionReport) {
    let result = &report.result;
    if let Some(error) = &result.error {
        println!("Prediction failed: {}", error);
        return;
    }

    println!("Prediction: {}", result.prediction);
    println!("  Confidence:  {:.1}%", result.confidence * 100.0);
    println!("  Malignant:   {:.2}%", result.malignant_probability * 100.0);
    println!("  Benign:      {:.2}%", result.benign_probability * 100.0);
    println!("  Risk score:  {}/10 ({})", result.risk_score, report.risk_level);
    println!("  Features:    {}/{} used", result.features_used, result.total_features);

    if !result.top_features.is_empty() {
        println!("  Top contributing features:");
        for (rank, top) in result.top_features.iter().enumerate() {
            let label = catalog::by_key(&top.feature).map_or(top.feature.as_str(), |f| f.label);
            println!("    {}. {:<24} {:.3}", rank + 1, label, top.importance);
        }
    }

    for warning in &report.validation.warnings {
        println!("  warning: {}", warning);
    }
}
