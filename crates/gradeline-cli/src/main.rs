//! `gradeline`: evaluate a unit's grades from the command line.
//!
//! # Usage
//!
//! ```text
//! gradeline status algebra.toml
//! gradeline project algebra.toml --score 14
//! gradeline templates
//! gradeline --config ~/.config/gradeline/settings.toml status algebra.toml --json
//! ```

mod report;
mod settings;
mod unit_file;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradeline_core::{
  grading::{compute_overview, compute_progress},
  provider::{AssessmentProvider, evaluate_unit},
};
use settings::{CliSettings, OutputFormat};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use unit_file::UnitFile;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "gradeline", author, version, about = "Pass/fail outlook for a unit's assessments")]
struct Cli {
  /// Path to a TOML settings file (default scale, pass mark, output).
  #[arg(short, long, value_name = "FILE", env = "GRADELINE_SETTINGS")]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Classify a unit and show its averages and required score.
  Status {
    unit_file: PathBuf,
    /// Emit JSON instead of text.
    #[arg(long)]
    json:      bool,
  },
  /// Project the final average for a hypothetical score on the remaining
  /// weight.
  Project {
    unit_file: PathBuf,
    #[arg(long)]
    score:     f64,
    #[arg(long)]
    json:      bool,
  },
  /// List the built-in assessment templates.
  Templates {
    #[arg(long)]
    json: bool,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let settings = CliSettings::load(cli.config.as_deref())?;
  tracing::debug!(?settings, "loaded settings");

  let as_json = |flag: bool| flag || settings.output == OutputFormat::Json;

  match cli.command {
    Command::Status { unit_file, json } => {
      let loaded = UnitFile::read(&unit_file)?.load(&settings)?;
      let result = evaluate_unit(&loaded.provider, loaded.unit_id)
        .context("evaluating unit")?;
      let assessments = loaded.provider.assessments(loaded.unit_id)?;
      let progress = compute_progress(&assessments);

      if as_json(json) {
        let value = report::status_json(&loaded.name, &result, &progress)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
      } else {
        print!("{}", report::status_text(&loaded.name, &result, &progress));
      }
    }
    Command::Project {
      unit_file,
      score,
      json,
    } => {
      let loaded = UnitFile::read(&unit_file)?.load(&settings)?;
      let assessments = loaded.provider.assessments(loaded.unit_id)?;
      let overview = compute_overview(&assessments, Some(score));

      if as_json(json) {
        let value = report::projection_json(&loaded.name, score, &overview);
        println!("{}", serde_json::to_string_pretty(&value)?);
      } else {
        print!("{}", report::projection_text(&loaded.name, score, &overview));
      }
    }
    Command::Templates { json } => {
      if as_json(json) {
        println!("{}", serde_json::to_string_pretty(&report::templates_json())?);
      } else {
        print!("{}", report::templates_text());
      }
    }
  }

  Ok(())
}
