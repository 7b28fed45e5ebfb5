//! CLI settings: the global fallbacks applied when neither a unit nor its
//! course says otherwise, plus output preferences.
//!
//! Layered from an optional TOML file and `GRADELINE_*` environment
//! variables, e.g. `GRADELINE_DEFAULT_MINIMUM_PASSING_GRADE=9.5`.

use std::path::Path;

use anyhow::{Context, Result};
use gradeline_core::unit::GradeScale;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliSettings {
  pub default_grade_scale:           GradeScale,
  pub default_minimum_passing_grade: f64,
  pub output:                        OutputFormat,
}

impl Default for CliSettings {
  fn default() -> Self {
    Self {
      default_grade_scale:           GradeScale::UpToTwenty,
      default_minimum_passing_grade: 10.0,
      output:                        OutputFormat::Text,
    }
  }
}

impl CliSettings {
  /// Load settings from `path` (if given and present) and the environment.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(config::File::from(path).required(false));
    }

    builder
      .add_source(config::Environment::with_prefix("GRADELINE").try_parsing(true))
      .build()
      .context("failed to read settings")?
      .try_deserialize()
      .context("failed to deserialise CliSettings")
  }
}

#[cfg(test)]
mod tests {
  use std::{fs, path::PathBuf};

  use super::*;

  fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
      .join(format!("gradeline-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("gradeline-does-not-exist.toml");
    let settings = CliSettings::load(Some(&path)).unwrap();
    assert_eq!(settings, CliSettings::default());
  }

  #[test]
  fn file_overrides_defaults() {
    let path = scratch_file(
      "settings.toml",
      "default_grade_scale = \"0-100\"\ndefault_minimum_passing_grade = 50.0\noutput = \"json\"\n",
    );
    let settings = CliSettings::load(Some(&path)).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(settings.default_grade_scale, GradeScale::UpToHundred);
    assert_eq!(settings.default_minimum_passing_grade, 50.0);
    assert_eq!(settings.output, OutputFormat::Json);
  }

  #[test]
  fn partial_file_keeps_other_defaults() {
    let path = scratch_file("partial.toml", "default_minimum_passing_grade = 9.5\n");
    let settings = CliSettings::load(Some(&path)).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(settings.default_minimum_passing_grade, 9.5);
    assert_eq!(settings.default_grade_scale, GradeScale::UpToTwenty);
    assert_eq!(settings.output, OutputFormat::Text);
  }
}
