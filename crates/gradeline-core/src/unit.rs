//! Unit grading configuration.
//!
//! A unit is an academic course or subject. The engine needs only three
//! scalars from it; where they come from (per-unit settings, course defaults)
//! is the caller's business.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Error, Result};

/// The grading scale a unit is marked on.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
pub enum GradeScale {
  #[serde(rename = "0-10")]
  #[strum(serialize = "0-10")]
  UpToTen,
  #[default]
  #[serde(rename = "0-20")]
  #[strum(serialize = "0-20")]
  UpToTwenty,
  #[serde(rename = "0-100")]
  #[strum(serialize = "0-100")]
  UpToHundred,
}

impl GradeScale {
  /// Parse a scale label such as `"0-20"`.
  pub fn from_label(label: &str) -> Result<Self> {
    label
      .trim()
      .parse()
      .map_err(|_| Error::UnknownGradeScale(label.to_string()))
  }

  /// The top of the scale.
  pub fn maximum_grade(self) -> f64 {
    match self {
      Self::UpToTen => 10.0,
      Self::UpToTwenty => 20.0,
      Self::UpToHundred => 100.0,
    }
  }
}

/// The three configuration scalars the engine consumes for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitGradingConfig {
  /// Lowest final grade that passes, on the unit's scale.
  pub minimum_passing_grade: f64,
  /// Top of the unit's scale.
  pub maximum_grade:         f64,
  /// Whether a make-up exam is available after the regular assessments.
  pub has_retake_exam:       bool,
}

impl UnitGradingConfig {
  pub fn new(
    minimum_passing_grade: f64,
    maximum_grade: f64,
    has_retake_exam: bool,
  ) -> Self {
    Self {
      minimum_passing_grade,
      maximum_grade,
      has_retake_exam,
    }
  }

  pub fn for_scale(
    scale: GradeScale,
    minimum_passing_grade: f64,
    has_retake_exam: bool,
  ) -> Self {
    Self::new(minimum_passing_grade, scale.maximum_grade(), has_retake_exam)
  }
}

impl Default for UnitGradingConfig {
  /// Pass mark 10 on the 0–20 scale, no retake.
  fn default() -> Self {
    Self::for_scale(GradeScale::UpToTwenty, 10.0, false)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scale_labels() {
    assert_eq!(GradeScale::from_label("0-10").unwrap(), GradeScale::UpToTen);
    assert_eq!(
      GradeScale::from_label(" 0-100 ").unwrap(),
      GradeScale::UpToHundred
    );
    assert_eq!(GradeScale::UpToTwenty.to_string(), "0-20");
    assert!(matches!(
      GradeScale::from_label("1-5"),
      Err(Error::UnknownGradeScale(s)) if s == "1-5"
    ));
  }

  #[test]
  fn scale_serde_uses_labels() {
    let json = serde_json::to_string(&GradeScale::UpToHundred).unwrap();
    assert_eq!(json, "\"0-100\"");
    let back: GradeScale = serde_json::from_str("\"0-10\"").unwrap();
    assert_eq!(back, GradeScale::UpToTen);
  }

  #[test]
  fn default_config_is_ten_out_of_twenty() {
    let config = UnitGradingConfig::default();
    assert_eq!(config.minimum_passing_grade, 10.0);
    assert_eq!(config.maximum_grade, 20.0);
    assert!(!config.has_retake_exam);
  }

  #[test]
  fn for_scale_takes_maximum_from_scale() {
    let config = UnitGradingConfig::for_scale(GradeScale::UpToHundred, 50.0, true);
    assert_eq!(config.maximum_grade, 100.0);
    assert_eq!(config.minimum_passing_grade, 50.0);
    assert!(config.has_retake_exam);
  }
}
