//! Six-way pass/fail classification: the engine's public entry point.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Result, assessment::AssessmentComponent, unit::UnitGradingConfig};

use super::{
  GradeOverview, NeededScoreResult, ON_TRACK_RATIO, WeightedAggregate,
};

/// Status of a unit as shown to the student.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PassStatus {
  /// Passed, either settled or guaranteed by the grades so far.
  Passed,
  /// Everything is graded and the average is below the pass mark.
  Failed,
  /// Required score is at most 70% of the maximum grade.
  OnTrack,
  /// Required score is above 70% of the maximum but still on the scale.
  AtRisk,
  /// Required score is off the scale and there is no retake.
  Unreachable,
  /// Required score is off the scale; only the retake exam is left.
  NeedsRetake,
}

impl PassStatus {
  /// `true` once the outcome can no longer change with further grades.
  pub fn is_settled(self) -> bool {
    matches!(self, Self::Passed | Self::Failed | Self::Unreachable)
  }
}

/// Classification result: the status plus the overview it was derived from,
/// with `required_score` filled in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStatus {
  pub status:   PassStatus,
  pub overview: GradeOverview,
}

impl UnitStatus {
  pub fn to_json(&self) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(self)?)
  }
}

/// Classify a unit from its assessments and grading configuration.
pub fn classify(
  assessments: &[AssessmentComponent],
  config: &UnitGradingConfig,
) -> UnitStatus {
  let agg = WeightedAggregate::from_assessments(assessments);
  let needed = NeededScoreResult::from_aggregate(&agg, config);

  let mut overview = GradeOverview::from_aggregate(&agg, None);
  overview.required_score = needed.required_score;

  let status = if overview.remaining_weight <= 0.0 {
    if agg.settled_average() >= config.minimum_passing_grade {
      PassStatus::Passed
    } else {
      PassStatus::Failed
    }
  } else {
    let required = needed.required_score.unwrap_or(0.0);
    if required <= 0.0 {
      PassStatus::Passed
    } else if required <= config.maximum_grade * ON_TRACK_RATIO {
      PassStatus::OnTrack
    } else if required <= config.maximum_grade {
      PassStatus::AtRisk
    } else if config.has_retake_exam {
      PassStatus::NeedsRetake
    } else {
      PassStatus::Unreachable
    }
  };

  UnitStatus { status, overview }
}
