//! Score still required on the ungraded weight to reach the pass mark.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{assessment::AssessmentComponent, unit::UnitGradingConfig};

use super::{NOMINAL_TOTAL_WEIGHT, WeightedAggregate};

/// Coarse reachability of the pass mark. Distinguishes only whether passing
/// is reachable at all; [`PassStatus`](super::PassStatus) refines it.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NeededScoreOutcome {
  /// The pass mark is met whatever happens on the remaining weight.
  AlreadyPassed,
  /// Passing depends on the remaining weight and is within the scale.
  StillContested,
  /// The required score is above the scale and there is no retake.
  Unreachable,
  /// The required score is above the scale but a retake exam is available.
  NeedsRetake,
  /// Everything is graded and the average is below the pass mark.
  FullyGradedFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeededScoreResult {
  /// `None` once nothing remains to be graded. Never negative; may exceed the
  /// maximum grade when the outcome is unreachable or needs a retake.
  pub required_score: Option<f64>,
  pub outcome:        NeededScoreOutcome,
}

impl NeededScoreResult {
  pub(crate) fn from_aggregate(
    agg: &WeightedAggregate,
    config: &UnitGradingConfig,
  ) -> Self {
    let remaining_weight = agg.remaining_weight();

    if remaining_weight <= 0.0 {
      let outcome = if agg.settled_average() >= config.minimum_passing_grade {
        NeededScoreOutcome::AlreadyPassed
      } else {
        NeededScoreOutcome::FullyGradedFailed
      };
      return Self {
        required_score: None,
        outcome,
      };
    }

    let points_needed = config.minimum_passing_grade * NOMINAL_TOTAL_WEIGHT;
    let points_missing = points_needed - agg.weighted_score_sum;
    let required = points_missing / remaining_weight;

    if required <= 0.0 {
      return Self {
        required_score: Some(0.0),
        outcome:        NeededScoreOutcome::AlreadyPassed,
      };
    }

    let outcome = if required > config.maximum_grade {
      if config.has_retake_exam {
        NeededScoreOutcome::NeedsRetake
      } else {
        NeededScoreOutcome::Unreachable
      }
    } else {
      NeededScoreOutcome::StillContested
    };

    Self {
      required_score: Some(required),
      outcome,
    }
  }
}

/// Compute the score needed on the remaining weight to reach
/// `config.minimum_passing_grade`.
pub fn compute_needed_score(
  assessments: &[AssessmentComponent],
  config: &UnitGradingConfig,
) -> NeededScoreResult {
  let agg = WeightedAggregate::from_assessments(assessments);
  NeededScoreResult::from_aggregate(&agg, config)
}
