//! How far through its assessments a unit is.

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentComponent;

use super::{NOMINAL_TOTAL_WEIGHT, WeightedAggregate};

/// Completion figures for display next to a unit's status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitProgress {
  pub completed_assessments: usize,
  pub total_assessments:     usize,
  /// Share of assessments graded, 0–100, one decimal.
  pub completion_percent:    f64,
  /// Clamped to 0–100, one decimal.
  pub graded_weight:         f64,
  /// Clamped to 0–100, one decimal.
  pub remaining_weight:      f64,
}

pub fn compute_progress(assessments: &[AssessmentComponent]) -> UnitProgress {
  let agg = WeightedAggregate::from_assessments(assessments);
  let completed = assessments.iter().filter(|a| a.is_graded()).count();
  let total = assessments.len();

  let completion_percent = if total == 0 {
    0.0
  } else {
    round1(completed as f64 / total as f64 * 100.0)
  };

  UnitProgress {
    completed_assessments: completed,
    total_assessments: total,
    completion_percent,
    graded_weight: round1(agg.graded_weight.clamp(0.0, NOMINAL_TOTAL_WEIGHT)),
    remaining_weight: round1(
      (NOMINAL_TOTAL_WEIGHT - agg.graded_weight).clamp(0.0, NOMINAL_TOTAL_WEIGHT),
    ),
  }
}

fn round1(value: f64) -> f64 { (value * 10.0).round() / 10.0 }
