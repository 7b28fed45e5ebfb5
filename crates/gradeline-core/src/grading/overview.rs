//! Weights, partial average and projection for one unit.

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentComponent;

use super::{NOMINAL_TOTAL_WEIGHT, WeightedAggregate};

/// Numeric summary of a unit's assessments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeOverview {
  /// Weighted mean over graded assessments; `None` while nothing is graded.
  pub partial_average:   Option<f64>,
  /// Final grade under an assumption about the remaining weight.
  pub projected_average: Option<f64>,
  /// Score needed on the remaining weight to pass. Only
  /// [`classify`](super::classify) fills this in.
  pub required_score:    Option<f64>,
  pub graded_weight:     f64,
  pub remaining_weight:  f64,
  pub total_weight:      f64,
}

impl GradeOverview {
  pub(crate) fn from_aggregate(
    agg: &WeightedAggregate,
    hypothetical_score: Option<f64>,
  ) -> Self {
    let remaining_weight = agg.remaining_weight();

    // Without a hypothetical score the projection treats every ungraded point
    // as zero, so it differs from the partial average.
    let projected_average = match hypothetical_score {
      Some(score) if remaining_weight > 0.0 => Some(
        (agg.weighted_score_sum + score * remaining_weight)
          / NOMINAL_TOTAL_WEIGHT,
      ),
      _ if agg.graded_weight > 0.0 => {
        Some(agg.weighted_score_sum / NOMINAL_TOTAL_WEIGHT)
      }
      _ => None,
    };

    Self {
      partial_average: agg.partial_average(),
      projected_average,
      required_score: None,
      graded_weight: agg.graded_weight,
      remaining_weight,
      total_weight: agg.total_weight,
    }
  }
}

/// Summarise `assessments`, optionally projecting `hypothetical_score` onto
/// the ungraded weight.
pub fn compute_overview(
  assessments: &[AssessmentComponent],
  hypothetical_score: Option<f64>,
) -> GradeOverview {
  let agg = WeightedAggregate::from_assessments(assessments);
  GradeOverview::from_aggregate(&agg, hypothetical_score)
}
