//! The weighted sums both calculators are built on.

use crate::assessment::AssessmentComponent;

use super::NOMINAL_TOTAL_WEIGHT;

/// Weight and score totals over a unit's assessments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedAggregate {
  /// Σ weight over every assessment, graded or not.
  pub total_weight:       f64,
  /// Σ weight over graded assessments.
  pub graded_weight:      f64,
  /// Σ score × weight over graded assessments.
  pub weighted_score_sum: f64,
}

impl WeightedAggregate {
  pub fn from_assessments(assessments: &[AssessmentComponent]) -> Self {
    assessments.iter().fold(Self::default(), |mut acc, a| {
      acc.total_weight += a.weight;
      if let Some(score) = a.obtained_score {
        acc.graded_weight += a.weight;
        acc.weighted_score_sum += score * a.weight;
      }
      acc
    })
  }

  /// Ungraded weight out of the nominal total, never negative.
  pub fn remaining_weight(&self) -> f64 {
    (NOMINAL_TOTAL_WEIGHT - self.graded_weight).max(0.0)
  }

  /// Weighted mean over graded assessments only.
  pub fn partial_average(&self) -> Option<f64> {
    (self.graded_weight > 0.0)
      .then(|| self.weighted_score_sum / self.graded_weight)
  }

  /// The average used to settle a fully graded unit; zero when nothing
  /// carries weight.
  pub(crate) fn settled_average(&self) -> f64 {
    self.partial_average().unwrap_or(0.0)
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use uuid::Uuid;

  use super::*;
  use crate::assessment::AssessmentKind;

  fn item(weight: f64, score: Option<f64>) -> AssessmentComponent {
    let a = AssessmentComponent::new(
      Uuid::nil(),
      "item",
      AssessmentKind::Test,
      weight,
      Utc::now(),
    );
    match score {
      Some(s) => a.graded(s),
      None => a,
    }
  }

  #[test]
  fn empty_collection_is_all_zero() {
    let agg = WeightedAggregate::from_assessments(&[]);
    assert_eq!(agg, WeightedAggregate::default());
    assert_eq!(agg.remaining_weight(), 100.0);
    assert_eq!(agg.partial_average(), None);
    assert_eq!(agg.settled_average(), 0.0);
  }

  #[test]
  fn ungraded_weight_counts_only_toward_total() {
    let agg = WeightedAggregate::from_assessments(&[
      item(30.0, Some(15.0)),
      item(70.0, None),
    ]);
    assert_eq!(agg.total_weight, 100.0);
    assert_eq!(agg.graded_weight, 30.0);
    assert_eq!(agg.weighted_score_sum, 450.0);
    assert_eq!(agg.remaining_weight(), 70.0);
  }

  #[test]
  fn remaining_weight_is_clamped_at_zero() {
    let agg = WeightedAggregate::from_assessments(&[
      item(70.0, Some(10.0)),
      item(60.0, Some(10.0)),
    ]);
    assert_eq!(agg.graded_weight, 130.0);
    assert_eq!(agg.remaining_weight(), 0.0);
  }
}
