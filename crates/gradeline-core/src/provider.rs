//! The provider traits the engine's callers read their inputs from.
//!
//! Implemented by whatever holds the data (a database layer, a parsed file,
//! [`InMemoryProvider`](crate::memory::InMemoryProvider)). The engine itself
//! never sees a provider; [`evaluate_unit`] is the glue.

use uuid::Uuid;

use crate::{
  assessment::AssessmentComponent,
  grading::{NOMINAL_TOTAL_WEIGHT, UnitStatus, WeightedAggregate, classify},
  unit::UnitGradingConfig,
};

// ─── Traits ──────────────────────────────────────────────────────────────────

/// Source of the assessment records for a unit.
pub trait AssessmentProvider {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All assessments belonging to `unit_id`, in any order.
  fn assessments(
    &self,
    unit_id: Uuid,
  ) -> Result<Vec<AssessmentComponent>, Self::Error>;
}

/// Source of a unit's grading configuration.
///
/// Implementations are expected to have already applied any course-level or
/// global fallbacks.
pub trait UnitConfigProvider {
  type Error: std::error::Error + Send + Sync + 'static;

  fn grading_config(
    &self,
    unit_id: Uuid,
  ) -> Result<UnitGradingConfig, Self::Error>;
}

// ─── Evaluation ──────────────────────────────────────────────────────────────

/// Fetch a unit's assessments and configuration from `provider` and classify
/// it.
pub fn evaluate_unit<P, E>(provider: &P, unit_id: Uuid) -> Result<UnitStatus, E>
where
  P: AssessmentProvider<Error = E> + UnitConfigProvider<Error = E>,
  E: std::error::Error + Send + Sync + 'static,
{
  let assessments = provider.assessments(unit_id)?;
  let config = provider.grading_config(unit_id)?;

  let total_weight = WeightedAggregate::from_assessments(&assessments).total_weight;
  if !assessments.is_empty()
    && (total_weight - NOMINAL_TOTAL_WEIGHT).abs() > 1e-6
  {
    tracing::warn!(
      %unit_id,
      total_weight,
      "assessment weights do not sum to {NOMINAL_TOTAL_WEIGHT}"
    );
  }

  let result = classify(&assessments, &config);
  tracing::debug!(
    %unit_id,
    status = %result.status,
    remaining_weight = result.overview.remaining_weight,
    required_score = ?result.overview.required_score,
    "evaluated unit"
  );

  Ok(result)
}
