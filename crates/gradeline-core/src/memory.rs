//! In-memory provider backed by hash maps.
//!
//! Used by the CLI after parsing a unit file, and by tests.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
  Error, Result,
  assessment::AssessmentComponent,
  provider::{AssessmentProvider, UnitConfigProvider},
  unit::UnitGradingConfig,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
  configs:     HashMap<Uuid, UnitGradingConfig>,
  assessments: HashMap<Uuid, Vec<AssessmentComponent>>,
}

impl InMemoryProvider {
  pub fn new() -> Self { Self::default() }

  /// Register a unit under a fresh id.
  pub fn insert_unit(&mut self, config: UnitGradingConfig) -> Uuid {
    let unit_id = Uuid::new_v4();
    self.insert_unit_with_id(unit_id, config);
    unit_id
  }

  /// Register (or reconfigure) a unit under a caller-supplied id.
  pub fn insert_unit_with_id(&mut self, unit_id: Uuid, config: UnitGradingConfig) {
    self.configs.insert(unit_id, config);
    self.assessments.entry(unit_id).or_default();
  }

  /// Attach an assessment to the unit named by its `unit_id`.
  pub fn add_assessment(&mut self, assessment: AssessmentComponent) -> Result<()> {
    let list = self
      .assessments
      .get_mut(&assessment.unit_id)
      .ok_or(Error::UnitNotFound(assessment.unit_id))?;
    list.push(assessment);
    Ok(())
  }

  /// Set the obtained score of an existing assessment. Returns `false` if no
  /// assessment with `assessment_id` exists in the unit.
  pub fn record_score(
    &mut self,
    unit_id: Uuid,
    assessment_id: Uuid,
    score: Option<f64>,
  ) -> Result<bool> {
    let list = self
      .assessments
      .get_mut(&unit_id)
      .ok_or(Error::UnitNotFound(unit_id))?;
    match list.iter_mut().find(|a| a.id == assessment_id) {
      Some(a) => {
        a.obtained_score = score;
        Ok(true)
      }
      None => Ok(false),
    }
  }
}

impl AssessmentProvider for InMemoryProvider {
  type Error = Error;

  fn assessments(&self, unit_id: Uuid) -> Result<Vec<AssessmentComponent>> {
    self
      .assessments
      .get(&unit_id)
      .cloned()
      .ok_or(Error::UnitNotFound(unit_id))
  }
}

impl UnitConfigProvider for InMemoryProvider {
  type Error = Error;

  fn grading_config(&self, unit_id: Uuid) -> Result<UnitGradingConfig> {
    self
      .configs
      .get(&unit_id)
      .copied()
      .ok_or(Error::UnitNotFound(unit_id))
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::{
    assessment::AssessmentKind, grading::PassStatus, provider::evaluate_unit,
  };

  #[test]
  fn unknown_unit_is_an_error() {
    let provider = InMemoryProvider::new();
    let missing = Uuid::new_v4();
    assert!(matches!(
      provider.assessments(missing),
      Err(Error::UnitNotFound(id)) if id == missing
    ));
    assert!(matches!(
      evaluate_unit(&provider, missing),
      Err(Error::UnitNotFound(_))
    ));
  }

  #[test]
  fn assessment_for_unknown_unit_is_rejected() {
    let mut provider = InMemoryProvider::new();
    let a = AssessmentComponent::new(
      Uuid::new_v4(),
      "Exam",
      AssessmentKind::Exam,
      100.0,
      Utc::now(),
    );
    assert!(provider.add_assessment(a).is_err());
  }

  #[test]
  fn evaluate_through_provider() {
    let mut provider = InMemoryProvider::new();
    let unit = provider.insert_unit(UnitGradingConfig::new(10.0, 20.0, true));

    let exam = AssessmentComponent::new(unit, "Exam", AssessmentKind::Exam, 20.0, Utc::now());
    let exam_id = exam.id;
    provider
      .add_assessment(
        AssessmentComponent::new(unit, "Project", AssessmentKind::Project, 80.0, Utc::now())
          .graded(2.0),
      )
      .unwrap();
    provider.add_assessment(exam).unwrap();

    let status = evaluate_unit(&provider, unit).unwrap();
    assert_eq!(status.status, PassStatus::NeedsRetake);
    assert_eq!(status.overview.required_score, Some(42.0));

    assert!(provider.record_score(unit, exam_id, Some(20.0)).unwrap());
    let status = evaluate_unit(&provider, unit).unwrap();
    assert_eq!(status.status, PassStatus::Failed);
    assert_eq!(status.overview.required_score, None);

    assert!(!provider.record_score(unit, Uuid::new_v4(), None).unwrap());
  }
}
