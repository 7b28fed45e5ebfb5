//! Built-in assessment templates.
//!
//! A template is a common weighting scheme ("project + exam") that can be
//! stamped out as ungraded assessments for a new unit. Component weights in
//! every template sum to the nominal 100.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  assessment::{AssessmentComponent, AssessmentKind},
};

#[derive(Debug, Clone, Serialize)]
pub struct TemplateComponent {
  pub title:         &'static str,
  pub kind:          AssessmentKind,
  pub weight:        f64,
  pub is_required:   bool,
  /// Minimum grade on this component alone. Descriptive; the engine does not
  /// enforce it.
  pub minimum_grade: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentTemplate {
  pub id:         &'static str,
  pub label:      &'static str,
  pub components: &'static [TemplateComponent],
}

impl AssessmentTemplate {
  /// Ungraded assessments for `unit_id`, all due at `due_at`.
  pub fn instantiate(
    &self,
    unit_id: Uuid,
    due_at: DateTime<Utc>,
  ) -> Vec<AssessmentComponent> {
    self
      .components
      .iter()
      .map(|c| {
        AssessmentComponent::new(unit_id, c.title, c.kind, c.weight, due_at)
      })
      .collect()
  }

  pub fn total_weight(&self) -> f64 {
    self.components.iter().map(|c| c.weight).sum()
  }
}

const fn component(
  title: &'static str,
  kind: AssessmentKind,
  weight: f64,
  minimum_grade: Option<f64>,
) -> TemplateComponent {
  TemplateComponent {
    title,
    kind,
    weight,
    is_required: true,
    minimum_grade,
  }
}

pub static TEMPLATES: &[AssessmentTemplate] = &[
  AssessmentTemplate {
    id:         "continuous_exam",
    label:      "Continuous + Final Exam",
    components: &[
      component("Project", AssessmentKind::Project, 40.0, None),
      component("Final Exam", AssessmentKind::Exam, 60.0, Some(8.0)),
    ],
  },
  AssessmentTemplate {
    id:         "three_folios_exam",
    label:      "3 Assignments + Exam",
    components: &[
      component("Assignment 1", AssessmentKind::Assignment, 20.0, None),
      component("Assignment 2", AssessmentKind::Assignment, 20.0, None),
      component("Assignment 3", AssessmentKind::Assignment, 20.0, None),
      component("Exam", AssessmentKind::Exam, 40.0, Some(8.0)),
    ],
  },
  AssessmentTemplate {
    id:         "project_exam",
    label:      "Project + Exam",
    components: &[
      component("Project", AssessmentKind::Project, 50.0, None),
      component("Exam", AssessmentKind::Exam, 50.0, Some(8.0)),
    ],
  },
];

/// Look up a built-in template by id.
pub fn find_template(id: &str) -> Result<&'static AssessmentTemplate> {
  TEMPLATES
    .iter()
    .find(|t| t.id == id)
    .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::grading::{NOMINAL_TOTAL_WEIGHT, PassStatus, classify};
  use crate::unit::UnitGradingConfig;

  #[test]
  fn every_template_sums_to_nominal_weight() {
    for t in TEMPLATES {
      assert_eq!(t.total_weight(), NOMINAL_TOTAL_WEIGHT, "template {}", t.id);
    }
  }

  #[test]
  fn unknown_template() {
    assert!(matches!(
      find_template("oral_only"),
      Err(Error::UnknownTemplate(id)) if id == "oral_only"
    ));
  }

  #[test]
  fn instantiated_template_is_ungraded() {
    let unit = Uuid::new_v4();
    let items = find_template("three_folios_exam")
      .unwrap()
      .instantiate(unit, Utc::now());
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|a| a.unit_id == unit && !a.is_graded()));

    let status = classify(&items, &UnitGradingConfig::default());
    assert_eq!(status.overview.total_weight, 100.0);
    assert_eq!(status.overview.required_score, Some(10.0));
    assert_eq!(status.status, PassStatus::OnTrack);
  }
}
