//! Assessment records: the input rows the engine reads.
//!
//! An assessment is one weighted component of a unit's grade (an exam, a
//! project, a quiz). The engine only ever reads `weight` and
//! `obtained_score`; the remaining fields are carried for the surrounding
//! application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// What sort of assessment a component is. Descriptive only.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AssessmentKind {
  Assessment,
  Activity,
  Event,
  #[default]
  Test,
  Assignment,
  Quiz,
  Project,
  Participation,
  Exam,
  Other,
}

// ─── AssessmentComponent ─────────────────────────────────────────────────────

/// A single graded or to-be-graded component of a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentComponent {
  pub id:             Uuid,
  /// The owning unit. Informational; never used in computation.
  pub unit_id:        Uuid,
  pub name:           String,
  pub kind:           AssessmentKind,
  pub due_at:         DateTime<Utc>,
  /// Percentage points toward the unit's final grade. Weights across a unit
  /// are expected, but not required, to sum to 100.
  pub weight:         f64,
  /// `None` until the component is graded. `Some(0.0)` is a real grade.
  pub obtained_score: Option<f64>,
  /// Carried for display; no formula reads it.
  pub max_score:      Option<f64>,
}

impl AssessmentComponent {
  /// An ungraded component with a fresh id.
  pub fn new(
    unit_id: Uuid,
    name: impl Into<String>,
    kind: AssessmentKind,
    weight: f64,
    due_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      unit_id,
      name: name.into(),
      kind,
      due_at,
      weight,
      obtained_score: None,
      max_score: None,
    }
  }

  /// Returns the component with `obtained_score` set.
  pub fn graded(mut self, score: f64) -> Self {
    self.obtained_score = Some(score);
    self
  }

  pub fn is_graded(&self) -> bool { self.obtained_score.is_some() }
}
