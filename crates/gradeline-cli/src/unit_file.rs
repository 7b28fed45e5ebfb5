//! The TOML unit file the CLI evaluates.
//!
//! ```toml
//! [course]
//! grade_scale = "0-20"
//! minimum_passing_grade = 9.5
//!
//! [unit]
//! name = "Linear Algebra"
//! has_retake_exam = true
//!
//! [[assessments]]
//! name = "Midterm"
//! kind = "exam"
//! weight = 40
//! obtained_score = 12.5
//! due_at = "2025-03-14T09:00:00Z"
//!
//! [[assessments]]
//! name = "Final"
//! kind = "exam"
//! weight = 60
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gradeline_core::{
  assessment::{AssessmentComponent, AssessmentKind},
  memory::InMemoryProvider,
  template::find_template,
  unit::{GradeScale, UnitGradingConfig},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::settings::CliSettings;

// ─── File shape ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UnitFile {
  pub course:      Option<CourseSection>,
  pub unit:        UnitSection,
  #[serde(default)]
  pub assessments: Vec<AssessmentEntry>,
}

/// Course-level defaults a unit inherits from.
#[derive(Debug, Default, Deserialize)]
pub struct CourseSection {
  pub grade_scale:           Option<GradeScale>,
  pub minimum_passing_grade: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UnitSection {
  pub name:                  String,
  pub grade_scale:           Option<GradeScale>,
  pub minimum_passing_grade: Option<f64>,
  #[serde(default)]
  pub has_retake_exam:       bool,
  /// Built-in template id; used only when no assessments are listed.
  pub template:              Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentEntry {
  pub name:           String,
  #[serde(default)]
  pub kind:           AssessmentKind,
  pub weight:         f64,
  pub obtained_score: Option<f64>,
  pub max_score:      Option<f64>,
  /// RFC 3339 string; defaults to load time.
  pub due_at:         Option<DateTime<Utc>>,
}

// ─── Loaded unit ──────────────────────────────────────────────────────────────

/// A parsed unit file registered in an [`InMemoryProvider`].
pub struct LoadedUnit {
  pub name:     String,
  pub unit_id:  Uuid,
  pub provider: InMemoryProvider,
}

impl UnitFile {
  pub fn read(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading unit file {}", path.display()))?;
    Self::parse(&raw)
      .with_context(|| format!("parsing unit file {}", path.display()))
  }

  pub fn parse(raw: &str) -> Result<Self> {
    Ok(toml::from_str(raw)?)
  }

  /// Resolve the grading configuration, falling back from unit to course to
  /// the CLI defaults.
  ///
  /// A unit with its own scale does not inherit the course's pass mark.
  pub fn resolve_config(&self, defaults: &CliSettings) -> UnitGradingConfig {
    let unit = &self.unit;
    let course = match (&unit.grade_scale, &self.course) {
      (None, Some(course)) => Some(course),
      _ => None,
    };

    let scale = unit
      .grade_scale
      .or_else(|| course.and_then(|c| c.grade_scale))
      .unwrap_or(defaults.default_grade_scale);

    let minimum_passing_grade = unit
      .minimum_passing_grade
      .or_else(|| course.and_then(|c| c.minimum_passing_grade))
      .unwrap_or(defaults.default_minimum_passing_grade);

    UnitGradingConfig::for_scale(scale, minimum_passing_grade, unit.has_retake_exam)
  }

  /// Register the unit and its assessments in a fresh provider.
  pub fn load(self, defaults: &CliSettings) -> Result<LoadedUnit> {
    let config = self.resolve_config(defaults);
    let mut provider = InMemoryProvider::new();
    let unit_id = provider.insert_unit(config);
    let now = Utc::now();

    let assessments = match (&self.unit.template, self.assessments.is_empty()) {
      (Some(template), true) => find_template(template)?.instantiate(unit_id, now),
      (template, _) => {
        if let Some(template) = template {
          tracing::warn!(%template, "assessments listed; template ignored");
        }
        self
          .assessments
          .into_iter()
          .map(|entry| AssessmentComponent {
            id:             Uuid::new_v4(),
            unit_id,
            name:           entry.name,
            kind:           entry.kind,
            due_at:         entry.due_at.unwrap_or(now),
            weight:         entry.weight,
            obtained_score: entry.obtained_score,
            max_score:      entry.max_score,
          })
          .collect()
      }
    };

    tracing::debug!(
      unit = %self.unit.name,
      count = assessments.len(),
      ?config,
      "loaded unit file"
    );

    for assessment in assessments {
      provider.add_assessment(assessment)?;
    }

    Ok(LoadedUnit {
      name: self.unit.name,
      unit_id,
      provider,
    })
  }
}
