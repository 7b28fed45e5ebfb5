//! Plain-text and JSON rendering of evaluation results.

use std::fmt::Write as _;

use anyhow::Result;
use gradeline_core::{
  grading::{GradeOverview, PassStatus, UnitProgress, UnitStatus},
  template::TEMPLATES,
};
use serde_json::json;

fn status_label(status: PassStatus) -> &'static str {
  match status {
    PassStatus::Passed => "passed",
    PassStatus::Failed => "failed",
    PassStatus::OnTrack => "on track",
    PassStatus::AtRisk => "at risk",
    PassStatus::Unreachable => "unreachable",
    PassStatus::NeedsRetake => "needs retake exam",
  }
}

fn grade(value: Option<f64>) -> String {
  value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn write_weights(out: &mut String, overview: &GradeOverview) {
  let _ = writeln!(
    out,
    "  weights:           {:.1} graded, {:.1} remaining, {:.1} total",
    overview.graded_weight, overview.remaining_weight, overview.total_weight
  );
}

pub fn status_text(name: &str, result: &UnitStatus, progress: &UnitProgress) -> String {
  let overview = &result.overview;
  let mut out = String::new();

  let settled = if result.status.is_settled() { " (final)" } else { "" };
  let _ = writeln!(out, "{name}: {}{settled}", status_label(result.status));
  let _ = writeln!(out, "  partial average:   {}", grade(overview.partial_average));
  let _ = writeln!(out, "  projected average: {}", grade(overview.projected_average));
  let _ = writeln!(out, "  required score:    {}", grade(overview.required_score));
  write_weights(&mut out, overview);
  let _ = writeln!(
    out,
    "  progress:          {}/{} assessments graded ({:.1}%)",
    progress.completed_assessments,
    progress.total_assessments,
    progress.completion_percent
  );
  out
}

pub fn status_json(
  name: &str,
  result: &UnitStatus,
  progress: &UnitProgress,
) -> Result<serde_json::Value> {
  Ok(json!({
    "unit": name,
    "result": result.to_json()?,
    "progress": progress,
  }))
}

pub fn projection_text(name: &str, score: f64, overview: &GradeOverview) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{name}: scoring {score:.2} on the remaining weight");
  let _ = writeln!(out, "  partial average:   {}", grade(overview.partial_average));
  let _ = writeln!(out, "  projected average: {}", grade(overview.projected_average));
  write_weights(&mut out, overview);
  out
}

pub fn projection_json(name: &str, score: f64, overview: &GradeOverview) -> serde_json::Value {
  json!({
    "unit": name,
    "hypothetical_score": score,
    "overview": overview,
  })
}

pub fn templates_text() -> String {
  let mut out = String::new();
  for template in TEMPLATES {
    let _ = writeln!(out, "{}: {}", template.id, template.label);
    for c in template.components {
      let minimum = c
        .minimum_grade
        .map(|m| format!(", minimum {m}"))
        .unwrap_or_default();
      let _ = writeln!(out, "  {:<14} {:>5.1}  {}{minimum}", c.title, c.weight, c.kind);
    }
  }
  out
}

pub fn templates_json() -> serde_json::Value { json!(TEMPLATES) }
