//! Core types and the grade-evaluation engine for Gradeline.
//!
//! This crate does no I/O. Everything in [`grading`] is a pure
//! function of its inputs; the provider traits in [`provider`] describe where
//! a caller gets those inputs from.

pub mod assessment;
pub mod error;
pub mod grading;
pub mod memory;
pub mod provider;
pub mod template;
pub mod unit;

pub use error::{Error, Result};
pub use grading::{
  GradeOverview, NeededScoreOutcome, NeededScoreResult, PassStatus, UnitStatus,
  classify, compute_needed_score, compute_overview,
};
