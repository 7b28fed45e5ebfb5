//! The grade-evaluation engine.
//!
//! Three pure calculators, composed top-down:
//!
//! - [`compute_overview`]: weights, partial average and projection.
//! - [`compute_needed_score`]: score still required on the ungraded weight,
//!   with a five-way [`NeededScoreOutcome`].
//! - [`classify`]: the six-way [`PassStatus`] a UI shows, bundled with the
//!   overview.
//!
//! Every function is total: degenerate input (no assessments, nothing graded,
//! weights far from 100) produces `None` or a clamped value, never an error.
//! Behaviour on non-finite numbers is unspecified.

mod aggregate;
mod needed;
mod overview;
mod progress;
mod status;

pub use aggregate::WeightedAggregate;
pub use needed::{NeededScoreOutcome, NeededScoreResult, compute_needed_score};
pub use overview::{GradeOverview, compute_overview};
pub use progress::{UnitProgress, compute_progress};
pub use status::{PassStatus, UnitStatus, classify};

/// Weight points a unit's assessments are assumed to add up to.
///
/// Not derived from the data: once everything in a unit whose weights sum to
/// 80 is graded, 20 points are still outstanding.
pub const NOMINAL_TOTAL_WEIGHT: f64 = 100.0;

/// Fraction of the maximum grade up to which a required score still counts as
/// comfortably reachable ([`PassStatus::OnTrack`]).
pub const ON_TRACK_RATIO: f64 = 0.7;
