//! Player growth: weekly aging curves.
//!
//! - `aging_curve`: sigmoid growth before the peak age, exponential decay after it

pub mod aging_curve;

pub use aging_curve::{apply_week, AgingCurve, WeeklyChange};
