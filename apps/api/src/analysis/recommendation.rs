//! Recommendation Engine — maps per-section similarities to a categorical
//! verdict and an aggregate score.
//!
//! One threshold policy everywhere: strong when every scored section is at
//! least 0.85, weak when any falls below 0.75, good otherwise. The overall
//! gauge uses the same policy; 0.70 appears only as a display band boundary
//! (see DESIGN.md for the rationale).

use serde::{Deserialize, Serialize};

pub const STRONG_THRESHOLD: f32 = 0.85;
pub const WEAK_THRESHOLD: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    StrongMatch,
    GoodMatch,
    WeakMatch,
    /// No section could be scored (every embedding call failed).
    Undetermined,
}

impl Verdict {
    /// The user-facing recommendation line rendered under the gauges.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::StrongMatch => "Perfect match! Strongly consider applying.",
            Verdict::GoodMatch => "You are a good match for this role.",
            Verdict::WeakMatch => "You may not be a good match for this role.",
            Verdict::Undetermined => "The match could not be scored. Please try again.",
        }
    }
}

/// Verdict over the sections that produced a score.
pub fn recommend(scores: &[f32]) -> Verdict {
    if scores.is_empty() {
        return Verdict::Undetermined;
    }
    if scores.iter().all(|s| *s >= STRONG_THRESHOLD) {
        Verdict::StrongMatch
    } else if scores.iter().any(|s| *s < WEAK_THRESHOLD) {
        Verdict::WeakMatch
    } else {
        Verdict::GoodMatch
    }
}

/// Arithmetic mean of the scored sections, `None` when nothing was scored.
pub fn aggregate(scores: &[f32]) -> Option<f32> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f32>() / scores.len() as f32)
}
