//! Gauge Mapper — the piecewise transform from a similarity score to the
//! 0–100 display axis, plus the color band layout the UI draws.
//!
//! The transform is intentionally non-linear: a different slope below 0.75,
//! between 0.75 and 0.85, and at or above 0.85, so small score differences
//! near the decision thresholds spread out visually. Values are not clamped;
//! very low scores map below the zero mark and render that way.

use serde::Serialize;

/// Maps a similarity score to its gauge needle position.
pub fn gauge_value(score: f32) -> f32 {
    if score < 0.75 {
        (score - 0.3) * 100.0
    } else if score < 0.85 {
        (score - 0.5) * 200.0
    } else {
        (score - 0.70) * 300.0
    }
}

/// One colored step on the gauge axis.
#[derive(Debug, Clone, Serialize)]
pub struct GaugeBand {
    pub range: [f32; 2],
    pub color: &'static str,
}

/// Band layout shared by every gauge in the report.
pub fn bands() -> Vec<GaugeBand> {
    vec![
        GaugeBand {
            range: [0.0, 20.0],
            color: "red",
        },
        GaugeBand {
            range: [20.0, 40.0],
            color: "orange",
        },
        GaugeBand {
            range: [40.0, 60.0],
            color: "yellow",
        },
        GaugeBand {
            range: [60.0, 80.0],
            color: "yellowgreen",
        },
        GaugeBand {
            range: [80.0, 100.0],
            color: "green",
        },
    ]
}
