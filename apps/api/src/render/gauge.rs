// Score gauge geometry and colour bands.

use std::f64::consts::PI;

pub const GAUGE_RADIUS: f64 = 40.0;

/// Colour band for a score: green from 80, yellow from 60, red below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            ScoreBand::High
        } else if score >= 60 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            ScoreBand::High => "text-green-500",
            ScoreBand::Medium => "text-yellow-500",
            ScoreBand::Low => "text-red-500",
        }
    }

    pub fn stroke_color(self) -> &'static str {
        match self {
            ScoreBand::High => "#22c55e",
            ScoreBand::Medium => "#eab308",
            ScoreBand::Low => "#ef4444",
        }
    }
}

pub fn circumference() -> f64 {
    2.0 * PI * GAUGE_RADIUS
}

/// Stroke offset of the progress arc. The score is used as-is.
pub fn dash_offset(score: i64) -> f64 {
    let c = circumference();
    c - (score as f64 / 100.0) * c
}
