//! Score and loss banding used by the result view

use serde::{Deserialize, Serialize};

/// STC at which the progress bar is full ("professional studio")
pub const STC_SCALE_MAX: f64 = 70.0;

/// Qualitative band of an STC score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Weak,
    Moderate,
    Strong,
}

impl ScoreBand {
    pub fn from_stc(stc: i32) -> Self {
        if stc > 50 {
            Self::Strong
        } else if stc > 35 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Strong => "#4ade80",
            Self::Moderate => "#facc15",
            Self::Weak => "#f87171",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

/// Fill fraction of the score bar, 0.0 to 1.0
pub fn progress_fraction(stc: i32) -> f64 {
    (stc as f64 / STC_SCALE_MAX).clamp(0.0, 1.0)
}

/// Band of a single transmission-loss bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossBand {
    Low,
    Medium,
    High,
}

impl LossBand {
    pub fn from_db(value: f64) -> Self {
        if value > 40.0 {
            Self::High
        } else if value > 25.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::High => "#4ade80",
            Self::Medium => "#60a5fa",
            Self::Low => "#f87171",
        }
    }
}

/// "$$···" style cost display, always five characters
pub fn cost_meter(cost_index: u8) -> String {
    let cost = cost_index.min(5) as usize;
    format!("{}{}", "$".repeat(cost), "·".repeat(5 - cost))
}
