//! Recognition and evaluation results

use std::collections::BTreeMap;

use landmarks::{Joint, Orientation};
use pose_catalog::PoseName;
use serde::{Deserialize, Serialize};

/// Label reported when no pose is accepted
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Match score against a target pose.
///
/// `NotApplicable` means the pose cannot be scored from the current
/// orientation and is distinct from a score of zero. It serialises as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Scored(f64),
    NotApplicable,
}

impl Confidence {
    /// Score, if one could be computed
    pub fn value(self) -> Option<f64> {
        match self {
            Confidence::Scored(v) => Some(v),
            Confidence::NotApplicable => None,
        }
    }
}

/// Open-set recognition outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    /// Accepted pose, `None` when nothing cleared the threshold
    pub pose: Option<PoseName>,
    /// Best score seen, reported even when rejected
    pub confidence: f64,
}

impl Recognition {
    pub fn unknown(confidence: f64) -> Self {
        Self {
            pose: None,
            confidence,
        }
    }

    /// Pose name or "Unknown"
    pub fn label(&self) -> &'static str {
        self.pose.map_or(UNKNOWN_LABEL, PoseName::as_str)
    }
}

/// Per-joint quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointStatus {
    Good,
    NeedsImprovement,
    Poor,
}

impl JointStatus {
    /// Tier for an absolute angle difference
    pub fn classify(difference: f64, tolerance: f64, needs_improvement_factor: f64) -> Self {
        if difference <= tolerance {
            JointStatus::Good
        } else if difference <= tolerance * needs_improvement_factor {
            JointStatus::NeedsImprovement
        } else {
            JointStatus::Poor
        }
    }
}

/// Diagnostic for one joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointComparison {
    /// Measured angle, one decimal place
    pub current: f64,
    pub target: f64,
    /// Absolute difference, one decimal place
    pub difference: f64,
    pub status: JointStatus,
}

/// Per-joint breakdown keyed by joint name
pub type Breakdown = BTreeMap<Joint, JointComparison>;

/// Closed-set evaluation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub confidence: Confidence,
    pub breakdown: Breakdown,
    pub orientation: Orientation,
    pub orientation_valid: bool,
}

impl Evaluation {
    /// Result for input without an analyzable body
    pub fn no_body() -> Self {
        Self {
            confidence: Confidence::Scored(0.0),
            breakdown: Breakdown::new(),
            orientation: Orientation::Front,
            orientation_valid: true,
        }
    }
}

/// Round to one decimal place on the exact binary value, ties to even
pub(crate) fn round_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Finite angles expand exactly in far fewer than 64 decimal places
    let exact = format!("{:.64}", value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let Ok(whole) = whole.parse::<u64>() else {
        return (value * 10.0).round() / 10.0;
    };

    let digits = fraction.as_bytes();
    let mut tenths = whole * 10 + u64::from(digits[0] - b'0');
    let rest = &digits[1..];
    let round_up = match rest[0] {
        b'6'..=b'9' => true,
        b'5' => rest[1..].iter().any(|&d| d != b'0') || tenths % 2 == 1,
        _ => false,
    };
    if round_up {
        tenths += 1;
    }

    (tenths as f64 / 10.0).copysign(value)
}
