//! Scoring targets.
//!
//! Each target is paired with a pure transform in [`TARGET_TABLE`], indexed by
//! the enum discriminant.

use super::features::FeatureStats;
use super::scoring;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mental-health dimension a feature vector is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Depression,
    Severity,
    Anxiety,
    Stress,
    Ptsd,
    Ocd,
    Adhd,
    Burnout,
    Insomnia,
    Wellbeing,
}

/// How a raw probability is bounded before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityClamp {
    /// `[0, 1]`
    Unit,
    /// Only capped at 1.
    UpperOnly,
}

/// Shape of a per-row result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// `{label, probability}`; `positive` is used when probability >= 0.5.
    Probability {
        positive: &'static str,
        negative: &'static str,
        clamp: ProbabilityClamp,
    },
    /// `{<metric>: integer}` bounded to `[min, max]`.
    Level {
        metric: &'static str,
        min: i64,
        max: i64,
    },
}

/// Raw, unbounded value of a target's formula.
pub(crate) type Transform = fn(&FeatureStats) -> f64;

pub(crate) struct TargetEntry {
    pub target: Target,
    pub name: &'static str,
    pub shape: OutputShape,
    pub transform: Transform,
}

const fn probability(positive: &'static str, negative: &'static str) -> OutputShape {
    OutputShape::Probability {
        positive,
        negative,
        clamp: ProbabilityClamp::Unit,
    }
}

const fn level(metric: &'static str, min: i64, max: i64) -> OutputShape {
    OutputShape::Level { metric, min, max }
}

/// Ordered like the `Target` variants.
pub(crate) static TARGET_TABLE: [TargetEntry; 10] = [
    TargetEntry {
        target: Target::Depression,
        name: "depression",
        shape: probability("Depressed", "Not Depressed"),
        transform: scoring::shifted_mean,
    },
    TargetEntry {
        target: Target::Severity,
        name: "severity",
        shape: level("severity", 0, 10),
        transform: scoring::severity,
    },
    TargetEntry {
        target: Target::Anxiety,
        name: "anxiety",
        shape: OutputShape::Probability {
            positive: "Anxious",
            negative: "Calm",
            clamp: ProbabilityClamp::UpperOnly,
        },
        transform: scoring::scaled_variance,
    },
    TargetEntry {
        target: Target::Stress,
        name: "stress",
        shape: level("stress", 0, 100),
        transform: scoring::abs_mean_percent,
    },
    TargetEntry {
        target: Target::Ptsd,
        name: "ptsd",
        shape: probability("PTSD Risk", "Low Risk"),
        transform: scoring::abs_mean,
    },
    TargetEntry {
        target: Target::Ocd,
        name: "ocd",
        shape: probability("OCD Traits", "Low Traits"),
        transform: scoring::shifted_mean,
    },
    TargetEntry {
        target: Target::Adhd,
        name: "adhd",
        shape: probability("ADHD Traits", "Low Traits"),
        transform: scoring::positive_fraction,
    },
    TargetEntry {
        target: Target::Burnout,
        name: "burnout",
        shape: level("burnout", 0, 100),
        transform: scoring::abs_mean_percent,
    },
    TargetEntry {
        target: Target::Insomnia,
        name: "insomnia",
        shape: level("insomnia", 0, 10),
        transform: scoring::insomnia,
    },
    TargetEntry {
        target: Target::Wellbeing,
        name: "wellbeing",
        shape: level("wellbeing", 0, 100),
        transform: scoring::wellbeing,
    },
];

impl Target {
    #[cfg(test)]
    pub const ALL: [Target; 10] = [
        Target::Depression,
        Target::Severity,
        Target::Anxiety,
        Target::Stress,
        Target::Ptsd,
        Target::Ocd,
        Target::Adhd,
        Target::Burnout,
        Target::Insomnia,
        Target::Wellbeing,
    ];

    pub(crate) fn entry(self) -> &'static TargetEntry {
        let entry = &TARGET_TABLE[self as usize];
        debug_assert_eq!(entry.target, self);
        entry
    }

    /// Lowercase tag used in URLs and JSON.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn shape(self) -> OutputShape {
        self.entry().shape
    }

    pub fn is_probability(self) -> bool {
        matches!(self.shape(), OutputShape::Probability { .. })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
