//! Per-row heuristic scoring.
//!
//! Scores are placeholder heuristics over [`FeatureStats`]. The arithmetic is
//! kept exactly as published so results stay comparable between releases.

use super::features::{FeatureStats, FeatureVector};
use super::target::{OutputShape, ProbabilityClamp, Target};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Result for one feature vector.
///
/// Serializes as `{"label": .., "probability": ..}` or `{"<metric>": n}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreResult {
    Probability {
        label: &'static str,
        probability: f64,
    },
    Level {
        metric: &'static str,
        value: i64,
    },
}

impl ScoreResult {
    pub fn probability(&self) -> Option<f64> {
        match self {
            ScoreResult::Probability { probability, .. } => Some(*probability),
            ScoreResult::Level { .. } => None,
        }
    }

    pub fn level(&self) -> Option<i64> {
        match self {
            ScoreResult::Level { value, .. } => Some(*value),
            ScoreResult::Probability { .. } => None,
        }
    }
}

impl Serialize for ScoreResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScoreResult::Probability { label, probability } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("label", label)?;
                map.serialize_entry("probability", probability)?;
                map.end()
            }
            ScoreResult::Level { metric, value } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(metric, value)?;
                map.end()
            }
        }
    }
}

/// Rounds the exact stored value to `places` decimals, ties to even.
///
/// Must not scale by `10^places` first: the product is itself rounded and can
/// land on a tie the stored value never was.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Scores one vector against `target`. Pure: same input, same output.
pub fn score(features: &FeatureVector, target: Target) -> ScoreResult {
    score_stats(&features.stats(), target)
}

pub(crate) fn score_stats(stats: &FeatureStats, target: Target) -> ScoreResult {
    let entry = target.entry();
    let raw = (entry.transform)(stats);

    match entry.shape {
        OutputShape::Probability {
            positive,
            negative,
            clamp,
        } => {
            let probability = match clamp {
                ProbabilityClamp::Unit => raw.clamp(0.0, 1.0),
                ProbabilityClamp::UpperOnly => raw.min(1.0),
            };
            ScoreResult::Probability {
                label: if probability >= 0.5 { positive } else { negative },
                probability: round_to(probability, 3),
            }
        }
        OutputShape::Level { metric, min, max } => ScoreResult::Level {
            metric,
            value: (raw.round_ties_even() as i64).clamp(min, max),
        },
    }
}

// --- Formulas ---

/// `(mean + 1) / 2`
pub(crate) fn shifted_mean(s: &FeatureStats) -> f64 {
    (s.mean + 1.0) / 2.0
}

pub(crate) fn severity(s: &FeatureStats) -> f64 {
    (s.mean + 1.0) * 5.0
}

pub(crate) fn scaled_variance(s: &FeatureStats) -> f64 {
    s.variance / 5.0
}

pub(crate) fn abs_mean(s: &FeatureStats) -> f64 {
    s.abs_mean()
}

pub(crate) fn abs_mean_percent(s: &FeatureStats) -> f64 {
    s.abs_mean() * 100.0
}

pub(crate) fn positive_fraction(s: &FeatureStats) -> f64 {
    s.positive_count as f64 / s.len as f64
}

pub(crate) fn insomnia(s: &FeatureStats) -> f64 {
    (1.0 - s.mean) * 5.0 + 5.0
}

pub(crate) fn wellbeing(s: &FeatureStats) -> f64 {
    (s.mean + 1.0) * 50.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eeg::features::NUM_FEATURES;

    fn constant(value: f64) -> FeatureVector {
        FeatureVector::from_values(vec![value; NUM_FEATURES]).unwrap()
    }

    #[test]
    fn zero_vector_scores() {
        let zeros = constant(0.0);
        assert_eq!(
            score(&zeros, Target::Depression),
            ScoreResult::Probability {
                label: "Depressed",
                probability: 0.5
            }
        );
        assert_eq!(score(&zeros, Target::Severity).level(), Some(5));
        assert_eq!(
            score(&zeros, Target::Anxiety),
            ScoreResult::Probability {
                label: "Calm",
                probability: 0.0
            }
        );
        assert_eq!(score(&zeros, Target::Stress).level(), Some(0));
        assert_eq!(
            score(&zeros, Target::Ptsd),
            ScoreResult::Probability {
                label: "Low Risk",
                probability: 0.0
            }
        );
        assert_eq!(
            score(&zeros, Target::Adhd),
            ScoreResult::Probability {
                label: "Low Traits",
                probability: 0.0
            }
        );
        assert_eq!(score(&zeros, Target::Burnout).level(), Some(0));
        assert_eq!(score(&zeros, Target::Insomnia).level(), Some(10));
        assert_eq!(score(&zeros, Target::Wellbeing).level(), Some(50));
    }

    #[test]
    fn large_means_are_clamped() {
        let high = constant(7.5);
        assert_eq!(score(&high, Target::Depression).probability(), Some(1.0));
        assert_eq!(score(&high, Target::Severity).level(), Some(10));
        assert_eq!(score(&high, Target::Stress).level(), Some(100));
        assert_eq!(score(&high, Target::Insomnia).level(), Some(0));
        assert_eq!(score(&high, Target::Wellbeing).level(), Some(100));

        let low = constant(-7.5);
        assert_eq!(score(&low, Target::Ocd).probability(), Some(0.0));
        assert_eq!(score(&low, Target::Severity).level(), Some(0));
        assert_eq!(score(&low, Target::Burnout).level(), Some(100));
        assert_eq!(score(&low, Target::Ptsd).probability(), Some(1.0));
    }

    #[test]
    fn anxiety_uses_variance() {
        let mut values = vec![3.0; NUM_FEATURES / 2];
        values.extend(vec![-3.0; NUM_FEATURES / 2]);
        let wide = FeatureVector::from_values(values).unwrap();
        // variance 9 -> 1.8, capped at 1
        assert_eq!(
            score(&wide, Target::Anxiety),
            ScoreResult::Probability {
                label: "Anxious",
                probability: 1.0
            }
        );

        let mut values = vec![1.0; NUM_FEATURES / 2];
        values.extend(vec![-1.0; NUM_FEATURES / 2]);
        let narrow = FeatureVector::from_values(values).unwrap();
        assert_eq!(score(&narrow, Target::Anxiety).probability(), Some(0.2));
    }

    #[test]
    fn adhd_counts_positive_values() {
        let mut values = vec![0.01; 768];
        values.extend(vec![-5.0; NUM_FEATURES - 768]);
        let vector = FeatureVector::from_values(values).unwrap();
        assert_eq!(
            score(&vector, Target::Adhd),
            ScoreResult::Probability {
                label: "ADHD Traits",
                probability: 0.75
            }
        );
    }

    #[test]
    fn probability_is_rounded_to_three_places() {
        let vector = constant(0.123456);
        // (0.123456 + 1) / 2 = 0.561728
        assert_eq!(score(&vector, Target::Depression).probability(), Some(0.562));
        assert_eq!(score(&vector, Target::Ptsd).probability(), Some(0.123));
    }

    #[test]
    fn levels_round_half_to_even() {
        // (0.5 + 1) * 5 = 7.5 -> 8, (-0.5 + 1) * 5 = 2.5 -> 2
        assert_eq!(score(&constant(0.5), Target::Severity).level(), Some(8));
        assert_eq!(score(&constant(-0.5), Target::Severity).level(), Some(2));
    }

    #[test]
    fn serializes_per_shape() {
        let zeros = constant(0.0);
        let json = serde_json::to_value(score(&zeros, Target::Wellbeing)).unwrap();
        assert_eq!(json, serde_json::json!({"wellbeing": 50}));

        let json = serde_json::to_value(score(&zeros, Target::Depression)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "Depressed", "probability": 0.5})
        );
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(0.12345, 2), 0.12);
        assert_eq!(round_to(4.0, 2), 4.0);
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
    }

    #[test]
    fn round_to_uses_stored_value() {
        // 0.0005 is stored slightly above the half-way point
        assert_eq!(round_to(0.0005, 3), 0.001);
        assert_eq!(round_to(0.0025, 3), 0.003);
        // 5.632 / 1024 is stored just below 0.0055
        assert_eq!(round_to(5.632 / 1024.0, 3), 0.005);
        // exact binary ties go to even
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
    }
}
