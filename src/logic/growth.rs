use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::models::plant::Category;

/// Largest threshold whose double still fits in a `Duration`.
pub const MAX_THRESHOLD_SECS: i64 = i64::MAX / 1000 / 2;

/// Category → growth threshold table, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthConfig {
    pub flower_secs: i64,
    pub tree_secs: i64,
    pub vegetable_secs: i64,
    /// Used for `Category::Other`, which includes every console plant.
    pub default_secs: i64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            flower_secs: 5,
            tree_secs: 15,
            vegetable_secs: 10,
            default_secs: 10,
        }
    }
}

impl GrowthConfig {
    pub fn threshold_for(&self, category: Category) -> Duration {
        let secs = match category {
            Category::Flower => self.flower_secs,
            Category::Tree => self.tree_secs,
            Category::Vegetable => self.vegetable_secs,
            Category::Other => self.default_secs,
        };
        Duration::seconds(secs.clamp(0, MAX_THRESHOLD_SECS))
    }
}

/// How a plant is coping given the time since its last watering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    Watered,
    /// Past the threshold: growth stalls.
    Thirsty,
    /// Past twice the threshold: the plant dies.
    Parched,
}

impl Hydration {
    pub fn assess(elapsed: Duration, threshold: Duration) -> Self {
        if elapsed > threshold * 2 {
            Hydration::Parched
        } else if elapsed > threshold {
            Hydration::Thirsty
        } else {
            Hydration::Watered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = GrowthConfig::default();
        assert_eq!(config.threshold_for(Category::Flower), Duration::seconds(5));
        assert_eq!(config.threshold_for(Category::Tree), Duration::seconds(15));
        assert_eq!(config.threshold_for(Category::Vegetable), Duration::seconds(10));
        assert_eq!(config.threshold_for(Category::Other), Duration::seconds(10));
    }

    #[test]
    fn test_assess_boundaries_are_exclusive() {
        let t = Duration::seconds(10);
        assert_eq!(Hydration::assess(Duration::zero(), t), Hydration::Watered);
        assert_eq!(Hydration::assess(t, t), Hydration::Watered);
        assert_eq!(Hydration::assess(t + Duration::milliseconds(1), t), Hydration::Thirsty);
        assert_eq!(Hydration::assess(t * 2, t), Hydration::Thirsty);
        assert_eq!(
            Hydration::assess(t * 2 + Duration::milliseconds(1), t),
            Hydration::Parched
        );
    }

    #[test]
    fn test_oversized_threshold_is_clamped() {
        let config = GrowthConfig {
            tree_secs: i64::MAX,
            ..GrowthConfig::default()
        };
        let threshold = config.threshold_for(Category::Tree);
        assert_eq!(threshold, Duration::seconds(MAX_THRESHOLD_SECS));
        assert_eq!(
            Hydration::assess(Duration::days(365 * 100), threshold),
            Hydration::Watered
        );
    }

    #[test]
    fn test_config_deserializes_camel_case() {
        let config: GrowthConfig = serde_json::from_str(
            r#"{"flowerSecs":1,"treeSecs":2,"vegetableSecs":3,"defaultSecs":4}"#,
        )
        .unwrap();
        assert_eq!(config.threshold_for(Category::Vegetable), Duration::seconds(3));
        assert_eq!(config.threshold_for(Category::Other), Duration::seconds(4));
    }
}
