use std::path::PathBuf;

use crate::{
    error::ConfigError,
    logic::growth::{GrowthConfig, MAX_THRESHOLD_SECS},
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_IMAGES_DIR: &str = "images";
/// Used by both binaries when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
}

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub images_dir: PathBuf,
    pub growth: GrowthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            growth: GrowthConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = GrowthConfig::default();
        let seconds = |key: &'static str, default: i64| -> Result<i64, ConfigError> {
            let Some(raw) = lookup(key) else {
                return Ok(default);
            };
            let value: i64 = raw.trim().parse().map_err(|_| ConfigError::InvalidSeconds {
                key,
                value: raw.clone(),
            })?;
            if value <= 0 {
                return Err(ConfigError::NonPositive { key, value });
            }
            if value > MAX_THRESHOLD_SECS {
                return Err(ConfigError::TooLarge {
                    key,
                    value,
                    max: MAX_THRESHOLD_SECS,
                });
            }
            Ok(value)
        };

        Ok(Self {
            bind_addr: lookup("GARDEN_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            images_dir: lookup("GARDEN_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
            growth: GrowthConfig {
                flower_secs: seconds("GARDEN_THRESHOLD_FLOWER_SECS", defaults.flower_secs)?,
                tree_secs: seconds("GARDEN_THRESHOLD_TREE_SECS", defaults.tree_secs)?,
                vegetable_secs: seconds(
                    "GARDEN_THRESHOLD_VEGETABLE_SECS",
                    defaults.vegetable_secs,
                )?,
                default_secs: seconds("GARDEN_THRESHOLD_DEFAULT_SECS", defaults.default_secs)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::plant::{Category, GrowthOutcome, Plant, Stage};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GARDEN_BIND_ADDR", "127.0.0.1:9000"),
            ("GARDEN_IMAGES_DIR", "/srv/sprites"),
            ("GARDEN_THRESHOLD_TREE_SECS", " 30 "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.images_dir, PathBuf::from("/srv/sprites"));
        assert_eq!(config.growth.tree_secs, 30);
        assert_eq!(config.growth.flower_secs, 5);
    }

    #[test]
    fn test_invalid_seconds_is_rejected() {
        let err =
            AppConfig::from_lookup(lookup(&[("GARDEN_THRESHOLD_FLOWER_SECS", "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSeconds { key: "GARDEN_THRESHOLD_FLOWER_SECS", .. }
        ));
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        let err =
            AppConfig::from_lookup(lookup(&[("GARDEN_THRESHOLD_DEFAULT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { value: 0, .. }));
    }

    #[test]
    fn test_oversized_threshold_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(
            "GARDEN_THRESHOLD_TREE_SECS",
            "99999999999999999",
        )]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooLarge { key: "GARDEN_THRESHOLD_TREE_SECS", .. }
        ));
    }

    #[test]
    fn test_largest_threshold_plants_without_panicking() {
        let max = MAX_THRESHOLD_SECS.to_string();
        let config =
            AppConfig::from_lookup(lookup(&[("GARDEN_THRESHOLD_TREE_SECS", max.as_str())]))
                .unwrap();
        let now = chrono::Utc::now();
        let mut plant = Plant::new("Oak", Category::Tree, &config.growth, now);
        assert_eq!(plant.threshold(), chrono::Duration::seconds(MAX_THRESHOLD_SECS));
        assert_eq!(plant.grow(now), GrowthOutcome::Grew(Stage::Sprout));
    }

    #[test]
    fn test_both_binaries_default_to_info() {
        assert_eq!(DEFAULT_LOG_FILTER, "info");
    }
}
