use std::path::PathBuf;

/// Errors surfaced by garden commands and asset lookup.
#[derive(Debug, thiserror::Error)]
pub enum GardenError {
    /// Rejected at input collection; no plant is created.
    #[error("Please enter a name for your plant.")]
    EmptyName,

    #[error("Please enter a category for your plant.")]
    EmptyCategory,

    #[error("Plant #{0} not found.")]
    PlantNotFound(usize),

    /// Display only; plant state is unaffected.
    #[error("Image asset not found: {}", path.display())]
    AssetNotFound { path: PathBuf },
}

/// Invalid environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of seconds, got '{value}'")]
    InvalidSeconds { key: &'static str, value: String },

    #[error("{key} must be strictly positive, got {value}")]
    NonPositive { key: &'static str, value: i64 },

    #[error("{key} must be at most {max} seconds, got {value}")]
    TooLarge {
        key: &'static str,
        value: i64,
        max: i64,
    },
}
