pub mod app_config;
pub mod config;
pub mod query;
pub mod rows;

use thiserror::Error;

pub use app_config::{AppConfig, GeocodeFailurePolicy};
pub use config::{load_app_config, load_app_config_from_env};
pub use query::{Coordinates, SearchQuery};
pub use rows::{
    or_not_available, ExportRecord, ResultRow, ResultTable, EXPORT_COLUMNS, NOT_AVAILABLE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinates \"{0}\": expected \"lat,lng\"")]
    InvalidCoordinates(String),
}
