use crate::app_config::{AppConfig, GeocodeFailurePolicy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let google_maps_api_key = require("GOOGLE_MAPS_API_KEY")?;

    let log_level = or_default("PROSPECT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PROSPECT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PROSPECT_USER_AGENT",
        "prospect/0.1 (business-prospecting)",
    );
    let search_radius_m = parse_u32("PROSPECT_SEARCH_RADIUS_M", "23000")?;
    let page_token_delay_ms = parse_u64("PROSPECT_PAGE_TOKEN_DELAY_MS", "2000")?;
    let max_pages = parse_usize("PROSPECT_MAX_PAGES", "10")?;
    let output_path = PathBuf::from(or_default(
        "PROSPECT_OUTPUT_PATH",
        "resultados_busca_formatado.xlsx",
    ));
    let geocode_failure =
        parse_geocode_failure(&or_default("PROSPECT_GEOCODE_FAILURE", "text-only"))?;

    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPECT_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        google_maps_api_key,
        log_level,
        request_timeout_secs,
        user_agent,
        search_radius_m,
        page_token_delay_ms,
        max_pages,
        output_path,
        geocode_failure,
    })
}

/// Parse a string into a `GeocodeFailurePolicy` variant.
fn parse_geocode_failure(s: &str) -> Result<GeocodeFailurePolicy, ConfigError> {
    match s {
        "text-only" => Ok(GeocodeFailurePolicy::TextOnly),
        "abort" => Ok(GeocodeFailurePolicy::Abort),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PROSPECT_GEOCODE_FAILURE".to_string(),
            reason: format!("expected \"text-only\" or \"abort\", got \"{other}\""),
        }),
    }
}
