use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_SITE_URL: &str = "http://localhost:8080/index.html";
pub(crate) const DEFAULT_MANIFEST_NAME: &str = "products.json";
pub(crate) const DEFAULT_USER_AGENT: &str = "ganha/0.1 (catalog)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let site_url = or_default("GANHA_SITE_URL", DEFAULT_SITE_URL);
    if !site_url.contains("://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "GANHA_SITE_URL".to_string(),
            reason: format!("\"{site_url}\" is not an absolute URL"),
        });
    }

    let manifest_name = or_default("GANHA_MANIFEST_NAME", DEFAULT_MANIFEST_NAME);
    if manifest_name.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "GANHA_MANIFEST_NAME".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let log_level = or_default("GANHA_LOG_LEVEL", "info");
    let user_agent = or_default("GANHA_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_optional_u64("GANHA_REQUEST_TIMEOUT_SECS")?;

    Ok(AppConfig {
        site_url,
        manifest_name,
        log_level,
        user_agent,
        request_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
