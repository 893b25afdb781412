//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PiiSetupConfig;
use crate::domain::errors::PiiSetupError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PiiSetupConfig
/// 4. Applies environment variable overrides (PII_SETUP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use pii_setup::config::loader::load_config;
///
/// let config = load_config("pii-setup.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PiiSetupConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PiiSetupError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PiiSetupError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: PiiSetupConfig = toml::from_str(&contents)
        .map_err(|e| PiiSetupError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(config)
}

/// Loads configuration from `path` when it exists, otherwise starts from the
/// built-in defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PiiSetupConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    finish(PiiSetupConfig::default())
}

fn finish(mut config: PiiSetupConfig) -> Result<PiiSetupConfig> {
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        PiiSetupError::Validation(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PiiSetupError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PiiSetupError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PII_SETUP_* prefix
///
/// Variables follow the pattern `PII_SETUP_<SECTION>_<KEY>`, for example
/// `PII_SETUP_REMOTE_BASE_URL`. Unparseable numeric or boolean values are
/// ignored.
fn apply_env_overrides(config: &mut PiiSetupConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PII_SETUP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Remote store overrides
    if let Ok(val) = std::env::var("PII_SETUP_REMOTE_BASE_URL") {
        config.remote.base_url = val;
    }
    if let Ok(val) = std::env::var("PII_SETUP_REMOTE_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.remote.timeout_seconds = Some(secs);
        }
    }
    if let Ok(val) = std::env::var("PII_SETUP_REMOTE_CONNECT_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.remote.connect_timeout_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("PII_SETUP_REMOTE_TLS_VERIFY") {
        if let Ok(verify) = val.parse() {
            config.remote.tls_verify = verify;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PII_SETUP_LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            config.logging.local_enabled = enabled;
        }
    }
    if let Ok(val) = std::env::var("PII_SETUP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PII_SETUP_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
    if let Ok(val) = std::env::var("PII_SETUP_LOGGING_JSON_CONSOLE") {
        if let Ok(json) = val.parse() {
            config.logging.json_console = json;
        }
    }
}
