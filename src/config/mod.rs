mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable that overrides `tmdb.api_key`
pub const TMDB_API_KEY_ENV: &str = "TMDB_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./sora.toml",
        "~/.config/sora/config.toml",
        "/etc/sora/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var(TMDB_API_KEY_ENV) {
        if !key.is_empty() {
            config.tmdb.api_key = key;
        }
    }
}

/// Override the listen address with values given on the command line.
///
/// Fields left as `None` keep the configured value. The result is validated
/// again.
pub fn apply_server_overrides(
    config: &mut Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    validate_config(config)
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    let auth = &config.server.auth;
    if auth.enabled && auth.api_key.as_deref().map_or(true, str::is_empty) {
        anyhow::bail!("Auth is enabled but no API key is configured");
    }

    if axum::http::HeaderValue::from_str(&config.server.cache.detail).is_err() {
        anyhow::bail!(
            "server.cache.detail is not a valid header value: {:?}",
            config.server.cache.detail
        );
    }

    if config.tmdb.requests_per_second == 0 {
        anyhow::bail!("tmdb.requests_per_second must be greater than 0");
    }

    if config.tmdb.api_key.is_empty() {
        tracing::warn!(
            "No TMDB API key configured; set tmdb.api_key or {}",
            TMDB_API_KEY_ENV
        );
    }

    let i18n = &config.i18n;
    if i18n.supported_languages.is_empty() {
        anyhow::bail!("i18n.supported_languages cannot be empty");
    }
    if !i18n
        .supported_languages
        .iter()
        .any(|l| l.eq_ignore_ascii_case(&i18n.fallback_language))
    {
        anyhow::bail!(
            "Fallback language '{}' is not in supported_languages",
            i18n.fallback_language
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        validate_config(&config).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.i18n.fallback_language, "en");
        assert!(config.server.cache.detail.contains("max-age"));
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(
            r#"
            [server]
            port = 9000

            [tmdb]
            api_key = "abc"
            requests_per_second = 4
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.tmdb.requests_per_second, 4);
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn test_server_overrides_keep_configured_values() {
        let file = write_config("[server]\nhost = \"10.0.0.5\"\nport = 9191\n");
        let mut config = load_config(file.path()).unwrap();

        apply_server_overrides(&mut config, None, None).unwrap();
        assert_eq!(config.server.host, "10.0.0.5");
        assert_eq!(config.server.port, 9191);

        apply_server_overrides(&mut config, None, Some(7000)).unwrap();
        assert_eq!(config.server.host, "10.0.0.5");
        assert_eq!(config.server.port, 7000);

        apply_server_overrides(&mut config, Some("127.0.0.1".into()), None).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_server_override_is_validated() {
        let mut config = Config::default();
        assert!(apply_server_overrides(&mut config, None, Some(0)).is_err());
    }

    #[test]
    fn test_rejects_zero_port() {
        let file = write_config("[server]\nport = 0\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_rejects_auth_without_key() {
        let file = write_config("[server.auth]\nenabled = true\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_rejects_unsupported_fallback() {
        let file = write_config(
            r#"
            [i18n]
            supported_languages = ["fr"]
            fallback_language = "en"
            "#,
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_config(Path::new("/nonexistent/sora.toml")).is_err());
    }
}
