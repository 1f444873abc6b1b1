use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Public origin of the site, used for canonical/og URLs
    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Require a bearer token on page routes
    #[serde(default)]
    pub enabled: bool,

    /// API key accepted with `Authorization: Bearer <key>`
    #[serde(default)]
    pub api_key: Option<String>,
}

/// `Cache-Control` policy tiers emitted by page routes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Policy for detail pages (a single title and its sub-pages)
    #[serde(default = "default_detail_cache")]
    pub detail: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_site_url() -> String {
    "https://sora-anime.vercel.app".to_string()
}
fn default_detail_cache() -> String {
    "max-age=3600, s-maxage=86400, stale-while-revalidate=604800".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            site_url: default_site_url(),
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            detail: default_detail_cache(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// TMDB v3 API key (overridden by `TMDB_API_KEY`)
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,

    #[serde(default = "default_tmdb_image_base_url")]
    pub image_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_tmdb_timeout")]
    pub timeout_secs: u64,

    /// Token-bucket quota for outbound requests
    #[serde(default = "default_tmdb_rate")]
    pub requests_per_second: u32,
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/original".to_string()
}
fn default_tmdb_timeout() -> u64 {
    30
}
fn default_tmdb_rate() -> u32 {
    30
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tmdb_base_url(),
            image_base_url: default_tmdb_image_base_url(),
            timeout_secs: default_tmdb_timeout(),
            requests_per_second: default_tmdb_rate(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Language tags the site is translated into
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,

    /// Used when nothing in the request matches
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
}

fn default_supported_languages() -> Vec<String> {
    ["en", "fr", "es", "de", "ja", "pt", "vi"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_fallback_language() -> String {
    "en".to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported_languages: default_supported_languages(),
            fallback_language: default_fallback_language(),
        }
    }
}
