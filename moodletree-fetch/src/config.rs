//! Service configuration.
//!
//! Everything that identifies the remote Moodle site lives in
//! [`ServiceConfig`], which is injected into the authenticator, the
//! resource fetcher, and the HTTP transport at construction.
//!
//! Configuration files are JSON. Every field is optional:
//!
//! ```json
//! {
//!   "base_url": "https://moodle.example.edu",
//!   "timeout_secs": 20,
//!   "max_concurrency": 4
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::ConfigError;

/// Default Moodle site.
const DEFAULT_BASE_URL: &str = "http://moodle.nu.edu.kz";

/// Service name sent to the token endpoint.
const DEFAULT_SERVICE: &str = "moodle_mobile_app";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Token endpoint, relative to the base URL.
const AUTH_PATH: &str = "/login/token.php";

/// REST endpoint, relative to the base URL.
const API_PATH: &str = "/webservice/rest/server.php";

// ============================================================================
// Function Names
// ============================================================================

/// `wsfunction` names for each remote call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionNames {
    /// Site info for the token owner.
    pub site_info: String,
    /// Courses a user is enrolled in.
    pub user_courses: String,
    /// Sections and modules of a course.
    pub course_contents: String,
}

impl Default for FunctionNames {
    fn default() -> Self {
        Self {
            site_info: "moodle_webservice_get_siteinfo".to_string(),
            user_courses: "moodle_enrol_get_users_courses".to_string(),
            course_contents: "core_course_get_contents".to_string(),
        }
    }
}

// ============================================================================
// Service Config
// ============================================================================

/// Configuration for one Moodle site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Site root, e.g. `https://moodle.example.edu`.
    pub base_url: String,
    /// Service name for token requests.
    pub service: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent for outgoing requests.
    pub user_agent: String,
    /// Maximum in-flight course fetches. `0` means unbounded.
    pub max_concurrency: usize,
    /// Remote function names.
    pub functions: FunctionNames,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("moodletree/", env!("CARGO_PKG_VERSION")).to_string(),
            max_concurrency: 0,
            functions: FunctionNames::default(),
        }
    }
}

impl ServiceConfig {
    /// Creates a config for the given site with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be parsed.
    pub fn for_site(base_url: &str) -> Result<Self, ConfigError> {
        Self::default().with_base_url(base_url)
    }

    /// Replaces the base URL after validating it.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be parsed or is not http(s).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Sets the concurrency limit for course fetches.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit;
        self
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the token endpoint URL.
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.base_url, AUTH_PATH)
    }

    /// Returns the REST endpoint URL.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url, API_PATH)
    }

    /// Checks that the base URL is usable.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_base_url(&self.base_url).map(|_| ())
    }

    /// Loads config from a JSON file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read, is not valid
    /// JSON, or carries an invalid base URL.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(path = %path.display(), "Loading config");
        let content = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&content)?;

        // Re-normalize so a trailing slash in the file is harmless.
        let base_url = config.base_url.clone();
        config.with_base_url(&base_url)
    }
}

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - Linux: `~/.config/moodletree`
/// - macOS: `~/Library/Application Support/moodletree`
/// - Windows: `%APPDATA%\moodletree`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|c| c.join("moodletree"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default configuration file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.json")
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(format!(
            "{raw}: unsupported scheme {}",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!("{raw}: no host")));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ServiceConfig::default();
        assert_eq!(config.auth_url(), "http://moodle.nu.edu.kz/login/token.php");
        assert_eq!(
            config.api_url(),
            "http://moodle.nu.edu.kz/webservice/rest/server.php"
        );
        assert_eq!(config.service, "moodle_mobile_app");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ServiceConfig::for_site("https://moodle.example.edu/").unwrap();
        assert_eq!(
            config.auth_url(),
            "https://moodle.example.edu/login/token.php"
        );
    }

    #[test]
    fn test_subdirectory_site() {
        let config = ServiceConfig::for_site("https://example.edu/moodle").unwrap();
        assert_eq!(
            config.api_url(),
            "https://example.edu/moodle/webservice/rest/server.php"
        );
    }

    #[test]
    fn test_invalid_urls_rejected() {
        assert!(ServiceConfig::for_site("not a url").is_err());
        assert!(ServiceConfig::for_site("ftp://moodle.example.edu").is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServiceConfig::load(&dir.path().join("absent.json"))
            .await
            .unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[tokio::test]
    async fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"base_url": "https://moodle.example.edu/", "max_concurrency": 4,
                "functions": {"site_info": "core_webservice_get_site_info"}}"#,
        )
        .unwrap();

        let config = ServiceConfig::load(&path).await.unwrap();
        assert_eq!(config.base_url, "https://moodle.example.edu");
        assert_eq!(config.max_concurrency, 4);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.functions.site_info, "core_webservice_get_site_info");
        assert_eq!(config.functions.course_contents, "core_course_get_contents");
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = ServiceConfig::load(&path).await;
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
