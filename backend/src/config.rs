use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SITE_URL: &str = "https://askra.id";
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Public origin used for absolute links in metadata and the sitemap.
    pub site_url: String,
    /// Output directory of the frontend build, holding `index.html`.
    pub dist_dir: PathBuf,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| AppError::Config(format!("BIND_ADDR is not a socket address: {}", bind_raw)))?;

        let site_url = lookup("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            return Err(AppError::Config(format!("SITE_URL must be absolute: {}", site_url)));
        }

        Ok(Self {
            bind_addr,
            site_url,
            dist_dir: lookup("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    /// Production caches the app shell at startup; development rereads it on
    /// every request so frontend rebuilds show up without a restart.
    pub fn is_prod(&self) -> bool {
        self.environment != "development"
    }

    pub fn shell_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.shell_path(), PathBuf::from("frontend/dist/index.html"));
        assert!(!config.is_prod());
    }

    #[test]
    fn trims_trailing_slash_and_reads_environment() {
        let config = Config::from_lookup(lookup(&[
            ("SITE_URL", "https://example.test/"),
            ("ENVIRONMENT", "production"),
            ("BIND_ADDR", "127.0.0.1:8088"),
        ]))
        .unwrap();
        assert_eq!(config.site_url, "https://example.test");
        assert!(config.is_prod());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8088");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("BIND_ADDR", "port 80")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("SITE_URL", "askra.id")])),
            Err(AppError::Config(_))
        ));
    }
}
