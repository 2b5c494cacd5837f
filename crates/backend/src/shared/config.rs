use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding `site.base_url`.
pub const BASE_URL_ENV: &str = "BPFEEDBACK_BASE_URL";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built frontend bundle (`trunk build` output)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Public origin used in robots.txt and sitemap.xml, no trailing slash
    pub base_url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[site]
base_url = "https://bpfeedbackdata.com"
"#;

impl Config {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.site.base_url = config.site.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Applies overrides read through `lookup` (the process environment in
    /// production).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::info!("{} overrides site.base_url: {}", BASE_URL_ENV, url);
            self.site.base_url = url.trim().trim_end_matches('/').to_string();
        }
        self
    }

    /// Static directory, relative paths resolved against the executable's
    /// directory when the bundle is found there, else the working directory.
    pub fn static_dir(&self) -> PathBuf {
        let dir = Path::new(&self.server.static_dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let candidate = exe_dir.join(dir);
                if candidate.exists() {
                    return candidate;
                }
            }
        }
        dir.to_path_buf()
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment overrides are applied in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let config = match config_next_to_exe() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            Config::parse(&std::fs::read_to_string(&path)?)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            Config::parse(DEFAULT_CONFIG)?
        }
    };
    Ok(config.with_overrides(|key| std::env::var(key).ok()))
}

fn config_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.site.base_url, "https://bpfeedbackdata.com");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::parse(&DEFAULT_CONFIG.replace(".com\"", ".com/\"")).unwrap();
        assert_eq!(config.site.base_url, "https://bpfeedbackdata.com");
    }

    #[test]
    fn test_env_override() {
        let config = Config::parse(DEFAULT_CONFIG)
            .unwrap()
            .with_overrides(|key| (key == BASE_URL_ENV).then(|| "http://localhost:3000/".to_string()));
        assert_eq!(config.site.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = Config::parse(DEFAULT_CONFIG)
            .unwrap()
            .with_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.site.base_url, "https://bpfeedbackdata.com");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(Config::parse("[server]\nhost = \"x\"\nport = 1\nstatic_dir = \"d\"\n").is_err());
    }
}
