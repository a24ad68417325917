use anyhow::Context;
use parking_core::memory::DEFAULT_TOTAL_SLOTS;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// How long a status message stays visible.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_notice_ttl", with = "humantime_serde")]
    pub notice_ttl: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backend {
    Memory {
        #[serde(default = "default_total_slots")]
        total_slots: u32,
    },
    Remote {
        base_url: String,

        #[serde(default, with = "humantime_serde")]
        timeout: Option<Duration>,
    },
}

fn default_notice_ttl() -> Duration {
    DEFAULT_NOTICE_TTL
}

fn default_total_slots() -> u32 {
    DEFAULT_TOTAL_SLOTS
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Memory {
            total_slots: DEFAULT_TOTAL_SLOTS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = std::fs::read_to_string(&path).with_context(|| {
            format!("Failed to read config file {}", path.as_ref().display())
        })?;
        toml::from_str(&config).context("Failed to parse config toml file")
    }

    /// File settings (or defaults), then command line overrides on top.
    pub fn load(
        path: Option<&Path>,
        remote: Option<String>,
        slots: Option<u32>,
    ) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(base_url) = remote {
            let timeout = match config.backend {
                Backend::Remote { timeout, .. } => timeout,
                Backend::Memory { .. } => None,
            };
            config.backend = Backend::Remote { base_url, timeout };
        }

        if let Some(slots) = slots {
            match &mut config.backend {
                Backend::Memory { total_slots } => *total_slots = slots,
                Backend::Remote { .. } => {
                    tracing::warn!("Ignoring slot count {slots}: the remote service owns capacity")
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_memory() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.backend,
            Backend::Memory {
                total_slots: DEFAULT_TOTAL_SLOTS
            }
        );
        assert_eq!(config.notice_ttl, Duration::from_secs(5));
    }

    #[test]
    fn parses_remote_backend() {
        let config: Config = toml::from_str(
            r#"
            notice_ttl = "3s"

            [backend]
            kind = "remote"
            base_url = "http://localhost:3000"
            timeout = "10s"
            "#,
        )
        .unwrap();
        assert_eq!(config.notice_ttl, Duration::from_secs(3));
        assert_eq!(
            config.backend,
            Backend::Remote {
                base_url: "http://localhost:3000".to_string(),
                timeout: Some(Duration::from_secs(10)),
            }
        );
    }

    #[test]
    fn parses_memory_capacity() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            kind = "memory"
            total_slots = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.backend, Backend::Memory { total_slots: 12 });
    }

    #[test]
    fn command_line_wins() {
        let config = Config::load(None, None, Some(8)).unwrap();
        assert_eq!(config.backend, Backend::Memory { total_slots: 8 });

        let config = Config::load(None, Some("http://parking.local".to_string()), Some(8)).unwrap();
        assert_eq!(
            config.backend,
            Backend::Remote {
                base_url: "http://parking.local".to_string(),
                timeout: None,
            }
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/parking.toml")), None, None).is_err());
    }
}
