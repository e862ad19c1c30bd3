use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::merge::{Merge, merge_extra};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default)]
    pub server: ServerOptions,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Merge for ServerOptions {
    fn merge(self, overrides: Self) -> Self {
        Self {
            port: overrides.port.or(self.port),
            extra: merge_extra(self.extra, overrides.extra),
        }
    }
}

impl Merge for ViteConfig {
    fn merge(self, overrides: Self) -> Self {
        Self {
            root: overrides.root.or(self.root),
            server: self.server.merge(overrides.server),
            extra: merge_extra(self.extra, overrides.extra),
        }
    }
}

/// Dev-server config serving `development`.
///
/// The root always points at the development folder; the server port
/// defaults to [`DEFAULT_PORT`].
pub fn create_vite_config(development: &str, overrides: ViteConfig) -> ViteConfig {
    let base = ViteConfig {
        server: ServerOptions {
            port: Some(DEFAULT_PORT),
            ..Default::default()
        },
        ..Default::default()
    };

    let mut config = base.merge(overrides);
    config.root = Some(development.to_string());
    config
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = create_vite_config("dev", ViteConfig::default());
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "root": "dev", "server": { "port": 3000 } })
        );
    }

    #[test]
    fn test_root_is_forced_and_server_merged() {
        let overrides: ViteConfig = serde_json::from_value(json!({
            "root": "elsewhere",
            "base": "/app/",
            "server": { "open": true },
        }))
        .unwrap();

        let config = create_vite_config("playground", overrides);

        assert_eq!(config.root.as_deref(), Some("playground"));
        assert_eq!(config.server.port, Some(3000));
        assert_eq!(config.server.extra["open"], json!(true));
        assert_eq!(config.extra["base"], json!("/app/"));
    }

    #[test]
    fn test_port_override() {
        let overrides = ViteConfig {
            server: ServerOptions {
                port: Some(5173),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(create_vite_config("dev", overrides).server.port, Some(5173));
    }
}
