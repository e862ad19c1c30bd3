use std::path::{Path, PathBuf};

use pti_core::{FileRules, GeneratedFile, Syntax, join_path};
use serde_json::{Value, json};

use super::render_json;

/// A release channel with its own release-it config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    Alpha,
    Beta,
    Rc,
    Stable,
}

impl ReleaseChannel {
    pub const ALL: [ReleaseChannel; 4] = [
        ReleaseChannel::Alpha,
        ReleaseChannel::Beta,
        ReleaseChannel::Rc,
        ReleaseChannel::Stable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReleaseChannel::Alpha => "alpha",
            ReleaseChannel::Beta => "beta",
            ReleaseChannel::Rc => "rc",
            ReleaseChannel::Stable => "stable",
        }
    }

    fn pre_release(self) -> Option<&'static str> {
        match self {
            ReleaseChannel::Stable => None,
            other => Some(other.name()),
        }
    }
}

/// `<config>/release-it/<channel>.json`
#[derive(Debug, Clone)]
pub struct ReleaseItConfig {
    config: String,
    channel: ReleaseChannel,
    runner: String,
}

impl ReleaseItConfig {
    pub fn new(config: impl Into<String>, channel: ReleaseChannel, runner: impl Into<String>) -> Self {
        Self {
            config: config.into(),
            channel,
            runner: runner.into(),
        }
    }

    fn value(&self) -> Value {
        let runner = &self.runner;
        let checks = json!([
            format!("{runner} lint"),
            format!("{runner} typecheck"),
            format!("{runner} test"),
            format!("{runner} build"),
        ]);

        match self.channel.pre_release() {
            None => json!({
                "git": { "commitMessage": "Release ${version}", "tagName": "v${version}" },
                "github": { "release": true, "tokenRef": "GITHUB_TOKEN" },
                "hooks": { "before:init": checks },
                "npm": { "publish": true },
            }),
            Some(channel) => json!({
                "git": { "commitMessage": "Release ${version}", "tagName": "v${version}" },
                "github": { "preRelease": true, "release": true, "tokenRef": "GITHUB_TOKEN" },
                "hooks": { "before:init": checks },
                "npm": { "publish": true, "tag": "next" },
                "preReleaseId": channel,
            }),
        }
    }
}

impl GeneratedFile for ReleaseItConfig {
    fn path(&self, base: &Path) -> PathBuf {
        let file = format!("{}.json", self.channel.name());
        base.join(join_path(&[self.config.as_str(), "release-it", file.as_str()]))
    }

    fn rules(&self) -> FileRules {
        FileRules::formatted(Syntax::Json)
    }

    fn render(&self) -> String {
        render_json(&self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_has_no_prerelease() {
        let file = ReleaseItConfig::new("config", ReleaseChannel::Stable, "yarn run");
        let value: Value = serde_json::from_str(&file.render()).unwrap();

        assert!(value.get("preReleaseId").is_none());
        assert_eq!(value["hooks"]["before:init"][0], json!("yarn run lint"));
        assert_eq!(
            file.path(Path::new("/repo")),
            PathBuf::from("/repo/config/release-it/stable.json")
        );
    }

    #[test]
    fn test_prerelease_channels() {
        for channel in [ReleaseChannel::Alpha, ReleaseChannel::Beta, ReleaseChannel::Rc] {
            let value: Value =
                serde_json::from_str(&ReleaseItConfig::new("config", channel, "npm run").render())
                    .unwrap();

            assert_eq!(value["preReleaseId"], json!(channel.name()));
            assert_eq!(value["npm"]["tag"], json!("next"));
        }
    }
}
