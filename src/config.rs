use serde::Deserialize;
use std::fs;
use anyhow::{Context, Result};

#[derive(Clone, Debug, Deserialize)]
pub struct ExplorerConfig {
    pub base_url: String,                   // ex https://raw.githubusercontent.com/.../catchain/blocks
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,            // per-request timeout, ex 10000
    #[serde(default)]
    pub max_blocks: Option<u64>,            // scan cap, ex 20; absent = unbounded
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl ExplorerConfig {
    pub fn load(path: &str) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config file `{}`", path))?;
        let cfg: ExplorerConfig = toml::from_str(&s)
            .with_context(|| format!("parsing `{}` as TOML", path))?;

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let cfg: ExplorerConfig = toml::from_str(
            r#"
            base_url           = "https://blocks.example.com/catchain/blocks"
            request_timeout_ms = 5000
            max_blocks         = 20
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.base_url, "https://blocks.example.com/catchain/blocks");
        assert_eq!(cfg.request_timeout_ms, 5_000);
        assert_eq!(cfg.max_blocks, Some(20));
    }

    #[test]
    fn optional_keys_fall_back_to_defaults() {
        let cfg: ExplorerConfig = toml::from_str(
            r#"base_url = "https://blocks.example.com/catchain/blocks""#,
        )
        .expect("minimal config should parse");

        assert_eq!(cfg.request_timeout_ms, 10_000);
        assert_eq!(cfg.max_blocks, None);
    }
}
