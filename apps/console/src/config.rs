use std::{collections::HashMap, fs};

use anyhow::Context;
use url::Url;

#[derive(Debug)]
pub struct Settings {
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: client_core::DEFAULT_BASE_URL.into(),
        }
    }
}

/// Layered like the server settings in similar tools: built-in default,
/// then `client.toml`, then `APP__BASE_URL`, then the CLI flag.
pub fn load_settings(cli_base_url: Option<String>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("base_url") {
                settings.base_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = cli_base_url {
        settings.base_url = v;
    }

    settings.base_url = normalize_base_url(&settings.base_url);
    Url::parse(&settings.base_url)
        .with_context(|| format!("invalid base URL: {}", settings.base_url))?;

    Ok(settings)
}

/// Request paths are appended as `/posts`, so a trailing slash would double.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
