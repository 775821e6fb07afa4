use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

// stylehaus configuration
//
// there is no filesystem in the browser, so the config file is baked into the
// binary at build time and parsed on start-up
const CONFIG_TOML: &str = include_str!("../../config.toml");

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BackendConfig {
    pub url: String,
    // the public key; row level security on the backend does the actual gating
    pub anon_key: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ImageConfig {
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_quality() -> u8 {
    crate::common::images::DEFAULT_QUALITY
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            quality: default_quality(),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: AppConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<AppConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    if data.config.backend.url.is_empty() {
        return Err(anyhow::Error::msg("backend.url must not be empty"));
    }

    Ok(data.config)
}

pub fn read_config() -> anyhow::Result<AppConfig> {
    debug!("reading embedded config");

    let config = parse_config(CONFIG_TOML)?;

    debug!("successfully parsed config");
    Ok(config)
}

// provided once by the app shell
pub fn use_image_quality() -> u8 {
    use_context::<AppConfig>().images.quality
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = read_config().unwrap();
        assert!(!config.backend.anon_key.is_empty());
    }

    #[test]
    fn image_section_is_optional() {
        let config = parse_config(
            r#"
            [config.backend]
            url = "https://demo.supabase.co"
            anon_key = "anon"
            "#,
        )
        .unwrap();

        assert_eq!(config.images.quality, 80);
    }

    #[test]
    fn missing_backend_is_an_error() {
        assert!(parse_config("[config]\n").is_err());

        let err = parse_config(
            r#"
            [config.backend]
            url = ""
            anon_key = "anon"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("backend.url"));
    }
}
