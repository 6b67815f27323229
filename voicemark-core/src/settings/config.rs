use serde::{Deserialize, Serialize};

/// Application settings, persisted as TOML in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Client id scoping the stored profile
    #[serde(default = "default_client")]
    pub client: String,

    /// Text-generation provider
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ProviderConfig {
    #[serde(rename = "gemini")]
    Gemini {
        /// Falls back to the GEMINI_API_KEY environment variable when unset
        #[serde(default, skip_serializing_if = "Option::is_none")]
        api_key: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
    },
    #[serde(rename = "mock")]
    Mock {
        #[serde(default = "default_mock_reply")]
        reply: String,
    },
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_client() -> String {
    "default".to_string()
}

fn default_mock_reply() -> String {
    "Mock generated content".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Gemini {
            api_key: None,
            base_url: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            client: default_client(),
            provider: ProviderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.model, "gemini-1.5-flash");
        assert_eq!(settings.client, "default");
    }

    #[test]
    fn parses_gemini_provider_with_key() {
        let settings: Settings = toml::from_str(
            r#"
model = "gemini-1.5-pro"

[provider]
type = "gemini"
api_key = "secret"
"#,
        )
        .unwrap();
        assert_eq!(settings.model, "gemini-1.5-pro");
        assert_eq!(
            settings.provider,
            ProviderConfig::Gemini {
                api_key: Some("secret".to_string()),
                base_url: None,
            }
        );
    }

    #[test]
    fn parses_mock_provider_with_default_reply() {
        let settings: Settings = toml::from_str(
            r#"
[provider]
type = "mock"
"#,
        )
        .unwrap();
        assert_eq!(
            settings.provider,
            ProviderConfig::Mock {
                reply: "Mock generated content".to_string(),
            }
        );
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings {
            model: "gemini-1.5-flash".to_string(),
            client: "team_7".to_string(),
            provider: ProviderConfig::Gemini {
                api_key: Some("k".to_string()),
                base_url: Some("http://localhost:9999".to_string()),
            },
        };
        let serialized = toml::to_string_pretty(&settings).unwrap();
        let restored: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(restored, settings);
    }
}
