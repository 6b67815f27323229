pub mod config;
pub mod manager;

pub use config::{ProviderConfig, Settings};
pub use manager::SettingsManager;

use crate::ai::error::GatewayError;
use crate::ai::gemini::GeminiGateway;
use crate::ai::mock::{MockBehavior, MockGateway};
use crate::ai::provider::GenerationGateway;

/// Environment fallback for the Gemini API key when settings leave it unset.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Builds the configured gateway. The only way this fails is a Gemini
/// provider with no API key in either settings or the environment.
pub fn build_gateway(settings: &Settings) -> Result<Box<dyn GenerationGateway>, GatewayError> {
    match &settings.provider {
        ProviderConfig::Gemini { api_key, base_url } => {
            let key = api_key
                .clone()
                .or_else(|| std::env::var(GEMINI_API_KEY_VAR).ok())
                .ok_or(GatewayError::MissingApiKey("gemini"))?;
            let gateway = match base_url {
                Some(url) => GeminiGateway::with_base_url(key, url.clone()),
                None => GeminiGateway::new(key),
            };
            Ok(Box::new(gateway))
        }
        ProviderConfig::Mock { reply } => Ok(Box::new(MockGateway::new(MockBehavior::Reply(
            reply.clone(),
        )))),
    }
}
