use crate::ai::error::GatewayError;

/// One fully compiled request for the generation backend. Prompt text
/// arrives final; gateways only transport it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
    pub temperature: f32,
}

/// A text-generation backend.
///
/// `generate` is a single fallible call: no retries, no streaming, no
/// cancellation. A request in flight runs to completion or failure.
#[async_trait::async_trait]
pub trait GenerationGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, request: GenerationRequest) -> Result<String, GatewayError>;
}
