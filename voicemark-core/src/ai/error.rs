use thiserror::Error;

/// Failures crossing the gateway boundary. Callers decide what to do with
/// them; the engine swallows every variant into the fallback message.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("no API key configured for {0}")]
    MissingApiKey(&'static str),

    #[error("request to generation provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
