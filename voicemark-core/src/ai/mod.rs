pub mod error;
pub mod gemini;
pub mod mock;
pub mod provider;

pub use error::GatewayError;
pub use gemini::GeminiGateway;
pub use mock::{MockBehavior, MockGateway};
pub use provider::{GenerationGateway, GenerationRequest};
