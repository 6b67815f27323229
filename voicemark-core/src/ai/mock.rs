use std::sync::{Arc, Mutex};

use crate::ai::error::GatewayError;
use crate::ai::provider::{GenerationGateway, GenerationRequest};

/// Scripted behavior for [`MockGateway`].
#[derive(Debug, Clone, Default)]
pub enum MockBehavior {
    /// Return a canned success body.
    #[default]
    Success,
    /// Return the given text.
    Reply(String),
    /// Fail every call with a provider error carrying this message.
    Fail(String),
    /// Fail N calls with a provider error, then return the given text.
    FailThenReply {
        remaining_errors: usize,
        reply: String,
    },
}

/// In-process gateway for tests and offline runs. Captures every request it
/// receives so assertions can inspect the compiled prompts.
#[derive(Clone, Default)]
pub struct MockGateway {
    behavior: Arc<Mutex<MockBehavior>>,
    captured_requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockGateway {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn call_count(&self) -> usize {
        self.captured_requests.lock().unwrap().len()
    }

    pub fn captured_requests(&self) -> Vec<GenerationRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl GenerationGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, GatewayError> {
        self.captured_requests.lock().unwrap().push(request);

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Success => Ok("Mock generated content".to_string()),
            MockBehavior::Reply(text) => Ok(text),
            MockBehavior::Fail(message) => Err(GatewayError::Provider {
                status: 500,
                message,
            }),
            MockBehavior::FailThenReply {
                mut remaining_errors,
                reply,
            } => {
                if remaining_errors > 0 {
                    remaining_errors -= 1;
                    self.set_behavior(MockBehavior::FailThenReply {
                        remaining_errors,
                        reply,
                    });
                    return Err(GatewayError::Provider {
                        status: 500,
                        message: "mock failure".to_string(),
                    });
                }
                Ok(reply)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            model: "test-model".to_string(),
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn captures_requests_and_replies() {
        let gateway = MockGateway::new(MockBehavior::Reply("hi".to_string()));
        let text = gateway.generate(request()).await.unwrap();
        assert_eq!(text, "hi");
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.last_request().unwrap().user_prompt, "user");
    }

    #[tokio::test]
    async fn fail_behavior_surfaces_provider_error() {
        let gateway = MockGateway::new(MockBehavior::Fail("boom".to_string()));
        let error = gateway.generate(request()).await.unwrap_err();
        match error {
            GatewayError::Provider { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn behavior_can_change_between_calls() {
        let gateway = MockGateway::new(MockBehavior::Fail("down".to_string()));
        assert!(gateway.generate(request()).await.is_err());
        gateway.set_behavior(MockBehavior::Success);
        let text = gateway.generate(request()).await.unwrap();
        assert_eq!(text, "Mock generated content");
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn fail_then_reply_counts_down_per_call() {
        let gateway = MockGateway::new(MockBehavior::FailThenReply {
            remaining_errors: 2,
            reply: "back up".to_string(),
        });
        assert!(gateway.generate(request()).await.is_err());
        assert!(gateway.generate(request()).await.is_err());
        assert_eq!(gateway.generate(request()).await.unwrap(), "back up");
    }
}
