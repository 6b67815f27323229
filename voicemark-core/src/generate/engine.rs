use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::ai::provider::{GenerationGateway, GenerationRequest};
use crate::generate::request::ContentRequest;
use crate::profile::{prepare_for_storage, Section, StyleProfile};
use crate::prompt::{compile_system_prompt, compile_user_prompt};
use crate::store::ProfileStore;

/// What the user sees whenever the gateway fails, whatever the cause.
pub const GENERATION_FALLBACK: &str =
    "Sorry, I couldn't generate content at this time. Please try again later.";

/// How long a saved profile stays valid in the session store.
pub const PROFILE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

const GENERATION_TEMPERATURE: f32 = 0.7;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile section \"{0}\" is incomplete")]
    Incomplete(Section),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Submission path for the questionnaire: gate on completeness, filter and
/// drop reference samples, persist the rest with the standard TTL. The error
/// names the first section still missing an answer.
pub fn save_profile(store: &dyn ProfileStore, profile: &StyleProfile) -> Result<(), ProfileError> {
    if let Some(section) = profile.first_incomplete_section() {
        return Err(ProfileError::Incomplete(section));
    }
    let stored = prepare_for_storage(profile);
    store.set(&stored, PROFILE_TTL)?;
    debug!("Profile saved to session store");
    Ok(())
}

/// Generation flow: load whatever profile is stored, compile the prompts,
/// call the gateway once.
pub struct ContentGenerator {
    store: Box<dyn ProfileStore>,
    gateway: Box<dyn GenerationGateway>,
    model: String,
}

impl ContentGenerator {
    pub fn new(
        store: Box<dyn ProfileStore>,
        gateway: Box<dyn GenerationGateway>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            store,
            gateway,
            model: model.into(),
        }
    }

    /// Generates content for the request. This never fails from the caller's
    /// point of view: an absent, expired or unreadable profile falls back to
    /// the built-in default, and any gateway fault is logged and replaced by
    /// [`GENERATION_FALLBACK`].
    pub async fn generate(&self, request: &ContentRequest) -> String {
        let generation_id = Uuid::new_v4();
        let profile = self.load_profile_or_default();
        let system_prompt = compile_system_prompt(&profile, request);
        let user_prompt = compile_user_prompt(request);

        debug!(
            %generation_id,
            platform = %request.platform,
            system_prompt_bytes = system_prompt.len(),
            "Dispatching generation request"
        );

        let gateway_request = GenerationRequest {
            system_prompt,
            user_prompt,
            model: self.model.clone(),
            temperature: GENERATION_TEMPERATURE,
        };

        match self.gateway.generate(gateway_request).await {
            Ok(text) => {
                debug!(%generation_id, response_bytes = text.len(), "Generation succeeded");
                text
            }
            Err(gateway_error) => {
                error!(
                    %generation_id,
                    provider = self.gateway.name(),
                    %gateway_error,
                    "Generation failed, returning fallback message"
                );
                GENERATION_FALLBACK.to_string()
            }
        }
    }

    fn load_profile_or_default(&self) -> StyleProfile {
        match self.store.get() {
            Ok(Some(stored)) => stored.into_profile(),
            Ok(None) => {
                debug!("No stored profile, using built-in default");
                StyleProfile::builtin_default()
            }
            Err(store_error) => {
                warn!(%store_error, "Profile store read failed, using built-in default");
                StyleProfile::builtin_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::{MockBehavior, MockGateway};
    use crate::store::MemoryProfileStore;

    fn generator_with(
        behavior: MockBehavior,
    ) -> (ContentGenerator, MockGateway, MemoryProfileStore) {
        let gateway = MockGateway::new(behavior);
        let store = MemoryProfileStore::new();
        let generator = ContentGenerator::new(
            Box::new(store.clone()),
            Box::new(gateway.clone()),
            "test-model",
        );
        (generator, gateway, store)
    }

    #[test]
    fn save_rejects_incomplete_profile_naming_first_gap() {
        let store = MemoryProfileStore::new();
        let mut profile = StyleProfile::builtin_default();
        profile.personality_traits.clear();

        let error = save_profile(&store, &profile).unwrap_err();
        match error {
            ProfileError::Incomplete(section) => assert_eq!(section, Section::ToneAndVoice),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn save_persists_with_standard_ttl_and_without_samples() {
        let store = MemoryProfileStore::new();
        let mut profile = StyleProfile::builtin_default();
        profile.reference_samples = vec!["sample".to_string(), "  ".to_string()];

        save_profile(&store, &profile).unwrap();
        assert_eq!(store.last_ttl(), Some(PROFILE_TTL));
        let stored = store.get().unwrap().unwrap();
        assert_eq!(stored.writing_style, "conversational");
        assert!(stored.into_profile().reference_samples.is_empty());
    }

    #[tokio::test]
    async fn generate_returns_gateway_text_unmodified() {
        let (generator, _, _) = generator_with(MockBehavior::Reply("  raw text\n".to_string()));
        let request = ContentRequest::new("Q3 growth");
        assert_eq!(generator.generate(&request).await, "  raw text\n");
    }

    #[tokio::test]
    async fn generate_swallows_gateway_failure_into_fallback() {
        let (generator, gateway, _) =
            generator_with(MockBehavior::Fail("rate limited".to_string()));
        let request = ContentRequest::new("Q3 growth");
        assert_eq!(generator.generate(&request).await, GENERATION_FALLBACK);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn generate_uses_builtin_default_when_no_profile_saved() {
        let (generator, gateway, _) = generator_with(MockBehavior::Success);
        generator.generate(&ContentRequest::new("topic")).await;

        let sent = gateway.last_request().unwrap();
        assert!(sent
            .system_prompt
            .contains("- Personality Traits: Thoughtful, Curious, Friendly"));
        assert!(sent.system_prompt.contains(
            "Reference Example 1:\nSample content that demonstrates the user's writing style."
        ));
        assert_eq!(sent.model, "test-model");
        assert_eq!(sent.temperature, 0.7);
    }

    #[tokio::test]
    async fn generate_uses_saved_profile_without_reference_block() {
        let (generator, gateway, store) = generator_with(MockBehavior::Success);
        let mut profile = StyleProfile::builtin_default();
        profile.writing_style = "technical".to_string();
        profile.reference_samples = vec!["was filtered on save".to_string()];
        save_profile(&store, &profile).unwrap();

        generator.generate(&ContentRequest::new("topic")).await;

        let sent = gateway.last_request().unwrap();
        assert!(sent.system_prompt.contains("- Overall Style: technical"));
        // Samples were dropped at save time, so no reference block remains
        assert!(!sent.system_prompt.contains("REFERENCE CONTENT"));
    }

    #[tokio::test]
    async fn generate_falls_back_to_default_when_store_read_fails() {
        struct FailingStore;
        impl ProfileStore for FailingStore {
            fn get(&self) -> anyhow::Result<Option<crate::profile::StoredProfile>> {
                anyhow::bail!("disk on fire")
            }
            fn set(
                &self,
                _: &crate::profile::StoredProfile,
                _: Duration,
            ) -> anyhow::Result<()> {
                Ok(())
            }
            fn delete(&self) -> anyhow::Result<()> {
                Ok(())
            }
        }

        let gateway = MockGateway::new(MockBehavior::Success);
        let generator = ContentGenerator::new(
            Box::new(FailingStore),
            Box::new(gateway.clone()),
            "test-model",
        );
        let text = generator.generate(&ContentRequest::new("topic")).await;

        assert_eq!(text, "Mock generated content");
        let sent = gateway.last_request().unwrap();
        assert!(sent.system_prompt.contains("- Overall Style: conversational"));
    }
}
