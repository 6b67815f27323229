pub mod ai;
pub mod generate;
pub mod profile;
pub mod prompt;
pub mod settings;
pub mod store;

// The types most callers need, re-exported so the CLI and library users
// don't have to know the module layout.
pub use ai::provider::{GenerationGateway, GenerationRequest};
pub use generate::{save_profile, ContentGenerator, ContentRequest, Platform, PostLength};
pub use generate::{GENERATION_FALLBACK, PROFILE_TTL};
pub use profile::{Section, StoredProfile, StyleProfile};
pub use settings::{build_gateway, Settings, SettingsManager};
pub use store::{FileProfileStore, MemoryProfileStore, ProfileStore};
