pub mod engine;
pub mod request;

pub use engine::{save_profile, ContentGenerator, ProfileError, GENERATION_FALLBACK, PROFILE_TTL};
pub use request::{parse_keywords, ContentRequest, Platform, PostLength};
