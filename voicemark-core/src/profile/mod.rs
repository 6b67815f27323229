pub mod catalog;
pub mod persist;
pub mod section;

pub use persist::{prepare_for_storage, StoredProfile};
pub use section::Section;

use serde::{Deserialize, Serialize};

/// A user's writing-voice questionnaire answers.
///
/// Values are carried exactly as collected. The prompt compiler interpolates
/// them verbatim and never checks them against the option catalogs, so a
/// profile restored from an older store keeps working even if the catalogs
/// change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    // Writing style overview
    pub writing_style: String,
    pub spontaneity_level: String,
    pub expressiveness: String,
    pub elaboration_style: String,
    pub rhythmic_elements: String,

    // Tone and voice
    pub authenticity_level: String,
    pub strength_balance: String,
    pub fluidity_level: String,
    pub personality_traits: Vec<String>,

    // Engagement with the reader
    pub emotional_connection: String,
    pub progression_style: String,
    pub reader_addressing: String,
    pub persuasion_level: String,

    // Format and structure
    pub paragraph_length: String,
    pub use_of_bullet_points: String,
    pub heading_frequency: String,
    pub transition_style: String,

    // Language preferences
    pub dialect_preference: String,
    pub sentence_complexity: String,
    pub vocabulary_range: String,
    pub industry_jargon: String,

    // Key instructions
    pub use_emojis: String,
    pub use_hashtags: String,
    pub character_limit: String,
    pub custom_instructions: String,

    // Working copy only; stripped before storage
    pub reference_samples: Vec<String>,
}

impl StyleProfile {
    /// The profile used when nothing has been saved yet. Generation must
    /// always produce something, so these stand in for real answers.
    pub fn builtin_default() -> Self {
        Self {
            writing_style: "conversational".to_string(),
            spontaneity_level: "balanced".to_string(),
            expressiveness: "expressive".to_string(),
            elaboration_style: "moderate-detail".to_string(),
            rhythmic_elements: "occasionally".to_string(),
            authenticity_level: "very-authentic".to_string(),
            strength_balance: "confident".to_string(),
            fluidity_level: "dynamic".to_string(),
            personality_traits: vec![
                "Thoughtful".to_string(),
                "Curious".to_string(),
                "Friendly".to_string(),
            ],
            emotional_connection: "balanced".to_string(),
            progression_style: "logical".to_string(),
            reader_addressing: "second-person".to_string(),
            persuasion_level: "moderately-persuasive".to_string(),
            paragraph_length: "medium".to_string(),
            use_of_bullet_points: "sometimes".to_string(),
            heading_frequency: "moderate".to_string(),
            transition_style: "smooth".to_string(),
            dialect_preference: "american".to_string(),
            sentence_complexity: "mixed".to_string(),
            vocabulary_range: "varied".to_string(),
            industry_jargon: "moderate".to_string(),
            use_emojis: "sometimes".to_string(),
            use_hashtags: "end-only".to_string(),
            character_limit: "medium".to_string(),
            custom_instructions: String::new(),
            reference_samples: vec![
                "Sample content that demonstrates the user's writing style.".to_string(),
            ],
        }
    }

    /// Copy of the profile with blank reference samples removed.
    pub fn with_filtered_samples(&self) -> Self {
        let mut profile = self.clone();
        profile.reference_samples = filter_reference_samples(&self.reference_samples);
        profile
    }
}

/// Drops samples that are blank after trimming. Surviving entries keep their
/// original text and relative order.
pub fn filter_reference_samples(samples: &[String]) -> Vec<String> {
    samples
        .iter()
        .filter(|sample| !sample.trim().is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_blank_samples_and_keeps_order() {
        let samples = vec![
            "first".to_string(),
            "   ".to_string(),
            String::new(),
            "\n\t".to_string(),
            "second".to_string(),
        ];
        assert_eq!(
            filter_reference_samples(&samples),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn filter_preserves_surrounding_whitespace_of_kept_samples() {
        let samples = vec!["  padded content  ".to_string()];
        assert_eq!(
            filter_reference_samples(&samples),
            vec!["  padded content  ".to_string()]
        );
    }

    #[test]
    fn builtin_default_is_fully_answered() {
        let profile = StyleProfile::builtin_default();
        assert!(profile.is_complete());
        assert_eq!(
            profile.personality_traits,
            vec!["Thoughtful", "Curious", "Friendly"]
        );
    }

    #[test]
    fn with_filtered_samples_leaves_other_fields_alone() {
        let mut profile = StyleProfile::builtin_default();
        profile.reference_samples = vec!["keep".to_string(), " ".to_string()];
        let filtered = profile.with_filtered_samples();
        assert_eq!(filtered.reference_samples, vec!["keep".to_string()]);
        assert_eq!(filtered.writing_style, profile.writing_style);
    }
}
