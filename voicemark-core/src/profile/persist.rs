use serde::{Deserialize, Serialize};

use crate::profile::StyleProfile;

/// The profile shape written to the session store.
///
/// Reference samples are collected by the questionnaire but not persisted in
/// the current product tier, so this type has no field for them. The samples
/// are structurally gone from anything serialized here, not merely emptied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredProfile {
    pub writing_style: String,
    pub spontaneity_level: String,
    pub expressiveness: String,
    pub elaboration_style: String,
    pub rhythmic_elements: String,

    pub authenticity_level: String,
    pub strength_balance: String,
    pub fluidity_level: String,
    pub personality_traits: Vec<String>,

    pub emotional_connection: String,
    pub progression_style: String,
    pub reader_addressing: String,
    pub persuasion_level: String,

    pub paragraph_length: String,
    pub use_of_bullet_points: String,
    pub heading_frequency: String,
    pub transition_style: String,

    pub dialect_preference: String,
    pub sentence_complexity: String,
    pub vocabulary_range: String,
    pub industry_jargon: String,

    pub use_emojis: String,
    pub use_hashtags: String,
    pub character_limit: String,
    pub custom_instructions: String,
}

impl StoredProfile {
    pub fn from_profile(profile: &StyleProfile) -> Self {
        Self {
            writing_style: profile.writing_style.clone(),
            spontaneity_level: profile.spontaneity_level.clone(),
            expressiveness: profile.expressiveness.clone(),
            elaboration_style: profile.elaboration_style.clone(),
            rhythmic_elements: profile.rhythmic_elements.clone(),
            authenticity_level: profile.authenticity_level.clone(),
            strength_balance: profile.strength_balance.clone(),
            fluidity_level: profile.fluidity_level.clone(),
            personality_traits: profile.personality_traits.clone(),
            emotional_connection: profile.emotional_connection.clone(),
            progression_style: profile.progression_style.clone(),
            reader_addressing: profile.reader_addressing.clone(),
            persuasion_level: profile.persuasion_level.clone(),
            paragraph_length: profile.paragraph_length.clone(),
            use_of_bullet_points: profile.use_of_bullet_points.clone(),
            heading_frequency: profile.heading_frequency.clone(),
            transition_style: profile.transition_style.clone(),
            dialect_preference: profile.dialect_preference.clone(),
            sentence_complexity: profile.sentence_complexity.clone(),
            vocabulary_range: profile.vocabulary_range.clone(),
            industry_jargon: profile.industry_jargon.clone(),
            use_emojis: profile.use_emojis.clone(),
            use_hashtags: profile.use_hashtags.clone(),
            character_limit: profile.character_limit.clone(),
            custom_instructions: profile.custom_instructions.clone(),
        }
    }

    /// Rehydrates a working profile. Stored profiles carry no reference
    /// samples so the restored profile has none either.
    pub fn into_profile(self) -> StyleProfile {
        StyleProfile {
            writing_style: self.writing_style,
            spontaneity_level: self.spontaneity_level,
            expressiveness: self.expressiveness,
            elaboration_style: self.elaboration_style,
            rhythmic_elements: self.rhythmic_elements,
            authenticity_level: self.authenticity_level,
            strength_balance: self.strength_balance,
            fluidity_level: self.fluidity_level,
            personality_traits: self.personality_traits,
            emotional_connection: self.emotional_connection,
            progression_style: self.progression_style,
            reader_addressing: self.reader_addressing,
            persuasion_level: self.persuasion_level,
            paragraph_length: self.paragraph_length,
            use_of_bullet_points: self.use_of_bullet_points,
            heading_frequency: self.heading_frequency,
            transition_style: self.transition_style,
            dialect_preference: self.dialect_preference,
            sentence_complexity: self.sentence_complexity,
            vocabulary_range: self.vocabulary_range,
            industry_jargon: self.industry_jargon,
            use_emojis: self.use_emojis,
            use_hashtags: self.use_hashtags,
            character_limit: self.character_limit,
            custom_instructions: self.custom_instructions,
            reference_samples: Vec::new(),
        }
    }
}

/// Prepares a working profile for the session store.
///
/// Blank reference samples are filtered out first, then the surviving
/// samples are dropped along with the field itself. The filter looks
/// redundant today but stays as its own stage: turning sample persistence
/// back on is then a change to the stored type, not to the submission flow.
pub fn prepare_for_storage(profile: &StyleProfile) -> StoredProfile {
    let filtered = profile.with_filtered_samples();
    StoredProfile::from_profile(&filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_profile_serializes_without_any_reference_field() {
        let mut profile = StyleProfile::builtin_default();
        profile.reference_samples = vec!["must not leak".to_string()];
        let stored = prepare_for_storage(&profile);
        let value = serde_json::to_value(&stored).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(
            keys.iter().all(|key| !key.contains("reference")),
            "unexpected key in {keys:?}"
        );
        assert_eq!(keys.len(), 25);
    }

    #[test]
    fn prepare_keeps_all_other_answers() {
        let profile = StyleProfile::builtin_default();
        let stored = prepare_for_storage(&profile);
        assert_eq!(stored.writing_style, "conversational");
        assert_eq!(stored.use_hashtags, "end-only");
        assert_eq!(
            stored.personality_traits,
            vec!["Thoughtful", "Curious", "Friendly"]
        );
        assert_eq!(stored.custom_instructions, "");
    }

    #[test]
    fn rehydrated_profile_has_no_samples() {
        let profile = StyleProfile::builtin_default();
        let restored = prepare_for_storage(&profile).into_profile();
        assert!(restored.reference_samples.is_empty());
        assert_eq!(restored.writing_style, profile.writing_style);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let stored: StoredProfile =
            serde_json::from_str(r#"{"writing_style": "formal"}"#).unwrap();
        assert_eq!(stored.writing_style, "formal");
        assert_eq!(stored.spontaneity_level, "");
        assert!(stored.personality_traits.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored_on_read() {
        let stored: StoredProfile = serde_json::from_str(
            r#"{"writing_style": "formal", "reference_samples": ["stale"]}"#,
        )
        .unwrap();
        assert_eq!(stored.writing_style, "formal");
    }
}
