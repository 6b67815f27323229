use std::fmt;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::profile::StyleProfile;

/// The seven questionnaire sections, in presentation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::VariantArray,
)]
pub enum Section {
    StyleOverview,
    ToneAndVoice,
    ReaderEngagement,
    FormatAndStructure,
    LanguagePreferences,
    KeyInstructions,
    ReferenceContent,
}

impl Section {
    /// Every section, in presentation order.
    pub fn all() -> &'static [Section] {
        Section::VARIANTS
    }

    /// 1-based position shown to the user.
    pub fn index(self) -> u8 {
        match self {
            Section::StyleOverview => 1,
            Section::ToneAndVoice => 2,
            Section::ReaderEngagement => 3,
            Section::FormatAndStructure => 4,
            Section::LanguagePreferences => 5,
            Section::KeyInstructions => 6,
            Section::ReferenceContent => 7,
        }
    }

    pub fn from_index(index: u8) -> Option<Section> {
        Section::VARIANTS
            .iter()
            .copied()
            .find(|section| section.index() == index)
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::StyleOverview => "Writing Style Overview",
            Section::ToneAndVoice => "Tone and Voice",
            Section::ReaderEngagement => "Engagement with the Reader",
            Section::FormatAndStructure => "Format and Structure",
            Section::LanguagePreferences => "Language Preferences",
            Section::KeyInstructions => "Key Instructions",
            Section::ReferenceContent => "Reference Content",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::StyleOverview => "Tell us about your overall writing style and approach.",
            Section::ToneAndVoice => {
                "Help us understand the tone and voice that makes your writing unique."
            }
            Section::ReaderEngagement => {
                "Tell us how you engage with your readers through your writing."
            }
            Section::FormatAndStructure => {
                "Tell us about your preferences for formatting and structuring your content."
            }
            Section::LanguagePreferences => "Tell us about your language preferences and style.",
            Section::KeyInstructions => {
                "Provide specific instructions for how your content should be formatted."
            }
            Section::ReferenceContent => {
                "Provide examples of your writing to help the AI better understand your style."
            }
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl StyleProfile {
    /// True when every required answer in the section has been given.
    ///
    /// Sections 1-6 check the stored value exactly as entered, so an answer
    /// of whitespace counts. The reference section is the exception: it needs
    /// at least one sample that survives trimming.
    pub fn is_section_complete(&self, section: Section) -> bool {
        match section {
            Section::StyleOverview => all_answered(&[
                &self.writing_style,
                &self.spontaneity_level,
                &self.expressiveness,
                &self.elaboration_style,
                &self.rhythmic_elements,
            ]),
            Section::ToneAndVoice => {
                all_answered(&[
                    &self.authenticity_level,
                    &self.strength_balance,
                    &self.fluidity_level,
                ]) && !self.personality_traits.is_empty()
            }
            Section::ReaderEngagement => all_answered(&[
                &self.emotional_connection,
                &self.progression_style,
                &self.reader_addressing,
                &self.persuasion_level,
            ]),
            Section::FormatAndStructure => all_answered(&[
                &self.paragraph_length,
                &self.use_of_bullet_points,
                &self.heading_frequency,
                &self.transition_style,
            ]),
            Section::LanguagePreferences => all_answered(&[
                &self.dialect_preference,
                &self.sentence_complexity,
                &self.vocabulary_range,
                &self.industry_jargon,
            ]),
            // Custom instructions are optional, so they never gate the section
            Section::KeyInstructions => all_answered(&[
                &self.use_emojis,
                &self.use_hashtags,
                &self.character_limit,
            ]),
            Section::ReferenceContent => self
                .reference_samples
                .iter()
                .any(|sample| !sample.trim().is_empty()),
        }
    }

    /// First section, in order, still missing an answer.
    pub fn first_incomplete_section(&self) -> Option<Section> {
        Section::VARIANTS
            .iter()
            .copied()
            .find(|&section| !self.is_section_complete(section))
    }

    pub fn is_complete(&self) -> bool {
        self.first_incomplete_section().is_none()
    }
}

fn all_answered(fields: &[&String]) -> bool {
    fields.iter().all(|field| !field.is_empty())
}
