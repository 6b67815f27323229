//! Option catalogs for the questionnaire. Stored profile values come from
//! the `value` column; labels are only ever shown to the user.

/// One selectable answer for a catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A single-choice question with its fixed set of answers.
#[derive(Debug, Clone, Copy)]
pub struct FieldPrompt {
    pub question: &'static str,
    pub options: [FieldOption; 5],
}

const fn opt(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

pub const WRITING_STYLE: FieldPrompt = FieldPrompt {
    question: "What best describes your overall writing style?",
    options: [
        opt("formal", "Formal and professional"),
        opt("conversational", "Conversational and friendly"),
        opt("technical", "Technical and detailed"),
        opt("storytelling", "Narrative and storytelling"),
        opt("persuasive", "Persuasive and compelling"),
    ],
};

pub const SPONTANEITY_LEVEL: FieldPrompt = FieldPrompt {
    question: "How spontaneous is your writing flow?",
    options: [
        opt("highly-structured", "Highly structured and planned"),
        opt("somewhat-structured", "Somewhat structured with room for spontaneity"),
        opt("balanced", "Balanced between structure and spontaneity"),
        opt("mostly-spontaneous", "Mostly spontaneous with minimal structure"),
        opt("completely-spontaneous", "Completely spontaneous and free-flowing"),
    ],
};

pub const EXPRESSIVENESS: FieldPrompt = FieldPrompt {
    question: "How expressive is your writing tone?",
    options: [
        opt("reserved", "Reserved and understated"),
        opt("moderate", "Moderately expressive"),
        opt("expressive", "Expressive and animated"),
        opt("highly-expressive", "Highly expressive and passionate"),
        opt("dramatic", "Dramatic and intense"),
    ],
};

pub const ELABORATION_STYLE: FieldPrompt = FieldPrompt {
    question: "How do you typically elaborate on ideas?",
    options: [
        opt("concise", "Concise and to the point"),
        opt("moderate-detail", "Moderate detail on key points"),
        opt("thorough", "Thorough and comprehensive"),
        opt("meandering", "Meandering and exploratory"),
        opt("example-driven", "Example-driven with stories"),
    ],
};

pub const RHYTHMIC_ELEMENTS: FieldPrompt = FieldPrompt {
    question: "Do you use rhythmic or repetitive elements in your writing?",
    options: [
        opt("never", "Never or rarely"),
        opt("occasionally", "Occasionally for emphasis"),
        opt("sometimes", "Sometimes in key sections"),
        opt("frequently", "Frequently throughout"),
        opt("signature-style", "It's a signature part of my style"),
    ],
};

pub const AUTHENTICITY_LEVEL: FieldPrompt = FieldPrompt {
    question: "How authentic and raw is your writing voice?",
    options: [
        opt("polished", "Polished and refined"),
        opt("balanced", "Balanced between polished and raw"),
        opt("mostly-authentic", "Mostly authentic with some polish"),
        opt("very-authentic", "Very authentic and genuine"),
        opt("completely-raw", "Completely raw and unfiltered"),
    ],
};

pub const STRENGTH_BALANCE: FieldPrompt = FieldPrompt {
    question: "How would you describe the strength of your writing voice?",
    options: [
        opt("gentle", "Gentle and soft-spoken"),
        opt("moderate", "Moderate and balanced"),
        opt("confident", "Confident and assertive"),
        opt("strong", "Strong and authoritative"),
        opt("powerful", "Powerful and commanding"),
    ],
};

pub const FLUIDITY_LEVEL: FieldPrompt = FieldPrompt {
    question: "How fluid and dynamic is your writing voice?",
    options: [
        opt("consistent", "Consistent and steady"),
        opt("mostly-consistent", "Mostly consistent with some variation"),
        opt("balanced", "Balanced between consistency and variation"),
        opt("dynamic", "Dynamic and varied"),
        opt("highly-dynamic", "Highly dynamic and constantly shifting"),
    ],
};

pub const EMOTIONAL_CONNECTION: FieldPrompt = FieldPrompt {
    question: "How do you create emotional connection with readers?",
    options: [
        opt("factual", "Factual with minimal emotional appeal"),
        opt("subtle", "Subtle emotional undertones"),
        opt("balanced", "Balanced facts and emotional appeal"),
        opt("emotional", "Emotionally engaging throughout"),
        opt("deeply-emotional", "Deeply emotional and moving"),
    ],
};

pub const PROGRESSION_STYLE: FieldPrompt = FieldPrompt {
    question: "How do your ideas typically progress in your writing?",
    options: [
        opt("linear", "Linear and sequential"),
        opt("structured", "Structured with clear sections"),
        opt("logical", "Logical with connected arguments"),
        opt("exploratory", "Exploratory with related tangents"),
        opt("organic", "Organic and naturally evolving"),
    ],
};

pub const READER_ADDRESSING: FieldPrompt = FieldPrompt {
    question: "How do you typically address your readers?",
    options: [
        opt("third-person", "Third-person (they, readers)"),
        opt("second-person", "Second-person (you, your)"),
        opt("first-person-inclusive", "First-person inclusive (we, us, our)"),
        opt("mixed", "Mixed approach depending on context"),
        opt("impersonal", "Impersonal with no direct addressing"),
    ],
};

pub const PERSUASION_LEVEL: FieldPrompt = FieldPrompt {
    question: "How persuasive is your writing typically?",
    options: [
        opt("informative", "Informative without persuasion"),
        opt("gently-persuasive", "Gently persuasive"),
        opt("moderately-persuasive", "Moderately persuasive"),
        opt("strongly-persuasive", "Strongly persuasive"),
        opt("highly-persuasive", "Highly persuasive and compelling"),
    ],
};

pub const PARAGRAPH_LENGTH: FieldPrompt = FieldPrompt {
    question: "What paragraph length do you typically use?",
    options: [
        opt("very-short", "Very short (1-2 sentences)"),
        opt("short", "Short (2-3 sentences)"),
        opt("medium", "Medium (3-5 sentences)"),
        opt("long", "Long (5-7 sentences)"),
        opt("varied", "Varied lengths for rhythm"),
    ],
};

pub const USE_OF_BULLET_POINTS: FieldPrompt = FieldPrompt {
    question: "How do you use bullet points or lists?",
    options: [
        opt("never", "Never or rarely"),
        opt("occasionally", "Occasionally for key points"),
        opt("sometimes", "Sometimes for clarity"),
        opt("frequently", "Frequently throughout"),
        opt("extensively", "Extensively as a core format"),
    ],
};

pub const HEADING_FREQUENCY: FieldPrompt = FieldPrompt {
    question: "How frequently do you use headings and subheadings?",
    options: [
        opt("never", "Never or rarely"),
        opt("main-sections", "Only for main sections"),
        opt("moderate", "Moderate use for clarity"),
        opt("frequent", "Frequent use throughout"),
        opt("extensive", "Extensive hierarchical structure"),
    ],
};

pub const TRANSITION_STYLE: FieldPrompt = FieldPrompt {
    question: "How do you transition between ideas?",
    options: [
        opt("abrupt", "Abrupt with clear breaks"),
        opt("minimal", "Minimal transitions"),
        opt("standard", "Standard transitional phrases"),
        opt("smooth", "Smooth and flowing connections"),
        opt("elaborate", "Elaborate bridges between ideas"),
    ],
};

pub const DIALECT_PREFERENCE: FieldPrompt = FieldPrompt {
    question: "Which dialect do you prefer?",
    options: [
        opt("american", "American English"),
        opt("british", "British English"),
        opt("australian", "Australian English"),
        opt("canadian", "Canadian English"),
        opt("neutral", "Neutral/International English"),
    ],
};

pub const SENTENCE_COMPLEXITY: FieldPrompt = FieldPrompt {
    question: "How complex are your sentences typically?",
    options: [
        opt("simple", "Simple and straightforward"),
        opt("mostly-simple", "Mostly simple with some complexity"),
        opt("mixed", "Mixed simple and complex"),
        opt("mostly-complex", "Mostly complex with some simple"),
        opt("complex", "Complex and sophisticated"),
    ],
};

pub const VOCABULARY_RANGE: FieldPrompt = FieldPrompt {
    question: "What vocabulary range do you typically use?",
    options: [
        opt("simple", "Simple and accessible"),
        opt("everyday", "Everyday with occasional specialized terms"),
        opt("varied", "Varied and contextual"),
        opt("advanced", "Advanced and precise"),
        opt("sophisticated", "Sophisticated and extensive"),
    ],
};

pub const INDUSTRY_JARGON: FieldPrompt = FieldPrompt {
    question: "How do you use industry jargon or specialized terminology?",
    options: [
        opt("avoid", "Avoid jargon completely"),
        opt("minimal", "Minimal with explanations"),
        opt("moderate", "Moderate use where appropriate"),
        opt("frequent", "Frequent use for expert audience"),
        opt("extensive", "Extensive technical terminology"),
    ],
};

pub const USE_EMOJIS: FieldPrompt = FieldPrompt {
    question: "Do you use emojis in your writing?",
    options: [
        opt("never", "Never use emojis"),
        opt("rarely", "Rarely (1-2 per post)"),
        opt("sometimes", "Sometimes (3-5 per post)"),
        opt("frequently", "Frequently (throughout post)"),
        opt("extensively", "Extensively (multiple per paragraph)"),
    ],
};

pub const USE_HASHTAGS: FieldPrompt = FieldPrompt {
    question: "Do you use hashtags in your content?",
    options: [
        opt("never", "Never use hashtags"),
        opt("end-only", "Only at the end (2-3 hashtags)"),
        opt("end-many", "Many at the end (4+ hashtags)"),
        opt("integrated", "Integrated within the text"),
        opt("both", "Both integrated and at the end"),
    ],
};

pub const CHARACTER_LIMIT: FieldPrompt = FieldPrompt {
    question: "What is your preferred content length?",
    options: [
        opt("very-short", "Very short (under 100 words)"),
        opt("short", "Short (100-200 words)"),
        opt("medium", "Medium (200-400 words)"),
        opt("long", "Long (400-800 words)"),
        opt("very-long", "Very long (800+ words)"),
    ],
};

pub const PERSONALITY_TRAITS: [&str; 16] = [
    "Thoughtful",
    "Humorous",
    "Analytical",
    "Empathetic",
    "Direct",
    "Optimistic",
    "Skeptical",
    "Passionate",
    "Curious",
    "Practical",
    "Inspirational",
    "Methodical",
    "Creative",
    "Authoritative",
    "Friendly",
    "Reflective",
];

pub const PERSONALITY_TRAITS_QUESTION: &str =
    "Which personality traits come through in your writing? (Select all that apply)";

pub const CUSTOM_INSTRUCTIONS_QUESTION: &str = "Any additional custom instructions? (Optional)";

/// The questionnaire collects up to this many reference samples.
pub const MAX_REFERENCE_SAMPLES: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_values_are_unique_within_each_prompt() {
        let prompts = [
            WRITING_STYLE,
            SPONTANEITY_LEVEL,
            EXPRESSIVENESS,
            ELABORATION_STYLE,
            RHYTHMIC_ELEMENTS,
            AUTHENTICITY_LEVEL,
            STRENGTH_BALANCE,
            FLUIDITY_LEVEL,
            EMOTIONAL_CONNECTION,
            PROGRESSION_STYLE,
            READER_ADDRESSING,
            PERSUASION_LEVEL,
            PARAGRAPH_LENGTH,
            USE_OF_BULLET_POINTS,
            HEADING_FREQUENCY,
            TRANSITION_STYLE,
            DIALECT_PREFERENCE,
            SENTENCE_COMPLEXITY,
            VOCABULARY_RANGE,
            INDUSTRY_JARGON,
            USE_EMOJIS,
            USE_HASHTAGS,
            CHARACTER_LIMIT,
        ];
        for prompt in prompts {
            for (i, a) in prompt.options.iter().enumerate() {
                for b in &prompt.options[i + 1..] {
                    assert_ne!(a.value, b.value, "duplicate value in {:?}", prompt.question);
                }
            }
        }
    }

    #[test]
    fn builtin_default_answers_exist_in_catalogs() {
        let profile = crate::profile::StyleProfile::builtin_default();
        let pairs: [(&str, &FieldPrompt); 5] = [
            (&profile.writing_style, &WRITING_STYLE),
            (&profile.authenticity_level, &AUTHENTICITY_LEVEL),
            (&profile.reader_addressing, &READER_ADDRESSING),
            (&profile.use_hashtags, &USE_HASHTAGS),
            (&profile.character_limit, &CHARACTER_LIMIT),
        ];
        for (value, prompt) in pairs {
            assert!(
                prompt.options.iter().any(|option| option.value == value),
                "{value} missing from {:?}",
                prompt.question
            );
        }
        for trait_name in &profile.personality_traits {
            assert!(PERSONALITY_TRAITS.contains(&trait_name.as_str()));
        }
    }
}
