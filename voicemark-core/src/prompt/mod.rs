//! Prompt assembly. Pure string building: same profile and request in,
//! byte-identical prompt out. Nothing here talks to a provider.

use crate::generate::request::{ContentRequest, PostLength};
use crate::profile::{filter_reference_samples, StyleProfile};

const PREAMBLE: &str =
    "You are a professional content writer who specializes in matching the user's writing style.";
const PROFILE_HEADER: &str = "USER'S WRITING STYLE PROFILE:";
const NONE_PROVIDED: &str = "None provided";
const NO_KEYWORDS: &str = "No specific keywords required";

/// Builds the system prompt: preamble, the full profile rendered section by
/// section, surviving reference samples, then the task, requirements and
/// policy blocks. Profile values and the topic are interpolated verbatim,
/// with no escaping.
pub fn compile_system_prompt(profile: &StyleProfile, request: &ContentRequest) -> String {
    let mut blocks = vec![
        PREAMBLE.to_string(),
        PROFILE_HEADER.to_string(),
        profile_block(profile),
    ];
    if let Some(references) = reference_block(&profile.reference_samples) {
        blocks.push(references);
    }
    blocks.push(task_block(request));
    blocks.push(requirements_block(request));
    blocks.push(important_block(request));
    blocks.join("\n\n")
}

/// The short per-request instruction sent alongside the system prompt.
pub fn compile_user_prompt(request: &ContentRequest) -> String {
    format!(
        "Generate {} content about: {}",
        request.platform, request.topic
    )
}

/// Wording for the requested length band. Everything outside the known
/// bands gets the long wording.
pub fn length_requirement(length: &PostLength) -> &'static str {
    match length {
        PostLength::Short => "Short (around 100-150 words)",
        PostLength::Medium => "Medium (around 150-250 words)",
        PostLength::Long | PostLength::Other(_) => "Long (around 250-350 words)",
    }
}

fn profile_block(profile: &StyleProfile) -> String {
    let custom_instructions = if profile.custom_instructions.trim().is_empty() {
        NONE_PROVIDED
    } else {
        profile.custom_instructions.as_str()
    };
    format!(
        r#"1. Writing Style Overview:
- Overall Style: {writing_style}
- Spontaneity Level: {spontaneity_level}
- Expressiveness: {expressiveness}
- Elaboration Style: {elaboration_style}
- Rhythmic Elements: {rhythmic_elements}

2. Tone and Voice:
- Authenticity Level: {authenticity_level}
- Strength Balance: {strength_balance}
- Fluidity Level: {fluidity_level}
- Personality Traits: {personality_traits}

3. Engagement with the Reader:
- Emotional Connection: {emotional_connection}
- Progression Style: {progression_style}
- Reader Addressing: {reader_addressing}
- Persuasion Level: {persuasion_level}

4. Format and Structure:
- Paragraph Length: {paragraph_length}
- Use of Bullet Points: {use_of_bullet_points}
- Heading Frequency: {heading_frequency}
- Transition Style: {transition_style}

5. Language Preferences:
- Dialect Preference: {dialect_preference}
- Sentence Complexity: {sentence_complexity}
- Vocabulary Range: {vocabulary_range}
- Industry Jargon: {industry_jargon}

6. Key Instructions:
- Use of Emojis: {use_emojis}
- Use of Hashtags: {use_hashtags}
- Character Limit Preference: {character_limit}
- Additional Instructions: {custom_instructions}"#,
        writing_style = profile.writing_style,
        spontaneity_level = profile.spontaneity_level,
        expressiveness = profile.expressiveness,
        elaboration_style = profile.elaboration_style,
        rhythmic_elements = profile.rhythmic_elements,
        authenticity_level = profile.authenticity_level,
        strength_balance = profile.strength_balance,
        fluidity_level = profile.fluidity_level,
        personality_traits = profile.personality_traits.join(", "),
        emotional_connection = profile.emotional_connection,
        progression_style = profile.progression_style,
        reader_addressing = profile.reader_addressing,
        persuasion_level = profile.persuasion_level,
        paragraph_length = profile.paragraph_length,
        use_of_bullet_points = profile.use_of_bullet_points,
        heading_frequency = profile.heading_frequency,
        transition_style = profile.transition_style,
        dialect_preference = profile.dialect_preference,
        sentence_complexity = profile.sentence_complexity,
        vocabulary_range = profile.vocabulary_range,
        industry_jargon = profile.industry_jargon,
        use_emojis = profile.use_emojis,
        use_hashtags = profile.use_hashtags,
        character_limit = profile.character_limit,
        custom_instructions = custom_instructions,
    )
}

// Numbering runs over the surviving samples, so blanks never leave gaps.
fn reference_block(samples: &[String]) -> Option<String> {
    let kept = filter_reference_samples(samples);
    if kept.is_empty() {
        return None;
    }
    let entries = kept
        .iter()
        .enumerate()
        .map(|(i, sample)| format!("Reference Example {}:\n{}", i + 1, sample))
        .collect::<Vec<_>>()
        .join("\n\n");
    Some(format!("REFERENCE CONTENT:\n{entries}"))
}

fn task_block(request: &ContentRequest) -> String {
    format!(
        "TASK:\nGenerate professional content for {} about the following topic: \"{}\"",
        request.platform, request.topic
    )
}

fn requirements_block(request: &ContentRequest) -> String {
    let keywords = if request.keywords.is_empty() {
        NO_KEYWORDS.to_string()
    } else {
        request.keywords.join(", ")
    };
    let hashtags = if request.include_hashtags {
        "Include relevant hashtags at the end"
    } else {
        "Do not include hashtags"
    };
    let call_to_action = if request.include_call_to_action {
        "Include a call to action at the end"
    } else {
        "No call to action needed"
    };
    format!(
        r#"REQUIREMENTS:
- Length: {length}
- Keywords to include: {keywords}
- {hashtags}
- {call_to_action}
- Follow {platform}'s best practices for professional content
- The content should sound authentic and match the user's writing style as described above
- Format the content with appropriate spacing for readability"#,
        length = length_requirement(&request.post_length),
        keywords = keywords,
        hashtags = hashtags,
        call_to_action = call_to_action,
        platform = request.platform,
    )
}

fn important_block(request: &ContentRequest) -> String {
    format!(
        r#"IMPORTANT:
- The content should sound like it was written by the user, not by AI
- Maintain the user's unique voice and style based on their profile and reference content
- Ensure the content is professional and appropriate for {platform}"#,
        platform = request.platform,
    )
}
