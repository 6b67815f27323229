use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use voicemark_core::generate::{save_profile, ProfileError};
use voicemark_core::profile::catalog::{
    self, FieldPrompt, CUSTOM_INSTRUCTIONS_QUESTION, MAX_REFERENCE_SAMPLES, PERSONALITY_TRAITS,
    PERSONALITY_TRAITS_QUESTION,
};
use voicemark_core::profile::{Section, StyleProfile};
use voicemark_core::store::ProfileStore;

pub fn run(store: &dyn ProfileStore) -> Result<()> {
    let mut profile = match store.get()? {
        Some(stored) => stored.into_profile(),
        None => StyleProfile::default(),
    };

    let mut rl = DefaultEditor::new()?;

    println!("Voicemark style questionnaire");
    println!("Answer each question with the number of the option that fits best.");
    println!("Press Enter to keep the answer shown in brackets. Ctrl-C exits without saving.");

    for &section in Section::all() {
        if !complete_section(&mut rl, &mut profile, section)? {
            return cancelled();
        }
    }

    // The per-section gates make an incomplete save unlikely, but the error
    // still names the gap if the rules ever drift apart.
    loop {
        match save_profile(store, &profile) {
            Ok(()) => {
                println!();
                println!("Profile saved.");
                return Ok(());
            }
            Err(ProfileError::Incomplete(section)) => {
                if !complete_section(&mut rl, &mut profile, section)? {
                    return cancelled();
                }
            }
            Err(error) => return Err(error.into()),
        }
    }
}

/// Keeps a section open until it passes the completeness check. Returns
/// false when the user cancelled.
fn complete_section(
    rl: &mut DefaultEditor,
    profile: &mut StyleProfile,
    section: Section,
) -> Result<bool> {
    loop {
        if !edit_section(rl, profile, section)? {
            return Ok(false);
        }
        if profile.is_section_complete(section) {
            return Ok(true);
        }
        println!();
        println!("This section still has unanswered questions.");
    }
}

fn cancelled() -> Result<()> {
    println!();
    println!("Cancelled; nothing was saved.");
    Ok(())
}

/// Runs one section of the questionnaire. Returns false when the user
/// cancelled with Ctrl-C or Ctrl-D.
fn edit_section(
    rl: &mut DefaultEditor,
    profile: &mut StyleProfile,
    section: Section,
) -> Result<bool> {
    println!();
    println!("Section {} of 7: {}", section.index(), section.title());
    println!("{}", section.description());

    match section {
        Section::StyleOverview => select_all(
            rl,
            [
                (&mut profile.writing_style, &catalog::WRITING_STYLE),
                (&mut profile.spontaneity_level, &catalog::SPONTANEITY_LEVEL),
                (&mut profile.expressiveness, &catalog::EXPRESSIVENESS),
                (&mut profile.elaboration_style, &catalog::ELABORATION_STYLE),
                (&mut profile.rhythmic_elements, &catalog::RHYTHMIC_ELEMENTS),
            ],
        ),
        Section::ToneAndVoice => {
            let done = select_all(
                rl,
                [
                    (
                        &mut profile.authenticity_level,
                        &catalog::AUTHENTICITY_LEVEL,
                    ),
                    (&mut profile.strength_balance, &catalog::STRENGTH_BALANCE),
                    (&mut profile.fluidity_level, &catalog::FLUIDITY_LEVEL),
                ],
            )?;
            if !done {
                return Ok(false);
            }
            choose_traits(rl, &mut profile.personality_traits)
        }
        Section::ReaderEngagement => select_all(
            rl,
            [
                (
                    &mut profile.emotional_connection,
                    &catalog::EMOTIONAL_CONNECTION,
                ),
                (&mut profile.progression_style, &catalog::PROGRESSION_STYLE),
                (&mut profile.reader_addressing, &catalog::READER_ADDRESSING),
                (&mut profile.persuasion_level, &catalog::PERSUASION_LEVEL),
            ],
        ),
        Section::FormatAndStructure => select_all(
            rl,
            [
                (&mut profile.paragraph_length, &catalog::PARAGRAPH_LENGTH),
                (
                    &mut profile.use_of_bullet_points,
                    &catalog::USE_OF_BULLET_POINTS,
                ),
                (&mut profile.heading_frequency, &catalog::HEADING_FREQUENCY),
                (&mut profile.transition_style, &catalog::TRANSITION_STYLE),
            ],
        ),
        Section::LanguagePreferences => select_all(
            rl,
            [
                (
                    &mut profile.dialect_preference,
                    &catalog::DIALECT_PREFERENCE,
                ),
                (
                    &mut profile.sentence_complexity,
                    &catalog::SENTENCE_COMPLEXITY,
                ),
                (&mut profile.vocabulary_range, &catalog::VOCABULARY_RANGE),
                (&mut profile.industry_jargon, &catalog::INDUSTRY_JARGON),
            ],
        ),
        Section::KeyInstructions => {
            let done = select_all(
                rl,
                [
                    (&mut profile.use_emojis, &catalog::USE_EMOJIS),
                    (&mut profile.use_hashtags, &catalog::USE_HASHTAGS),
                    (&mut profile.character_limit, &catalog::CHARACTER_LIMIT),
                ],
            )?;
            if !done {
                return Ok(false);
            }
            read_custom_instructions(rl, &mut profile.custom_instructions)
        }
        Section::ReferenceContent => read_samples(rl, &mut profile.reference_samples),
    }
}

fn select_all<const N: usize>(
    rl: &mut DefaultEditor,
    fields: [(&mut String, &FieldPrompt); N],
) -> Result<bool> {
    for (field, prompt) in fields {
        if !select(rl, field, prompt)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn select(rl: &mut DefaultEditor, field: &mut String, prompt: &FieldPrompt) -> Result<bool> {
    println!();
    println!("{}", prompt.question);
    for (position, option) in prompt.options.iter().enumerate() {
        println!("  {}. {}", position + 1, option.label);
    }

    let current = current_label(field, prompt);
    loop {
        let hint = match &current {
            Some(label) => format!(" [{label}]"),
            None => String::new(),
        };
        let Some(line) = read_line(rl, &format!("Choice{hint}: "))? else {
            return Ok(false);
        };
        let input = line.trim();

        if input.is_empty() {
            if !field.is_empty() {
                return Ok(true);
            }
            println!("Pick one of the numbered options.");
            continue;
        }

        match input.parse::<usize>() {
            Ok(choice) if (1..=prompt.options.len()).contains(&choice) => {
                *field = prompt.options[choice - 1].value.to_string();
                return Ok(true);
            }
            _ => println!("Enter a number between 1 and {}.", prompt.options.len()),
        }
    }
}

// A stored answer normally maps back to a catalog label; anything else (say,
// a hand-edited profile file) is shown raw rather than hidden.
fn current_label(field: &str, prompt: &FieldPrompt) -> Option<String> {
    if field.is_empty() {
        return None;
    }
    Some(
        prompt
            .options
            .iter()
            .find(|option| option.value == field)
            .map(|option| option.label.to_string())
            .unwrap_or_else(|| field.to_string()),
    )
}

fn choose_traits(rl: &mut DefaultEditor, traits: &mut Vec<String>) -> Result<bool> {
    println!();
    println!("{PERSONALITY_TRAITS_QUESTION}");
    for (position, name) in PERSONALITY_TRAITS.iter().enumerate() {
        println!("  {}. {}", position + 1, name);
    }
    println!("Enter the numbers that apply, separated by commas (for example: 1, 4, 9).");

    loop {
        let hint = if traits.is_empty() {
            String::new()
        } else {
            format!(" [{}]", traits.join(", "))
        };
        let Some(line) = read_line(rl, &format!("Traits{hint}: "))? else {
            return Ok(false);
        };
        let input = line.trim();

        if input.is_empty() {
            if !traits.is_empty() {
                return Ok(true);
            }
            println!("Pick at least one trait.");
            continue;
        }

        match parse_trait_numbers(input) {
            Ok(picked) if !picked.is_empty() => {
                *traits = picked;
                return Ok(true);
            }
            Ok(_) => println!("Pick at least one trait."),
            Err(bad) => println!(
                "'{bad}' is not a number between 1 and {}.",
                PERSONALITY_TRAITS.len()
            ),
        }
    }
}

fn parse_trait_numbers(input: &str) -> Result<Vec<String>, String> {
    let mut picked: Vec<String> = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<usize>() {
            Ok(number) if (1..=PERSONALITY_TRAITS.len()).contains(&number) => {
                let name = PERSONALITY_TRAITS[number - 1].to_string();
                if !picked.contains(&name) {
                    picked.push(name);
                }
            }
            _ => return Err(part.to_string()),
        }
    }
    Ok(picked)
}

fn read_custom_instructions(rl: &mut DefaultEditor, field: &mut String) -> Result<bool> {
    println!();
    println!("{CUSTOM_INSTRUCTIONS_QUESTION}");
    println!("Optional. Press Enter to skip, or type '-' to clear a saved answer.");

    let hint = if field.trim().is_empty() {
        String::new()
    } else {
        format!(" [{}]", field.trim())
    };
    let Some(line) = read_line(rl, &format!("Instructions{hint}: "))? else {
        return Ok(false);
    };
    let input = line.trim();

    if input == "-" {
        field.clear();
    } else if !input.is_empty() {
        *field = input.to_string();
    }
    Ok(true)
}

fn read_samples(rl: &mut DefaultEditor, samples: &mut Vec<String>) -> Result<bool> {
    println!();
    println!("Paste up to {MAX_REFERENCE_SAMPLES} examples of your writing.");
    println!("Finish each example with a line containing only END.");
    println!("Leave the first line of an example empty to stop early.");

    let mut collected: Vec<String> = Vec::new();
    for slot in 1..=MAX_REFERENCE_SAMPLES {
        println!();
        let mut lines: Vec<String> = Vec::new();
        loop {
            let prompt = if lines.is_empty() {
                format!("Example {slot}> ")
            } else {
                "> ".to_string()
            };
            let Some(line) = read_line(rl, &prompt)? else {
                return Ok(false);
            };

            if lines.is_empty() && line.trim().is_empty() {
                *samples = collected;
                return Ok(true);
            }
            if line.trim() == "END" {
                break;
            }
            lines.push(line);
        }
        collected.push(lines.join("\n"));
    }

    *samples = collected;
    Ok(true)
}

fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(error) => Err(error.into()),
    }
}
