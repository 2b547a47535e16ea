//! Builds the instruction text from a parameter set.

use crate::{Instruction, output_schema};
use selah_core::ParameterSet;
use tracing::{debug, instrument};

const ROLE: &str = "You are a world-class AI prompt engineer for text-to-video models like Sora and Veo. Your mission is to convert a Bible verse into a structured, cinematic video script.";

const SCENE_SETTING: &str = "Also describe the setting & action (photorealistic environment, time of day, weather), characters (appearances, historically accurate clothing, expressions), and core cinematography (camera shots, angles, movements, professional lighting).";

const DYNAMIC_ELEMENTS: &str = "Describe specific, dynamic cinematic elements for this scene. Include advanced camera work (e.g., slow dolly-in, sweeping crane shot, intimate handheld follow), special cinematography details (e.g., rack focus, shallow depth of field, dramatic lens flares), and subtle visual effects (e.g., slow-motion, atmospheric particles like dust motes or light rays, speed ramping).";

const CREATIVE_RULES: &str = "\
*   **For the \"narration\" field:**
    *   **Script:** Write a compelling voice-over script that enhances the scene's emotional impact.
    *   **Tone:** Use hashtags to specify the desired tone and emotion for the voice actor (e.g., #solemn, #powerful, #whispering).

*   **For the \"backgroundMusic\" and \"soundEffects\" fields:**
    *   **Music:** Suggest the style, mood, and instrumentation of the background score (e.g., \"A gentle, minimalist piano melody\").
    *   **Effects:** List specific, realistic sounds that would be present in the scene (e.g., \"Wind rustling through dry grass, distant cry of a hawk\").
";

const TONE_EXAMPLES: [&str; 6] = [
    "Deep chiaroscuro lighting with rich crimson and gold, reminiscent of a Caravaggio painting",
    "Desaturated, gritty blues and grays with a handheld feel, in the style of a modern war documentary",
    "Pastel, dreamlike palette with soft focus and lens flares, evoking the style of Terrence Malick",
    "Vibrant, hyper-realistic colors with stark, clean lines, inspired by Japanese anime",
    "Sepia-toned nostalgia with a grainy film texture, like an old photograph coming to life",
    "Monochromatic noir with deep shadows and selective shafts of brilliant white light",
];

/// Compile a parameter set into the script-generation instruction.
///
/// Style and era are always embedded. Cultural context, color tone and the
/// timing block appear only when their fields carry non-blank text; no empty
/// directive is ever emitted. The caller is responsible for rejecting blank
/// source text.
#[instrument(skip(params), fields(language = %params.language(), style = %params.style()))]
pub fn compile(params: &ParameterSet) -> Instruction {
    let visuals = core_visuals(params);

    let mut text = String::new();
    text.push_str(ROLE);
    text.push_str("\n\n");
    text.push_str(&format!("**Input Verse:** \"{}\"\n\n", params.source_text()));

    text.push_str("**Output Requirements:**\n");
    text.push_str("You must generate a JSON object with three main properties: \"fullPrompt\", \"characters\", and \"sceneCuts\".\n\n");
    text.push_str(&format!(
        "1.  **fullPrompt:** Create a single, cohesive, and highly descriptive paragraph that summarizes the entire cinematic sequence. This prompt must incorporate these core creative choices: {}. This is the master prompt for the video.\n\n",
        visuals
    ));
    text.push_str("2.  **characters**: Create an array of character objects. Identify key figures from the verse. For EACH character, provide a 'name' and a detailed 'description' including their appearance, historically/culturally appropriate clothing, and overall demeanor.\n\n");
    text.push_str("3.  **sceneCuts:** Create an array of scene objects. For EACH object in this array, you must generate content for the following fields based on the \"Comprehensive Creative Instructions\" below:\n");
    text.push_str("    *   `cutNumber`: A scene identifier (e.g., \"CUT #1\", \"CUT #2\").\n");
    text.push_str(&format!(
        "    *   `description`: A detailed visual and cinematic plan for this specific scene. CRITICAL: This description for EACH scene cut MUST explicitly incorporate and be consistent with the following user-defined parameters: {}. {}\n",
        visuals, SCENE_SETTING
    ));
    text.push_str("    *   `narration`: The voice-over script for the scene.\n");
    text.push_str("    *   `backgroundMusic`: The music suggestion for the scene.\n");
    text.push_str("    *   `soundEffects`: The sound effects for the scene.\n");
    text.push_str(&format!("    *   `dynamicElements`: {}\n\n", DYNAMIC_ELEMENTS));

    text.push_str("---\n**Comprehensive Creative Instructions (Apply to EACH scene):**\n\n");
    text.push_str(CREATIVE_RULES);
    text.push('\n');

    text.push_str("---\n**General Rules:**\n");
    text.push_str(&format!(
        "*   **Language:** All generated text MUST be in {}.\n",
        params.language()
    ));
    push_timing(&mut text, params);

    debug!(chars = text.len(), "Compiled script instruction");
    Instruction::new(text, output_schema())
}

/// Compile the free-text color tone instruction for `source_text`.
///
/// # Examples
///
/// ```
/// let prompt = selah_prompt::compile_tone_request("Psalm 23");
/// assert!(prompt.contains("Bible Verse: \"Psalm 23\""));
/// assert!(prompt.ends_with("Suggested Color Tone & Style:"));
/// ```
pub fn compile_tone_request(source_text: &str) -> String {
    let mut text = String::from(
        "Based on the mood, themes, and content of the following Bible verse, suggest a single, creative, and highly descriptive color tone for a cinematic video. This suggestion should include both color palettes and artistic elements, potentially referencing famous painters, film directors, or specific art movements. Provide only the name of the color tone and artistic style, and nothing else.\n\n",
    );
    text.push_str(&format!("Bible Verse: \"{}\"\n\n", source_text));
    text.push_str("Example outputs:\n");
    for example in TONE_EXAMPLES {
        text.push_str(&format!("- \"{}\"\n", example));
    }
    text.push_str("\nSuggested Color Tone & Style:");
    text
}

fn core_visuals(params: &ParameterSet) -> String {
    let mut visuals = format!(
        "Visual Style='{}', Historical Era='{}'",
        params.style(),
        params.era()
    );
    if let Some(context) = params.cultural_context() {
        visuals.push_str(&format!(", Cultural Context: '{}'", context));
    }
    if let Some(tone) = params.color_tone() {
        visuals.push_str(&format!(", Color Grading: '{}'", tone));
    }
    visuals
}

fn push_timing(text: &mut String, params: &ParameterSet) {
    let total = params.total_duration();
    let cut = params.cut_duration();
    if total.is_none() && cut.is_none() {
        return;
    }

    text.push_str("*   **Timing and Pacing:**\n");
    if let Some(total) = total {
        text.push_str(&format!(
            "    *   **Total Duration:** The full video should be approximately {} seconds.\n",
            total
        ));
    }
    if let Some(cut) = cut {
        text.push_str(&format!(
            "    *   **Pacing/Cut Length:** Each scene in the breakdown should represent an average of {} seconds.\n",
            cut
        ));
    }
}
