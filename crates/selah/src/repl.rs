//! Line commands for the interactive session.
//!
//! Each input line parses into one [`ReplCommand`]. Element numbers are
//! 1-based on input and converted to 0-based indices here.

use selah_core::{
    ActiveView, CharacterField, CopyTarget, HistoricalEra, Language, SceneCutField, VisualStyle,
};
use std::str::FromStr;

/// Help text listing every command.
pub const HELP: &str = "\
Parameters:
  verse <text>                     set the scripture reference or passage
  language <name>                  output language
  video-length [seconds]           total duration hint (blank clears)
  cut-length [seconds]             average cut duration hint (blank clears)
  style <name>                     visual style
  era <name>                       historical era
  country [text]                   cultural context (blank clears)
  color-tone [text]                color grading (blank clears)
  params                           show current parameters

Generation:
  generate                         generate a script from the parameters
  tone                             recommend a color tone for the verse

Result:
  show                             show the result in the active view
  view full|cuts                   switch the result view
  edit prompt <text>               replace the master prompt
  edit character <n> <field> <v>   fields: name, description
  edit cut <n> <field> <v>         fields: narration, backgroundMusic,
                                   soundEffects, dynamicElements
  copy full|character <n>|cut <n>  copy part of the result

History:
  history                          list saved generations
  load <id>                        restore a saved generation
  delete <id>                      delete a saved generation
  clear-history                    delete every saved generation

Session:
  reset                            back to defaults (history is kept)
  help                             this text
  quit                             leave the session
";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
    /// Show the result in the active view
    Show,
    /// Show the parameter set
    Params,
    /// Submit a generation
    Generate,
    /// Request a color tone
    RecommendTone,
    /// Reset the session
    Reset,
    /// List history entries
    History,
    /// Delete every history entry
    ClearHistory,
    /// Set the source text
    SetSourceText(String),
    /// Set the output language
    SetLanguage(Language),
    /// Set or clear the total duration hint
    SetTotalDuration(String),
    /// Set or clear the cut duration hint
    SetCutDuration(String),
    /// Set the visual style
    SetStyle(VisualStyle),
    /// Set the historical era
    SetEra(HistoricalEra),
    /// Set or clear the cultural context
    SetCulturalContext(String),
    /// Set or clear the color tone
    SetColorTone(String),
    /// Switch the result view
    View(ActiveView),
    /// Replace the master prompt
    EditPrompt(String),
    /// Edit a character field
    EditCharacter {
        /// 0-based character index
        index: usize,
        /// Field to edit
        field: CharacterField,
        /// New value
        value: String,
    },
    /// Edit a scene cut field
    EditSceneCut {
        /// 0-based scene cut index
        index: usize,
        /// Field to edit
        field: SceneCutField,
        /// New value
        value: String,
    },
    /// Copy part of the result
    Copy(CopyTarget),
    /// Restore a history entry
    Load(String),
    /// Delete a history entry
    Delete(String),
}

impl FromStr for ReplCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line.trim());
        let command = match word.to_ascii_lowercase().as_str() {
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" => ReplCommand::Quit,
            "show" => ReplCommand::Show,
            "params" => ReplCommand::Params,
            "generate" | "gen" => ReplCommand::Generate,
            "tone" => ReplCommand::RecommendTone,
            "reset" => ReplCommand::Reset,
            "history" => ReplCommand::History,
            "clear-history" => ReplCommand::ClearHistory,
            "verse" => ReplCommand::SetSourceText(required(rest, "verse <text>")?),
            "language" => ReplCommand::SetLanguage(rest.parse()?),
            "video-length" => ReplCommand::SetTotalDuration(rest.to_string()),
            "cut-length" => ReplCommand::SetCutDuration(rest.to_string()),
            "style" => ReplCommand::SetStyle(rest.parse()?),
            "era" => ReplCommand::SetEra(rest.parse()?),
            "country" => ReplCommand::SetCulturalContext(rest.to_string()),
            "color-tone" => ReplCommand::SetColorTone(rest.to_string()),
            "view" => ReplCommand::View(
                rest.parse()
                    .map_err(|_| format!("Unknown view: {} (expected full or cuts)", rest))?,
            ),
            "edit" => parse_edit(rest)?,
            "copy" => ReplCommand::Copy(parse_copy(rest)?),
            "load" => ReplCommand::Load(required(rest, "load <id>")?),
            "delete" => ReplCommand::Delete(required(rest, "delete <id>")?),
            "" => return Err("Empty command".to_string()),
            other => return Err(format!("Unknown command: {} (try help)", other)),
        };
        Ok(command)
    }
}

fn parse_edit(rest: &str) -> Result<ReplCommand, String> {
    let (target, rest) = split_word(rest);
    match target.to_ascii_lowercase().as_str() {
        "prompt" => Ok(ReplCommand::EditPrompt(rest.to_string())),
        "character" => {
            let (index, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            Ok(ReplCommand::EditCharacter {
                index: parse_number(index)?,
                field: field
                    .parse()
                    .map_err(|_| format!("Unknown character field: {}", field))?,
                value: value.to_string(),
            })
        }
        "cut" => {
            let (index, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            Ok(ReplCommand::EditSceneCut {
                index: parse_number(index)?,
                field: field
                    .parse()
                    .map_err(|_| format!("Unknown scene cut field: {}", field))?,
                value: value.to_string(),
            })
        }
        _ => Err("Usage: edit prompt|character|cut ...".to_string()),
    }
}

/// Parse `full`, `character <n>` or `cut <n>` into a copy target.
///
/// # Examples
///
/// ```
/// use selah::CopyTarget;
/// use selah::repl::parse_copy;
///
/// assert_eq!(parse_copy("full"), Ok(CopyTarget::FullPrompt));
/// assert_eq!(parse_copy("cut 2"), Ok(CopyTarget::SceneCut(1)));
/// assert!(parse_copy("cut 0").is_err());
/// ```
pub fn parse_copy(rest: &str) -> Result<CopyTarget, String> {
    let (target, number) = split_word(rest);
    match target.to_ascii_lowercase().as_str() {
        "full" | "prompt" => Ok(CopyTarget::FullPrompt),
        "character" => Ok(CopyTarget::Character(parse_number(number)?)),
        "cut" => Ok(CopyTarget::SceneCut(parse_number(number)?)),
        _ => Err("Usage: copy full|character <n>|cut <n>".to_string()),
    }
}

/// Parse a 1-based element number into a 0-based index.
pub fn parse_number(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("Expected a number starting at 1, got '{}'", s)),
    }
}

fn required(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(rest.to_string())
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}
