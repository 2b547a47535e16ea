//! One-shot generation and tone commands.

use super::commands::{GenerateArgs, OutputFormat};
use super::open_session;
use selah::{
    ActiveView, JsonError, SelahConfig, SelahResult, SessionState, StructuredResult, render_result,
};
use tracing::info;

/// Run a single generation and print the result.
///
/// Exits with status 1 when the request fails.
pub async fn run_generate(
    config: &SelahConfig,
    ephemeral: bool,
    args: GenerateArgs,
) -> SelahResult<()> {
    let mut session = open_session(config, ephemeral).await?;

    session.set_source_text(args.verse);
    if let Some(language) = args.language {
        session.set_language(language);
    }
    if let Some(style) = args.style {
        session.set_style(style);
    }
    if let Some(era) = args.era {
        session.set_era(era);
    }
    session.set_total_duration(args.video_length.unwrap_or_default());
    session.set_cut_duration(args.cut_length.unwrap_or_default());
    session.set_cultural_context(args.country.unwrap_or_default());
    session.set_color_tone(args.color_tone.unwrap_or_default());

    if args.recommend_tone && session.params().color_tone().is_none() {
        session.recommend_tone().await?;
        match (session.inline_error(), session.params().color_tone()) {
            (Some(message), _) => eprintln!("{}", message),
            (None, Some(tone)) => info!(tone, "Using recommended color tone"),
            (None, None) => {}
        }
    }

    session.submit().await?;

    match (session.state(), session.result()) {
        (SessionState::Ready, Some(result)) => print_result(result, args.view, args.format),
        (SessionState::Failed { message }, _) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        _ => Ok(()),
    }
}

/// Print a color tone recommendation for `verse`.
pub async fn recommend_tone(config: &SelahConfig, verse: String) -> SelahResult<()> {
    let mut session = open_session(config, true).await?;
    session.set_source_text(verse);
    session.recommend_tone().await?;

    match (session.inline_error(), session.params().color_tone()) {
        (None, Some(tone)) => println!("{}", tone),
        (message, _) => {
            eprintln!("{}", message.unwrap_or_default());
            std::process::exit(1);
        }
    }
    Ok(())
}

pub(super) fn print_result(
    result: &StructuredResult,
    view: ActiveView,
    format: OutputFormat,
) -> SelahResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => print!("{}", render_result(result, view)),
    }
    Ok(())
}
