//! Interactive line-oriented session.

use super::open_session;
use selah::repl::{HELP, ReplCommand};
use selah::{
    GeminiClient, SelahConfig, SelahError, SelahResult, SessionController, SessionState,
    StdoutClipboard, render_history, render_params, render_result,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Run the interactive session until `quit` or end of input.
pub async fn run_session(config: &SelahConfig, ephemeral: bool) -> SelahResult<()> {
    let mut session = open_session(config, ephemeral).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Selah interactive session. Type 'help' for commands.");
    loop {
        print!("selah> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, "Failed to read input");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ReplCommand>() {
            Ok(ReplCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) = execute(&mut session, command).await {
                    eprintln!("{}", e);
                }
            }
            Err(message) => eprintln!("{}", message),
        }
    }

    Ok(())
}

async fn execute(
    session: &mut SessionController<GeminiClient>,
    command: ReplCommand,
) -> SelahResult<()> {
    match command {
        ReplCommand::Help => print!("{}", HELP),
        ReplCommand::Quit => {}
        ReplCommand::Show => show(session),
        ReplCommand::Params => print!("{}", render_params(session.params())),
        ReplCommand::Generate => {
            println!("Generating...");
            if let Err(e) = session.submit().await {
                return report_rejection(session, e);
            }
            match session.state() {
                SessionState::Failed { message } => eprintln!("{}", message),
                _ => show(session),
            }
        }
        ReplCommand::RecommendTone => {
            if let Err(e) = session.recommend_tone().await {
                return report_rejection(session, e);
            }
            match (session.inline_error(), session.params().color_tone()) {
                (Some(message), _) => eprintln!("{}", message),
                (None, Some(tone)) => println!("Color tone: {}", tone),
                (None, None) => {}
            }
        }
        ReplCommand::Reset => {
            session.reset();
            println!("Session reset");
        }
        ReplCommand::History => print!("{}", render_history(session.history().list())),
        ReplCommand::ClearHistory => {
            session.clear_history().await;
            println!("History cleared");
        }
        ReplCommand::SetSourceText(text) => session.set_source_text(text),
        ReplCommand::SetLanguage(language) => session.set_language(language),
        ReplCommand::SetTotalDuration(seconds) => session.set_total_duration(seconds),
        ReplCommand::SetCutDuration(seconds) => session.set_cut_duration(seconds),
        ReplCommand::SetStyle(style) => session.set_style(style),
        ReplCommand::SetEra(era) => session.set_era(era),
        ReplCommand::SetCulturalContext(context) => session.set_cultural_context(context),
        ReplCommand::SetColorTone(tone) => session.set_color_tone(tone),
        ReplCommand::View(view) => {
            session.set_active_view(view);
            show(session);
        }
        ReplCommand::EditPrompt(text) => session.set_full_prompt(text),
        ReplCommand::EditCharacter {
            index,
            field,
            value,
        } => session.set_character_field(index, field, value)?,
        ReplCommand::EditSceneCut {
            index,
            field,
            value,
        } => session.set_scene_cut_field(index, field, value)?,
        ReplCommand::Copy(target) => {
            if !session.copy(target, &StdoutClipboard)? {
                println!("Nothing to copy");
            }
        }
        ReplCommand::Load(id) => {
            if session.load_history_entry(&id) {
                show(session);
            } else {
                eprintln!("No history entry with id {}", id);
            }
        }
        ReplCommand::Delete(id) => {
            if !session.delete_history_entry(&id).await {
                eprintln!("No history entry with id {}", id);
            }
        }
    }
    Ok(())
}

fn show(session: &SessionController<GeminiClient>) {
    match session.result() {
        Some(result) => print!("{}", render_result(result, session.active_view())),
        None => println!("No result yet"),
    }
}

/// Rejections that set the inline message are reported through it.
fn report_rejection(
    session: &SessionController<GeminiClient>,
    error: SelahError,
) -> SelahResult<()> {
    match session.inline_error() {
        Some(message) => {
            eprintln!("{}", message);
            Ok(())
        }
        None => Err(error),
    }
}
