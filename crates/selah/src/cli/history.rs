//! History command handlers.

use super::commands::{HistoryCommands, OutputFormat};
use super::generate::print_result;
use super::open_history;
use selah::{
    Clipboard, JsonError, SelahConfig, SelahResult, StdoutClipboard, render_history,
    repl::parse_copy,
};

/// Handle history subcommands.
pub async fn handle_history_command(
    config: &SelahConfig,
    ephemeral: bool,
    cmd: HistoryCommands,
) -> SelahResult<()> {
    let mut history = open_history(config, ephemeral).await;

    match cmd {
        HistoryCommands::List { format } => match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(history.list())
                    .map_err(|e| JsonError::new(e.to_string()))?;
                println!("{}", json);
            }
            OutputFormat::Human => print!("{}", render_history(history.list())),
        },

        HistoryCommands::Show { id, view, format } => match history.get(&id) {
            Some(entry) => match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(entry)
                        .map_err(|e| JsonError::new(e.to_string()))?;
                    println!("{}", json);
                }
                OutputFormat::Human => {
                    println!("{}", entry.verse());
                    println!();
                    print_result(entry.generated_result(), view, format)?;
                }
            },
            None => not_found(&id),
        },

        HistoryCommands::Delete { id } => {
            if history.remove(&id).await {
                println!("Deleted {}", id);
            } else {
                not_found(&id);
            }
        }

        HistoryCommands::Clear => {
            history.clear().await;
            println!("History cleared");
        }

        HistoryCommands::Copy { id, target } => {
            let Some(entry) = history.get(&id) else {
                not_found(&id);
            };
            let target = match parse_copy(&target.join(" ")) {
                Ok(target) => target,
                Err(message) => {
                    eprintln!("{}", message);
                    std::process::exit(2);
                }
            };
            let text = entry.generated_result().copy_text(target)?;
            StdoutClipboard.copy_text(&text)?;
        }
    }

    Ok(())
}

fn not_found(id: &str) -> ! {
    eprintln!("No history entry with id {}", id);
    std::process::exit(1);
}
