//! Terminal clipboard.

use selah_error::{ClipboardError, SelahResult};
use selah_interface::Clipboard;
use std::io::Write;

/// Clipboard that prints copied text to standard output.
///
/// Terminals have no portable clipboard; printing the block lets the user
/// select it or pipe it (`selah history copy ... | pbcopy`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn copy_text(&self, text: &str) -> SelahResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|_| stdout.flush())
            .map_err(|e| ClipboardError::new(format!("Failed to write to stdout: {}", e)))?;
        Ok(())
    }
}
