use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put text on the system clipboard verbatim
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;

    tracing::debug!("Copied {} chars to clipboard", text.chars().count());
    Ok(())
}

/// Current clipboard text, if any
pub fn read_text() -> Result<Option<String>> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    match clipboard.get_text() {
        Ok(text) if !text.is_empty() => Ok(Some(text)),
        Ok(_) | Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e).context("Failed to read clipboard"),
    }
}
