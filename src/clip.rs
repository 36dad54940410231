//! Clipboard.

/// The clipboard used by cut/copy/paste.
///
/// Text is propagated to the system clipboard when one is available, and a
/// local slot is kept as a fallback so headless hosts behave identically.
/// System clipboard failures are quietly ignored.
pub struct Clipboard {
    local: Option<String>,
}

impl Clipboard {
    pub fn new() -> Clipboard {
        Clipboard { local: None }
    }

    /// Stores `text` on the clipboard.
    pub fn set_text(&mut self, text: &str) {
        // A new connection per access, since some platforms invalidate
        // long-lived handles.
        if let Ok(mut clip) = arboard::Clipboard::new() {
            let _ = clip.set_text(text.to_string());
        }
        self.local = Some(text.to_string());
    }

    /// Returns the clipboard text, preferring the system clipboard.
    pub fn get_text(&self) -> Option<String> {
        if let Ok(mut clip) = arboard::Clipboard::new()
            && let Ok(text) = clip.get_text()
        {
            return Some(text);
        }
        self.local.clone()
    }
}

impl Default for Clipboard {
    fn default() -> Clipboard {
        Clipboard::new()
    }
}
