use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{Error, Result};

/// Common OSC 52 size limit (base64 payload bytes).
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Terminal clipboard via the OSC 52 escape sequence.
///
/// The terminal emulator owns the actual system clipboard; this only emits
/// the request. Terminals that ignore OSC 52 fail silently.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        let sequence = osc52_sequence(text)?;
        self.out
            .write_all(sequence.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// `ESC ] 52 ; c ; <base64> BEL` targeting the system clipboard.
pub fn osc52_sequence(text: &str) -> Result<String> {
    let payload = STANDARD.encode(text.as_bytes());
    if payload.len() > MAX_OSC52_PAYLOAD {
        return Err(Error::Clipboard(format!(
            "payload of {} bytes exceeds OSC 52 limit of {}",
            payload.len(),
            MAX_OSC52_PAYLOAD
        )));
    }
    Ok(format!("\x1b]52;c;{}\x07", payload))
}

/// Records the last copied text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_encodes_payload() {
        assert_eq!(osc52_sequence("AB12").unwrap(), "\x1b]52;c;QUIxMg==\x07");
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let text = "x".repeat(MAX_OSC52_PAYLOAD);
        assert!(matches!(osc52_sequence(&text), Err(Error::Clipboard(_))));
    }

    #[test]
    fn test_copy_writes_sequence() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("771").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;Nzcx\x07");
    }
}
