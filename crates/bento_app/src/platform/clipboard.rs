//! Clipboard capability behind a trait so the copy flow can be exercised
//! with fakes.
//!
//! The real chain is OSC 52 first (works over SSH and in most modern
//! emulators), then whichever clipboard utility the platform ships. A chain
//! that fails end to end surfaces an error to the effect runner, which logs
//! it and shows no confirmation.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crossterm::tty::IsTty;
use page_logging::page_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("stdout is not a terminal, OSC 52 has nowhere to go")]
    NotATty,
    #[error("no clipboard utility accepted the text")]
    NoUtility,
    #[error("clipboard io failed: {0}")]
    Io(#[from] io::Error),
}

/// Write-only clipboard access. The page only ever copies the contact
/// email, so a single operation covers it.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Primary path: the OSC 52 escape sequence. The terminal emulator owns the
/// real clipboard; we hand it the payload base64-encoded on stdout.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl ClipboardSink for Osc52Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = io::stdout();
        if !stdout.is_tty() {
            return Err(ClipboardError::NotATty);
        }
        let payload = STANDARD.encode(text.as_bytes());
        write!(stdout, "\x1b]52;c;{payload}\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Fallback path: pipe the text into a platform clipboard utility.
#[derive(Debug, Default)]
pub struct UtilityClipboard;

impl UtilityClipboard {
    fn candidates() -> &'static [&'static [&'static str]] {
        #[cfg(target_os = "macos")]
        return &[&["pbcopy"]];
        #[cfg(target_os = "windows")]
        return &[&["clip"]];
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return &[
            &["wl-copy"],
            &["xclip", "-selection", "clipboard"],
            &["xsel", "--clipboard", "--input"],
        ];
    }

    fn pipe_into(argv: &[&str], text: &str) -> io::Result<bool> {
        let mut child = Command::new(argv[0])
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        drop(child.stdin.take());
        Ok(child.wait()?.success())
    }
}

impl ClipboardSink for UtilityClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        for argv in Self::candidates() {
            match Self::pipe_into(argv, text) {
                Ok(true) => {
                    page_debug!("clipboard utility {} accepted the text", argv[0]);
                    return Ok(());
                }
                Ok(false) => page_debug!("clipboard utility {} refused the text", argv[0]),
                Err(error) => {
                    page_debug!("clipboard utility {} unavailable: {error}", argv[0])
                }
            }
        }
        Err(ClipboardError::NoUtility)
    }
}

/// Primary-then-fallback chain. A primary failure logs and falls through;
/// the caller sees an error only when both tiers fail.
pub struct TieredClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> TieredClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl Default for TieredClipboard<Osc52Clipboard, UtilityClipboard> {
    fn default() -> Self {
        Self::new(Osc52Clipboard, UtilityClipboard)
    }
}

impl<P: ClipboardSink, F: ClipboardSink> ClipboardSink for TieredClipboard<P, F> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(primary_error) => {
                page_debug!("primary clipboard failed ({primary_error}), trying fallback");
                self.fallback.write_text(text)
            }
        }
    }
}
