//! Opening project and social links in the user's browser.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to launch {opener}: {source}")]
    Launch {
        opener: &'static str,
        source: io::Error,
    },
}

/// Opens a URL in a new browsing context. Behind a trait so the effect
/// runner can be tested without spawning anything.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError>;
}

/// The platform opener. The child is spawned detached and never waited on;
/// the page keeps no handle to the new context.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn argv(url: &str) -> (&'static str, Vec<String>) {
        #[cfg(target_os = "macos")]
        return ("open", vec![url.to_string()]);
        #[cfg(target_os = "windows")]
        return (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), url.to_string()],
        );
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return ("xdg-open", vec![url.to_string()]);
    }
}

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        let (opener, args) = Self::argv(url);
        Command::new(opener)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| OpenError::Launch { opener, source })
    }
}
