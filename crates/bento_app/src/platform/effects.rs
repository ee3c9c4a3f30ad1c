//! Executes the effects requested by `bento_core::update`.

use std::time::Instant;

use bento_core::{Effect, Msg};
use page_logging::{page_info, page_warn};

use super::clipboard::{ClipboardSink, Osc52Clipboard, TieredClipboard, UtilityClipboard};
use super::opener::{LinkOpener, SystemOpener};
use super::timers::{SessionTimings, TimerKey, Timers};

/// Runs effects against injected platform capabilities and reports
/// follow-up messages back to the dispatch loop.
pub struct EffectRunner<C, O> {
    clipboard: C,
    opener: O,
    timings: SessionTimings,
}

impl EffectRunner<TieredClipboard<Osc52Clipboard, UtilityClipboard>, SystemOpener> {
    /// The real capability set used by `run_app`.
    pub fn with_platform_capabilities(timings: SessionTimings) -> Self {
        Self::new(TieredClipboard::default(), SystemOpener, timings)
    }
}

impl<C: ClipboardSink, O: LinkOpener> EffectRunner<C, O> {
    pub fn new(clipboard: C, opener: O, timings: SessionTimings) -> Self {
        Self {
            clipboard,
            opener,
            timings,
        }
    }

    /// Run one effect. Only a successful clipboard write produces a
    /// follow-up message; every failure is logged and absorbed, so the page
    /// never shows an error state for these.
    pub fn run(&mut self, effect: Effect, timers: &mut Timers, now: Instant) -> Option<Msg> {
        match effect {
            Effect::CopyToClipboard { text } => match self.clipboard.write_text(&text) {
                Ok(()) => {
                    page_info!("copied contact email to clipboard");
                    Some(Msg::CopySucceeded)
                }
                Err(error) => {
                    page_warn!("clipboard write failed, no confirmation shown: {error}");
                    None
                }
            },
            Effect::ScheduleCopyReset => {
                timers.schedule_once(TimerKey::CopyReset, now, self.timings.copy_reset);
                None
            }
            Effect::OpenLink { url } => {
                match self.opener.open(&url) {
                    Ok(()) => page_info!("opening {url}"),
                    Err(error) => page_warn!("could not open {url}: {error}"),
                }
                None
            }
            Effect::RecordNewsletterSignup { email } => {
                // No subscription backend is wired up; the address is logged
                // and dropped.
                page_info!("newsletter signup received: {email}");
                None
            }
        }
    }
}
