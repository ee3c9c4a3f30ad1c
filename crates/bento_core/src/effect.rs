/// Side effects requested by `update` and executed by the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write `text` to the system clipboard.
    CopyToClipboard { text: String },
    /// Arm the copy-feedback reset timer, replacing any pending one so a
    /// burst of copies decays exactly once, after the latest success.
    ScheduleCopyReset,
    /// Open an external link in a new browsing context.
    OpenLink { url: String },
    /// Record a newsletter signup. The stub discards it after logging.
    RecordNewsletterSignup { email: String },
}
