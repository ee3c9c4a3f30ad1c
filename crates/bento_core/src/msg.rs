use crate::state::Carousel;

/// A single edit to the newsletter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A rotation cadence fired for one carousel.
    CarouselTick(Carousel),
    /// Animation frame tick; steps active cross-fades.
    Frame,
    /// User asked to copy the contact email.
    CopyEmailRequested,
    /// The shell reports that a clipboard write succeeded.
    CopySucceeded,
    /// The copy-feedback decay timer fired.
    CopyResetDue,
    /// User activated the social entry currently shown.
    SocialActivated,
    /// User asked to open the project preview currently shown.
    OpenProjectRequested,
    /// Newsletter input gained or lost focus.
    NewsletterFocusChanged(bool),
    /// User typed into the newsletter input.
    NewsletterEdit(EditAction),
    /// User submitted the newsletter form.
    NewsletterSubmitted,
    /// Fallback for placeholder wiring.
    NoOp,
}
