use crate::content::{SiteContent, SocialAction, SocialLink};
use crate::msg::EditAction;
use crate::view_model::{CarouselView, NewsletterView, PageViewModel, TOTAL_USERS};

/// Frame ticks a carousel cross-fade spans (~450 ms at the 75 ms frame
/// cadence).
pub const FADE_FRAMES: u8 = 6;

/// The three rotated lists on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carousel {
    Socials,
    Projects,
    Testimonials,
}

/// One rotated list: the current index plus cross-fade bookkeeping.
///
/// The index is always a valid index into the list; advancing wraps modulo
/// the list length and is a no-op for lists shorter than two entries, so a
/// single-entry (or empty) list never leaves index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    current: usize,
    previous: Option<usize>,
    fade_frames_left: u8,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            previous: None,
            fade_frames_left: 0,
        }
    }

    /// Advance to the next item, wrapping after the last, and begin a
    /// cross-fade from the item shown so far. Returns false when there is
    /// nothing to rotate to.
    pub fn advance(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        self.previous = Some(self.current);
        self.current = (self.current + 1) % self.len;
        self.fade_frames_left = FADE_FRAMES;
        true
    }

    /// Step an active cross-fade by one frame; the outgoing index is
    /// released exactly when the fade completes. Returns false when no fade
    /// was active.
    pub fn step_fade(&mut self) -> bool {
        if self.fade_frames_left == 0 {
            return false;
        }
        self.fade_frames_left -= 1;
        if self.fade_frames_left == 0 {
            self.previous = None;
        }
        true
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Cross-fade progress: 0.0 right after an advance, 1.0 once settled.
    pub fn fade(&self) -> f32 {
        1.0 - f32::from(self.fade_frames_left) / f32::from(FADE_FRAMES)
    }

    fn view(&self) -> CarouselView {
        CarouselView {
            current: self.current,
            previous: self.previous,
            fade: self.fade(),
        }
    }
}

/// Whole-page state for one session. Content is immutable after
/// construction; only the rotation indices, the copy-feedback flag, and the
/// newsletter draft change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    content: SiteContent,
    social_rotation: Rotation,
    project_rotation: Rotation,
    testimonial_rotation: Rotation,
    copied: bool,
    newsletter_input: String,
    newsletter_focused: bool,
    dirty: bool,
}

impl AppState {
    pub fn new(content: SiteContent) -> Self {
        let social_rotation = Rotation::new(content.socials.len());
        let project_rotation = Rotation::new(content.projects.len());
        let testimonial_rotation = Rotation::new(content.testimonials.len());
        Self {
            content,
            social_rotation,
            project_rotation,
            testimonial_rotation,
            copied: false,
            newsletter_input: String::new(),
            newsletter_focused: false,
            // Paint the first frame unconditionally.
            dirty: true,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub(crate) fn advance(&mut self, carousel: Carousel) {
        let rotation = match carousel {
            Carousel::Socials => &mut self.social_rotation,
            Carousel::Projects => &mut self.project_rotation,
            Carousel::Testimonials => &mut self.testimonial_rotation,
        };
        if rotation.advance() {
            self.dirty = true;
        }
    }

    /// Step every active cross-fade by one frame.
    pub(crate) fn step_fades(&mut self) {
        let mut stepped = false;
        stepped |= self.social_rotation.step_fade();
        stepped |= self.project_rotation.step_fade();
        stepped |= self.testimonial_rotation.step_fade();
        if stepped {
            self.dirty = true;
        }
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub(crate) fn set_copied(&mut self, copied: bool) {
        if self.copied != copied {
            self.copied = copied;
            self.dirty = true;
        }
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.content.contact_email()
    }

    /// The social entry currently shown by its carousel.
    pub fn current_social(&self) -> Option<&SocialLink> {
        self.content.socials.get(self.social_rotation.current())
    }

    /// Preview link of the project currently shown by its carousel.
    pub fn current_project_link(&self) -> Option<&str> {
        self.content
            .projects
            .get(self.project_rotation.current())
            .map(|p| p.preview_link.as_str())
    }

    pub fn newsletter_input(&self) -> &str {
        &self.newsletter_input
    }

    pub fn newsletter_focused(&self) -> bool {
        self.newsletter_focused
    }

    pub(crate) fn set_newsletter_focus(&mut self, focused: bool) {
        if self.newsletter_focused != focused {
            self.newsletter_focused = focused;
            self.dirty = true;
        }
    }

    pub(crate) fn edit_newsletter(&mut self, action: EditAction) {
        match action {
            EditAction::Insert(c) => {
                if c.is_control() {
                    return;
                }
                self.newsletter_input.push(c);
            }
            EditAction::Backspace => {
                if self.newsletter_input.pop().is_none() {
                    return;
                }
            }
        }
        self.dirty = true;
    }

    pub(crate) fn clear_newsletter(&mut self) {
        self.newsletter_input.clear();
        self.dirty = true;
    }

    /// True exactly once per batch of visible changes; the shell renders
    /// only when this fires.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub fn view(&self) -> PageViewModel {
        let email_shown = matches!(
            self.current_social(),
            Some(social) if social.action() == SocialAction::CopyEmail
        );
        PageViewModel {
            profile: self.content.profile.clone(),
            socials: self.content.socials.clone(),
            projects: self.content.projects.clone(),
            testimonials: self.content.testimonials.clone(),
            social_rotation: self.social_rotation.view(),
            project_rotation: self.project_rotation.view(),
            testimonial_rotation: self.testimonial_rotation.view(),
            mrr_total: self.content.total_mrr(),
            total_users: TOTAL_USERS,
            newsletter: NewsletterView {
                input: self.newsletter_input.clone(),
                focused: self.newsletter_focused,
            },
            copied: self.copied,
            show_copied_overlay: self.copied && email_shown,
            dirty: self.dirty,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SiteContent::builtin())
    }
}
