use crate::content::{Profile, Project, SocialLink, Testimonial};

/// Total-users figure on the aggregate card. A static display value, not
/// derived from anything the page tracks.
pub const TOTAL_USERS: u32 = 16_000;

/// Where a carousel currently points, plus its cross-fade progress.
///
/// `previous` is populated only while a transition is running, so the
/// renderer always has a visible fade target; every item stays present in
/// the item lists regardless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselView {
    pub current: usize,
    pub previous: Option<usize>,
    /// 0.0 right after an advance, 1.0 once settled.
    pub fade: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterView {
    pub input: String,
    pub focused: bool,
}

/// Pure projection of the page state, consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewModel {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub social_rotation: CarouselView,
    pub project_rotation: CarouselView,
    pub testimonial_rotation: CarouselView,
    /// Sum of the showcased projects' monthly recurring values.
    pub mrr_total: u32,
    pub total_users: u32,
    pub newsletter: NewsletterView,
    pub copied: bool,
    /// The "copied" confirmation covers the social card only while the
    /// email entry is the one shown.
    pub show_copied_overlay: bool,
    pub dirty: bool,
}
