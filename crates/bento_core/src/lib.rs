//! Bento core: pure state machine and view-model helpers for the page.
mod content;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use content::{
    ContentError, Icon, Profile, Project, SiteContent, SocialAction, SocialLink, Testimonial,
};
pub use effect::Effect;
pub use msg::{EditAction, Msg};
pub use state::{AppState, Carousel, Rotation, FADE_FRAMES};
pub use update::update;
pub use view_model::{CarouselView, NewsletterView, PageViewModel, TOTAL_USERS};
