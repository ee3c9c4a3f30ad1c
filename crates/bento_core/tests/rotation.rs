use std::sync::Once;

use bento_core::{update, AppState, Carousel, Msg, Rotation, FADE_FRAMES};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn tick(state: AppState, carousel: Carousel) -> AppState {
    let (next, effects) = update(state, Msg::CarouselTick(carousel));
    assert!(effects.is_empty());
    next
}

#[test]
fn index_follows_tick_count_modulo_len() {
    for len in 1..=7 {
        let mut rotation = Rotation::new(len);
        for ticks in 1..=20 {
            rotation.advance();
            assert_eq!(rotation.current(), ticks % len, "len={len} ticks={ticks}");
            assert!(rotation.current() < len);
        }
    }
}

#[test]
fn three_projects_wrap_after_three_ticks() {
    init_logging();
    // Cadence 7000 ms: t=0, t=7000, t=14000, t=21000.
    let state = AppState::default();
    assert_eq!(state.view().project_rotation.current, 0);

    let state = tick(state, Carousel::Projects);
    assert_eq!(state.view().project_rotation.current, 1);

    let state = tick(state, Carousel::Projects);
    assert_eq!(state.view().project_rotation.current, 2);

    let state = tick(state, Carousel::Projects);
    assert_eq!(state.view().project_rotation.current, 0);
}

#[test]
fn carousels_advance_independently() {
    init_logging();
    let state = AppState::default();
    let state = tick(state, Carousel::Socials);
    let state = tick(state, Carousel::Socials);

    let view = state.view();
    assert_eq!(view.social_rotation.current, 2);
    assert_eq!(view.project_rotation.current, 0);
    assert_eq!(view.testimonial_rotation.current, 0);
}

#[test]
fn advance_begins_fade_and_frames_settle_it() {
    let mut state = AppState::default();
    assert!(state.consume_dirty()); // initial paint

    let (next, _) = update(state, Msg::CarouselTick(Carousel::Testimonials));
    state = next;
    let view = state.view();
    assert_eq!(view.testimonial_rotation.previous, Some(0));
    assert_eq!(view.testimonial_rotation.fade, 0.0);
    assert!(state.consume_dirty());

    for _ in 0..FADE_FRAMES {
        let (next, _) = update(state, Msg::Frame);
        state = next;
        assert!(state.consume_dirty());
    }
    let view = state.view();
    assert_eq!(view.testimonial_rotation.previous, None);
    assert_eq!(view.testimonial_rotation.fade, 1.0);

    // Frames with no active fade change nothing.
    let (mut state, _) = update(state, Msg::Frame);
    assert!(!state.consume_dirty());
}

#[test]
fn single_entry_lists_never_rotate() {
    let mut content = bento_core::SiteContent::builtin();
    content.socials.truncate(1);
    content.projects.truncate(1);
    content.testimonials.truncate(1);

    let mut state = AppState::new(content);
    assert!(state.consume_dirty());

    for _ in 0..10 {
        let (next, _) = update(state, Msg::CarouselTick(Carousel::Projects));
        state = next;
        let (next, _) = update(state, Msg::CarouselTick(Carousel::Socials));
        state = next;
    }
    let view = state.view();
    assert_eq!(view.project_rotation.current, 0);
    assert_eq!(view.social_rotation.current, 0);
    assert!(!state.consume_dirty());
}
