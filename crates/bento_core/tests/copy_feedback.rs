use std::sync::Once;

use bento_core::{update, AppState, Carousel, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

const EMAIL: &str = "franmavazq@gmail.com";

#[test]
fn copy_request_emits_clipboard_effect() {
    init_logging();
    let state = AppState::default();
    let (state, effects) = update(state, Msg::CopyEmailRequested);

    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: EMAIL.to_string(),
        }]
    );
    // The flag only flips once the shell reports success.
    assert!(!state.view().copied);
}

#[test]
fn copy_success_sets_flag_and_schedules_reset() {
    init_logging();
    let mut state = AppState::default();
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::CopySucceeded);
    assert_eq!(effects, vec![Effect::ScheduleCopyReset]);
    assert!(state.view().copied);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::CopyResetDue);
    assert!(effects.is_empty());
    assert!(!state.view().copied);
    assert!(state.consume_dirty());
}

#[test]
fn repeated_success_rearms_instead_of_stacking() {
    init_logging();
    let state = AppState::default();
    let (state, first) = update(state, Msg::CopySucceeded);
    let (state, second) = update(state, Msg::CopySucceeded);

    // Each success re-arms the same keyed reset; the flag stays up until
    // the single surviving timer fires.
    assert_eq!(first, vec![Effect::ScheduleCopyReset]);
    assert_eq!(second, vec![Effect::ScheduleCopyReset]);
    assert!(state.view().copied);

    let (state, _) = update(state, Msg::CopyResetDue);
    assert!(!state.view().copied);
}

#[test]
fn overlay_shows_only_while_email_entry_is_active() {
    init_logging();
    // Builtin order: Instagram, LinkedIn, Email.
    let state = AppState::default();
    let (state, _) = update(state, Msg::CarouselTick(Carousel::Socials));
    let (state, _) = update(state, Msg::CarouselTick(Carousel::Socials));
    let (state, _) = update(state, Msg::CopySucceeded);

    let view = state.view();
    assert!(view.copied);
    assert!(view.show_copied_overlay);

    // Rotating away hides the confirmation even though the flag is up.
    let (state, _) = update(state, Msg::CarouselTick(Carousel::Socials));
    let view = state.view();
    assert!(view.copied);
    assert!(!view.show_copied_overlay);
}

#[test]
fn activating_the_email_entry_copies() {
    init_logging();
    let state = AppState::default();
    let (state, _) = update(state, Msg::CarouselTick(Carousel::Socials));
    let (state, _) = update(state, Msg::CarouselTick(Carousel::Socials));

    let (_state, effects) = update(state, Msg::SocialActivated);
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: EMAIL.to_string(),
        }]
    );
}

#[test]
fn activating_a_link_entry_opens_it() {
    init_logging();
    let state = AppState::default();
    let (_state, effects) = update(state, Msg::SocialActivated);

    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "https://www.instagram.com/MranDvX".to_string(),
        }]
    );
}

#[test]
fn open_project_targets_the_shown_project() {
    init_logging();
    let state = AppState::default();
    let (state, _) = update(state, Msg::CarouselTick(Carousel::Projects));

    let (_state, effects) = update(state, Msg::OpenProjectRequested);
    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "https://domainscore.com/".to_string(),
        }]
    );
}
