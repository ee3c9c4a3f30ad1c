use bento_core::{update, AppState, EditAction, Effect, Msg};

fn type_text(mut state: AppState, text: &str) -> AppState {
    for c in text.chars() {
        let (next, effects) = update(state, Msg::NewsletterEdit(EditAction::Insert(c)));
        assert!(effects.is_empty());
        state = next;
    }
    state
}

#[test]
fn edits_accumulate_in_the_draft() {
    let state = AppState::default();
    let state = type_text(state, "hola@example.com");
    assert_eq!(state.view().newsletter.input, "hola@example.com");

    let (state, _) = update(state, Msg::NewsletterEdit(EditAction::Backspace));
    assert_eq!(state.view().newsletter.input, "hola@example.co");
}

#[test]
fn control_characters_are_ignored() {
    let mut state = AppState::default();
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::NewsletterEdit(EditAction::Insert('\t')));
    assert_eq!(state.view().newsletter.input, "");
    assert!(!state.consume_dirty());
}

#[test]
fn backspace_on_empty_draft_changes_nothing() {
    let mut state = AppState::default();
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::NewsletterEdit(EditAction::Backspace));
    assert!(!state.consume_dirty());
}

#[test]
fn focus_toggle_is_reflected_in_the_view() {
    let state = AppState::default();
    assert!(!state.view().newsletter.focused);

    let (state, effects) = update(state, Msg::NewsletterFocusChanged(true));
    assert!(effects.is_empty());
    assert!(state.view().newsletter.focused);

    let (state, _) = update(state, Msg::NewsletterFocusChanged(false));
    assert!(!state.view().newsletter.focused);
}

#[test]
fn plausible_submit_is_recorded_and_clears_the_draft() {
    let state = AppState::default();
    let state = type_text(state, "hola@example.com");

    let (state, effects) = update(state, Msg::NewsletterSubmitted);
    assert_eq!(
        effects,
        vec![Effect::RecordNewsletterSignup {
            email: "hola@example.com".to_string(),
        }]
    );
    assert_eq!(state.view().newsletter.input, "");
}

#[test]
fn submit_trims_surrounding_whitespace() {
    let state = AppState::default();
    let state = type_text(state, "  hola@example.com ");

    let (state, effects) = update(state, Msg::NewsletterSubmitted);
    assert_eq!(
        effects,
        vec![Effect::RecordNewsletterSignup {
            email: "hola@example.com".to_string(),
        }]
    );
    assert_eq!(state.view().newsletter.input, "");
}

#[test]
fn implausible_submit_keeps_the_draft() {
    for draft in ["", "sin-arroba", "dos@arrobas@aqui", "@", "a@", "@b", "con espacio@x"] {
        let state = type_text(AppState::default(), draft);
        let (state, effects) = update(state, Msg::NewsletterSubmitted);
        assert!(effects.is_empty(), "draft {draft:?} should not submit");
        assert_eq!(state.view().newsletter.input, draft);
    }
}
