use crate::content::SocialAction;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CarouselTick(carousel) => {
            state.advance(carousel);
            Vec::new()
        }
        Msg::Frame => {
            state.step_fades();
            Vec::new()
        }
        Msg::CopyEmailRequested => match state.contact_email() {
            Some(email) => vec![Effect::CopyToClipboard {
                text: email.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::CopySucceeded => {
            state.set_copied(true);
            vec![Effect::ScheduleCopyReset]
        }
        Msg::CopyResetDue => {
            // Unconditional decay; the shell keeps at most one reset armed.
            state.set_copied(false);
            Vec::new()
        }
        Msg::SocialActivated => match state.current_social() {
            Some(social) => match social.action() {
                SocialAction::CopyEmail => vec![Effect::CopyToClipboard {
                    text: social.username.clone(),
                }],
                SocialAction::OpenLink => vec![Effect::OpenLink {
                    url: social.link.clone(),
                }],
            },
            None => Vec::new(),
        },
        Msg::OpenProjectRequested => match state.current_project_link() {
            Some(url) => vec![Effect::OpenLink {
                url: url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::NewsletterFocusChanged(focused) => {
            state.set_newsletter_focus(focused);
            Vec::new()
        }
        Msg::NewsletterEdit(action) => {
            state.edit_newsletter(action);
            Vec::new()
        }
        Msg::NewsletterSubmitted => {
            let draft = state.newsletter_input().trim().to_string();
            // An implausible draft stays in the field.
            if is_plausible_email(&draft) {
                state.clear_newsletter();
                vec![Effect::RecordNewsletterSignup { email: draft }]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// The check a browser's `type="email"` input applies: one `@` with
/// non-empty sides and no whitespace, nothing stricter.
fn is_plausible_email(draft: &str) -> bool {
    if draft.is_empty() || draft.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = draft.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
