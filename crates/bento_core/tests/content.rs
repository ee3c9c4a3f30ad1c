use bento_core::{ContentError, Icon, SiteContent, SocialAction};
use pretty_assertions::assert_eq;

#[test]
fn builtin_content_validates() {
    assert_eq!(SiteContent::builtin().validate(), Ok(()));
}

#[test]
fn total_mrr_sums_the_projects() {
    let content = SiteContent::builtin();
    assert_eq!(content.total_mrr(), 4500);
}

#[test]
fn contact_email_is_the_mail_entry_handle() {
    let content = SiteContent::builtin();
    assert_eq!(content.contact_email(), Some("franmavazq@gmail.com"));
}

#[test]
fn only_the_mail_entry_copies() {
    let content = SiteContent::builtin();
    for social in &content.socials {
        let expected = if social.icon == Icon::Mail {
            SocialAction::CopyEmail
        } else {
            SocialAction::OpenLink
        };
        assert_eq!(social.action(), expected, "{}", social.label);
    }
}

#[test]
fn empty_lists_are_rejected() {
    let mut content = SiteContent::builtin();
    content.testimonials.clear();
    assert_eq!(
        content.validate(),
        Err(ContentError::EmptyList {
            list: "testimonials",
        })
    );
}

#[test]
fn malformed_links_are_rejected() {
    let mut content = SiteContent::builtin();
    content.projects[0].preview_link = "not a url".to_string();

    match content.validate() {
        Err(ContentError::InvalidLink { label, link, .. }) => {
            assert_eq!(label, "Kahop");
            assert_eq!(link, "not a url");
        }
        other => panic!("expected InvalidLink, got {other:?}"),
    }
}
