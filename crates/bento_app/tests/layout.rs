//! Grid geometry: bounds, disjointness, hit tests, minimum size.

use bento_app::platform::ui::layout::{self, Card, PageLayout, Rect, MIN_COLS, MIN_ROWS};
use pretty_assertions::assert_eq;

fn rects(page: &PageLayout) -> [(Card, Rect); 7] {
    [
        (Card::Bio, page.bio),
        (Card::Projects, page.projects),
        (Card::Mrr, page.mrr),
        (Card::Users, page.users),
        (Card::Social, page.social),
        (Card::Testimonials, page.testimonials),
        (Card::Newsletter, page.newsletter),
    ]
}

#[test]
fn too_small_terminals_get_no_layout() {
    assert!(layout::compute(MIN_COLS - 1, 40).is_none());
    assert!(layout::compute(120, MIN_ROWS - 1).is_none());
    assert!(layout::compute(MIN_COLS, MIN_ROWS).is_some());
}

#[test]
fn cards_stay_inside_the_terminal() {
    for (cols, rows) in [(MIN_COLS, MIN_ROWS), (80, 24), (120, 40), (200, 60)] {
        let page = layout::compute(cols, rows).unwrap();
        for (card, rect) in rects(&page) {
            assert!(
                rect.x + rect.w <= cols && rect.y + rect.h <= rows,
                "{card:?} overflows a {cols}x{rows} terminal: {rect:?}"
            );
            assert!(
                rect.w >= 2 && rect.h >= 2,
                "{card:?} too small to draw a border: {rect:?}"
            );
        }
    }
}

#[test]
fn cards_never_overlap() {
    let page = layout::compute(100, 30).unwrap();
    let all = rects(&page);
    for (index, (card_a, a)) in all.iter().enumerate() {
        for (card_b, b) in all.iter().skip(index + 1) {
            let disjoint = a.x + a.w <= b.x
                || b.x + b.w <= a.x
                || a.y + a.h <= b.y
                || b.y + b.h <= a.y;
            assert!(disjoint, "{card_a:?} overlaps {card_b:?}");
        }
    }
}

#[test]
fn hit_tests_resolve_to_the_right_card() {
    let page = layout::compute(100, 30).unwrap();
    for (card, rect) in rects(&page) {
        let col = rect.x + rect.w / 2;
        let row = rect.y + rect.h / 2;
        assert_eq!(page.card_at(col, row), Some(card));
    }

    // The gap column between MRR and user count belongs to no card.
    let gap_col = page.mrr.x + page.mrr.w;
    assert_eq!(page.card_at(gap_col, page.mrr.y), None);
}

#[test]
fn newsletter_strip_spans_the_full_width() {
    let page = layout::compute(96, 28).unwrap();
    assert_eq!(page.newsletter.x, 0);
    assert_eq!(page.newsletter.w, 96);
}

#[test]
fn projects_column_reaches_past_the_stat_row() {
    let page = layout::compute(100, 30).unwrap();
    let stats_bottom = page.mrr.y + page.mrr.h;
    assert_eq!(page.projects.y + page.projects.h, stats_bottom);
}
