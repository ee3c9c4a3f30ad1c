//! Bento grid geometry.
//!
//! The page is a fixed arrangement: bio spanning two columns, the projects
//! carousel filling the right column down past the stat row, MRR and user
//! count side by side, the social carousel next to the testimonials, and
//! the newsletter strip across the bottom.

/// Smallest terminal the grid still fits in.
pub const MIN_COLS: u16 = 68;
pub const MIN_ROWS: u16 = 22;

const GAP: u16 = 1;
const STATS_HEIGHT: u16 = 4;
const NEWSLETTER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.w && row >= self.y && row < self.y + self.h
    }

    /// Content area inside the border, with one column of horizontal
    /// padding.
    pub fn inner(&self) -> Rect {
        Rect {
            x: self.x + 2,
            y: self.y + 1,
            w: self.w.saturating_sub(4),
            h: self.h.saturating_sub(2),
        }
    }
}

/// One card region of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Bio,
    Projects,
    Mrr,
    Users,
    Social,
    Testimonials,
    Newsletter,
}

/// Card rectangles for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub bio: Rect,
    pub projects: Rect,
    pub mrr: Rect,
    pub users: Rect,
    pub social: Rect,
    pub testimonials: Rect,
    pub newsletter: Rect,
}

impl PageLayout {
    /// Which card a terminal cell falls in, for mouse hit tests.
    pub fn card_at(&self, col: u16, row: u16) -> Option<Card> {
        let regions = [
            (Card::Bio, self.bio),
            (Card::Projects, self.projects),
            (Card::Mrr, self.mrr),
            (Card::Users, self.users),
            (Card::Social, self.social),
            (Card::Testimonials, self.testimonials),
            (Card::Newsletter, self.newsletter),
        ];
        regions
            .into_iter()
            .find(|(_, rect)| rect.contains(col, row))
            .map(|(card, _)| card)
    }
}

/// Compute the grid for a terminal of `cols` x `rows` cells, or `None` when
/// the terminal is too small to hold it.
pub fn compute(cols: u16, rows: u16) -> Option<PageLayout> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return None;
    }

    // Three columns separated by single-cell gaps; the right column absorbs
    // the rounding remainder.
    let column_width = (cols - 2 * GAP) / 3;
    let right_width = cols - 2 * GAP - 2 * column_width;
    let x_left = 0;
    let x_middle = column_width + GAP;
    let x_right = x_middle + column_width + GAP;

    // Fixed-height stat and newsletter rows; the rest splits between the
    // bio row and the social/testimonial row.
    let flexible = rows - STATS_HEIGHT - NEWSLETTER_HEIGHT - 3 * GAP;
    let top_height = flexible * 3 / 5;
    let middle_height = flexible - top_height;
    let y_stats = top_height + GAP;
    let y_middle = y_stats + STATS_HEIGHT + GAP;
    let y_newsletter = y_middle + middle_height + GAP;

    Some(PageLayout {
        bio: Rect {
            x: x_left,
            y: 0,
            w: 2 * column_width + GAP,
            h: top_height,
        },
        projects: Rect {
            x: x_right,
            y: 0,
            w: right_width,
            h: top_height + GAP + STATS_HEIGHT,
        },
        mrr: Rect {
            x: x_left,
            y: y_stats,
            w: column_width,
            h: STATS_HEIGHT,
        },
        users: Rect {
            x: x_middle,
            y: y_stats,
            w: column_width,
            h: STATS_HEIGHT,
        },
        social: Rect {
            x: x_left,
            y: y_middle,
            w: column_width,
            h: middle_height,
        },
        testimonials: Rect {
            x: x_middle,
            y: y_middle,
            w: column_width + GAP + right_width,
            h: middle_height,
        },
        newsletter: Rect {
            x: x_left,
            y: y_newsletter,
            w: cols,
            h: NEWSLETTER_HEIGHT,
        },
    })
}
