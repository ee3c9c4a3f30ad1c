//! Paints the page view model into the terminal.
//!
//! Rendering is a pure function of the view model and the layout: every
//! call repaints the full grid, and the event loop only calls it when the
//! state marked itself dirty.

use std::io::{self, Write};

use bento_core::{CarouselView, Icon, PageViewModel};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use super::constants::*;
use super::layout::{PageLayout, Rect, MIN_COLS, MIN_ROWS};

/// Paint the whole page. The caller owns flushing.
pub fn render(
    out: &mut impl Write,
    view: &PageViewModel,
    layout: &PageLayout,
    cols: u16,
    rows: u16,
) -> io::Result<()> {
    paint_background(out, cols, rows)?;
    draw_bio(out, view, layout.bio)?;
    draw_projects(out, view, layout.projects)?;
    draw_stat(
        out,
        layout.mrr,
        &format!("${}+", view.mrr_total),
        ACCENT_GREEN,
        "MRR Total",
    )?;
    draw_stat(
        out,
        layout.users,
        &format!("{}+", format_with_commas(view.total_users)),
        DARK_TEXT,
        "Usuarios Totales",
    )?;
    draw_social(out, view, layout.social)?;
    draw_testimonials(out, view, layout.testimonials)?;
    draw_newsletter(out, view, layout.newsletter)?;
    Ok(())
}

/// Centered notice for terminals below the grid minimum.
pub fn render_too_small(out: &mut impl Write, cols: u16, rows: u16) -> io::Result<()> {
    paint_background(out, cols, rows)?;
    let message = format!("Ventana muy pequeña: se necesita {MIN_COLS}x{MIN_ROWS}");
    let full = Rect {
        x: 0,
        y: 0,
        w: cols,
        h: rows,
    };
    draw_centered(out, full, rows / 2, &message, INK, PAGE_BG, None)
}

fn paint_background(out: &mut impl Write, cols: u16, rows: u16) -> io::Result<()> {
    queue!(out, SetBackgroundColor(PAGE_BG), Clear(ClearType::All))?;
    // Not every terminal honors the background color on Clear.
    let blank = " ".repeat(cols as usize);
    for row in 0..rows {
        queue!(out, MoveTo(0, row), Print(&blank))?;
    }
    Ok(())
}

fn draw_bio(out: &mut impl Write, view: &PageViewModel, rect: Rect) -> io::Result<()> {
    draw_card(out, rect, CARD_BG, CARD_BORDER)?;
    let inner = rect.inner();
    if inner.w == 0 || inner.h == 0 {
        return Ok(());
    }
    let profile = &view.profile;
    let bottom = inner.y + inner.h;

    draw_span(
        out,
        inner.x,
        inner.y,
        inner.w,
        &profile.name,
        INK,
        CARD_BG,
        Some(Attribute::Bold),
    )?;

    if inner.y + 1 < bottom {
        let badge = format!(" {} ", profile.years_badge);
        let badge_width = badge.chars().count() as u16;
        draw_span(out, inner.x, inner.y + 1, inner.w, &badge, INK, BADGE_BG, None)?;
        if inner.w > badge_width + 1 {
            draw_span(
                out,
                inner.x + badge_width + 1,
                inner.y + 1,
                inner.w - badge_width - 1,
                &profile.role,
                INK_SOFT,
                CARD_BG,
                None,
            )?;
        }
    }

    if inner.y + 2 < bottom {
        let location = format!("· {}", profile.location);
        draw_span(out, inner.x, inner.y + 2, inner.w, &location, INK_SOFT, CARD_BG, None)?;
    }

    // Summary fills the rest, below one blank line.
    let first_summary_row = inner.y + 4;
    if first_summary_row < bottom {
        let available = (bottom - first_summary_row) as usize;
        for (offset, line) in wrap(&profile.summary, inner.w as usize, available)
            .iter()
            .enumerate()
        {
            draw_span(
                out,
                inner.x,
                first_summary_row + offset as u16,
                inner.w,
                line,
                INK_SOFT,
                CARD_BG,
                None,
            )?;
        }
    }
    Ok(())
}

fn draw_projects(out: &mut impl Write, view: &PageViewModel, rect: Rect) -> io::Result<()> {
    draw_card(out, rect, CARD_BG, CARD_BORDER)?;
    let inner = rect.inner();
    if inner.w == 0 || inner.h == 0 {
        return Ok(());
    }
    draw_span(
        out,
        inner.x,
        inner.y,
        inner.w,
        "Proyectos Destacados",
        INK,
        CARD_BG,
        Some(Attribute::Bold),
    )?;

    let (index, intensity) = dissolve(view.project_rotation);
    let Some(project) = view.projects.get(index) else {
        return Ok(());
    };
    let ink = blend(CARD_BG, INK, intensity);
    let soft = blend(CARD_BG, INK_SOFT, intensity);
    let green = blend(CARD_BG, ACCENT_GREEN, intensity);
    let bottom = inner.y + inner.h;
    let mut row = inner.y + 2;

    if row < bottom {
        let heading = format!("{}  {}", project.logo, project.name);
        draw_span(out, inner.x, row, inner.w, &heading, ink, CARD_BG, Some(Attribute::Bold))?;
        row += 1;
    }
    if row < bottom {
        let mrr = format!("${}/mes MRR", format_with_commas(project.mrr));
        draw_span(out, inner.x, row, inner.w, &mrr, green, CARD_BG, Some(Attribute::Bold))?;
        row += 2;
    }
    if row < bottom {
        let remaining = (bottom - row) as usize;
        let tagline_lines = wrap(&project.tagline, inner.w as usize, remaining.saturating_sub(2));
        for line in &tagline_lines {
            draw_span(out, inner.x, row, inner.w, line, soft, CARD_BG, None)?;
            row += 1;
        }
    }
    if row + 1 < bottom {
        row += 1;
        let stack = project.tech_stack.join(" · ");
        draw_span(out, inner.x, row, inner.w, &stack, soft, CARD_BG, None)?;
        row += 1;
    }
    if row < bottom {
        let link = format!("Ver proyecto: {}", host_of(&project.preview_link));
        draw_span(out, inner.x, row, inner.w, &link, soft, CARD_BG, Some(Attribute::Underlined))?;
    }
    Ok(())
}

fn draw_stat(
    out: &mut impl Write,
    rect: Rect,
    value: &str,
    value_color: Color,
    label: &str,
) -> io::Result<()> {
    draw_card(out, rect, DARK_BG, DARK_BG)?;
    let inner = rect.inner();
    if inner.h == 0 {
        return Ok(());
    }
    draw_centered(out, inner, inner.y, value, value_color, DARK_BG, Some(Attribute::Bold))?;
    if inner.h > 1 {
        draw_centered(out, inner, inner.y + 1, label, DARK_TEXT_SOFT, DARK_BG, None)?;
    }
    Ok(())
}

fn draw_social(out: &mut impl Write, view: &PageViewModel, rect: Rect) -> io::Result<()> {
    if view.show_copied_overlay {
        // The confirmation covers the card and snaps in and out without a
        // fade.
        draw_card(out, rect, DARK_BG, DARK_BG)?;
        let inner = rect.inner();
        if inner.h > 0 {
            let middle = inner.y + inner.h / 2;
            draw_centered(
                out,
                inner,
                middle,
                "✓ ¡Correo copiado!",
                DARK_TEXT,
                DARK_BG,
                Some(Attribute::Bold),
            )?;
        }
        return Ok(());
    }

    draw_card(out, rect, CARD_BG, CARD_BORDER)?;
    let inner = rect.inner();
    if inner.w == 0 || inner.h == 0 {
        return Ok(());
    }
    let (index, intensity) = dissolve(view.social_rotation);
    let Some(social) = view.socials.get(index) else {
        return Ok(());
    };
    let ink = blend(CARD_BG, INK, intensity);
    let soft = blend(CARD_BG, INK_SOFT, intensity);

    let middle = inner.y + (inner.h.saturating_sub(1)) / 2;
    let heading = format!("{} {}", icon_glyph(social.icon), social.label);
    draw_centered(out, inner, middle, &heading, ink, CARD_BG, Some(Attribute::Bold))?;
    if middle + 1 < inner.y + inner.h {
        draw_centered(out, inner, middle + 1, &social.username, soft, CARD_BG, None)?;
    }
    Ok(())
}

fn draw_testimonials(out: &mut impl Write, view: &PageViewModel, rect: Rect) -> io::Result<()> {
    draw_card(out, rect, CARD_BG, CARD_BORDER)?;
    let inner = rect.inner();
    if inner.w == 0 || inner.h == 0 {
        return Ok(());
    }
    draw_span(
        out,
        inner.x,
        inner.y,
        inner.w,
        "Testimonios",
        INK,
        CARD_BG,
        Some(Attribute::Bold),
    )?;

    let (index, intensity) = dissolve(view.testimonial_rotation);
    let Some(testimonial) = view.testimonials.get(index) else {
        return Ok(());
    };
    let ink = blend(CARD_BG, INK, intensity);
    let soft = blend(CARD_BG, INK_SOFT, intensity);
    let bottom = inner.y + inner.h;
    let body_rows = (bottom - inner.y).saturating_sub(2) as usize;
    let quote = format!("\u{201c}{}\u{201d}", testimonial.text);
    let mut row = inner.y + 1;
    for line in wrap(&quote, inner.w as usize, body_rows) {
        draw_span(out, inner.x, row, inner.w, &line, ink, CARD_BG, Some(Attribute::Italic))?;
        row += 1;
    }
    if row < bottom {
        let author = format!("- {}", testimonial.author);
        draw_span(out, inner.x, row, inner.w, &author, soft, CARD_BG, None)?;
    }
    Ok(())
}

fn draw_newsletter(out: &mut impl Write, view: &PageViewModel, rect: Rect) -> io::Result<()> {
    draw_card(out, rect, CARD_BG, CARD_BORDER)?;
    let inner = rect.inner();
    if inner.w == 0 || inner.h == 0 {
        return Ok(());
    }
    let y = inner.y;
    let right_edge = inner.x + inner.w;
    let mut x = inner.x;

    draw_span(out, x, y, inner.w, "Newsletter", INK, CARD_BG, Some(Attribute::Bold))?;
    x += 12;
    if x >= right_edge {
        return Ok(());
    }

    // Input field: draft tail with a cursor while focused, placeholder
    // otherwise.
    let field_width = 26.min(right_edge - x);
    let focused = view.newsletter.focused;
    let draft = &view.newsletter.input;
    let (field_text, field_color) = if draft.is_empty() && !focused {
        ("tu@email.com".to_string(), INK_SOFT)
    } else {
        let visible = field_width.saturating_sub(2) as usize;
        let tail: String = draft
            .chars()
            .rev()
            .take(visible)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let cursor = if focused { "▏" } else { "" };
        (format!("{tail}{cursor}"), INK)
    };
    let field_bg = if focused { BADGE_BG } else { PAGE_BG };
    let padded = format!(" {:width$}", field_text, width = field_width.saturating_sub(1) as usize);
    draw_span(out, x, y, field_width, &padded, field_color, field_bg, None)?;
    x += field_width + 1;

    if x + 14 <= right_edge {
        draw_span(out, x, y, right_edge - x, " Suscribirse ", DARK_TEXT, DARK_BG, None)?;
        x += 14;
    }

    if x + 2 < right_edge {
        let hints = if focused {
            "Enter envía · Esc sale del campo"
        } else {
            "Tab escribe · c copia email · o abre proyecto · s red social · q salir"
        };
        draw_span(out, x + 2, y, right_edge - x - 2, hints, INK_SOFT, CARD_BG, None)?;
    }
    Ok(())
}

fn draw_card(out: &mut impl Write, rect: Rect, bg: Color, border: Color) -> io::Result<()> {
    if rect.w < 2 || rect.h < 2 {
        return Ok(());
    }
    queue!(out, SetBackgroundColor(bg), SetForegroundColor(border))?;
    let inner_width = (rect.w - 2) as usize;
    let top = format!("╭{}╮", "─".repeat(inner_width));
    let middle = format!("│{}│", " ".repeat(inner_width));
    let bottom = format!("╰{}╯", "─".repeat(inner_width));
    queue!(out, MoveTo(rect.x, rect.y), Print(&top))?;
    for row in rect.y + 1..rect.y + rect.h - 1 {
        queue!(out, MoveTo(rect.x, row), Print(&middle))?;
    }
    queue!(out, MoveTo(rect.x, rect.y + rect.h - 1), Print(&bottom))?;
    Ok(())
}

fn draw_span(
    out: &mut impl Write,
    x: u16,
    y: u16,
    max_width: u16,
    text: &str,
    fg: Color,
    bg: Color,
    attribute: Option<Attribute>,
) -> io::Result<()> {
    queue!(out, MoveTo(x, y), SetBackgroundColor(bg), SetForegroundColor(fg))?;
    if let Some(attr) = attribute {
        queue!(out, SetAttribute(attr))?;
    }
    queue!(out, Print(clip(text, max_width as usize)))?;
    if attribute.is_some() {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn draw_centered(
    out: &mut impl Write,
    rect: Rect,
    y: u16,
    text: &str,
    fg: Color,
    bg: Color,
    attribute: Option<Attribute>,
) -> io::Result<()> {
    let width = text.chars().count() as u16;
    let x = rect.x + rect.w.saturating_sub(width) / 2;
    draw_span(out, x, y, rect.w, text, fg, bg, attribute)
}

/// Two-phase dissolve standing in for the page's cross-fade: the outgoing
/// item sinks into the card during the first half, the incoming one rises
/// during the second.
fn dissolve(rotation: CarouselView) -> (usize, f32) {
    match rotation.previous {
        None => (rotation.current, 1.0),
        Some(previous) if rotation.fade < 0.5 => (previous, 1.0 - rotation.fade * 2.0),
        Some(_) => (rotation.current, rotation.fade * 2.0 - 1.0),
    }
}

fn blend(from: Color, to: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (from, to) {
        (
            Color::Rgb {
                r: from_r,
                g: from_g,
                b: from_b,
            },
            Color::Rgb {
                r: to_r,
                g: to_g,
                b: to_b,
            },
        ) => {
            let mix =
                |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * amount).round() as u8;
            Color::Rgb {
                r: mix(from_r, to_r),
                g: mix(from_g, to_g),
                b: mix(from_b, to_b),
            }
        }
        _ => to,
    }
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Instagram => "◎",
        Icon::LinkedIn => "in",
        Icon::Mail => "✉",
    }
}

fn host_of(link: &str) -> &str {
    link.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = clip(&format!("{last} …"), width);
        }
    }
    lines
}

fn format_with_commas(value: u32) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
