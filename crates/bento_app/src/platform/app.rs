//! The page session: terminal setup, the event loop, and input routing.
//!
//! Everything runs on one thread. Input events and timer deadlines both
//! turn into messages, messages run through `bento_core::update`, effects
//! execute inline, and the screen repaints once per batch of changes.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use bento_core::{update, AppState, Carousel, EditAction, Msg, SiteContent};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::{cursor, execute, terminal};
use page_logging::{page_error, page_info};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::timers::{SessionTimings, TimerKey, Timers};
use super::ui::constants::WINDOW_TITLE;
use super::ui::layout::{self, Card, PageLayout};
use super::ui::render;

/// Poll timeout when no timer is armed. The frame tick keeps one armed for
/// the whole session, so this only matters if arming ever changes.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Entry point for the binary: set up logging and the terminal, run the
/// session until the user quits.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let content = SiteContent::builtin();
    content
        .validate()
        .context("built-in page content failed validation")?;
    page_info!(
        "page starting: {} socials, {} projects, {} testimonials",
        content.socials.len(),
        content.projects.len(),
        content.testimonials.len()
    );

    let mut session = TerminalSession::enter().context("terminal setup failed")?;
    let outcome = event_loop(&mut session, content);
    drop(session);

    match &outcome {
        Ok(()) => page_info!("page session ended"),
        Err(error) => page_error!("page session failed: {error:#}"),
    }
    outcome
}

fn event_loop(session: &mut TerminalSession, content: SiteContent) -> anyhow::Result<()> {
    let timings = SessionTimings::default();
    let mut timers = Timers::new();
    timers.arm_session(&timings, Instant::now());
    let mut runner = EffectRunner::with_platform_capabilities(timings);

    let mut state = AppState::new(content);
    let mut queue: VecDeque<Msg> = VecDeque::new();

    let (cols, rows) = terminal::size().context("could not query terminal size")?;
    let mut screen = Screen::new(cols, rows);

    loop {
        if state.consume_dirty() {
            draw(session, &state, &screen)?;
        }

        let timeout = timers.until_next(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match key_msg(&key, state.newsletter_focused()) {
                        KeyAction::Quit => break,
                        KeyAction::Dispatch(msg) => queue.push_back(msg),
                        KeyAction::Ignored => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(msg) = mouse_msg(&mouse, &screen) {
                        queue.push_back(msg);
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    screen = Screen::new(new_cols, new_rows);
                    draw(session, &state, &screen)?;
                }
                _ => {}
            }
        }

        for key in timers.due(Instant::now()) {
            queue.push_back(timer_msg(key));
        }

        // Drain the whole batch before repainting.
        while let Some(msg) = queue.pop_front() {
            let (next, effects) = update(state, msg);
            state = next;
            let now = Instant::now();
            for effect in effects {
                if let Some(follow_up) = runner.run(effect, &mut timers, now) {
                    queue.push_back(follow_up);
                }
            }
        }
    }
    Ok(())
}

/// Terminal geometry plus the grid computed for it. `layout` is `None`
/// while the terminal is too small for the page.
struct Screen {
    cols: u16,
    rows: u16,
    layout: Option<PageLayout>,
}

impl Screen {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            layout: layout::compute(cols, rows),
        }
    }
}

fn draw(session: &mut TerminalSession, state: &AppState, screen: &Screen) -> anyhow::Result<()> {
    let view = state.view();
    match &screen.layout {
        Some(layout) => render::render(&mut session.out, &view, layout, screen.cols, screen.rows)?,
        None => render::render_too_small(&mut session.out, screen.cols, screen.rows)?,
    }
    session.out.flush()?;
    Ok(())
}

fn timer_msg(key: TimerKey) -> Msg {
    match key {
        TimerKey::SocialRotation => Msg::CarouselTick(Carousel::Socials),
        TimerKey::ProjectRotation => Msg::CarouselTick(Carousel::Projects),
        TimerKey::TestimonialRotation => Msg::CarouselTick(Carousel::Testimonials),
        TimerKey::Frame => Msg::Frame,
        TimerKey::CopyReset => Msg::CopyResetDue,
    }
}

/// What a key event should do, given whether the newsletter field has
/// focus.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignored,
}

/// Keyboard routing. While the newsletter field is focused, printable keys
/// edit the draft; otherwise single letters trigger page actions.
pub fn key_msg(key: &KeyEvent, newsletter_focused: bool) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    if newsletter_focused {
        return match key.code {
            KeyCode::Esc | KeyCode::Tab => KeyAction::Dispatch(Msg::NewsletterFocusChanged(false)),
            KeyCode::Enter => KeyAction::Dispatch(Msg::NewsletterSubmitted),
            KeyCode::Backspace => KeyAction::Dispatch(Msg::NewsletterEdit(EditAction::Backspace)),
            KeyCode::Char(ch) => KeyAction::Dispatch(Msg::NewsletterEdit(EditAction::Insert(ch))),
            _ => KeyAction::Ignored,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') => KeyAction::Dispatch(Msg::CopyEmailRequested),
        KeyCode::Char('o') => KeyAction::Dispatch(Msg::OpenProjectRequested),
        KeyCode::Char('s') => KeyAction::Dispatch(Msg::SocialActivated),
        KeyCode::Char('n') | KeyCode::Tab => KeyAction::Dispatch(Msg::NewsletterFocusChanged(true)),
        _ => KeyAction::Ignored,
    }
}

fn mouse_msg(mouse: &MouseEvent, screen: &Screen) -> Option<Msg> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }
    let layout = screen.layout.as_ref()?;
    match layout.card_at(mouse.column, mouse.row)? {
        Card::Social => Some(Msg::SocialActivated),
        Card::Projects => Some(Msg::OpenProjectRequested),
        Card::Newsletter => Some(Msg::NewsletterFocusChanged(true)),
        Card::Bio | Card::Mrr | Card::Users | Card::Testimonials => None,
    }
}

/// Scoped terminal ownership: raw mode, alternate screen, mouse capture and
/// the window title on enter, everything restored on drop so any exit path
/// puts the terminal back.
struct TerminalSession {
    out: io::Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(WINDOW_TITLE),
            event::EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self { out })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
