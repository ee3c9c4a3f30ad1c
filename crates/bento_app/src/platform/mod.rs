//! Platform integration: the event loop, timers, clipboard and link
//! capabilities, effect execution, and terminal rendering.

pub mod app;
pub mod clipboard;
pub mod effects;
pub mod logging;
pub mod opener;
pub mod timers;
pub mod ui;

pub use app::run_app;
