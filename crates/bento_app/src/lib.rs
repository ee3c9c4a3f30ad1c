//! Terminal shell for the bento page. The binary in `main.rs` is a thin
//! wrapper; everything lives in the library so integration tests can drive
//! the platform pieces directly.

pub mod platform;
