//! Terminal rendering of the page: grid geometry and card painting.

pub mod constants;
pub mod layout;
pub mod render;
