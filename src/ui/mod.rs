//! User interface module
//!
//! - `panels.rs` - render functions for each part of the page
//! - `strings.rs` - localized text

pub mod panels;
pub mod strings;
