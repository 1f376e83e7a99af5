//! Per-clause checks
//!
//! Title and page checks look at one record in isolation. The continuity
//! check compares a record against the last parsable clause number seen so
//! far, which the caller threads through as a [`continuity::Baseline`].

pub mod continuity;
pub mod page;
pub mod title;

pub use continuity::{check_continuity, Baseline};
pub use page::{check_page, inspect_page, PageDefect};
pub use title::check_title;
