//! Background services backing the page.

pub mod content;
