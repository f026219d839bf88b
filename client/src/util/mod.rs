//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, viewport scrolling,
//! Markdown rendering) from page and component logic so the rules stay
//! testable without a browser.

pub mod markdown;
pub mod scroll;
pub mod storage;
pub mod theme;
