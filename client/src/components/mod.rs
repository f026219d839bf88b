//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one page region each. They read shared chrome state
//! from the `UiState` context and receive content and handlers as props.

pub mod about;
pub mod contact;
pub mod footer;
pub mod jobs;
pub mod navbar;
pub mod projects;
pub mod skills;
