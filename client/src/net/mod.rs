//! Content schema and the server function that delivers it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` mirrors the CMS payload for jobs, projects and skills. `content`
//! exposes the server's current snapshot to the page through a Leptos server
//! function; the page never talks to the CMS directly.

pub mod content;
pub mod types;
