//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Page chrome state (`ui`) is kept apart from the CMS content it frames so
//! the navbar and theme controls never depend on content loading.

pub mod ui;
