//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page. `home` owns the navigation-and-theme handlers
//! and the content resource, and delegates rendering to `components`.

pub mod home;
