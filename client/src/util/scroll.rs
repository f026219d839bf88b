//! Section navigation: resolve a nav item to a scroll target.
//!
//! DESIGN
//! ======
//! `resolve` is a pure function of the requested section id and the anchor
//! offsets measured at click time. The page measures section elements right
//! before calling it and hands the result to `scroll_to`, so nothing here
//! caches layout.
//!
//! `about` is the top of the document and always resolves to offset 0. Every
//! other section resolves to its measured offset minus the fixed navbar
//! height so the heading clears the bar. Unknown ids and sections that are
//! not mounted yet resolve to `None` and no scroll happens.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::collections::HashMap;

use leptos::prelude::*;

/// Height of the fixed navigation bar, in CSS pixels.
pub const NAVBAR_HEIGHT: f64 = 70.0;

/// Named page regions reachable from the navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Jobs,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 5] = [Self::About, Self::Jobs, Self::Projects, Self::Skills, Self::Contact];

    /// Identifier used by nav events and as the section's CSS class.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Jobs => "jobs",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Navbar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Jobs => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Parse a nav event id. Matching is exact.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Scroll animation. Only smooth scrolling is exposed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
}

/// Resolved scroll command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavTarget {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl NavTarget {
    #[must_use]
    pub fn smooth(top: f64) -> Self {
        Self { top, behavior: ScrollBehavior::Smooth }
    }
}

/// Latest measured vertical offset of each mounted section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionAnchors {
    offsets: HashMap<Section, f64>,
}

impl SectionAnchors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, section: Section, offset: f64) {
        self.offsets.insert(section, offset);
    }

    #[must_use]
    pub fn get(&self, section: Section) -> Option<f64> {
        self.offsets.get(&section).copied()
    }
}

impl FromIterator<(Section, f64)> for SectionAnchors {
    fn from_iter<I: IntoIterator<Item = (Section, f64)>>(iter: I) -> Self {
        Self { offsets: iter.into_iter().collect() }
    }
}

/// Resolve a nav event id against the current anchors.
///
/// Returns `None` for unknown ids and for sections without a measurement.
#[must_use]
pub fn resolve(section_id: &str, anchors: &SectionAnchors) -> Option<NavTarget> {
    resolve_section(Section::from_id(section_id)?, anchors)
}

/// Typed form of [`resolve`].
#[must_use]
pub fn resolve_section(section: Section, anchors: &SectionAnchors) -> Option<NavTarget> {
    match section {
        Section::About => Some(NavTarget::smooth(0.0)),
        other => anchors
            .get(other)
            .filter(|offset| offset.is_finite())
            .map(|offset| NavTarget::smooth(offset - NAVBAR_HEIGHT)),
    }
}

/// Element refs for the sections the page renders, indexed in page order.
#[derive(Clone, Copy)]
pub struct SectionRefs {
    refs: [(Section, NodeRef<leptos::html::Section>); 5],
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRefs {
    #[must_use]
    pub fn new() -> Self {
        Self { refs: Section::ALL.map(|section| (section, NodeRef::new())) }
    }

    /// Ref to attach to `section`'s element.
    #[must_use]
    pub fn get(&self, section: Section) -> NodeRef<leptos::html::Section> {
        self.refs[section as usize].1
    }

    /// Read `offsetTop` of every mounted section. Empty on the server.
    #[must_use]
    pub fn measure(&self) -> SectionAnchors {
        #[cfg(feature = "hydrate")]
        {
            self.refs
                .iter()
                .filter_map(|(section, node_ref)| {
                    node_ref
                        .get_untracked()
                        .map(|el| (*section, f64::from(el.offset_top())))
                })
                .collect()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            SectionAnchors::new()
        }
    }
}

/// Hand a resolved target to the viewport.
pub fn scroll_to(target: NavTarget) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(target.top);
        options.set_behavior(match target.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}
