use super::*;

fn measured() -> SectionAnchors {
    [
        (Section::About, 120.0),
        (Section::Jobs, 500.0),
        (Section::Projects, 1400.0),
        (Section::Skills, 2300.0),
        (Section::Contact, 3100.0),
    ]
    .into_iter()
    .collect()
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_ids_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_id(section.id()), Some(section));
    }
}

#[test]
fn section_from_id_is_exact() {
    assert_eq!(Section::from_id("Jobs"), None);
    assert_eq!(Section::from_id(" jobs"), None);
    assert_eq!(Section::from_id("blog"), None);
    assert_eq!(Section::from_id(""), None);
}

#[test]
fn section_all_is_in_page_order() {
    let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["about", "jobs", "projects", "skills", "contact"]);
    for (index, section) in Section::ALL.iter().enumerate() {
        assert_eq!(*section as usize, index);
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn about_always_scrolls_to_top() {
    assert_eq!(resolve("about", &measured()), Some(NavTarget::smooth(0.0)));
    assert_eq!(resolve("about", &SectionAnchors::new()), Some(NavTarget::smooth(0.0)));
}

#[test]
fn other_sections_clear_the_navbar() {
    let anchors = measured();
    assert_eq!(resolve("jobs", &anchors), Some(NavTarget::smooth(430.0)));
    assert_eq!(resolve("projects", &anchors), Some(NavTarget::smooth(1330.0)));
    assert_eq!(resolve("skills", &anchors), Some(NavTarget::smooth(2230.0)));
    assert_eq!(resolve("contact", &anchors), Some(NavTarget::smooth(3030.0)));
}

#[test]
fn every_section_resolves_without_panicking() {
    let anchors = measured();
    for section in Section::ALL {
        let target = resolve(section.id(), &anchors).expect("measured section resolves");
        assert_eq!(target.behavior, ScrollBehavior::Smooth);
    }
    for section in Section::ALL {
        let _ = resolve(section.id(), &SectionAnchors::new());
    }
}

#[test]
fn offset_above_navbar_goes_negative() {
    let anchors: SectionAnchors = [(Section::Jobs, 20.0)].into_iter().collect();
    assert_eq!(resolve("jobs", &anchors), Some(NavTarget::smooth(-50.0)));
}

#[test]
fn unknown_section_is_ignored() {
    assert_eq!(resolve("blog", &measured()), None);
    assert_eq!(resolve("", &measured()), None);
}

#[test]
fn unmeasured_section_is_skipped() {
    let anchors: SectionAnchors = [(Section::Jobs, 500.0)].into_iter().collect();
    assert_eq!(resolve("projects", &anchors), None);
    assert_eq!(resolve("contact", &SectionAnchors::new()), None);
}

#[test]
fn non_finite_measurement_is_skipped() {
    let mut anchors = SectionAnchors::new();
    anchors.set(Section::Skills, f64::NAN);
    assert_eq!(resolve_section(Section::Skills, &anchors), None);
}

#[test]
fn latest_measurement_wins() {
    let mut anchors = SectionAnchors::new();
    anchors.set(Section::Jobs, 500.0);
    anchors.set(Section::Jobs, 640.0);
    assert_eq!(anchors.get(Section::Jobs), Some(640.0));
    assert_eq!(resolve_section(Section::Jobs, &anchors), Some(NavTarget::smooth(570.0)));
}

// =============================================================
// Off-browser behavior
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn measure_is_empty_off_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let refs = SectionRefs::new();
        assert_eq!(refs.measure(), SectionAnchors::new());
    });
}

#[test]
fn scroll_to_is_callable_off_browser() {
    scroll_to(NavTarget::smooth(430.0));
}
