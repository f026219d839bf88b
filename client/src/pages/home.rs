//! The portfolio page: navbar, hero, jobs, projects, skills, contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page wires the controller to the rendering layer:
//! - the theme is loaded once after mount and flipped by the navbar toggle,
//!   both through `PreferenceStore`;
//! - nav clicks measure the section elements, resolve a target, and scroll;
//! - content arrives through the `get_portfolio_content` server function,
//!   already resolved on the server.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::jobs::Jobs;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::net::content::{content_or_default, get_portfolio_content};
use crate::site::PROFILE;
use crate::state::ui::UiState;
use crate::util::scroll::{Section, SectionRefs, scroll_to};
use crate::util::theme::PreferenceStore;

/// Single-page portfolio.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let store = PreferenceStore::browser();
    let refs = SectionRefs::new();
    let content = Resource::new(|| (), |()| get_portfolio_content());

    // Read inside each `Transition` so SSR waits for the resource.
    let snapshot = move || content_or_default(content.get());
    let jobs = Signal::derive(move || snapshot().jobs);
    let projects = Signal::derive(move || snapshot().projects);
    let skills = Signal::derive(move || snapshot().skills);

    Effect::new(move || {
        if let Some(Err(e)) = content.get() {
            log::warn!("portfolio content unavailable: {e}");
        }
    });

    // Effects only run in the browser, so SSR always renders the light theme.
    Effect::new(move || {
        ui.update(|u| {
            u.load_theme(&store);
        });
    });

    let on_toggle_theme = Callback::new(move |()| {
        ui.update(|u| {
            u.toggle_theme(&store);
        });
    });

    let on_nav = Callback::new(move |section: Section| {
        let anchors = refs.measure();
        let mut target = None;
        ui.update(|u| target = u.navigate(section, &anchors));
        if let Some(target) = target {
            scroll_to(target);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        // Deep links (`/#projects`) scroll once content has rendered.
        let hash_consumed = StoredValue::new(false);
        Effect::new(move || {
            if content.get().is_none() || hash_consumed.get_value() {
                return;
            }
            hash_consumed.set_value(true);
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            let id = hash.trim_start_matches('#');
            if let Some(target) = crate::util::scroll::resolve(id, &refs.measure()) {
                if let Some(section) = Section::from_id(id) {
                    ui.update(|u| u.active_section = section);
                }
                scroll_to(target);
            }
        });
    }

    view! {
        <Title text=PROFILE.name/>
        <Meta name="keywords" content=PROFILE.keywords/>
        <Meta name="description" content=PROFILE.description/>
        <Meta name="author" content=PROFILE.name/>
        <Link rel="icon" href="/favicon.svg"/>

        <main class="page" data-theme=move || ui.get().theme.as_str()>
            <Navbar on_nav=on_nav on_toggle_theme=on_toggle_theme/>

            <section class="about" node_ref=refs.get(Section::About)>
                <About on_nav=on_nav/>
            </section>

            <section class="jobs" node_ref=refs.get(Section::Jobs)>
                <Transition fallback=loading>
                    <Jobs jobs=jobs/>
                </Transition>
            </section>

            <section class="projects" node_ref=refs.get(Section::Projects)>
                <Transition fallback=loading>
                    <Projects projects=projects/>
                </Transition>
            </section>

            <section class="skills" node_ref=refs.get(Section::Skills)>
                <Transition fallback=loading>
                    <Skills skills=skills/>
                </Transition>
            </section>

            <section class="contact" node_ref=refs.get(Section::Contact)>
                <Contact/>
            </section>

            <Footer/>
        </main>
    }
}

fn loading() -> impl IntoView {
    view! { <p class="section__loading">"Loading…"</p> }
}
