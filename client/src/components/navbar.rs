//! Fixed top navigation bar with section links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar only emits intents. Scrolling and theme persistence are owned by
//! the page, which passes the handlers in as callbacks.

use leptos::prelude::*;

use crate::site::PROFILE;
use crate::state::ui::UiState;
use crate::util::scroll::Section;
use crate::util::theme::Theme;

/// Top navigation bar.
#[component]
pub fn Navbar(on_nav: Callback<Section>, on_toggle_theme: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="navbar" class:navbar--open=move || ui.get().menu_open>
            <a
                href="#about"
                class="navbar__brand"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    on_nav.run(Section::About);
                }
            >
                {PROFILE.name}
            </a>

            <button
                class="btn navbar__menu-toggle"
                on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
                title="Menu"
            >
                "☰"
            </button>

            <ul class="navbar__items">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", section.id())
                                    class="navbar__item"
                                    class:navbar__item--active=move || ui.get().active_section == section
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        on_nav.run(section);
                                    }
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button
                class="btn navbar__theme-toggle"
                on:click=move |_| on_toggle_theme.run(())
                title="Toggle theme"
            >
                {move || match ui.get().theme {
                    Theme::Light => "☾",
                    Theme::Dark => "☀",
                }}
            </button>
        </nav>
    }
}
