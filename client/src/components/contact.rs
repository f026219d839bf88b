//! Contact links.
//!
//! Icons come in light and dark variants and follow the current theme.

use leptos::prelude::*;

use crate::site::PROFILE;
use crate::state::ui::UiState;

/// Contact call-to-action with email and social links.
#[component]
pub fn Contact() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let icon = move |name: &'static str| format!("/icons/{name}-{}.svg", ui.get().theme);

    view! {
        <h2 class="section__title">"Get In Touch"</h2>
        <p class="contact__blurb">"My inbox is always open. Whether you have a question or just want to say hi, write to me."</p>
        <a class="btn contact__email" href=format!("mailto:{}", PROFILE.email)>
            "Say Hello"
        </a>
        <div class="contact__socials">
            <a href=PROFILE.github_url target="_blank" rel="noopener noreferrer" title="GitHub">
                <img src=move || icon("github") alt="GitHub"/>
            </a>
            <a href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer" title="LinkedIn">
                <img src=move || icon("linkedin") alt="LinkedIn"/>
            </a>
        </div>
    }
}
