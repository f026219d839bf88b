//! Hero section introducing the site owner.

use leptos::prelude::*;

use crate::site::PROFILE;
use crate::util::scroll::Section;

/// Hero/about block.
#[component]
pub fn About(on_nav: Callback<Section>) -> impl IntoView {
    view! {
        <div class="about__hero">
            <p class="about__greeting">"Hi, my name is"</p>
            <h1 class="about__name">{PROFILE.name}</h1>
            <h2 class="about__headline">{PROFILE.headline}" · "{PROFILE.location}</h2>
            <p class="about__summary">{PROFILE.summary}</p>
            <button class="btn about__cta" on:click=move |_| on_nav.run(Section::Contact)>
                "Get in touch"
            </button>
        </div>
    }
}
