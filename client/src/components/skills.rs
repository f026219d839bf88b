//! Skills grid.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::net::types::Skill;

/// Icon grid of skills.
#[component]
pub fn Skills(#[prop(into)] skills: Signal<Vec<Skill>>) -> impl IntoView {
    view! {
        <h2 class="section__title">"Skills"</h2>
        <Show
            when=move || !skills.get().is_empty()
            fallback=|| view! { <p class="section__empty">"Nothing to show yet."</p> }
        >
            <ul class="skills__grid">
                <For each=move || skills.get() key=|skill| skill.id.clone() let:skill>
                    <li class="skills__item">
                        {skill.icon.map(|icon| view! { <img class="skills__icon" src=icon.url alt="" loading="lazy"/> })}
                        <span class="skills__name">{skill.name}</span>
                    </li>
                </For>
            </ul>
        </Show>
    }
}
