//! Project showcase cards.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::util::markdown;

/// Grid of project cards.
#[component]
pub fn Projects(#[prop(into)] projects: Signal<Vec<Project>>) -> impl IntoView {
    view! {
        <h2 class="section__title">"Things I've Built"</h2>
        <Show
            when=move || !projects.get().is_empty()
            fallback=|| view! { <p class="section__empty">"Nothing to show yet."</p> }
        >
            <div class="projects__grid">
                <For each=move || projects.get() key=|project| project.id.clone() let:project>
                    <ProjectCard project=project/>
                </For>
            </div>
        </Show>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let description = markdown::render_html(&project.description);

    view! {
        <article class="projects__card">
            {project
                .image
                .map(|image| view! { <img class="projects__image" src=image.url alt=project.title.clone() loading="lazy"/> })}
            <h3 class="projects__title">{project.title}</h3>
            <div class="projects__description" inner_html=description></div>
            <ul class="projects__tech">
                {project.tech_stack.into_iter().map(|tech| view! { <li>{tech}</li> }).collect_view()}
            </ul>
            <div class="projects__links">
                {project
                    .source_url
                    .map(|url| view! { <a href=url target="_blank" rel="noopener noreferrer">"Source"</a> })}
                {project
                    .live_url
                    .map(|url| view! { <a href=url target="_blank" rel="noopener noreferrer">"Live"</a> })}
            </div>
        </article>
    }
}
