//! Work history timeline.

use leptos::prelude::*;

use crate::net::types::Job;
use crate::util::markdown;

/// Timeline of jobs, newest first as delivered by the CMS.
#[component]
pub fn Jobs(#[prop(into)] jobs: Signal<Vec<Job>>) -> impl IntoView {
    view! {
        <h2 class="section__title">"Where I've Worked"</h2>
        <Show
            when=move || !jobs.get().is_empty()
            fallback=|| view! { <p class="section__empty">"Nothing to show yet."</p> }
        >
            <ol class="jobs__timeline">
                <For each=move || jobs.get() key=|job| job.id.clone() let:job>
                    <JobEntry job=job/>
                </For>
            </ol>
        </Show>
    }
}

#[component]
fn JobEntry(job: Job) -> impl IntoView {
    let period = job.period();
    let description = markdown::render_html(&job.description);
    let company = match job.company_url {
        Some(url) => view! {
            <a class="jobs__company" href=url target="_blank" rel="noopener noreferrer">{job.company}</a>
        }
        .into_any(),
        None => view! { <span class="jobs__company">{job.company}</span> }.into_any(),
    };

    view! {
        <li class="jobs__entry">
            {job.logo.map(|logo| view! { <img class="jobs__logo" src=logo.url alt="" loading="lazy"/> })}
            <div class="jobs__body">
                <h3 class="jobs__position">{job.position}" @ "{company}</h3>
                <p class="jobs__meta">
                    <span class="jobs__period">{period}</span>
                    {job.location.map(|location| view! { <span class="jobs__location">{location}</span> })}
                </p>
                <div class="jobs__description" inner_html=description></div>
            </div>
        </li>
    }
}
