//! Page footer.

use leptos::prelude::*;

use crate::site::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Designed & built by "{PROFILE.name}</p>
        </footer>
    }
}
