//! Header component.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Crop Disease Detection & Remedies"</h1>
        </header>
    }
}
