//! Detect button component.

use leptos::prelude::*;

use crop_doctor_common::RequestLifecycle;

#[component]
pub fn DetectButton<F>(lifecycle: ReadSignal<RequestLifecycle>, on_detect: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let busy = move || lifecycle.get().is_pending();

    view! {
        <button
            class="btn btn-primary"
            disabled=busy
            on:click={
                let on_detect = on_detect.clone();
                move |_| on_detect(())
            }
        >
            {move || if busy() { "Detecting..." } else { "Detect Disease" }}
        </button>
    }
}
