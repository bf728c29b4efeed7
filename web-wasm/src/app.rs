//! Main application component.

use std::rc::Rc;

use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::api::predict::FetchTransport;
use crate::components::{
    crop_selector::CropSelector, detect_button::DetectButton, header::Header,
    image_uploader::ImageUploader, language_dropdown::LanguageDropdown,
    location_selector::LocationSelector, result_display::ResultDisplay,
};
use crop_doctor_common::{
    ImageAttachment, RequestLifecycle, SubmissionController, SubmissionObserver, SubmitOutcome,
    DEFAULT_LANGUAGE,
};

/// Bridges controller events into alert boxes and reactive signals.
///
/// The controller owns the canonical lifecycle and diagnosis; these
/// signals are the read-only mirror the view renders from.
#[derive(Clone, Copy)]
struct UiObserver {
    lifecycle: WriteSignal<RequestLifecycle>,
    diagnosis: WriteSignal<Option<Value>>,
}

impl SubmissionObserver for UiObserver {
    fn on_advisory(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn on_lifecycle(&self, lifecycle: RequestLifecycle) {
        self.lifecycle.set(lifecycle);
    }

    fn on_diagnosis(&self, diagnosis: &Value) {
        self.diagnosis.set(Some(diagnosis.clone()));
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let (selected_crop, set_selected_crop) = signal(String::new());
    let (preview, set_preview) = signal(None::<String>);
    let (location, set_location) = signal(None::<(String, String)>);
    let (selected_language, set_selected_language) = signal(DEFAULT_LANGUAGE.to_string());
    let (lifecycle, set_lifecycle) = signal(RequestLifecycle::Idle);
    let (diagnosis, set_diagnosis) = signal(None::<Value>);

    let controller = Rc::new(SubmissionController::new(
        FetchTransport,
        UiObserver {
            lifecycle: set_lifecycle,
            diagnosis: set_diagnosis,
        },
    ));

    let on_language_change = {
        let controller = Rc::clone(&controller);
        move |code: String| {
            controller.set_language(&code);
            set_selected_language.set(code);
        }
    };

    let on_location_select = {
        let controller = Rc::clone(&controller);
        move |state: String, district: String| {
            controller.set_location(&state, &district);
            set_location.set(Some((state, district)));
        }
    };

    let on_crop_select = {
        let controller = Rc::clone(&controller);
        move |crop: String| {
            controller.set_crop(&crop);
            set_selected_crop.set(crop);
        }
    };

    let on_image_selected = {
        let controller = Rc::clone(&controller);
        move |image: ImageAttachment, preview_url: String| {
            controller.set_image(image);
            set_preview.set(Some(preview_url));
        }
    };

    let on_detect = {
        let controller = Rc::clone(&controller);
        move |_| {
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                if let SubmitOutcome::Failed(err) = controller.submit().await {
                    gloo::console::error!(format!("Error detecting disease: {err}"));
                }
            });
        }
    };

    view! {
        <div class="container">
            <Header />

            <div class="card">
                <LanguageDropdown
                    selected_language=selected_language
                    on_language_change=on_language_change
                />

                <LocationSelector on_location_select=on_location_select />

                <Show when=move || location.get().is_some()>
                    <div class="location-banner">
                        <h2>"📍 Selected Location"</h2>
                        <p>
                            {move || {
                                location
                                    .get()
                                    .map(|(state, district)| format!("{state}, {district}"))
                                    .unwrap_or_default()
                            }}
                        </p>
                    </div>
                </Show>

                <CropSelector selected_crop=selected_crop on_select=on_crop_select />
                <ImageUploader preview=preview on_image_selected=on_image_selected />
                <DetectButton lifecycle=lifecycle on_detect=on_detect />
                <ResultDisplay lifecycle=lifecycle diagnosis=diagnosis />
            </div>
        </div>
    }
}
