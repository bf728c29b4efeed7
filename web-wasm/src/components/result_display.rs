//! Diagnosis result display.
//!
//! Renders the fields it recognizes; anything else is shown as the raw
//! JSON the service sent, so an unknown reply shape is never lost.

use leptos::prelude::*;
use serde_json::Value;

use crop_doctor_common::{DiagnosisView, RequestLifecycle};

#[component]
pub fn ResultDisplay(
    lifecycle: ReadSignal<RequestLifecycle>,
    diagnosis: ReadSignal<Option<Value>>,
) -> impl IntoView {
    view! {
        <Show when=move || lifecycle.get() == RequestLifecycle::Failed>
            <p class="result-error">"The last detection failed."</p>
        </Show>
        <Show when=move || diagnosis.get().is_some()>
            <div class=move || format!("result-card {}", lifecycle.get().as_str())>
                {move || diagnosis.get().map(render_diagnosis)}
            </div>
        </Show>
    }
}

fn render_diagnosis(value: Value) -> AnyView {
    let summary = DiagnosisView::from_value(&value);
    if summary.is_empty() {
        let raw = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        return view! { <pre class="result-raw">{raw}</pre> }.into_any();
    }

    let disease = (!summary.disease.is_empty())
        .then(|| view! { <h3 class="result-disease">{summary.disease.clone()}</h3> });
    let confidence = summary.confidence.map(|c| {
        view! { <p class="result-confidence">{format!("Confidence: {:.1}%", c * 100.0)}</p> }
    });
    let description = (!summary.description.is_empty())
        .then(|| view! { <p class="result-description">{summary.description.clone()}</p> });
    let remedies = (!summary.remedies.is_empty()).then(|| {
        view! {
            <div class="result-remedies">
                <h4>"Remedies"</h4>
                <ul>
                    {summary
                        .remedies
                        .iter()
                        .map(|remedy| view! { <li>{remedy.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    view! {
        <div class="result-fields">
            {disease}
            {confidence}
            {description}
            {remedies}
        </div>
    }
    .into_any()
}
