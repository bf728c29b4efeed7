//! Crop selector component.

use leptos::prelude::*;

use crop_doctor_common::CROPS;

#[component]
pub fn CropSelector<F>(selected_crop: ReadSignal<String>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <div class="form-group">
            <label for="crop">"Crop"</label>
            <select id="crop" on:change=move |ev| on_select(event_target_value(&ev))>
                <option value="" selected=move || selected_crop.get().is_empty()>
                    "Select a crop..."
                </option>
                {CROPS
                    .iter()
                    .map(|(id, label)| {
                        let id_owned = id.to_string();
                        view! {
                            <option
                                value=*id
                                selected=move || selected_crop.get() == id_owned
                            >
                                {*label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
