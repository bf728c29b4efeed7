//! Location selector component.
//!
//! Two dependent dropdowns: state first, then one of its districts.
//! The callback fires only once both administrative levels are known.

use leptos::prelude::*;

use crop_doctor_common::{districts_for, STATES};

#[component]
pub fn LocationSelector<F>(on_location_select: F) -> impl IntoView
where
    F: Fn(String, String) + 'static + Clone,
{
    let (state, set_state) = signal(String::new());
    let (district, set_district) = signal(String::new());

    let on_state_change = move |ev| {
        set_state.set(event_target_value(&ev));
        // Districts belong to a state; a new state voids the old pick.
        set_district.set(String::new());
    };

    let on_district_change = {
        let on_location_select = on_location_select.clone();
        move |ev| {
            let picked = event_target_value(&ev);
            set_district.set(picked.clone());

            let state_value = state.get_untracked();
            if !state_value.is_empty() && !picked.is_empty() {
                on_location_select(state_value, picked);
            }
        }
    };

    view! {
        <div class="form-group">
            <label for="state">"State"</label>
            <select id="state" on:change=on_state_change>
                <option value="" selected=move || state.get().is_empty()>
                    "Select a state..."
                </option>
                {STATES
                    .iter()
                    .map(|(name, _)| view! { <option value=*name>{*name}</option> })
                    .collect_view()}
            </select>

            <label for="district">"District"</label>
            <select
                id="district"
                disabled=move || state.get().is_empty()
                on:change=on_district_change
            >
                <option value="" selected=move || district.get().is_empty()>
                    "Select a district..."
                </option>
                {move || {
                    districts_for(&state.get())
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
