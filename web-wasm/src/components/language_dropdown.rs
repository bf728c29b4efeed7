//! Language dropdown component.

use leptos::prelude::*;

use crop_doctor_common::LANGUAGES;

#[component]
pub fn LanguageDropdown<F>(selected_language: ReadSignal<String>, on_language_change: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <div class="form-group">
            <label for="language">"Language"</label>
            <select id="language" on:change=move |ev| on_language_change(event_target_value(&ev))>
                {LANGUAGES
                    .iter()
                    .map(|(code, label)| {
                        let code_owned = code.to_string();
                        view! {
                            <option
                                value=*code
                                selected=move || selected_language.get() == code_owned
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
