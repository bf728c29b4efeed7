//! Image uploader component with inline preview.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader, HtmlInputElement, ProgressEvent};

use crop_doctor_common::ImageAttachment;

#[component]
pub fn ImageUploader<F>(preview: ReadSignal<Option<String>>, on_image_selected: F) -> impl IntoView
where
    F: Fn(ImageAttachment, String) + 'static + Clone,
{
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                read_file(file, on_image_selected.clone());
            }
        }
    };

    view! {
        <div class="form-group">
            <label for="crop-image">"Crop image"</label>
            <input type="file" id="crop-image" accept="image/*" on:change=on_change />
            <Show when=move || preview.get().is_some()>
                <img
                    class="image-preview"
                    src=move || preview.get().unwrap_or_default()
                    alt="Selected crop"
                />
            </Show>
        </div>
    }
}

fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(ImageAttachment, String) + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                let attachment = ImageAttachment {
                    file_name: file_name.clone(),
                    data_url: data_url.clone(),
                };
                on_image_selected(attachment, data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
