//! Diagnosis endpoint client.
//!
//! Decodes the picked image out of its data URL, assembles the
//! multipart form the service expects and POSTs it with the browser
//! fetch API. The JSON reply is passed through untyped.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use js_sys::{Array, Uint8Array};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

use crop_doctor_common::{DetectRequest, DetectTransport, Error, Result};

/// Fixed diagnosis service endpoint.
const PREDICT_API_URL: &str = "http://localhost:8000/api/predict/";

/// Extract the base64 data part from a data URL.
///
/// # Arguments
/// * `data_url` - a "data:image/jpeg;base64,/9j/4AAQ..." style data URL
///
/// # Returns
/// The base64-encoded payload, or None when there is no comma separator.
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the MIME type from a data URL.
///
/// # Arguments
/// * `data_url` - a "data:image/jpeg;base64,..." style data URL
///
/// # Returns
/// The MIME type (e.g. "image/jpeg"); "image/jpeg" when absent.
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Assemble the multipart body for one detect request.
///
/// Field names are the service's wire contract: `image`, `crop`,
/// `state`, `district`, `language`.
pub fn build_form(request: &DetectRequest) -> Result<FormData> {
    let base64_data = extract_base64_from_data_url(&request.image.data_url)
        .ok_or_else(|| Error::Encode("image is not a data URL".to_string()))?;
    let bytes = STANDARD
        .decode(base64_data)
        .map_err(|e| Error::Encode(e.to_string()))?;
    let mime_type = extract_mime_type_from_data_url(&request.image.data_url);

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes.as_slice()));
    let mut blob_options = BlobPropertyBag::new();
    blob_options.type_(mime_type);
    let blob =
        Blob::new_with_u8_array_sequence_and_options(&parts, &blob_options).map_err(encode_error)?;

    let form = FormData::new().map_err(encode_error)?;
    form.append_with_blob_and_filename("image", &blob, &request.image.file_name)
        .map_err(encode_error)?;
    form.append_with_str("crop", &request.crop).map_err(encode_error)?;
    form.append_with_str("state", &request.state).map_err(encode_error)?;
    form.append_with_str("district", &request.district)
        .map_err(encode_error)?;
    form.append_with_str("language", &request.language)
        .map_err(encode_error)?;

    Ok(form)
}

/// Talks to the diagnosis backend through `window.fetch`.
pub struct FetchTransport;

impl DetectTransport for FetchTransport {
    async fn send(&self, request: &DetectRequest) -> Result<Value> {
        let form = build_form(request)?;

        let mut opts = RequestInit::new();
        opts.method("POST");
        opts.mode(RequestMode::Cors);
        // The browser sets the multipart content type and boundary.
        opts.body(Some(form.as_ref()));

        let outbound =
            Request::new_with_str_and_init(PREDICT_API_URL, &opts).map_err(network_error)?;

        let window = web_sys::window().unwrap();
        let resp_value = JsFuture::from(window.fetch_with_request(&outbound))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        if !resp.ok() {
            return Err(Error::ApiStatus(resp.status()));
        }

        let json = JsFuture::from(resp.json().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Malformed(e.to_string()))
    }
}

fn encode_error(value: JsValue) -> Error {
    Error::Encode(format!("{value:?}"))
}

fn network_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
