//! Classifier service call (fetch + multipart form)

use algomatch_common::{Error, Result, ServiceConfig, UploadedFile};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// Converts a rejected JS promise or exception into a transport error.
pub fn js_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Builds the multipart body: one `file` part per upload, named after it.
fn build_form(files: &[UploadedFile<File>]) -> Result<FormData> {
    let form = FormData::new().map_err(js_error)?;
    for file in files {
        form.append_with_blob_and_filename("file", &file.handle, &file.name)
            .map_err(js_error)?;
    }
    Ok(form)
}

/// Sends one batch to `{base}/predict/{top_k}/`.
///
/// # Returns
/// The raw response body; parsing belongs to the session.
pub async fn predict(config: &ServiceConfig, files: &[UploadedFile<File>]) -> Result<String> {
    let form = build_form(files)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let url = config.predict_url();
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Transport(format!("HTTP {} from {}", resp.status(), url)));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::InvalidResponse("response body is not text".into()))
}
