// =============================================================================
// USDZ Web - Best-Effort Batch Upload
// =============================================================================
// Optional early upload of an accepted texture batch. The form submission is
// what actually delivers the files; failures here are only logged.
// =============================================================================

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use web_sys::{FileList, FormData};

use crate::error::{js_error_text, UploadError};

/// Endpoint receiving early batch uploads.
pub const UPLOAD_ENDPOINT: &str = "/ajax_upload";

/// Multipart field name for every file in the batch.
pub const UPLOAD_FIELD: &str = "files";

/// What the server reports back for an upload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UploadReply {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub message: Option<String>,
}

/// Package `files` as multipart form data.
pub fn batch_form_data(files: &FileList) -> Result<FormData, UploadError> {
    let body = FormData::new().map_err(|e| UploadError::Body(js_error_text(&e)))?;
    for file in (0..files.length()).filter_map(|i| files.get(i)) {
        body.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
            .map_err(|e| UploadError::Body(js_error_text(&e)))?;
    }
    Ok(body)
}

/// POST one batch to [`UPLOAD_ENDPOINT`].
pub async fn upload_batch(files: &FileList) -> Result<UploadReply, UploadError> {
    let body = batch_form_data(files)?;
    let response = Request::post(UPLOAD_ENDPOINT)
        .body(body)
        .map_err(|e| UploadError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    handle_response(response).await
}

async fn handle_response(response: Response) -> Result<UploadReply, UploadError> {
    match response.status() {
        200..=299 => response
            .json::<UploadReply>()
            .await
            .map_err(|e| UploadError::Deserialize(e.to_string())),
        status => {
            let message = response.text().await.unwrap_or_default();
            Err(UploadError::Server { status, message })
        }
    }
}

/// Fire and forget an upload of `files`.
pub fn spawn_upload(files: FileList) {
    wasm_bindgen_futures::spawn_local(async move {
        match upload_batch(&files).await {
            Ok(reply) => log::info!(
                "early upload accepted: {}",
                reply.message.or(reply.name).unwrap_or_else(|| "ok".into())
            ),
            Err(e) => log::warn!("early upload failed, form submission unaffected: {e}"),
        }
    });
}
