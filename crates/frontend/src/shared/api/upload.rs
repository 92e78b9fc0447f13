use contracts::upload::{DeleteFileResponse, FileListResponse, UploadResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Upload one file as multipart form data
pub async fn upload_file(file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("Failed to build form: {:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;

    let response = Request::post(&format!("{}/api/upload/file", api_base()))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// List uploaded files
pub async fn list_files() -> Result<FileListResponse, String> {
    let response = Request::get(&format!("{}/api/upload/files", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to list files: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete an uploaded file by name
pub async fn delete_file(filename: &str) -> Result<DeleteFileResponse, String> {
    let response = Request::delete(&format!(
        "{}/api/upload/files/{}",
        api_base(),
        urlencoding::encode(filename)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
