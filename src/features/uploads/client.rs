//! Signed direct-upload flow. The backend only mints a short-lived signature;
//! the binary goes straight to the image host, so the upload client carries
//! no cookies and no CSRF header.

use crate::{
    api::{ApiClient, APP_USER_AGENT},
    errors::AppError,
    features::uploads::types::{CloudinarySignature, UploadedImage},
};
use reqwest::multipart::{Form, Part};
use serde_json::json;
use std::time::Duration;

/// Public Cloudinary upload endpoint prefix.
pub const CLOUDINARY_UPLOAD_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Binary uploads get a longer budget than JSON calls.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Asks the backend to sign an upload into the given folder.
pub async fn signature(api: &ApiClient, folder: &str) -> Result<CloudinarySignature, AppError> {
    api.post_json("/api/cloudinary/signature", &json!({ "folder": folder }))
        .await
}

/// Uploads an image directly to Cloudinary and returns its hosted URL.
pub async fn upload_image(
    signature: &CloudinarySignature,
    bytes: Vec<u8>,
    filename: &str,
    content_type: &str,
) -> Result<String, AppError> {
    upload_image_to(CLOUDINARY_UPLOAD_BASE, signature, bytes, filename, content_type).await
}

/// Same as [`upload_image`] against an explicit upload base URL.
pub async fn upload_image_to(
    base_url: &str,
    signature: &CloudinarySignature,
    bytes: Vec<u8>,
    filename: &str,
    content_type: &str,
) -> Result<String, AppError> {
    let file = Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str(content_type)
        .map_err(|err| AppError::Validation(format!("Unsupported content type: {err}")))?;

    let mut form = Form::new()
        .part("file", file)
        .text("api_key", signature.api_key.clone())
        .text("timestamp", signature.timestamp.to_string())
        .text("signature", signature.signature.clone());
    if let Some(folder) = &signature.folder {
        form = form.text("folder", folder.clone());
    }

    let client = reqwest::Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(UPLOAD_TIMEOUT)
        .build()
        .map_err(|err| AppError::Config(format!("Failed to build upload client: {err}")))?;

    let url = format!(
        "{}/{}/image/upload",
        base_url.trim_end_matches('/'),
        signature.cloud_name
    );
    let response = send_multipart(&client, &url, form).await?;

    response
        .json::<UploadedImage>()
        .await
        .map(|uploaded| uploaded.secure_url)
        .map_err(|err| AppError::Parse(format!("Failed to decode upload response: {err}")))
}

async fn send_multipart(
    client: &reqwest::Client,
    url: &str,
    form: Form,
) -> Result<reqwest::Response, AppError> {
    let response = client.post(url).multipart(form).send().await.map_err(|err| {
        if err.is_timeout() {
            AppError::Timeout("Upload timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the upload host: {err}"))
        }
    })?;

    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status: status.as_u16(),
            message: if body.trim().is_empty() {
                "Upload failed.".to_string()
            } else {
                body.trim().chars().take(200).collect()
            },
        })
    }
}
