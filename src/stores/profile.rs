//! Member profile store: photo upload through the signed direct-upload flow
//! and profile edits. Validation here is presentational; the backend remains
//! the authority.

use crate::{
    api::ApiClient,
    features::{
        uploads,
        users::{client, types::ProfileUpdate, types::User},
    },
    stores::error_message,
};
use std::sync::{Arc, RwLock};

const UPLOAD_FALLBACK: &str = "Unable to upload the image.";
const UPDATE_FALLBACK: &str = "Unable to update the profile.";

/// Largest accepted photo, matching the backend's own limit.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Folder signed uploads of member photos land in.
const PHOTO_FOLDER: &str = "user_photos";

/// Result of a profile update; carries the refreshed user on success.
#[derive(Clone, Debug)]
pub struct ProfileOutcome {
    pub success: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

#[derive(Default)]
struct ProfileState {
    loading: bool,
    uploading: bool,
    error: Option<String>,
}

pub struct ProfileStore {
    api: Arc<ApiClient>,
    upload_base: String,
    state: RwLock<ProfileState>,
}

impl ProfileStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            upload_base: uploads::client::CLOUDINARY_UPLOAD_BASE.to_string(),
            state: RwLock::new(ProfileState::default()),
        }
    }

    /// Overrides the upload host, e.g. for a self-hosted mirror.
    #[must_use]
    pub fn with_upload_base(mut self, base_url: impl Into<String>) -> Self {
        self.upload_base = base_url.into();
        self
    }

    /// Validates and uploads a member photo, returning its hosted URL.
    /// Returns `None` on failure with the message recorded in the store.
    pub async fn upload_photo(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Option<String> {
        self.write(|state| {
            state.uploading = true;
            state.error = None;
        });

        let result = self.upload_inner(bytes, filename, content_type).await;
        let url = match result {
            Ok(url) => Some(url),
            Err(err) => {
                let message = match &err {
                    crate::errors::AppError::Validation(message) => message.clone(),
                    other => error_message(other, UPLOAD_FALLBACK),
                };
                self.write(|state| state.error = Some(message));
                None
            }
        };

        self.write(|state| state.uploading = false);
        url
    }

    async fn upload_inner(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<String, crate::errors::AppError> {
        if !content_type.starts_with("image/") {
            return Err(crate::errors::AppError::Validation(
                "Only image files are allowed.".to_string(),
            ));
        }
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(crate::errors::AppError::Validation(
                "The image must not exceed 5MB.".to_string(),
            ));
        }

        let signature = uploads::client::signature(&self.api, PHOTO_FOLDER).await?;
        uploads::client::upload_image_to(
            &self.upload_base,
            &signature,
            bytes,
            filename,
            content_type,
        )
        .await
    }

    /// Updates the member's profile and returns the refreshed record.
    pub async fn update_profile(&self, fields: &ProfileUpdate) -> ProfileOutcome {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = client::update_profile(&self.api, fields).await;
        let outcome = match result {
            Ok(user) => ProfileOutcome {
                success: true,
                user: Some(user),
                error: None,
            },
            Err(err) => {
                let message = error_message(&err, UPDATE_FALLBACK);
                self.write(|state| state.error = Some(message.clone()));
                ProfileOutcome {
                    success: false,
                    user: None,
                    error: Some(message),
                }
            }
        };

        self.write(|state| state.loading = false);
        outcome
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.read(|state| state.uploading)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.read(|state| state.error.clone())
    }

    pub fn clear_error(&self) {
        self.write(|state| state.error = None);
    }

    pub fn reset(&self) {
        self.write(|state| *state = ProfileState::default());
    }

    fn read<T>(&self, reader: impl FnOnce(&ProfileState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        reader(&state)
    }

    fn write(&self, writer: impl FnOnce(&mut ProfileState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer(&mut state);
    }
}
