//! Cache of active announcements for the member screens.

use crate::{
    api::ApiClient,
    features::announcements::{client, types::Announcement},
    stores::{error_message, StoreOutcome},
};
use std::sync::{Arc, RwLock};

const FETCH_FALLBACK: &str = "Unable to load announcements.";

#[derive(Default)]
struct AnnouncementState {
    announcements: Vec<Announcement>,
    loading: bool,
    error: Option<String>,
}

pub struct AnnouncementStore {
    api: Arc<ApiClient>,
    state: RwLock<AnnouncementState>,
}

impl AnnouncementStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(AnnouncementState::default()),
        }
    }

    /// Fetches the active announcements, replacing the cache. A failed fetch
    /// empties the cache rather than leaving stale entries visible.
    pub async fn fetch_active(&self) -> StoreOutcome {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = client::list(&self.api, "active").await;
        let outcome = match result {
            Ok(announcements) => {
                self.write(|state| state.announcements = announcements);
                StoreOutcome::succeeded()
            }
            Err(err) => {
                let message = error_message(&err, FETCH_FALLBACK);
                self.write(|state| {
                    state.announcements.clear();
                    state.error = Some(message.clone());
                });
                StoreOutcome::failed(message)
            }
        };

        self.write(|state| state.loading = false);
        outcome
    }

    #[must_use]
    pub fn announcements(&self) -> Vec<Announcement> {
        self.read(|state| state.announcements.clone())
    }

    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<Announcement> {
        self.read(|state| {
            state
                .announcements
                .iter()
                .find(|announcement| announcement.id == id)
                .cloned()
        })
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.read(|state| state.error.clone())
    }

    pub fn reset(&self) {
        self.write(|state| *state = AnnouncementState::default());
    }

    fn read<T>(&self, reader: impl FnOnce(&AnnouncementState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        reader(&state)
    }

    fn write(&self, writer: impl FnOnce(&mut AnnouncementState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer(&mut state);
    }
}
