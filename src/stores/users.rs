//! User-list stores for the staff screens. The admin store works against the
//! server-filtered tab endpoint and reloads the current tab after every
//! moderation command; the assistant store keeps plain lists and maintains
//! its cache from the responses the REST endpoints already return.

use crate::{
    api::ApiClient,
    features::users::{
        client,
        types::{AdminUserUpdate, User, UsersByTabPage, UsersByTabParams},
    },
    stores::{error_message, StoreOutcome},
};
use std::sync::{Arc, RwLock};

const FETCH_FALLBACK: &str = "Unable to load users.";
const MODERATE_FALLBACK: &str = "Unable to apply the change.";

#[derive(Default)]
struct AdminUsersState {
    params: Option<UsersByTabParams>,
    page: Option<UsersByTabPage>,
    loading: bool,
    error: Option<String>,
}

/// Paginated per-tab user list plus the moderation commands acting on it.
pub struct AdminUsersStore {
    api: Arc<ApiClient>,
    state: RwLock<AdminUsersState>,
}

impl AdminUsersStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(AdminUsersState::default()),
        }
    }

    /// Fetches one tab of the user list and remembers the request so
    /// moderation commands can reload it.
    pub async fn fetch_tab(&self, params: UsersByTabParams) -> StoreOutcome {
        self.write(|state| {
            state.loading = true;
            state.error = None;
            state.params = Some(params.clone());
        });

        let result = client::by_tab(&self.api, &params).await;
        let outcome = match result {
            Ok(page) => {
                self.write(|state| state.page = Some(page));
                StoreOutcome::succeeded()
            }
            Err(err) => {
                let message = error_message(&err, FETCH_FALLBACK);
                self.write(|state| state.error = Some(message.clone()));
                StoreOutcome::failed(message)
            }
        };

        self.write(|state| state.loading = false);
        outcome
    }

    /// Reloads the last-fetched tab, if any.
    pub async fn reload(&self) -> StoreOutcome {
        let Some(params) = self.read(|state| state.params.clone()) else {
            return StoreOutcome::succeeded();
        };
        self.fetch_tab(params).await
    }

    pub async fn approve_photo(&self, user_id: i64) -> StoreOutcome {
        self.command(client::approve_photo(&self.api, user_id)).await
    }

    pub async fn reject_photo(&self, user_id: i64, reason: &str) -> StoreOutcome {
        self.command(client::reject_photo(&self.api, user_id, reason))
            .await
    }

    pub async fn approve_account(&self, user_id: i64) -> StoreOutcome {
        self.command(client::approve_account(&self.api, user_id))
            .await
    }

    pub async fn reject_account(&self, user_id: i64, reason: &str) -> StoreOutcome {
        self.command(client::reject_account(&self.api, user_id, reason))
            .await
    }

    pub async fn update_user(&self, user_id: i64, fields: &AdminUserUpdate) -> StoreOutcome {
        self.command(client::admin_update(&self.api, user_id, fields))
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> StoreOutcome {
        self.command(client::admin_delete(&self.api, user_id)).await
    }

    /// Runs a moderation command and, on success, reloads the current tab.
    /// Read-after-write is not guaranteed server-side, so the reload is
    /// unconditional rather than a local cache merge.
    async fn command(
        &self,
        request: impl std::future::Future<Output = Result<(), crate::errors::AppError>>,
    ) -> StoreOutcome {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });

        let outcome = match request.await {
            Ok(()) => {
                self.write(|state| state.loading = false);
                return self.reload().await;
            }
            Err(err) => {
                let message = error_message(&err, MODERATE_FALLBACK);
                self.write(|state| state.error = Some(message.clone()));
                StoreOutcome::failed(message)
            }
        };

        self.write(|state| state.loading = false);
        outcome
    }

    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read(|state| {
            state
                .page
                .as_ref()
                .map(|page| page.data.clone())
                .unwrap_or_default()
        })
    }

    #[must_use]
    pub fn current_page(&self) -> Option<u32> {
        self.read(|state| state.page.as_ref().and_then(|page| page.current_page))
    }

    #[must_use]
    pub fn last_page(&self) -> Option<u32> {
        self.read(|state| state.page.as_ref().and_then(|page| page.last_page))
    }

    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.read(|state| state.page.as_ref().and_then(|page| page.total))
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
        self.write(|state| *state = AdminUsersState::default());
    }

    fn read<T>(&self, reader: impl FnOnce(&AdminUsersState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        reader(&state)
    }

    fn write(&self, writer: impl FnOnce(&mut AdminUsersState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer(&mut state);
    }
}

#[derive(Default)]
struct AssistantUsersState {
    users: Vec<User>,
    connected: Vec<User>,
    loading: bool,
    error: Option<String>,
}

/// Flat user lists for the assistant screens.
pub struct AssistantUsersStore {
    api: Arc<ApiClient>,
    state: RwLock<AssistantUsersState>,
}

impl AssistantUsersStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(AssistantUsersState::default()),
        }
    }

    /// Fetches every user.
    pub async fn fetch_all(&self) -> StoreOutcome {
        self.begin();

        let result = client::all(&self.api).await;
        let outcome = match result {
            Ok(users) => {
                self.write(|state| state.users = users);
                StoreOutcome::succeeded()
            }
            Err(err) => {
                let message = error_message(&err, FETCH_FALLBACK);
                self.write(|state| state.error = Some(message.clone()));
                StoreOutcome::failed(message)
            }
        };

        self.finish();
        outcome
    }

    /// Fetches users active within the last `minutes` minutes.
    pub async fn fetch_connected(&self, minutes: u32) -> StoreOutcome {
        self.begin();

        let result = client::connected(&self.api, minutes).await;
        let outcome = match result {
            Ok(users) => {
                self.write(|state| state.connected = users);
                StoreOutcome::succeeded()
            }
            Err(err) => {
                let message = error_message(&err, FETCH_FALLBACK);
                self.write(|state| state.error = Some(message.clone()));
                StoreOutcome::failed(message)
            }
        };

        self.finish();
        outcome
    }

    /// Updates a user and folds the response back into the cached list. The
    /// PUT endpoint returns the updated record, so no reload is needed here.
    pub async fn update_user(&self, id: i64, fields: &AdminUserUpdate) -> StoreOutcome {
        self.begin();

        let result = client::update(&self.api, id, fields).await;
        let outcome = match result {
            Ok(updated) => {
                self.write(|state| {
                    if let Some(slot) = state.users.iter_mut().find(|user| user.id == id) {
                        *slot = updated;
                    }
                });
                StoreOutcome::succeeded()
            }
            Err(err) => {
                let message = error_message(&err, MODERATE_FALLBACK);
                self.write(|state| state.error = Some(message.clone()));
                StoreOutcome::failed(message)
            }
        };

        self.finish();
        outcome
    }

    /// Deletes a user and drops them from the cached list.
    pub async fn delete_user(&self, id: i64) -> StoreOutcome {
        self.begin();

        let result = client::destroy(&self.api, id).await;
        let outcome = match result {
            Ok(()) => {
                self.write(|state| state.users.retain(|user| user.id != id));
                StoreOutcome::succeeded()
            }
            Err(err) => {
                let message = error_message(&err, MODERATE_FALLBACK);
                self.write(|state| state.error = Some(message.clone()));
                StoreOutcome::failed(message)
            }
        };

        self.finish();
        outcome
    }

    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read(|state| state.users.clone())
    }

    #[must_use]
    pub fn connected_users(&self) -> Vec<User> {
        self.read(|state| state.connected.clone())
    }

    #[must_use]
    pub fn total_users(&self) -> usize {
        self.read(|state| state.users.len())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.read(|state| state.error.clone())
    }

    pub fn clear_error(&self) {
        self.write(|state| state.error = None);
    }

    pub fn reset(&self) {
        self.write(|state| *state = AssistantUsersState::default());
    }

    fn begin(&self) {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn finish(&self) {
        self.write(|state| state.loading = false);
    }

    fn read<T>(&self, reader: impl FnOnce(&AssistantUsersState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        reader(&state)
    }

    fn write(&self, writer: impl FnOnce(&mut AssistantUsersState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer(&mut state);
    }
}
