//! Group roster store. Membership is backend-authoritative, so every roster
//! command (assign, remove/ban, unban) is followed by a full snapshot
//! refetch instead of a local merge.

use crate::{
    api::ApiClient,
    features::{
        groups::{
            client,
            types::{AllGroups, Group},
        },
        users::types::User,
    },
    stores::{error_message, StoreOutcome},
};
use std::sync::{Arc, RwLock};

const FETCH_FALLBACK: &str = "Unable to load groups.";
const COMMAND_FALLBACK: &str = "Unable to update the group roster.";

#[derive(Default)]
struct RosterState {
    snapshot: Option<AllGroups>,
    loading: bool,
    error: Option<String>,
}

pub struct GroupRosterStore {
    api: Arc<ApiClient>,
    state: RwLock<RosterState>,
}

impl GroupRosterStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(RosterState::default()),
        }
    }

    /// Fetches the full roster snapshot.
    pub async fn fetch_all(&self) -> StoreOutcome {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = client::all_groups(&self.api).await;
        let outcome = match result {
            Ok(snapshot) => {
                self.write(|state| state.snapshot = Some(snapshot));
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

    /// Assigns a user to a group, then refetches the snapshot.
    pub async fn assign_user(&self, group_id: i64, user_id: i64) -> StoreOutcome {
        self.command(client::assign_user(&self.api, group_id, user_id))
            .await
    }

    /// Removes (bans) a user from a group, then refetches the snapshot.
    pub async fn remove_user(&self, group_id: i64, user_id: i64, ban_reason: &str) -> StoreOutcome {
        self.command(client::remove_user(&self.api, group_id, user_id, ban_reason))
            .await
    }

    /// Lifts a user's ban, then refetches the snapshot.
    pub async fn unban_user(&self, user_id: i64) -> StoreOutcome {
        self.command(client::unban_user(&self.api, user_id)).await
    }

    async fn command(
        &self,
        request: impl std::future::Future<Output = Result<(), crate::errors::AppError>>,
    ) -> StoreOutcome {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });

        match request.await {
            Ok(()) => {
                self.write(|state| state.loading = false);
                self.fetch_all().await
            }
            Err(err) => {
                let message = error_message(&err, COMMAND_FALLBACK);
                self.write(|state| {
                    state.error = Some(message.clone());
                    state.loading = false;
                });
                StoreOutcome::failed(message)
            }
        }
    }

    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        self.read(|state| {
            state
                .snapshot
                .as_ref()
                .map(|snapshot| snapshot.groups_with_users.clone())
                .unwrap_or_default()
        })
    }

    #[must_use]
    pub fn users_without_group(&self) -> Vec<User> {
        self.read(|state| {
            state
                .snapshot
                .as_ref()
                .map(|snapshot| snapshot.users_without_group.clone())
                .unwrap_or_default()
        })
    }

    #[must_use]
    pub fn banned_users(&self) -> Vec<User> {
        self.read(|state| {
            state
                .snapshot
                .as_ref()
                .map(|snapshot| snapshot.users_banned.clone())
                .unwrap_or_default()
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
        self.write(|state| *state = RosterState::default());
    }

    fn read<T>(&self, reader: impl FnOnce(&RosterState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        reader(&state)
    }

    fn write(&self, writer: impl FnOnce(&mut RosterState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer(&mut state);
    }
}
