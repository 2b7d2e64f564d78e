//! Session store: the single holder of the authenticated user. An explicit
//! context object handed to the guard and to view models rather than an
//! ambient global. `is_authenticated` is derived from the cached user, so
//! the two can never disagree. The `loading` flag is advisory (UI only) and
//! is not a mutual-exclusion gate: interleaved actions race and the last
//! resolved call wins.

use crate::{
    api::ApiClient,
    errors::AppError,
    features::{auth, users::types::User},
    roles::Role,
};
use secrecy::SecretString;
use std::sync::{Arc, RwLock};
use tracing::debug;

const LOGIN_FALLBACK: &str = "Unable to sign in.";
const LOGOUT_FALLBACK: &str = "Unable to sign out.";

/// Discriminated result of a session action. Actions never panic and never
/// rethrow; callers branch on `success`.
#[derive(Clone, Debug)]
pub struct ActionOutcome {
    pub success: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl ActionOutcome {
    fn succeeded(user: Option<User>) -> Self {
        Self {
            success: true,
            user,
            error: None,
        }
    }

    fn failed(error: Option<String>) -> Self {
        Self {
            success: false,
            user: None,
            error,
        }
    }
}

#[derive(Default)]
struct SessionState {
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

/// In-memory session over the shared API client.
pub struct SessionStore {
    api: Arc<ApiClient>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Creates an empty (anonymous) session.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// The API client this session authenticates against.
    #[must_use]
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// Cached copy of the authenticated user.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read(|state| state.user.clone())
    }

    /// True exactly when a user is cached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(|state| state.user.is_some())
    }

    /// Advisory busy flag, true while any action is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    /// Message from the last failed action, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.read(|state| state.error.clone())
    }

    /// Role derived from the cached user. Recomputed on every read so a
    /// profile refresh is reflected immediately.
    #[must_use]
    pub fn role(&self) -> Role {
        self.read(|state| {
            state
                .user
                .as_ref()
                .map_or(Role::Member, |user| Role::from_role_id(user.role_id))
        })
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role() == Role::Admin
    }

    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.is_authenticated() && self.role() == Role::Assistant
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.is_authenticated() && self.role().is_staff()
    }

    /// Bootstraps the CSRF cookie and submits credentials. The bootstrap call
    /// runs on every attempt, even when a session cookie already exists; the
    /// backend reissues the cookie idempotently.
    pub async fn login(&self, email: &str, password: &SecretString) -> ActionOutcome {
        self.begin_action();

        let result = self.login_inner(email, password).await;
        let outcome = match result {
            Ok(user) => {
                self.write(|state| {
                    state.user = Some(user.clone());
                    state.error = None;
                });
                ActionOutcome::succeeded(Some(user))
            }
            Err(err) => {
                let message = err
                    .backend_message()
                    .unwrap_or(LOGIN_FALLBACK)
                    .to_string();
                self.write(|state| {
                    state.user = None;
                    state.error = Some(message.clone());
                });
                ActionOutcome::failed(Some(message))
            }
        };

        self.finish_action();
        outcome
    }

    async fn login_inner(&self, email: &str, password: &SecretString) -> Result<User, AppError> {
        auth::client::csrf_cookie(&self.api).await?;
        auth::client::login(&self.api, email, password).await
    }

    /// Clears the server session, then the local one. The local sign-out
    /// always happens: a failed backend call is recorded but never blocks it.
    pub async fn logout(&self) -> ActionOutcome {
        self.begin_action();

        let result = auth::client::logout(&self.api).await;
        let outcome = match result {
            Ok(()) => {
                self.write(|state| state.user = None);
                ActionOutcome::succeeded(None)
            }
            Err(err) => {
                let message = err
                    .backend_message()
                    .unwrap_or(LOGOUT_FALLBACK)
                    .to_string();
                self.write(|state| {
                    state.user = None;
                    state.error = Some(message.clone());
                });
                ActionOutcome::failed(Some(message))
            }
        };

        self.finish_action();
        outcome
    }

    /// Probes "who am I" to reconcile with a possibly-still-valid session
    /// cookie. A failed probe is a normal outcome, not a fault: the user is
    /// cleared and no error message is stored.
    pub async fn fetch_user(&self) -> ActionOutcome {
        self.begin_action();

        let result = auth::client::me(&self.api).await;
        let outcome = match result {
            Ok(user) => {
                self.write(|state| {
                    state.user = Some(user.clone());
                    state.error = None;
                });
                ActionOutcome::succeeded(Some(user))
            }
            Err(err) => {
                debug!(error = %err, "session probe failed; treating as anonymous");
                self.write(|state| {
                    state.user = None;
                    state.error = None;
                });
                ActionOutcome::failed(None)
            }
        };

        self.finish_action();
        outcome
    }

    /// Replaces the cached user without any network call.
    pub fn set_user(&self, user: Option<User>) {
        self.write(|state| state.user = user);
    }

    /// Drops the last error message.
    pub fn clear_error(&self) {
        self.write(|state| state.error = None);
    }

    /// Returns the session to its initial anonymous state.
    pub fn reset(&self) {
        self.write(|state| *state = SessionState::default());
    }

    fn begin_action(&self) {
        self.write(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn finish_action(&self) {
        self.write(|state| state.loading = false);
    }

    fn read<T>(&self, reader: impl FnOnce(&SessionState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        reader(&state)
    }

    fn write(&self, writer: impl FnOnce(&mut SessionState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer(&mut state);
    }
}
