//! Navigation guard run before every route transition. Entry routes
//! reconcile the in-memory session with a possibly-still-valid backend
//! cookie before deciding; protected routes probe once and then apply the
//! pure role check. Each probe is awaited before deciding, so navigation is
//! never speculative.

use crate::{roles, routes::RouteName, session::SessionStore};
use tracing::debug;

/// Outcome of a guard run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RouteName),
}

/// Decides the navigation to `target` for the given session.
pub async fn before_each(session: &SessionStore, target: RouteName) -> GuardDecision {
    // Login/register: send authenticated users to their landing page, first
    // from memory, then after a backend reconciliation probe.
    if target.is_entry() {
        if session.is_authenticated() {
            return redirect_to_landing(session);
        }

        session.fetch_user().await;
        if session.is_authenticated() {
            return redirect_to_landing(session);
        }

        return GuardDecision::Allow;
    }

    let meta = target.meta();
    if meta.requires_auth {
        if !session.is_authenticated() {
            session.fetch_user().await;
            if !session.is_authenticated() {
                debug!(?target, "unauthenticated navigation; redirecting to login");
                return GuardDecision::Redirect(RouteName::Login);
            }
        }

        if let Some(requirement) = meta.requirement {
            if let Some(redirect) = roles::check(session.role(), requirement) {
                debug!(?target, ?redirect, "role check failed");
                return GuardDecision::Redirect(redirect);
            }
        }
    }

    GuardDecision::Allow
}

fn redirect_to_landing(session: &SessionStore) -> GuardDecision {
    GuardDecision::Redirect(session.role().landing())
}
