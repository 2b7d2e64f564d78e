//! Role derivation and the pure permission check. `role_id` is the only
//! authorization signal the backend gives the client: 1 is admin, 3 is
//! assistant, anything else is a regular member. Keeping the check pure
//! makes it testable without a store or network.

use crate::{
    features::users::types::User,
    routes::{RouteName, RouteRequirement},
};

/// Closed role enumeration derived from `role_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Assistant,
    Member,
}

impl Role {
    /// Maps a backend `role_id` onto a role. Unknown or missing ids are
    /// regular members.
    #[must_use]
    pub fn from_role_id(role_id: Option<i64>) -> Self {
        match role_id {
            Some(1) => Role::Admin,
            Some(3) => Role::Assistant,
            _ => Role::Member,
        }
    }

    /// Role of a user record.
    #[must_use]
    pub fn of(user: &User) -> Self {
        Self::from_role_id(user.role_id)
    }

    /// Admins and assistants share the staff screens.
    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Assistant)
    }

    /// Default route a freshly authenticated user lands on.
    #[must_use]
    pub fn landing(self) -> RouteName {
        match self {
            Role::Admin => RouteName::CeoUsers,
            Role::Assistant => RouteName::AssistantUsers,
            Role::Member => RouteName::UserGroups,
        }
    }
}

/// Decides whether `role` may enter a route with the given requirement.
/// `None` allows the navigation; `Some(route)` names the fixed redirect
/// target for the denial.
#[must_use]
pub fn check(role: Role, requirement: RouteRequirement) -> Option<RouteName> {
    match requirement {
        RouteRequirement::AdminOrAssistant if !role.is_staff() => Some(RouteName::UserGroups),
        RouteRequirement::Assistant if role != Role::Assistant => Some(RouteName::UserGroups),
        RouteRequirement::Member if role.is_staff() => Some(RouteName::CeoUsers),
        _ => None,
    }
}
