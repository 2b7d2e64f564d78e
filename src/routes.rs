//! Closed route table with the per-route authentication and role
//! requirements the guard enforces. Routes default to requiring
//! authentication unless explicitly marked public.

/// Every navigable route in the admin console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Register,
    CeoUsers,
    CeoGroups,
    AssistantUsers,
    AssistantGroups,
    UserGroups,
    UserAnnouncements,
    UserQuestionaries,
    NotFound,
}

/// Role gate a route may declare on top of requiring authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Admin screens; assistants are allowed in as well.
    AdminOrAssistant,
    /// Assistant screens; assistants only.
    Assistant,
    /// Member screens; staff get bounced to their own landing page.
    Member,
}

#[derive(Clone, Copy, Debug)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requirement: Option<RouteRequirement>,
}

impl RouteName {
    /// Static metadata consumed by the guard.
    #[must_use]
    pub fn meta(self) -> RouteMeta {
        match self {
            RouteName::Login | RouteName::Register => RouteMeta {
                requires_auth: false,
                requirement: None,
            },
            RouteName::CeoUsers | RouteName::CeoGroups => RouteMeta {
                requires_auth: true,
                requirement: Some(RouteRequirement::AdminOrAssistant),
            },
            RouteName::AssistantUsers | RouteName::AssistantGroups => RouteMeta {
                requires_auth: true,
                requirement: Some(RouteRequirement::Assistant),
            },
            RouteName::UserGroups | RouteName::UserAnnouncements | RouteName::UserQuestionaries => {
                RouteMeta {
                    requires_auth: true,
                    requirement: Some(RouteRequirement::Member),
                }
            }
            RouteName::NotFound => RouteMeta {
                requires_auth: true,
                requirement: None,
            },
        }
    }

    /// True for the unauthenticated entry routes (login and register).
    #[must_use]
    pub fn is_entry(self) -> bool {
        matches!(self, RouteName::Login | RouteName::Register)
    }
}
