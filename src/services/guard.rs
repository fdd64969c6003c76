//! Authorization gate consulted before a protected screen renders.

use crate::models::{Role, Session, UserProfile};

use super::auth::{AuthService, Navigation};
use super::session_store::SessionStore;

/// Verdict on a session for one navigation, before side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Granted,
    Unauthenticated,
    Deactivated,
    Forbidden,
}

/// What the router does with a protected navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Render(UserProfile),
    Redirect(Navigation),
}

impl GuardDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(nav) => Some(nav.path()),
        }
    }
}

/// Pure access check. Deactivation is tested before the role so a disabled
/// super-admin is signed out rather than sent home.
pub fn evaluate(session: Option<&Session>, required_role: Option<&Role>) -> Access {
    let Some(session) = session else {
        return Access::Unauthenticated;
    };

    if !session.user.is_active {
        return Access::Deactivated;
    }

    match required_role {
        Some(role) if !session.user.has_role(role) => Access::Forbidden,
        _ => Access::Granted,
    }
}

pub struct RouteGuard;

impl RouteGuard {
    /// Decides a navigation and applies the logout a deactivated account needs.
    pub fn check<S: SessionStore>(
        auth: &mut AuthService<S>,
        required_role: Option<&Role>,
    ) -> GuardDecision {
        let session = auth.current_session();

        match evaluate(session.as_ref(), required_role) {
            Access::Granted => match session {
                Some(session) => GuardDecision::Render(session.user),
                None => GuardDecision::Redirect(Navigation::Login),
            },
            Access::Unauthenticated => GuardDecision::Redirect(Navigation::Login),
            Access::Deactivated => {
                if let Some(session) = &session {
                    log::warn!(
                        "Signing out deactivated account {:?}",
                        session.user.user_name
                    );
                }
                GuardDecision::Redirect(auth.logout())
            }
            Access::Forbidden => {
                if let (Some(session), Some(role)) = (&session, required_role) {
                    log::info!(
                        "User {:?} ({}) denied a {} screen",
                        session.user.user_name,
                        session.user.role_name,
                        role
                    );
                }
                GuardDecision::Redirect(Navigation::Home)
            }
        }
    }
}
