use uuid::Uuid;

use contracts::session::SessionSnapshot;

use super::registry;
use crate::shared::error::ApiError;

/// Open a new session on the main screen, no admin rights
pub fn create() -> SessionSnapshot {
    let (id, state) = registry::create();
    tracing::info!("session {} opened", id);
    SessionSnapshot::of(id, &state)
}

pub fn snapshot(id: Uuid) -> Result<SessionSnapshot, ApiError> {
    registry::get(id)
        .map(|state| SessionSnapshot::of(id, &state))
        .ok_or(ApiError::SessionNotFound)
}

/// Check the candidate secret against the configured one
///
/// A wrong secret leaves the session exactly as it was.
pub fn login(id: Uuid, candidate: &str, secret: &str) -> Result<SessionSnapshot, ApiError> {
    let result = registry::with_state(id, |state| {
        if state.login(candidate, secret) {
            Some(SessionSnapshot::of(id, state))
        } else {
            None
        }
    })
    .ok_or(ApiError::SessionNotFound)?;

    match result {
        Some(snapshot) => {
            tracing::info!("session {} entered admin mode", id);
            Ok(snapshot)
        }
        None => {
            tracing::warn!("session {} failed admin login", id);
            Err(ApiError::AuthenticationFailed)
        }
    }
}

pub fn logout(id: Uuid) -> Result<SessionSnapshot, ApiError> {
    registry::with_state(id, |state| {
        state.logout();
        SessionSnapshot::of(id, state)
    })
    .ok_or(ApiError::SessionNotFound)
}

pub fn navigate(id: Uuid, target: &str) -> Result<SessionSnapshot, ApiError> {
    registry::with_state(id, |state| {
        state.navigate(target);
        SessionSnapshot::of(id, state)
    })
    .ok_or(ApiError::SessionNotFound)
}

/// Gate for admin-only requests
///
/// The session must exist and have passed the auth gate; each failure maps
/// to its own user-facing error.
pub fn authorize_admin(id: Uuid) -> Result<(), ApiError> {
    let state = registry::get(id).ok_or(ApiError::SessionNotFound)?;
    if state.admin_authenticated {
        Ok(())
    } else {
        Err(ApiError::AdminRequired)
    }
}

pub fn end(id: Uuid) -> Result<(), ApiError> {
    if registry::remove(id) {
        tracing::info!("session {} closed", id);
        Ok(())
    } else {
        Err(ApiError::SessionNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::category::CategoryKey;
    use contracts::session::View;

    const SECRET: &str = "1234";

    #[test]
    fn login_with_wrong_secret_keeps_view_and_flag() {
        let created = create();
        navigate(created.id, "manual").unwrap();

        let err = login(created.id, "9999", SECRET).unwrap_err();
        assert!(matches!(err, ApiError::AuthenticationFailed));

        let snap = snapshot(created.id).unwrap();
        assert_eq!(snap.view, View::Category(CategoryKey::Manual));
        assert!(!snap.admin_authenticated);

        end(created.id).unwrap();
    }

    #[test]
    fn login_logout_cycle() {
        let created = create();

        let snap = login(created.id, SECRET, SECRET).unwrap();
        assert!(snap.admin_authenticated);
        assert_eq!(snap.view, View::AdminPanel);
        assert!(authorize_admin(created.id).is_ok());

        let snap = logout(created.id).unwrap();
        assert!(!snap.admin_authenticated);
        assert_eq!(snap.view, View::Main);
        assert!(matches!(
            authorize_admin(created.id),
            Err(ApiError::AdminRequired)
        ));

        end(created.id).unwrap();
    }

    #[test]
    fn operations_on_unknown_session_are_rejected() {
        let id = Uuid::new_v4();
        assert!(matches!(snapshot(id), Err(ApiError::SessionNotFound)));
        assert!(matches!(
            login(id, SECRET, SECRET),
            Err(ApiError::SessionNotFound)
        ));
        assert!(matches!(navigate(id, "main"), Err(ApiError::SessionNotFound)));
        assert!(matches!(
            authorize_admin(id),
            Err(ApiError::SessionNotFound)
        ));
    }

    #[test]
    fn admin_gate_rejects_sessions_that_never_logged_in() {
        let created = create();
        assert!(matches!(
            authorize_admin(created.id),
            Err(ApiError::AdminRequired)
        ));
        end(created.id).unwrap();
    }
}
