use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::CategoryKey;

/// The currently active screen
///
/// A closed set: the UI Shell can only ever be asked to render one of these,
/// unknown view identifiers cannot exist past the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "category", rename_all = "snake_case")]
pub enum View {
    Main,
    Category(CategoryKey),
    AdminPanel,
}

impl View {
    /// Resolve a navigation target coming from the UI Shell
    ///
    /// `"main"` (and the `"back"` action) return to the main screen; a folder
    /// key opens that category. Anything else falls back to `Main`.
    pub fn from_target(target: &str) -> View {
        match target {
            "main" | "back" => View::Main,
            other => match CategoryKey::from_key(other) {
                Some(key) => View::Category(key),
                None => View::Main,
            },
        }
    }
}

/// Per-session state: the active view plus the admin flag
///
/// One instance per connected client, created at session start and dropped at
/// session end. Never shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub view: View,
    pub admin_authenticated: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            view: View::Main,
            admin_authenticated: false,
        }
    }

    /// Plaintext equality check against the shared secret
    ///
    /// Success flips the admin flag and lands on the admin panel whatever the
    /// previous view was. Failure leaves the state untouched.
    pub fn login(&mut self, candidate: &str, secret: &str) -> bool {
        if candidate == secret {
            self.admin_authenticated = true;
            self.view = View::AdminPanel;
            true
        } else {
            false
        }
    }

    /// Drop admin rights and return to the main screen
    pub fn logout(&mut self) {
        self.admin_authenticated = false;
        self.view = View::Main;
    }

    /// Apply a navigation target
    ///
    /// While the admin flag is set the session stays on the admin panel; the
    /// browsing screens belong to the user mode only.
    pub fn navigate(&mut self, target: &str) {
        if self.admin_authenticated {
            self.view = View::AdminPanel;
            return;
        }
        self.view = View::from_target(target);
    }
}

/// Snapshot returned to the UI Shell after every state mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub view: View,
    pub admin_authenticated: bool,
}

impl SessionSnapshot {
    pub fn of(id: Uuid, state: &SessionState) -> Self {
        Self {
            id,
            view: state.view,
            admin_authenticated: state.admin_authenticated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "1234";

    #[test]
    fn starts_on_main_without_admin() {
        let state = SessionState::new();
        assert_eq!(state.view, View::Main);
        assert!(!state.admin_authenticated);
    }

    #[test]
    fn wrong_password_leaves_state_unchanged() {
        let mut state = SessionState::new();
        state.navigate("catalog");
        let before = state.clone();

        for candidate in ["", "123", "12345", "admin", "1234 "] {
            assert!(!state.login(candidate, SECRET));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn correct_password_lands_on_admin_panel_from_any_view() {
        for start in ["main", "catalog", "manual", "video", "application"] {
            let mut state = SessionState::new();
            state.navigate(start);
            assert!(state.login(SECRET, SECRET));
            assert!(state.admin_authenticated);
            assert_eq!(state.view, View::AdminPanel);
        }
    }

    #[test]
    fn logout_resets_to_main() {
        let mut state = SessionState::new();
        state.login(SECRET, SECRET);
        state.logout();
        assert_eq!(state.view, View::Main);
        assert!(!state.admin_authenticated);
    }

    #[test]
    fn category_and_back_navigation() {
        let mut state = SessionState::new();
        state.navigate("video");
        assert_eq!(state.view, View::Category(CategoryKey::Video));
        state.navigate("back");
        assert_eq!(state.view, View::Main);
        // no residue from the earlier visit
        state.navigate("manual");
        assert_eq!(state.view, View::Category(CategoryKey::Manual));
    }

    #[test]
    fn unknown_target_falls_back_to_main() {
        let mut state = SessionState::new();
        state.navigate("catalog");
        state.navigate("does-not-exist");
        assert_eq!(state.view, View::Main);
    }

    #[test]
    fn navigation_is_pinned_while_admin() {
        let mut state = SessionState::new();
        state.login(SECRET, SECRET);
        state.navigate("catalog");
        assert_eq!(state.view, View::AdminPanel);
    }
}
