use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use contracts::session::SessionState;

/// All live sessions, one independent state object per connected client
///
/// The map itself is process-wide; the states inside it are never shared
/// between sessions.
static SESSIONS: Lazy<RwLock<HashMap<Uuid, SessionState>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn read_map() -> std::sync::RwLockReadGuard<'static, HashMap<Uuid, SessionState>> {
    SESSIONS.read().unwrap_or_else(|e| e.into_inner())
}

fn write_map() -> std::sync::RwLockWriteGuard<'static, HashMap<Uuid, SessionState>> {
    SESSIONS.write().unwrap_or_else(|e| e.into_inner())
}

/// Register a fresh session and return its id and initial state
pub fn create() -> (Uuid, SessionState) {
    let id = Uuid::new_v4();
    let state = SessionState::new();
    write_map().insert(id, state.clone());
    (id, state)
}

/// Current state of a session, if it exists
pub fn get(id: Uuid) -> Option<SessionState> {
    read_map().get(&id).cloned()
}

/// Run a mutation against one session's state
///
/// The write lock is held only for the duration of the closure.
pub fn with_state<T>(id: Uuid, f: impl FnOnce(&mut SessionState) -> T) -> Option<T> {
    let mut map = write_map();
    map.get_mut(&id).map(f)
}

/// Drop a session at the end of its lifetime
pub fn remove(id: Uuid) -> bool {
    write_map().remove(&id).is_some()
}
