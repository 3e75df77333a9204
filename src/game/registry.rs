//! Process-local session registry.
//!
//! When one process hosts several independent games, all state is keyed
//! off the session id. Sessions never share state, so the registry is a
//! plain map with no synchronization.

use rustc_hash::FxHashMap;

use crate::core::{GameSession, SessionId};

/// Sessions hosted by this process, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    sessions: FxHashMap<SessionId, GameSession>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under its own id. Replaces any previous
    /// session with the same id and returns it.
    pub fn insert(&mut self, session: GameSession) -> Option<GameSession> {
        self.sessions.insert(session.session_id().clone(), session)
    }

    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut GameSession> {
        self.sessions.get_mut(id)
    }

    /// Drop a finished or abandoned session.
    pub fn remove(&mut self, id: &SessionId) -> Option<GameSession> {
        self.sessions.remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Iterate over all live sessions, unordered.
    pub fn iter(&self) -> impl Iterator<Item = &GameSession> {
        self.sessions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = SessionRegistry::new();
        let session = GameSession::new("ada").unwrap();
        let id = session.session_id().clone();

        assert!(registry.insert(session).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().player_name(), "ada");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut registry = SessionRegistry::new();
        let a = GameSession::new("ada").unwrap();
        let b = GameSession::new("grace").unwrap();
        let a_id = a.session_id().clone();
        let b_id = b.session_id().clone();

        registry.insert(a);
        registry.insert(b);

        assert_eq!(registry.get(&a_id).unwrap().player_name(), "ada");
        assert_eq!(registry.get(&b_id).unwrap().player_name(), "grace");
    }

    #[test]
    fn test_remove() {
        let mut registry = SessionRegistry::new();
        let session = GameSession::new("ada").unwrap();
        let id = session.session_id().clone();

        registry.insert(session);
        assert!(registry.remove(&id).is_some());
        assert!(registry.get(&id).is_none());
        assert!(registry.is_empty());
    }
}
