use crate::game::{Match, MatchId};

use dashmap::DashMap;

/// The persistence collaborator consumed by the orchestrator.
///
/// The engine only ever performs scoped load-mutate-save units against a
/// single match id; serializing those units is the orchestrator's job, so
/// implementations just need plain storage semantics.
pub trait MatchStore: Send + Sync {
    /// Loads a snapshot of the match, or `None` when the id is unknown.
    fn load(&self, id: &MatchId) -> Option<Match>;

    /// Persists the match, replacing any previous snapshot.
    fn save(&self, state: Match);

    fn exists(&self, id: &MatchId) -> bool;

    fn list_all(&self) -> Vec<Match>;
}

/// In-memory store backed by a concurrent map, keyed by match id.
#[derive(Default)]
pub struct InMemoryMatchStore {
    matches: DashMap<MatchId, Match>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn load(&self, id: &MatchId) -> Option<Match> {
        self.matches.get(id).map(|entry| entry.value().clone())
    }

    fn save(&self, state: Match) {
        self.matches.insert(state.id(), state);
    }

    fn exists(&self, id: &MatchId) -> bool {
        self.matches.contains_key(id)
    }

    fn list_all(&self) -> Vec<Match> {
        self.matches
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
