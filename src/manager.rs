use crate::board::{Route, RouteId};
use crate::card::DestinationTicket;
use crate::error::{Error, Result};
use crate::game::{Match, MatchContent, MatchId, TICKETS_PER_DRAW};
use crate::player::PlayerId;
use crate::store::{InMemoryMatchStore, MatchStore};
use crate::turn::Turn;

use dashmap::DashMap;
use log::{debug, info};
use rand::Rng;
use smallvec::SmallVec;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use uuid::Uuid;

/// Notifications emitted after a successful mutation, sent fire-and-forget
/// to an optional sink. Losing them never affects correctness.
#[derive(Clone, Debug)]
pub enum MatchEvent {
    RouteClaimed {
        match_id: MatchId,
        player_id: PlayerId,
        route: Route,
        at: SystemTime,
    },
}

/// The match orchestrator: one operation per game action, each keyed by a
/// match id.
///
/// Every mutating operation is a scoped load-mutate-save unit against the
/// [`MatchStore`], with a per-match-id lock held for the whole span. Two
/// commands against the same match can never interleave; commands against
/// different matches run in parallel. Failed operations are never saved, so
/// no partial mutation is ever persisted.
pub struct MatchManager<S: MatchStore = InMemoryMatchStore> {
    store: S,
    locks: DashMap<MatchId, Arc<Mutex<()>>>,
    events: Option<Sender<MatchEvent>>,
}

impl MatchManager<InMemoryMatchStore> {
    /// A manager over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryMatchStore::new())
    }
}

impl<S: MatchStore> MatchManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: DashMap::new(),
            events: None,
        }
    }

    /// Attaches an outbound event channel. Events are sent after successful
    /// mutations; a dropped receiver is silently ignored.
    pub fn with_event_sink(mut self, events: Sender<MatchEvent>) -> Self {
        self.events = Some(events);
        self
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a match with a random seed, loads the given content into it,
    /// and persists it.
    pub fn create_match(&self, content: MatchContent) -> Result<Match> {
        self.create_match_with_seed(content, rand::thread_rng().gen())
    }

    /// Creates a match with a fixed seed, for reproducible deals.
    pub fn create_match_with_seed(&self, content: MatchContent, seed: u64) -> Result<Match> {
        let mut state = Match::new(Uuid::new_v4(), seed);
        state.load_content(content)?;

        info!("created match {}", state.id());
        self.store.save(state.clone());
        Ok(state)
    }

    pub fn match_exists(&self, id: &MatchId) -> bool {
        self.store.exists(id)
    }

    pub fn get_match(&self, id: &MatchId) -> Result<Match> {
        self.store.load(id).ok_or(Error::MatchNotFound(*id))
    }

    pub fn list_matches(&self) -> Vec<Match> {
        self.store.list_all()
    }

    /// The current turn of a match; `None` before the match starts.
    pub fn current_turn(&self, id: &MatchId) -> Result<Option<Turn>> {
        Ok(self.get_match(id)?.current_turn().cloned())
    }

    pub fn add_player(&self, id: &MatchId, name: impl Into<String>) -> Result<Match> {
        let name = name.into();
        self.update(id, |state| {
            let player_id = state.add_player(name)?;
            debug!("match {}: added {}", state.id(), player_id);
            Ok(state.clone())
        })
    }

    pub fn remove_player(&self, id: &MatchId, player_id: PlayerId) -> Result<bool> {
        self.update(id, |state| {
            let removed = state.remove_player(player_id)?;
            if removed {
                debug!("match {}: removed {}", state.id(), player_id);
            }
            Ok(removed)
        })
    }

    pub fn start_match(&self, id: &MatchId, expected_player_count: usize) -> Result<Match> {
        self.update(id, |state| {
            state.start(expected_player_count)?;
            info!(
                "match {}: started with {} players",
                state.id(),
                state.players().len()
            );
            Ok(state.clone())
        })
    }

    pub fn finish_match(&self, id: &MatchId) -> Result<Match> {
        self.update(id, |state| {
            state.finish()?;
            info!("match {}: finished", state.id());
            Ok(state.clone())
        })
    }

    /// DRAW_VEHICLE_CARDS for the acting player: blind with no indices,
    /// from the face-up window otherwise.
    pub fn draw_vehicle_cards(
        &self,
        id: &MatchId,
        player_id: PlayerId,
        revealed_indices: &[usize],
    ) -> Result<Match> {
        self.update(id, |state| {
            let drawn = state.draw_vehicle_cards(player_id, revealed_indices)?;
            debug!(
                "match {}: {} drew {} vehicle cards",
                state.id(),
                player_id,
                drawn.len()
            );
            Ok(state.clone())
        })
    }

    /// CLAIM_ROUTE for the acting player, spending the hand cards at
    /// `card_indices`. Emits [`MatchEvent::RouteClaimed`] on success.
    pub fn claim_route(
        &self,
        id: &MatchId,
        player_id: PlayerId,
        route_id: &RouteId,
        card_indices: &[usize],
    ) -> Result<Match> {
        let (state, route) = self.update(id, |state| {
            let route = state.claim_route(player_id, route_id, card_indices)?;
            debug!("match {}: {} claimed {}", state.id(), player_id, route);
            Ok((state.clone(), route))
        })?;

        self.emit(MatchEvent::RouteClaimed {
            match_id: *id,
            player_id,
            route,
            at: SystemTime::now(),
        });

        Ok(state)
    }

    /// DRAW_DESTINATION_TICKETS for the acting player. Returns the kept
    /// tickets alongside the updated match.
    pub fn draw_destination_tickets(
        &self,
        id: &MatchId,
        player_id: PlayerId,
        keep_indices: &[usize],
        first_turn: bool,
    ) -> Result<(Match, SmallVec<[DestinationTicket; TICKETS_PER_DRAW]>)> {
        self.update(id, |state| {
            let kept = state.draw_destination_tickets(player_id, keep_indices, first_turn)?;
            debug!(
                "match {}: {} kept {} destination tickets",
                state.id(),
                player_id,
                kept.len()
            );
            Ok((state.clone(), kept))
        })
    }

    /// Runs one load-mutate-save unit under the match's lock. The mutation
    /// closure failing means nothing is saved.
    fn update<R>(&self, id: &MatchId, mutate: impl FnOnce(&mut Match) -> Result<R>) -> Result<R> {
        let lock = self.lock_for(id);
        let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut state = self.store.load(id).ok_or(Error::MatchNotFound(*id))?;
        let result = mutate(&mut state)?;
        self.store.save(state);

        Ok(result)
    }

    fn lock_for(&self, id: &MatchId) -> Arc<Mutex<()>> {
        self.locks
            .entry(*id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn emit(&self, event: MatchEvent) {
        if let Some(events) = &self.events {
            // Fire-and-forget: a gone receiver is not our problem.
            let _ = events.send(event);
        }
    }
}
