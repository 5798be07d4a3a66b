use crate::board::{Board, Route, RouteId};
use crate::card::{DestinationTicket, VehicleCard};
use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::player::{Player, PlayerId, LONGEST_ROUTE_BONUS};
use crate::turn::{Turn, TurnAction};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use uuid::Uuid;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

/// Cards dealt to every player when the match starts.
const INITIAL_HAND_SIZE: usize = 4;

/// Cards drawn blind from the pile in one DRAW_VEHICLE_CARDS action.
const BLIND_DRAW_COUNT: usize = 2;

/// Face-up cards a player may pick per turn.
const MAX_REVEALED_DRAWS: usize = 2;

/// Size of the face-up window at the top of the vehicle draw pile.
pub const REVEALED_WINDOW: usize = 5;

/// Tickets drawn per DRAW_DESTINATION_TICKETS action.
pub const TICKETS_PER_DRAW: usize = 3;

pub type MatchId = Uuid;

/// The rules content a match is populated with after creation.
///
/// Building this (board layout, ticket list, card mix) is the caller's
/// business; [`crate::catalog`] provides the standard set.
#[derive(Clone, Debug)]
pub struct MatchContent {
    pub routes: Vec<Route>,
    pub tickets: Vec<DestinationTicket>,
    pub vehicle_cards: Vec<VehicleCard>,
}

/// A single match: the unit of consistency exposed to external callers.
///
/// Players, board, and decks are owned exclusively by the match; nothing is
/// shared across matches. All mutating methods validate fully before
/// touching any state.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Match {
    id: MatchId,
    players: SmallVec<[Player; MAX_PLAYERS]>,
    board: Board,
    vehicle_deck: Deck<VehicleCard>,
    ticket_deck: Deck<DestinationTicket>,
    current_turn: Option<Turn>,
    started: bool,
    finished: bool,
    next_player_id: u32,
}

impl Match {
    /// Creates an empty match. Board and decks are unpopulated until
    /// [`Match::load_content`] is called.
    ///
    /// The two decks get distinct random streams derived from `seed`, so a
    /// fixed seed reproduces the whole deal order of the match.
    pub fn new(id: MatchId, seed: u64) -> Self {
        Self {
            id,
            players: SmallVec::new(),
            board: Board::new(),
            vehicle_deck: Deck::new(ChaCha8Rng::seed_from_u64(seed)),
            ticket_deck: Deck::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(1))),
            current_turn: None,
            started: false,
            finished: false,
            next_player_id: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> MatchId {
        self.id
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn vehicle_deck(&self) -> &Deck<VehicleCard> {
        &self.vehicle_deck
    }

    #[inline]
    pub fn ticket_deck(&self) -> &Deck<DestinationTicket> {
        &self.ticket_deck
    }

    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    pub fn current_turn(&self) -> Option<&Turn> {
        self.current_turn.as_ref()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .iter()
            .find(|player| player.id() == id)
            .ok_or(Error::PlayerNotFound(id))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|player| player.id() == id)
            .ok_or(Error::PlayerNotFound(id))
    }

    /// Loads the rules content into the board and decks.
    pub fn load_content(&mut self, content: MatchContent) -> Result<()> {
        if self.started {
            return Err(Error::InvalidState(String::from(
                "cannot load content after the match has started",
            )));
        }

        self.board.add_routes(content.routes)?;
        self.ticket_deck.initialize(content.tickets);
        self.vehicle_deck.initialize(content.vehicle_cards);
        Ok(())
    }

    /// Adds a player with a stable, monotonically-issued id.
    ///
    /// Players can only join before the match starts; the player count is
    /// validated at start time, not here (beyond the hard cap of 5).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        if self.started {
            return Err(Error::InvalidState(String::from(
                "cannot add players after the match has started",
            )));
        }

        if self.players.len() == MAX_PLAYERS {
            return Err(Error::Validation(format!(
                "maximum number of players reached ({})",
                MAX_PLAYERS
            )));
        }

        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        self.players.push(Player::new(id, name));

        Ok(id)
    }

    /// Removes a player before the match starts. Returns `Ok(false)` when
    /// no player has the given id.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<bool> {
        if self.started {
            return Err(Error::InvalidState(String::from(
                "cannot remove players after the match has started",
            )));
        }

        let before = self.players.len();
        self.players.retain(|player| player.id() != id);
        Ok(self.players.len() < before)
    }

    /// Whether the match could start right now.
    pub fn can_start(&self) -> bool {
        !self.started && (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len())
    }

    /// Starts the match: deals every player their initial hand, in join
    /// order, and opens turn 1 for the first player.
    ///
    /// `expected_player_count` must be within [2, 5] and equal to the
    /// actual number of players; on failure the match stays unstarted.
    pub fn start(&mut self, expected_player_count: usize) -> Result<()> {
        if self.started {
            return Err(Error::InvalidState(String::from("match already started")));
        }

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&expected_player_count) {
            return Err(Error::Validation(format!(
                "player count must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, expected_player_count
            )));
        }

        if expected_player_count != self.players.len() {
            return Err(Error::Validation(format!(
                "expected {} players, but {} have joined",
                expected_player_count,
                self.players.len()
            )));
        }

        for player in self.players.iter_mut() {
            let hand = self.vehicle_deck.draw_many(INITIAL_HAND_SIZE);
            player.add_cards(hand);
        }

        self.current_turn = Some(Turn::new(1, self.players[0].id()));
        self.started = true;
        Ok(())
    }

    /// Finishes the match and runs the final scoring pass: every player's
    /// ticket contribution (±points per ticket), then the longest-route
    /// bonus to the first strict maximum holder.
    pub fn finish(&mut self) -> Result<()> {
        if !self.started {
            return Err(Error::InvalidState(String::from("match has not started")));
        }

        if self.finished {
            return Err(Error::InvalidState(String::from("match already finished")));
        }

        for player in self.players.iter_mut() {
            player.apply_final_ticket_scoring();
        }

        if let Some(index) = self.longest_route_holder() {
            self.players[index].add_score(LONGEST_ROUTE_BONUS);
        }

        self.finished = true;
        Ok(())
    }

    /// Index of the player holding the strict maximum continuous-route
    /// total; the first one found keeps it on ties. `None` when nobody
    /// claimed a route.
    fn longest_route_holder(&self) -> Option<usize> {
        let mut holder = None;
        let mut longest = 0;

        for (index, player) in self.players.iter().enumerate() {
            let length = player.continuous_route_length();
            if length > longest {
                longest = length;
                holder = Some(index);
            }
        }

        holder
    }

    /// Players ordered by descending score. Ties keep join order.
    pub fn ranking(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by_key(|player| std::cmp::Reverse(player.score()));
        players
    }

    /// The face-up window: the revealed top of the vehicle draw pile.
    pub fn revealed_vehicle_cards(&self) -> SmallVec<[&VehicleCard; REVEALED_WINDOW]> {
        self.vehicle_deck.peek_top(REVEALED_WINDOW).collect()
    }

    /// DRAW_VEHICLE_CARDS: with no indices, draws 2 blind off the pile;
    /// with 1–2 indices, picks those positions from the face-up window.
    /// Completes the turn.
    ///
    /// Fewer cards than requested is not an error; zero cards is
    /// `ResourceExhausted`.
    pub fn draw_vehicle_cards(
        &mut self,
        player_id: PlayerId,
        revealed_indices: &[usize],
    ) -> Result<SmallVec<[VehicleCard; BLIND_DRAW_COUNT]>> {
        self.ensure_player_can_act(player_id)?;

        let drawn: SmallVec<[VehicleCard; BLIND_DRAW_COUNT]> = if revealed_indices.is_empty() {
            self.vehicle_deck.draw_many(BLIND_DRAW_COUNT).into()
        } else {
            if revealed_indices.len() > MAX_REVEALED_DRAWS {
                return Err(Error::Validation(format!(
                    "at most {} face-up cards may be taken per turn, got {}",
                    MAX_REVEALED_DRAWS,
                    revealed_indices.len()
                )));
            }

            let window = REVEALED_WINDOW.min(self.vehicle_deck.draw_pile_len());
            for &index in revealed_indices {
                if index >= window {
                    return Err(Error::Validation(format!(
                        "face-up index {} is outside the revealed window (size {})",
                        index, window
                    )));
                }
            }

            // Indices are applied against the live pile, so the second
            // pick may miss if the pile shrank past it; that simply
            // yields fewer cards.
            revealed_indices
                .iter()
                .filter_map(|&index| self.vehicle_deck.draw_by_index(index))
                .collect()
        };

        if drawn.is_empty() {
            return Err(Error::ResourceExhausted(String::from(
                "the vehicle deck has no cards left",
            )));
        }

        self.player_mut(player_id)?.add_cards(drawn.iter().copied());
        self.commit_and_advance(TurnAction::DrawVehicleCards)?;

        Ok(drawn)
    }

    /// CLAIM_ROUTE: validates the route and the player's selection, then
    /// applies the claim atomically and completes the turn.
    ///
    /// Spent cards go to the vehicle deck's discard pile. Returns the
    /// claimed route.
    pub fn claim_route(
        &mut self,
        player_id: PlayerId,
        route_id: &RouteId,
        card_indices: &[usize],
    ) -> Result<Route> {
        self.ensure_player_can_act(player_id)?;

        let route = self.board.route(route_id)?;
        if !route.is_available() {
            return Err(Error::InvalidState(format!(
                "route {} is already claimed",
                route_id
            )));
        }

        let route = route.clone();
        let spent = self.player_mut(player_id)?.claim_route(&route, card_indices)?;

        // The player's own validation passed; the rest cannot fail.
        self.board.mark_claimed(route_id)?;
        self.vehicle_deck.discard(spent);
        self.commit_and_advance(TurnAction::ClaimRoute)?;

        Ok(route)
    }

    /// DRAW_DESTINATION_TICKETS: draws up to 3 tickets, keeps the ones at
    /// `keep_indices` (into the drawn set), and returns the rest to the
    /// discard pile.
    ///
    /// At least one ticket must be kept. With `first_turn` set (the
    /// setup-phase draw each player makes once), the turn is neither
    /// completed nor advanced; every other invocation completes the turn.
    pub fn draw_destination_tickets(
        &mut self,
        player_id: PlayerId,
        keep_indices: &[usize],
        first_turn: bool,
    ) -> Result<SmallVec<[DestinationTicket; TICKETS_PER_DRAW]>> {
        self.ensure_player_can_act(player_id)?;

        if keep_indices.is_empty() {
            return Err(Error::Validation(String::from(
                "at least 1 destination ticket must be kept",
            )));
        }

        let mut seen = HashSet::new();
        for &index in keep_indices {
            if index >= TICKETS_PER_DRAW {
                return Err(Error::Validation(format!(
                    "keep index {} is outside the drawn set of {}",
                    index, TICKETS_PER_DRAW
                )));
            }
            if !seen.insert(index) {
                return Err(Error::Validation(format!(
                    "keep index {} appears more than once",
                    index
                )));
            }
        }

        let drawn = self.ticket_deck.draw_many(TICKETS_PER_DRAW);
        if drawn.is_empty() {
            return Err(Error::ResourceExhausted(String::from(
                "the destination ticket deck has no tickets left",
            )));
        }

        let mut kept: SmallVec<[DestinationTicket; TICKETS_PER_DRAW]> = SmallVec::new();
        let mut returned = Vec::new();
        for (index, ticket) in drawn.into_iter().enumerate() {
            if keep_indices.contains(&index) {
                kept.push(ticket);
            } else {
                returned.push(ticket);
            }
        }

        if kept.is_empty() {
            // The deck supplied fewer tickets than the keep set assumed.
            self.ticket_deck.discard(returned);
            return Err(Error::Validation(String::from(
                "none of the keep indices matched a drawn ticket",
            )));
        }

        self.player_mut(player_id)?.add_tickets(kept.iter().cloned());
        self.ticket_deck.discard(returned);

        if !first_turn {
            self.commit_and_advance(TurnAction::DrawDestinationTickets)?;
        }

        Ok(kept)
    }

    /// A turn is legal to act on only if the match is running, the acting
    /// player is the current turn's player, and no action was committed
    /// yet this turn.
    fn ensure_player_can_act(&self, player_id: PlayerId) -> Result<()> {
        if !self.started {
            return Err(Error::InvalidState(String::from("match has not started")));
        }

        if self.finished {
            return Err(Error::InvalidState(String::from("match is already finished")));
        }

        self.player(player_id)?;

        let turn = self
            .current_turn
            .as_ref()
            .ok_or_else(|| Error::InvalidState(String::from("there is no current turn")))?;

        if turn.player() != player_id {
            return Err(Error::InvalidState(format!(
                "it is not {}'s turn",
                player_id
            )));
        }

        if !turn.can_act() {
            return Err(Error::InvalidState(String::from(
                "an action was already committed this turn",
            )));
        }

        Ok(())
    }

    /// Commits the action on the current turn and opens the next turn for
    /// the next player in round-robin order.
    fn commit_and_advance(&mut self, action: TurnAction) -> Result<()> {
        let turn = self
            .current_turn
            .as_mut()
            .ok_or_else(|| Error::InvalidState(String::from("there is no current turn")))?;

        turn.commit(action);
        let number = turn.number();
        let player = turn.player();

        let next_player = self.next_player_after(player)?;
        self.current_turn = Some(Turn::new(number + 1, next_player));
        Ok(())
    }

    fn next_player_after(&self, player_id: PlayerId) -> Result<PlayerId> {
        let index = self
            .players
            .iter()
            .position(|player| player.id() == player_id)
            .ok_or(Error::PlayerNotFound(player_id))?;

        Ok(self.players[(index + 1) % self.players.len()].id())
    }
}
