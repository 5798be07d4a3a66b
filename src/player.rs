use crate::board::Route;
use crate::card::{Color, DestinationTicket, VehicleCard};
use crate::error::{Error, Result};
use crate::reachability;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;

/// Every player starts the match with 45 train pieces.
pub const STARTING_TRAIN_PIECES: u8 = 45;

/// Bonus granted at match end to the holder of the longest continuous
/// claimed-route total.
pub const LONGEST_ROUTE_BONUS: i32 = 10;

/// Stable, monotonically-issued identifier of a player within one match.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A participant of a single match: hand, held tickets, claimed routes,
/// score, and remaining train pieces.
///
/// The player validates and applies route claims against its own state;
/// everything involving other players or the board's authoritative
/// availability flags belongs to [`crate::game::Match`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: i32,
    train_pieces: u8,
    hand: Vec<VehicleCard>,
    tickets: Vec<DestinationTicket>,
    claimed_routes: Vec<Route>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            train_pieces: STARTING_TRAIN_PIECES,
            hand: Vec::new(),
            tickets: Vec::new(),
            claimed_routes: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    pub fn train_pieces(&self) -> u8 {
        self.train_pieces
    }

    #[inline]
    pub fn hand(&self) -> &[VehicleCard] {
        &self.hand
    }

    #[inline]
    pub fn tickets(&self) -> &[DestinationTicket] {
        &self.tickets
    }

    #[inline]
    pub fn claimed_routes(&self) -> &[Route] {
        &self.claimed_routes
    }

    /// Adds drawn vehicle cards to the hand.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = VehicleCard>) {
        self.hand.extend(cards);
    }

    /// Adds kept destination tickets to the held set.
    pub fn add_tickets(&mut self, tickets: impl IntoIterator<Item = DestinationTicket>) {
        self.tickets.extend(tickets);
    }

    /// Whether the player still has a train piece to spend on a claim.
    #[inline]
    pub fn can_claim_routes(&self) -> bool {
        self.train_pieces > 0
    }

    /// Attempts to claim `route` by spending the hand cards at the given
    /// indices.
    ///
    /// The selection is referenced by stable indices into the hand at the
    /// time of selection. Validation is all-or-nothing: every rule is
    /// checked before any state changes, so a rejected claim leaves the
    /// hand, train pieces, score, and claimed set untouched.
    ///
    /// On success the spent cards are removed from the hand and returned so
    /// the match can discard them to the vehicle deck, the route joins the
    /// claimed set, train pieces drop by the route length, and the route's
    /// points are added to the score.
    pub fn claim_route(&mut self, route: &Route, card_indices: &[usize]) -> Result<Vec<VehicleCard>> {
        self.validate_selection(route, card_indices)?;

        if self.train_pieces < route.length() {
            return Err(Error::Validation(format!(
                "claiming {} takes {} train pieces, but {} has only {} left",
                route,
                route.length(),
                self.name,
                self.train_pieces
            )));
        }

        // All rules hold; apply the claim.
        let spent = self.take_cards(card_indices);
        self.train_pieces = self.train_pieces.saturating_sub(route.length());
        self.score += i32::from(route.points());
        self.claimed_routes.push(route.clone());

        Ok(spent)
    }

    fn validate_selection(&self, route: &Route, card_indices: &[usize]) -> Result<()> {
        if card_indices.len() != usize::from(route.length()) {
            return Err(Error::Validation(format!(
                "route {} needs exactly {} cards, but {} were selected",
                route.id(),
                route.length(),
                card_indices.len()
            )));
        }

        // Guard against stale or duplicate indices before touching colors.
        let mut seen = HashSet::new();
        for &index in card_indices {
            if index >= self.hand.len() {
                return Err(Error::Validation(format!(
                    "selected card index {} is outside the hand (size {})",
                    index,
                    self.hand.len()
                )));
            }
            if !seen.insert(index) {
                return Err(Error::Validation(format!(
                    "selected card index {} appears more than once",
                    index
                )));
            }
        }

        self.validate_selection_colors(route, card_indices)
    }

    fn validate_selection_colors(&self, route: &Route, card_indices: &[usize]) -> Result<()> {
        let mut ordinary_color: Option<Color> = None;

        for &index in card_indices {
            let card = &self.hand[index];
            if card.color().is_locomotive() {
                continue;
            }

            if route.color().is_gray() {
                // On a gray route every non-locomotive card must share one
                // ordinary color; locomotives substitute for any of them.
                match ordinary_color {
                    None => ordinary_color = Some(card.color()),
                    Some(color) if color == card.color() => {}
                    Some(color) => {
                        return Err(Error::Validation(format!(
                            "a gray route takes a single color, but both {} and {} were selected",
                            color,
                            card.color()
                        )));
                    }
                }
            } else if card.color() != route.color() {
                return Err(Error::Validation(format!(
                    "route {} is {}, but a {} card was selected",
                    route.id(),
                    route.color(),
                    card.color()
                )));
            }
        }

        Ok(())
    }

    /// Removes the cards at the given indices, preserving the relative
    /// order of the rest of the hand. Indices were validated beforehand.
    fn take_cards(&mut self, card_indices: &[usize]) -> Vec<VehicleCard> {
        let mut sorted: Vec<usize> = card_indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut taken: Vec<VehicleCard> = sorted
            .into_iter()
            .map(|index| self.hand.remove(index))
            .collect();

        // Hand order back to selection order for the caller.
        taken.reverse();
        taken
    }

    /// Whether the hand holds enough usable cards to cover `route`'s color
    /// and length at all, regardless of any concrete selection.
    pub fn has_cards_for(&self, route: &Route) -> bool {
        let usable = self
            .hand
            .iter()
            .filter(|card| card.covers(route.color()))
            .count();

        usable >= usize::from(route.length())
    }

    /// Picks hand indices that would cover `route`, preferring ordinary
    /// cards and topping up with locomotives. Returns `None` when the hand
    /// cannot cover the route.
    ///
    /// For a gray route, the ordinary color with the most cards in hand is
    /// used.
    pub fn suggest_selection(&self, route: &Route) -> Option<SmallVec<[usize; 6]>> {
        let color = if route.color().is_gray() {
            self.most_held_ordinary_color()
        } else {
            Some(route.color())
        };

        let mut selection: SmallVec<[usize; 6]> = SmallVec::new();
        let needed = usize::from(route.length());

        if let Some(color) = color {
            for (index, card) in self.hand.iter().enumerate() {
                if selection.len() == needed {
                    break;
                }
                if card.color() == color {
                    selection.push(index);
                }
            }
        }

        for (index, card) in self.hand.iter().enumerate() {
            if selection.len() == needed {
                break;
            }
            if card.color().is_locomotive() {
                selection.push(index);
            }
        }

        (selection.len() == needed).then_some(selection)
    }

    fn most_held_ordinary_color(&self) -> Option<Color> {
        let mut counts: SmallVec<[(Color, usize); 8]> = SmallVec::new();
        for card in &self.hand {
            if !card.color().is_ordinary() {
                continue;
            }
            match counts.iter_mut().find(|(color, _)| *color == card.color()) {
                Some((_, count)) => *count += 1,
                None => counts.push((card.color(), 1)),
            }
        }

        counts
            .into_iter()
            .max_by_key(|&(_, count)| count)
            .map(|(color, _)| color)
    }

    /// The signed ticket contribution at scoring time: `+points` for every
    /// complete ticket, `-points` for every incomplete one.
    pub fn ticket_points(&self) -> i32 {
        self.tickets
            .iter()
            .map(|ticket| {
                let points = i32::from(ticket.points());
                if reachability::ticket_complete(ticket, &self.claimed_routes) {
                    points
                } else {
                    -points
                }
            })
            .sum()
    }

    /// Folds the ticket contribution into the score. Called once, when the
    /// match finishes.
    pub fn apply_final_ticket_scoring(&mut self) {
        self.score += self.ticket_points();
    }

    /// Sum of claimed-route lengths, used for the longest-route bonus.
    ///
    /// This is deliberately the continuous total, not the longest simple
    /// path through the claimed subgraph.
    pub fn continuous_route_length(&self) -> u32 {
        self.claimed_routes
            .iter()
            .map(|route| u32::from(route.length()))
            .sum()
    }

    pub(crate) fn add_score(&mut self, points: i32) {
        self.score += points;
    }
}
