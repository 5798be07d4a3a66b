use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A draw pile and a discard pile, generic over the card type.
///
/// The draw pile is ordered (front is the top); the discard pile is not.
/// All shuffling goes through the deck's own [`ChaCha8Rng`], injected at
/// construction, so a fixed seed yields a fixed deal order.
///
/// The deck never loses cards on its own: cards leave through the draw
/// methods and come back through [`Deck::discard`], and the discard pile is
/// lazily reshuffled into the draw pile when the latter runs dry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Deck<T> {
    draw_pile: VecDeque<T>,
    discard_pile: Vec<T>,
    rng: ChaCha8Rng,
}

impl<T> Deck<T> {
    /// Creates an empty deck around the given random source.
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            draw_pile: VecDeque::new(),
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Replaces the draw pile with a shuffled copy of `cards` and empties
    /// the discard pile.
    pub fn initialize(&mut self, cards: Vec<T>) {
        self.draw_pile = VecDeque::from(cards);
        self.discard_pile.clear();
        self.shuffle_draw_pile();
    }

    /// Removes and returns the top draw-pile card.
    ///
    /// An empty draw pile is first replenished by shuffling the discard
    /// pile into it. Returns `None` only when both piles are empty; the
    /// caller decides whether that is fatal or simply "fewer cards than
    /// requested".
    pub fn draw_top(&mut self) -> Option<T> {
        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            self.reshuffle_discard_pile();
        }

        self.draw_pile.pop_front()
    }

    /// Draws up to `n` cards from the top, stopping early if the deck is
    /// exhausted after reshuffle.
    pub fn draw_many(&mut self, n: usize) -> Vec<T> {
        let mut cards = Vec::with_capacity(n);
        for _ in 0..n {
            match self.draw_top() {
                Some(card) => cards.push(card),
                None => break,
            }
        }

        cards
    }

    /// Removes and returns the draw-pile card at position `index`, used
    /// when a bounded window of revealed cards is offered.
    ///
    /// Returns `None` if `index` is outside the current draw pile. No
    /// reshuffle happens here: picking from the revealed window is only
    /// meaningful against the pile as it currently lies.
    pub fn draw_by_index(&mut self, index: usize) -> Option<T> {
        self.draw_pile.remove(index)
    }

    /// Appends the given cards to the discard pile. No shuffle happens at
    /// discard time.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = T>) {
        self.discard_pile.extend(cards);
    }

    /// A non-mutating view of the first `n` draw-pile cards (fewer if the
    /// pile is shorter). This backs the face-up window.
    pub fn peek_top(&self, n: usize) -> impl Iterator<Item = &T> {
        self.draw_pile.iter().take(n)
    }

    #[inline]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[inline]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards currently held by the deck, across both piles.
    #[inline]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    fn reshuffle_discard_pile(&mut self) {
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.shuffle_draw_pile();
    }

    fn shuffle_draw_pile(&mut self) {
        self.draw_pile.make_contiguous().shuffle(&mut self.rng);
    }
}
