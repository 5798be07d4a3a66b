use crate::player::PlayerId;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The three actions a player may commit on their turn.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TurnAction {
    DrawVehicleCards,
    ClaimRoute,
    DrawDestinationTickets,
}

/// The unit of play belonging to exactly one player.
///
/// A turn starts awaiting an action; committing one completes it, and the
/// match immediately creates the next turn for the next player in
/// round-robin order. Turn numbers start at 1 and increase by one per
/// completed action.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Turn {
    number: u32,
    player: PlayerId,
    action: Option<TurnAction>,
    completed: bool,
}

impl Turn {
    pub fn new(number: u32, player: PlayerId) -> Self {
        Self {
            number,
            player,
            action: None,
            completed: false,
        }
    }

    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The player whose turn this is.
    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The action committed this turn, if any.
    #[inline]
    pub fn action(&self) -> Option<TurnAction> {
        self.action
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether an action may still be committed on this turn.
    #[inline]
    pub fn can_act(&self) -> bool {
        !self.completed
    }

    /// Records the committed action and completes the turn.
    pub fn commit(&mut self, action: TurnAction) {
        self.action = Some(action);
        self.completed = true;
    }
}
