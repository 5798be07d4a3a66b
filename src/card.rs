use crate::city::City;

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Represents the color of vehicle cards and routes.
///
/// The eight ordinary colors are shared by cards and routes. [`Color::Gray`]
/// only ever appears on routes (a gray route accepts any single color), and
/// [`Color::Locomotive`] only ever appears on cards (a locomotive matches
/// any route color).
#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Black,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
    /// Wildcard route color: claimable with any single ordinary color.
    Gray,
    /// Wildcard card: substitutes for any ordinary color.
    Locomotive,
}

impl Color {
    #[inline]
    pub fn is_locomotive(&self) -> bool {
        *self == Color::Locomotive
    }

    #[inline]
    pub fn is_gray(&self) -> bool {
        *self == Color::Gray
    }

    /// One of the eight ordinary colors, i.e. neither wildcard.
    #[inline]
    pub fn is_ordinary(&self) -> bool {
        !self.is_gray() && !self.is_locomotive()
    }
}

/// A card spent to claim routes.
///
/// Its display name is the color name. Gray vehicle cards do not exist:
/// gray is a route-only color.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VehicleCard {
    color: Color,
}

impl VehicleCard {
    pub fn new(color: Color) -> Self {
        debug_assert!(!color.is_gray(), "gray is a route-only color");
        Self { color }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this card alone may count towards a route of `route_color`.
    ///
    /// Locomotives cover everything; a gray route accepts any card. The
    /// stricter rule that all non-locomotive cards of one claim must share a
    /// single color is enforced by the selection validation, not here.
    #[inline]
    pub fn covers(&self, route_color: Color) -> bool {
        self.color.is_locomotive() || self.color == route_color || route_color.is_gray()
    }
}

impl fmt::Display for VehicleCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// A card naming two cities to connect, scored at match end.
///
/// Worth `points` if the two cities are connected through the holder's
/// claimed routes when the match finishes, and `-points` otherwise.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DestinationTicket {
    origin: City,
    destination: City,
    points: u8,
}

impl DestinationTicket {
    pub fn new(origin: City, destination: City, points: u8) -> Self {
        Self {
            origin,
            destination,
            points,
        }
    }

    #[inline]
    pub fn origin(&self) -> &City {
        &self.origin
    }

    #[inline]
    pub fn destination(&self) -> &City {
        &self.destination
    }

    #[inline]
    pub fn points(&self) -> u8 {
        self.points
    }
}

impl fmt::Display for DestinationTicket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} → {}", self.origin, self.destination)
    }
}
