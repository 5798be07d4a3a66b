use crate::card::Color;
use crate::city::City;
use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable identifier of a route in the board catalog.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An edge on the board connecting two cities, claimable once.
///
/// `color` is one of the eight ordinary colors, or [`Color::Gray`] meaning
/// "any single color". The double-route flag marks parallel track and is
/// informational: no rule restricts claiming both tracks of a pair.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Route {
    id: RouteId,
    origin: City,
    destination: City,
    color: Color,
    length: u8,
    double: bool,
    available: bool,
}

impl Route {
    /// Builds a route, validating that the length is between 1 and 6 and
    /// that the color is an ordinary color or gray.
    pub fn new(
        id: impl Into<RouteId>,
        origin: City,
        destination: City,
        color: Color,
        length: u8,
        double: bool,
    ) -> Result<Self> {
        if !(1..=6).contains(&length) {
            return Err(Error::Validation(format!(
                "route length must be between 1 and 6, got {}",
                length
            )));
        }

        if color.is_locomotive() {
            return Err(Error::Validation(String::from(
                "locomotive is not a route color",
            )));
        }

        Ok(Self {
            id: id.into(),
            origin,
            destination,
            color,
            length,
            double,
            available: true,
        })
    }

    #[inline]
    pub fn id(&self) -> &RouteId {
        &self.id
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
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn length(&self) -> u8 {
        self.length
    }

    #[inline]
    pub fn is_double(&self) -> bool {
        self.double
    }

    /// True until the route is claimed.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Points awarded for claiming this route, a fixed function of length.
    pub fn points(&self) -> u8 {
        match self.length {
            1 => 1,
            2 => 2,
            3 => 4,
            4 => 7,
            5 => 10,
            6 => 15,
            // Lengths are validated in `Route::new`.
            _ => unreachable!("route length outside 1..=6"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} → {}, {}, length {})",
            self.id, self.origin, self.destination, self.color, self.length
        )
    }
}

/// The route catalog of a single match.
///
/// The board owns the authoritative availability flag of every route;
/// players keep their own copies of the routes they claimed.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Board {
    routes: Vec<Route>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-loads routes into the catalog at match setup.
    ///
    /// A duplicate id, within the batch or against already-loaded routes,
    /// is a caller error and loads nothing.
    pub fn add_routes(&mut self, routes: Vec<Route>) -> Result<()> {
        let mut seen: HashSet<&RouteId> = self.routes.iter().map(Route::id).collect();
        for route in &routes {
            if !seen.insert(route.id()) {
                return Err(Error::Validation(format!(
                    "duplicate route id `{}`",
                    route.id()
                )));
            }
        }

        self.routes.extend(routes);
        Ok(())
    }

    /// Looks up a route by id.
    pub fn route(&self, id: &RouteId) -> Result<&Route> {
        self.routes
            .iter()
            .find(|route| route.id() == id)
            .ok_or_else(|| Error::RouteNotFound(id.clone()))
    }

    /// Routes not yet claimed by anyone.
    pub fn available_routes(&self) -> Vec<&Route> {
        self.routes.iter().filter(|route| route.available).collect()
    }

    /// Routes already claimed.
    pub fn claimed_routes(&self) -> Vec<&Route> {
        self.routes.iter().filter(|route| !route.available).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Flips a route to claimed. The caller has already validated the
    /// claim; an unknown id here is a programming error upstream.
    pub(crate) fn mark_claimed(&mut self, id: &RouteId) -> Result<()> {
        let route = self
            .routes
            .iter_mut()
            .find(|route| route.id() == id)
            .ok_or_else(|| Error::RouteNotFound(id.clone()))?;

        route.available = false;
        Ok(())
    }
}
