//! Graph connectivity over a single player's claimed routes.
//!
//! Destination tickets are scored on whether their two cities are connected
//! through the holder's claimed routes alone, not the whole board. Claimed
//! sets are small (bounded by the board), so the graph is rebuilt per query
//! rather than kept around.

use crate::board::Route;
use crate::card::DestinationTicket;
use crate::city::City;

use std::collections::{HashSet, VecDeque};

/// Whether `origin` and `destination` are connected through the undirected
/// graph whose edges are exactly `routes`.
///
/// A city is trivially connected to itself.
pub fn cities_connected(origin: &City, destination: &City, routes: &[Route]) -> bool {
    if origin == destination {
        return true;
    }

    let mut visited: HashSet<&City> = HashSet::new();
    let mut to_visit: VecDeque<&City> = VecDeque::new();

    visited.insert(origin);
    to_visit.push_back(origin);

    while let Some(city) = to_visit.pop_front() {
        for route in routes {
            let neighbor = if route.origin() == city {
                route.destination()
            } else if route.destination() == city {
                route.origin()
            } else {
                continue;
            };

            if neighbor == destination {
                return true;
            }

            if visited.insert(neighbor) {
                to_visit.push_back(neighbor);
            }
        }
    }

    false
}

/// Whether a destination ticket is fulfilled by the given claimed routes.
pub fn ticket_complete(ticket: &DestinationTicket, routes: &[Route]) -> bool {
    cities_connected(ticket.origin(), ticket.destination(), routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::card::Color;

    fn route(id: &str, from: &str, to: &str) -> Route {
        Route::new(id, City::new(from), City::new(to), Color::Gray, 2, false)
            .expect("test route is valid")
    }

    #[test]
    fn two_hop_chain_is_connected() {
        let routes = vec![route("a-b", "A", "B"), route("b-c", "B", "C")];
        let ticket = DestinationTicket::new(City::new("A"), City::new("C"), 8);

        assert!(ticket_complete(&ticket, &routes));
    }

    #[test]
    fn disconnected_city_is_unreachable() {
        let routes = vec![route("a-b", "A", "B"), route("b-c", "B", "C")];
        let ticket = DestinationTicket::new(City::new("A"), City::new("D"), 8);

        assert!(!ticket_complete(&ticket, &routes));
    }

    #[test]
    fn city_reaches_itself_without_routes() {
        let ticket = DestinationTicket::new(City::new("A"), City::new("A"), 8);
        assert!(ticket_complete(&ticket, &[]));
    }

    #[test]
    fn connectivity_is_undirected() {
        // Both routes point "away" from B; traversal must still cross them.
        let routes = vec![route("b-a", "B", "A"), route("b-c", "B", "C")];

        assert!(cities_connected(&City::new("A"), &City::new("C"), &routes));
        assert!(cities_connected(&City::new("C"), &City::new("A"), &routes));
    }

    #[test]
    fn comparison_ignores_case() {
        let routes = vec![route("a-b", "Atlanta", "Boston")];

        assert!(cities_connected(
            &City::new("ATLANTA"),
            &City::new("boston"),
            &routes
        ));
    }

    #[test]
    fn only_the_given_routes_count() {
        // A route catalog connecting A to C exists, but the player only
        // claimed A-B; the ticket stays incomplete.
        let claimed = vec![route("a-b", "A", "B")];
        let ticket = DestinationTicket::new(City::new("A"), City::new("C"), 5);

        assert!(!ticket_complete(&ticket, &claimed));
    }
}
