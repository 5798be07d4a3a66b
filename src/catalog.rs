//! The standard rules content: the US route map, the destination ticket
//! list, and the vehicle card mix.
//!
//! Matches are created empty; callers load content explicitly. This module
//! is the stock set, but any [`MatchContent`] works.

use crate::board::Route;
use crate::card::{Color, DestinationTicket, VehicleCard};
use crate::city::City;
use crate::game::MatchContent;

use strum::IntoEnumIterator;

/// Vehicle cards per ordinary color in the standard deck.
const CARDS_PER_COLOR: usize = 12;

/// Locomotives in the standard deck.
const LOCOMOTIVE_CARDS: usize = 14;

/// Convenience macro to declare a catalog route.
///
/// Parallel tracks of a double route are two entries sharing an id prefix,
/// both flagged `double`.
macro_rules! route {
    ($id:literal: $from:literal - $to:literal, $color:ident, $len:literal) => {
        checked(Route::new(
            $id,
            City::new($from),
            City::new($to),
            Color::$color,
            $len,
            false,
        ))
    };
    ($id:literal: $from:literal - $to:literal, $color:ident, $len:literal, double) => {
        checked(Route::new(
            $id,
            City::new($from),
            City::new($to),
            Color::$color,
            $len,
            true,
        ))
    };
}

/// Convenience macro to declare a destination ticket.
macro_rules! ticket {
    ($from:literal - $to:literal, $points:literal) => {
        DestinationTicket::new(City::new($from), City::new($to), $points)
    };
}

// Catalog literals are fixed at compile time and covered by tests; a bad
// entry is a programming error, never a runtime condition.
fn checked(route: crate::error::Result<Route>) -> Route {
    route.expect("catalog route is valid")
}

/// The standard content bundle: routes, tickets, and vehicle cards.
pub fn standard_content() -> MatchContent {
    MatchContent {
        routes: standard_routes(),
        tickets: standard_tickets(),
        vehicle_cards: standard_vehicle_cards(),
    }
}

/// The standard US map: 100 routes over 36 cities.
pub fn standard_routes() -> Vec<Route> {
    vec![
        // Atlanta.
        route! {"atlanta-charleston": "Atlanta" - "Charleston", Gray, 2},
        route! {"atlanta-miami": "Atlanta" - "Miami", Blue, 5},
        route! {"atlanta-nashville": "Atlanta" - "Nashville", Gray, 1},
        route! {"atlanta-new-orleans-1": "Atlanta" - "New Orleans", Orange, 5, double},
        route! {"atlanta-new-orleans-2": "Atlanta" - "New Orleans", Yellow, 5, double},
        route! {"atlanta-raleigh-1": "Atlanta" - "Raleigh", Gray, 2, double},
        route! {"atlanta-raleigh-2": "Atlanta" - "Raleigh", Gray, 2, double},
        // Boston.
        route! {"boston-montreal-1": "Boston" - "Montréal", Gray, 2, double},
        route! {"boston-montreal-2": "Boston" - "Montréal", Gray, 2, double},
        route! {"boston-new-york-1": "Boston" - "New York", Yellow, 2, double},
        route! {"boston-new-york-2": "Boston" - "New York", Red, 2, double},
        // Calgary.
        route! {"calgary-helena": "Calgary" - "Helena", Gray, 4},
        route! {"calgary-seattle": "Calgary" - "Seattle", Gray, 4},
        route! {"calgary-vancouver": "Calgary" - "Vancouver", Gray, 3},
        route! {"calgary-winnipeg": "Calgary" - "Winnipeg", White, 6},
        // Charleston.
        route! {"charleston-miami": "Charleston" - "Miami", Pink, 4},
        route! {"charleston-raleigh": "Charleston" - "Raleigh", Gray, 2},
        // Chicago.
        route! {"chicago-duluth": "Chicago" - "Duluth", Red, 3},
        route! {"chicago-omaha": "Chicago" - "Omaha", Blue, 4},
        route! {"chicago-pittsburgh-1": "Chicago" - "Pittsburgh", Black, 3, double},
        route! {"chicago-pittsburgh-2": "Chicago" - "Pittsburgh", Orange, 3, double},
        route! {"chicago-saint-louis-1": "Chicago" - "Saint Louis", Green, 2, double},
        route! {"chicago-saint-louis-2": "Chicago" - "Saint Louis", White, 2, double},
        route! {"chicago-toronto": "Chicago" - "Toronto", White, 4},
        // Dallas.
        route! {"dallas-el-paso": "Dallas" - "El Paso", Red, 4},
        route! {"dallas-houston-1": "Dallas" - "Houston", Gray, 1, double},
        route! {"dallas-houston-2": "Dallas" - "Houston", Gray, 1, double},
        route! {"dallas-little-rock": "Dallas" - "Little Rock", Gray, 2},
        route! {"dallas-oklahoma-city-1": "Dallas" - "Oklahoma City", Gray, 2, double},
        route! {"dallas-oklahoma-city-2": "Dallas" - "Oklahoma City", Gray, 2, double},
        // Denver.
        route! {"denver-helena": "Denver" - "Helena", Green, 4},
        route! {"denver-kansas-city-1": "Denver" - "Kansas City", Black, 4, double},
        route! {"denver-kansas-city-2": "Denver" - "Kansas City", Orange, 4, double},
        route! {"denver-oklahoma-city": "Denver" - "Oklahoma City", Red, 4},
        route! {"denver-omaha": "Denver" - "Omaha", Pink, 4},
        route! {"denver-phoenix": "Denver" - "Phoenix", White, 5},
        route! {"denver-salt-lake-city-1": "Denver" - "Salt Lake City", Red, 3, double},
        route! {"denver-salt-lake-city-2": "Denver" - "Salt Lake City", Yellow, 3, double},
        route! {"denver-santa-fe": "Denver" - "Santa Fe", Gray, 2},
        // Duluth.
        route! {"duluth-helena": "Duluth" - "Helena", Orange, 6},
        route! {"duluth-omaha-1": "Duluth" - "Omaha", Gray, 2, double},
        route! {"duluth-omaha-2": "Duluth" - "Omaha", Gray, 2, double},
        route! {"duluth-sault-st-marie": "Duluth" - "Sault St. Marie", Gray, 3},
        route! {"duluth-toronto": "Duluth" - "Toronto", Pink, 6},
        route! {"duluth-winnipeg": "Duluth" - "Winnipeg", Black, 4},
        // El Paso.
        route! {"el-paso-houston": "El Paso" - "Houston", Green, 6},
        route! {"el-paso-los-angeles": "El Paso" - "Los Angeles", Black, 6},
        route! {"el-paso-oklahoma-city": "El Paso" - "Oklahoma City", Yellow, 5},
        route! {"el-paso-phoenix": "El Paso" - "Phoenix", Gray, 3},
        route! {"el-paso-santa-fe": "El Paso" - "Santa Fe", Gray, 2},
        // Helena.
        route! {"helena-omaha": "Helena" - "Omaha", Red, 5},
        route! {"helena-salt-lake-city": "Helena" - "Salt Lake City", Pink, 3},
        route! {"helena-seattle": "Helena" - "Seattle", Yellow, 6},
        route! {"helena-winnipeg": "Helena" - "Winnipeg", Blue, 4},
        // Houston.
        route! {"houston-new-orleans": "Houston" - "New Orleans", Gray, 2},
        // Kansas City.
        route! {"kansas-city-saint-louis-1": "Kansas City" - "Saint Louis", Blue, 2, double},
        route! {"kansas-city-saint-louis-2": "Kansas City" - "Saint Louis", Pink, 2, double},
        route! {"kansas-city-oklahoma-city-1": "Kansas City" - "Oklahoma City", Gray, 2, double},
        route! {"kansas-city-oklahoma-city-2": "Kansas City" - "Oklahoma City", Gray, 2, double},
        route! {"kansas-city-omaha-1": "Kansas City" - "Omaha", Gray, 1, double},
        route! {"kansas-city-omaha-2": "Kansas City" - "Omaha", Gray, 1, double},
        // Las Vegas.
        route! {"las-vegas-los-angeles": "Las Vegas" - "Los Angeles", Gray, 2},
        route! {"las-vegas-salt-lake-city": "Las Vegas" - "Salt Lake City", Orange, 3},
        // Little Rock.
        route! {"little-rock-nashville": "Little Rock" - "Nashville", White, 3},
        route! {"little-rock-new-orleans": "Little Rock" - "New Orleans", Gray, 3},
        route! {"little-rock-oklahoma-city": "Little Rock" - "Oklahoma City", Gray, 2},
        route! {"little-rock-saint-louis": "Little Rock" - "Saint Louis", Gray, 2},
        // Los Angeles.
        route! {"los-angeles-phoenix": "Los Angeles" - "Phoenix", Gray, 3},
        route! {"los-angeles-san-francisco-1": "Los Angeles" - "San Francisco", Pink, 3, double},
        route! {"los-angeles-san-francisco-2": "Los Angeles" - "San Francisco", Yellow, 3, double},
        // Miami.
        route! {"miami-new-orleans": "Miami" - "New Orleans", Red, 6},
        // Montréal.
        route! {"montreal-new-york": "Montréal" - "New York", Blue, 3},
        route! {"montreal-sault-st-marie": "Montréal" - "Sault St. Marie", Black, 5},
        route! {"montreal-toronto": "Montréal" - "Toronto", Gray, 3},
        // Nashville.
        route! {"nashville-pittsburgh": "Nashville" - "Pittsburgh", Yellow, 4},
        route! {"nashville-raleigh": "Nashville" - "Raleigh", Black, 3},
        route! {"nashville-saint-louis": "Nashville" - "Saint Louis", Gray, 2},
        // New York.
        route! {"new-york-pittsburgh-1": "New York" - "Pittsburgh", Green, 2, double},
        route! {"new-york-pittsburgh-2": "New York" - "Pittsburgh", White, 2, double},
        route! {"new-york-washington-1": "New York" - "Washington", Black, 2, double},
        route! {"new-york-washington-2": "New York" - "Washington", Orange, 2, double},
        // Oklahoma City.
        route! {"oklahoma-city-santa-fe": "Oklahoma City" - "Santa Fe", Blue, 3},
        // Phoenix.
        route! {"phoenix-santa-fe": "Phoenix" - "Santa Fe", Gray, 3},
        // Pittsburgh.
        route! {"pittsburgh-raleigh": "Pittsburgh" - "Raleigh", Gray, 2},
        route! {"pittsburgh-saint-louis": "Pittsburgh" - "Saint Louis", Green, 5},
        route! {"pittsburgh-toronto": "Pittsburgh" - "Toronto", Gray, 2},
        route! {"pittsburgh-washington": "Pittsburgh" - "Washington", Gray, 2},
        // Portland.
        route! {"portland-salt-lake-city": "Portland" - "Salt Lake City", Blue, 6},
        route! {"portland-san-francisco-1": "Portland" - "San Francisco", Green, 5, double},
        route! {"portland-san-francisco-2": "Portland" - "San Francisco", Pink, 5, double},
        // Raleigh.
        route! {"raleigh-washington-1": "Raleigh" - "Washington", Gray, 2, double},
        route! {"raleigh-washington-2": "Raleigh" - "Washington", Gray, 2, double},
        // Salt Lake City.
        route! {"salt-lake-city-san-francisco-1": "Salt Lake City" - "San Francisco", Orange, 5, double},
        route! {"salt-lake-city-san-francisco-2": "Salt Lake City" - "San Francisco", White, 5, double},
        // Sault St. Marie.
        route! {"sault-st-marie-toronto": "Sault St. Marie" - "Toronto", Gray, 2},
        route! {"sault-st-marie-winnipeg": "Sault St. Marie" - "Winnipeg", Gray, 6},
        // Seattle.
        route! {"seattle-portland-1": "Seattle" - "Portland", Gray, 1, double},
        route! {"seattle-portland-2": "Seattle" - "Portland", Gray, 1, double},
        route! {"seattle-vancouver-1": "Seattle" - "Vancouver", Gray, 1, double},
        route! {"seattle-vancouver-2": "Seattle" - "Vancouver", Gray, 1, double},
    ]
}

/// The 30 standard destination tickets.
pub fn standard_tickets() -> Vec<DestinationTicket> {
    vec![
        ticket! {"Boston" - "Miami", 12},
        ticket! {"Calgary" - "Phoenix", 13},
        ticket! {"Calgary" - "Salt Lake City", 7},
        ticket! {"Chicago" - "New Orleans", 7},
        ticket! {"Chicago" - "Santa Fe", 9},
        ticket! {"Dallas" - "New York", 11},
        ticket! {"Denver" - "El Paso", 4},
        ticket! {"Denver" - "Pittsburgh", 11},
        ticket! {"Duluth" - "El Paso", 10},
        ticket! {"Duluth" - "Houston", 8},
        ticket! {"Helena" - "Los Angeles", 8},
        ticket! {"Kansas City" - "Houston", 5},
        ticket! {"Los Angeles" - "Chicago", 16},
        ticket! {"Los Angeles" - "Miami", 20},
        ticket! {"Los Angeles" - "New York", 21},
        ticket! {"Montréal" - "Atlanta", 9},
        ticket! {"Montréal" - "New Orleans", 13},
        ticket! {"New York" - "Atlanta", 6},
        ticket! {"Portland" - "Nashville", 17},
        ticket! {"Portland" - "Phoenix", 11},
        ticket! {"San Francisco" - "Atlanta", 17},
        ticket! {"Sault St. Marie" - "Nashville", 8},
        ticket! {"Sault St. Marie" - "Oklahoma City", 9},
        ticket! {"Seattle" - "Los Angeles", 9},
        ticket! {"Seattle" - "New York", 22},
        ticket! {"Toronto" - "Miami", 10},
        ticket! {"Vancouver" - "Montréal", 20},
        ticket! {"Vancouver" - "Santa Fe", 13},
        ticket! {"Winnipeg" - "Houston", 12},
        ticket! {"Winnipeg" - "Little Rock", 11},
    ]
}

/// The standard vehicle deck: 12 cards of each ordinary color plus 14
/// locomotives, 110 cards in all.
pub fn standard_vehicle_cards() -> Vec<VehicleCard> {
    let mut cards = Vec::with_capacity(110);

    for color in Color::iter() {
        if color.is_ordinary() {
            cards.extend(std::iter::repeat(VehicleCard::new(color)).take(CARDS_PER_COLOR));
        } else if color.is_locomotive() {
            cards.extend(std::iter::repeat(VehicleCard::new(color)).take(LOCOMOTIVE_CARDS));
        }
        // Gray is a route-only color; no cards exist for it.
    }

    cards
}
