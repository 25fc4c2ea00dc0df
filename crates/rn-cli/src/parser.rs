//! Line parser for the `;`-separated command protocol.
//!
//! # Grammar
//!
//! One command per line.  An empty line or a leading `#` is a no-op.  Fields
//! are separated by `;` and never quoted or escaped — a city name simply may
//! not contain `;` or control bytes.
//!
//! ```text
//! addRoad;city1;city2;length;year
//! repairRoad;city1;city2;year
//! getRouteDescription;routeId
//! newRoute;routeId;city1;city2
//! extendRoute;routeId;city
//! removeRoad;city1;city2
//! removeRoute;routeId
//! routeId;city;length;year;city;length;year;…;city
//! ```
//!
//! Numbers are plain decimal: `length` is a positive u32, `year` a non-zero
//! i32 (optionally `-`-signed), `routeId` is `1..=999` with no leading zero.
//! Anything that does not fit the grammar parses to [`Parsed::Invalid`];
//! semantic failures are the engine's business, not the parser's.

use rn_core::{RouteId, valid_city_name};

// ── Parse result ──────────────────────────────────────────────────────────────

/// A syntactically valid command, borrowing its city names from the line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    AddRoad { city1: &'a str, city2: &'a str, length: u32, year: i32 },
    RepairRoad { city1: &'a str, city2: &'a str, year: i32 },
    RouteDescription { route: RouteId },
    NewRoute { route: RouteId, city1: &'a str, city2: &'a str },
    ExtendRoute { route: RouteId, city: &'a str },
    RemoveRoad { city1: &'a str, city2: &'a str },
    RemoveRoute { route: RouteId },
    /// The numeric form: record a route along explicitly listed roads.
    /// `links[i]` belongs between `cities[i]` and `cities[i + 1]`.
    RouteThrough { route: RouteId, cities: Vec<&'a str>, links: Vec<(u32, i32)> },
}

/// What a line turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed<'a> {
    /// Comment or empty line.
    Noop,
    Command(Command<'a>),
    /// Malformed in any way; reported as an error by the caller.
    Invalid,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Parse one input line (with or without its trailing newline).
pub fn parse_line(line: &str) -> Parsed<'_> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if line.is_empty() || line.starts_with('#') {
        return Parsed::Noop;
    }

    let fields: Vec<&str> = line.split(';').collect();
    let cmd = match (fields[0], fields.len()) {
        ("addRoad", 5) => {
            let (Some(length), Some(year)) = (parse_length(fields[3]), parse_year(fields[4]))
            else {
                return Parsed::Invalid;
            };
            Command::AddRoad { city1: fields[1], city2: fields[2], length, year }
        }
        ("repairRoad", 4) => {
            let Some(year) = parse_year(fields[3]) else {
                return Parsed::Invalid;
            };
            Command::RepairRoad { city1: fields[1], city2: fields[2], year }
        }
        ("getRouteDescription", 2) => {
            let Some(route) = parse_route_id(fields[1]) else {
                return Parsed::Invalid;
            };
            Command::RouteDescription { route }
        }
        ("newRoute", 4) => {
            let Some(route) = parse_route_id(fields[1]) else {
                return Parsed::Invalid;
            };
            Command::NewRoute { route, city1: fields[2], city2: fields[3] }
        }
        ("extendRoute", 3) => {
            let Some(route) = parse_route_id(fields[1]) else {
                return Parsed::Invalid;
            };
            Command::ExtendRoute { route, city: fields[2] }
        }
        ("removeRoad", 3) => Command::RemoveRoad { city1: fields[1], city2: fields[2] },
        ("removeRoute", 2) => {
            let Some(route) = parse_route_id(fields[1]) else {
                return Parsed::Invalid;
            };
            Command::RemoveRoute { route }
        }
        _ => return parse_route_through(&fields),
    };

    if command_cities(&cmd).iter().all(|c| valid_city_name(c)) {
        Parsed::Command(cmd)
    } else {
        Parsed::Invalid
    }
}

/// The numeric route-through form: `routeId;city;length;year;city;…;city`.
fn parse_route_through<'a>(fields: &[&'a str]) -> Parsed<'a> {
    let Some(route) = parse_route_id(fields[0]) else {
        return Parsed::Invalid;
    };
    // After the route number: one city, then (length, year, city) triples.
    let rest = &fields[1..];
    if rest.len() < 4 || rest.len() % 3 != 1 {
        return Parsed::Invalid;
    }

    let mut cities = Vec::with_capacity(rest.len() / 3 + 1);
    let mut links = Vec::with_capacity(rest.len() / 3);
    if !valid_city_name(rest[0]) {
        return Parsed::Invalid;
    }
    cities.push(rest[0]);
    for triple in rest[1..].chunks(3) {
        let (Some(length), Some(year)) = (parse_length(triple[0]), parse_year(triple[1]))
        else {
            return Parsed::Invalid;
        };
        if !valid_city_name(triple[2]) {
            return Parsed::Invalid;
        }
        links.push((length, year));
        cities.push(triple[2]);
    }
    Parsed::Command(Command::RouteThrough { route, cities, links })
}

// ── Field parsers ─────────────────────────────────────────────────────────────

/// Positive decimal u32; leading zeros tolerated, signs are not.
fn parse_length(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|&v| v != 0)
}

/// Non-zero decimal i32, optionally `-`-signed.
fn parse_year(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|&v| v != 0)
}

/// Route number `1..=999`.  A leading zero is rejected outright, so `0`,
/// `042`, and `1000` are all invalid.
fn parse_route_id(s: &str) -> Option<RouteId> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let v: u32 = s.parse().ok()?;
    let id = RouteId(u16::try_from(v).ok()?);
    id.in_range().then_some(id)
}

/// City fields of a fixed-shape command, for one-pass name validation.
fn command_cities<'a>(cmd: &Command<'a>) -> Vec<&'a str> {
    match *cmd {
        Command::AddRoad { city1, city2, .. }
        | Command::RepairRoad { city1, city2, .. }
        | Command::NewRoute { city1, city2, .. }
        | Command::RemoveRoad { city1, city2 } => vec![city1, city2],
        Command::ExtendRoute { city, .. } => vec![city],
        Command::RouteDescription { .. } | Command::RemoveRoute { .. } => vec![],
        // Validated field-by-field during its own parse.
        Command::RouteThrough { .. } => vec![],
    }
}
