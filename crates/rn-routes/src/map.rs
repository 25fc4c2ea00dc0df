//! The `RoadMap` — road network, route table, and route-edge index under a
//! single mutator.
//!
//! # Atomicity
//!
//! Every operation either commits all of its state changes or none.  The
//! pattern throughout is plan-then-commit: all planning and validation runs
//! against the unmodified state and may fail freely; the commit phase only
//! executes once failure is no longer possible.  No rollback code exists
//! because no partial state is ever written.

use log::debug;
use rustc_hash::FxHashSet;

use rn_core::{CityId, RouteId};
use rn_graph::{GraphError, RoadMeta, RoadNetwork};
use rn_planner::{PathOutcome, PathPlan, best_path};

use crate::index::{EdgeKey, RouteEdgeIndex};
use crate::table::RouteTable;
use crate::{RouteError, RouteResult};

pub struct RoadMap {
    pub(crate) net: RoadNetwork,
    pub(crate) routes: RouteTable,
    pub(crate) index: RouteEdgeIndex,
}

impl RoadMap {
    pub fn new() -> Self {
        Self {
            net: RoadNetwork::new(),
            routes: RouteTable::new(),
            index: RouteEdgeIndex::new(),
        }
    }

    /// Read access to the underlying network.
    pub fn network(&self) -> &RoadNetwork {
        &self.net
    }

    /// The sequence of `id`, if that route exists.
    pub fn route(&self, id: RouteId) -> Option<&[CityId]> {
        self.routes.get(id)
    }

    /// Routes currently traversing the road `{u, v}`.
    pub fn routes_through(&self, u: CityId, v: CityId) -> &[RouteId] {
        self.index.routes_through(EdgeKey::new(u, v))
    }

    // ── Road mutations (no routes involved) ───────────────────────────────

    /// Add a road between two cities, creating them as needed
    /// (see [`RoadNetwork::add_road`]).
    pub fn add_road(&mut self, c1: &str, c2: &str, length: u32, year: i32) -> RouteResult<()> {
        self.net.add_road(c1, c2, length, year)?;
        Ok(())
    }

    /// Advance the repair year of an existing road.
    pub fn repair_road(&mut self, c1: &str, c2: &str, year: i32) -> RouteResult<()> {
        self.net.repair_road(c1, c2, year)?;
        Ok(())
    }

    // ── Route operations ──────────────────────────────────────────────────

    /// Create route `id` along the unique best path from `c1` to `c2`.
    pub fn new_route(&mut self, id: RouteId, c1: &str, c2: &str) -> RouteResult<()> {
        if !id.in_range() {
            return Err(RouteError::InvalidRouteId(id));
        }
        if self.routes.is_present(id) {
            return Err(RouteError::RouteExists(id));
        }
        let u = self.require_city(c1)?;
        let v = self.require_city(c2)?;
        if u == v {
            return Err(RouteError::SameCity);
        }

        let plan = match best_path(&self.net, u, v, &FxHashSet::default(), None) {
            PathOutcome::NotFound => return Err(RouteError::Unreachable),
            PathOutcome::Ambiguous { .. } => return Err(RouteError::Ambiguous),
            PathOutcome::Found(plan) => plan,
        };

        debug!("route {id} created: {c1} to {c2}, length {}", plan.length);
        self.index.attach_path(&plan.cities, id);
        self.routes.set(id, plan.cities);
        Ok(())
    }

    /// Grow route `id` at whichever end yields the better extension to
    /// `city`.
    ///
    /// Two independent queries are run — to the current first city and to the
    /// current last — each forbidding the rest of the route.  The shorter
    /// extension wins; at equal length the newer bottleneck wins; a tie
    /// between the two ends, or a non-unique winner, fails.
    pub fn extend_route(&mut self, id: RouteId, city: &str) -> RouteResult<()> {
        if !id.in_range() {
            return Err(RouteError::InvalidRouteId(id));
        }
        let Some(seq) = self.routes.get(id) else {
            return Err(RouteError::RouteMissing(id));
        };
        let w = self.require_city(city)?;
        if seq.contains(&w) {
            return Err(RouteError::CityOnRoute(city.to_owned()));
        }
        let first = seq[0];
        let last = *seq.last().expect("routes have at least two cities");

        // Pass A approaches the first city, pass B the last; each may use the
        // approached endpoint but nothing else of the route.
        let forbid_a: FxHashSet<CityId> = seq.iter().copied().filter(|&c| c != first).collect();
        let forbid_b: FxHashSet<CityId> = seq.iter().copied().filter(|&c| c != last).collect();
        let pass_a = best_path(&self.net, w, first, &forbid_a, None);
        let pass_b = best_path(&self.net, w, last, &forbid_b, None);

        let (chosen, prepend) = match (pass_a.cost(), pass_b.cost()) {
            (None, None) => return Err(RouteError::Unreachable),
            (Some(_), None) => (pass_a, true),
            (None, Some(_)) => (pass_b, false),
            (Some((len_a, year_a)), Some((len_b, year_b))) => {
                if len_a < len_b || (len_a == len_b && year_a > year_b) {
                    (pass_a, true)
                } else if len_b < len_a || (len_a == len_b && year_b > year_a) {
                    (pass_b, false)
                } else {
                    return Err(RouteError::Ambiguous);
                }
            }
        };
        let PathOutcome::Found(plan) = chosen else {
            return Err(RouteError::Ambiguous);
        };

        // plan.cities runs from the new city to the approached endpoint.
        let seq = self.routes.get(id).expect("checked present above");
        let mut extended = Vec::with_capacity(seq.len() + plan.cities.len() - 1);
        if prepend {
            extended.extend_from_slice(&plan.cities);
            extended.extend_from_slice(&seq[1..]);
        } else {
            extended.extend_from_slice(seq);
            extended.extend(plan.cities.iter().rev().skip(1));
        }

        debug!(
            "route {id} extended to {city} at the {} end (+{} km)",
            if prepend { "first" } else { "last" },
            plan.length
        );
        self.index.attach_path(&plan.cities, id);
        self.routes.replace(id, extended);
        Ok(())
    }

    /// Remove the road between `c1` and `c2`, repairing every route that
    /// traverses it.
    ///
    /// Each affected route gets a detour planned around the doomed road,
    /// forbidden to touch any other city of that route.  If any detour is
    /// missing or ambiguous the whole operation fails and nothing — graph,
    /// table, or index — changes.
    pub fn remove_road(&mut self, c1: &str, c2: &str) -> RouteResult<()> {
        let u = self.require_city(c1)?;
        let v = self.require_city(c2)?;
        if self.net.road(u, v).is_none() {
            return Err(GraphError::RoadNotFound(c1.to_owned(), c2.to_owned()).into());
        }
        let key = EdgeKey::new(u, v);

        // Plan every detour before touching anything.  The road is still in
        // the graph, so it is excluded explicitly.
        let mut repairs: Vec<(RouteId, PathPlan)> = Vec::new();
        for &r in self.index.routes_through(key) {
            let seq = self.routes.get(r).expect("indexed route is present");
            let forbidden: FxHashSet<CityId> =
                seq.iter().copied().filter(|&c| c != u && c != v).collect();
            match best_path(&self.net, v, u, &forbidden, Some((u, v))) {
                PathOutcome::NotFound => return Err(RouteError::Unreachable),
                PathOutcome::Ambiguous { .. } => return Err(RouteError::Ambiguous),
                PathOutcome::Found(plan) => repairs.push((r, plan)),
            }
        }

        // Commit: splice each detour, fix the index, then drop the road.
        for (r, plan) in repairs {
            self.splice(r, u, v, &plan.cities);
        }
        self.index.erase_edge(key);
        self.net.remove_road(u, v);
        debug!("road {c1} - {c2} removed");
        Ok(())
    }

    /// Replace the single edge `{u, v}` on route `r` with `detour`
    /// (a city sequence from `v` to `u`), oriented to match the route.
    fn splice(&mut self, r: RouteId, u: CityId, v: CityId, detour: &[CityId]) {
        let seq = self.routes.get(r).expect("spliced route is present");
        let at = seq
            .windows(2)
            .position(|pair| EdgeKey::new(pair[0], pair[1]) == EdgeKey::new(u, v))
            .expect("route traverses the removed road");

        // Interior of the detour, oriented from seq[at] to seq[at + 1].
        let interior = &detour[1..detour.len() - 1];
        let mut patched = Vec::with_capacity(seq.len() + interior.len());
        patched.extend_from_slice(&seq[..=at]);
        if seq[at] == v {
            patched.extend_from_slice(interior);
        } else {
            patched.extend(interior.iter().rev());
        }
        patched.extend_from_slice(&seq[at + 1..]);

        debug!("route {r} rerouted around {u}-{v} via {} cities", interior.len());
        self.index.detach(EdgeKey::new(u, v), r);
        self.index.attach_path(&patched[at..at + interior.len() + 2], r);
        self.routes.replace(r, patched);
    }

    /// Delete route `id`.  The roads it used stay in the graph.
    pub fn remove_route(&mut self, id: RouteId) -> RouteResult<()> {
        if !id.in_range() {
            return Err(RouteError::InvalidRouteId(id));
        }
        let Some(seq) = self.routes.clear(id) else {
            return Err(RouteError::RouteMissing(id));
        };
        self.index.detach_path(&seq, id);
        debug!("route {id} removed ({} cities)", seq.len());
        Ok(())
    }

    /// Record route `id` along an explicitly listed city sequence, creating
    /// or repairing roads as it goes.
    ///
    /// `links[i]` is the declared `(length, year)` of the road between
    /// `cities[i]` and `cities[i + 1]`; `links.len() + 1 == cities.len()`
    /// and `cities.len() ≥ 2` are the caller's contract.  Where a listed
    /// road already exists, its length must match exactly and its recorded
    /// year must not exceed the declared one; the declared year then becomes
    /// its repair year.  Missing cities and roads are created.
    pub fn route_through(
        &mut self,
        id: RouteId,
        cities: &[&str],
        links: &[(u32, i32)],
    ) -> RouteResult<()> {
        assert_eq!(links.len() + 1, cities.len(), "one link per consecutive pair");
        assert!(cities.len() >= 2, "a route needs at least two cities");

        if !id.in_range() {
            return Err(RouteError::InvalidRouteId(id));
        }
        if self.routes.is_present(id) {
            return Err(RouteError::RouteExists(id));
        }
        let mut seen = FxHashSet::default();
        for &city in cities {
            if !rn_core::valid_city_name(city) {
                return Err(GraphError::InvalidCityName(city.to_owned()).into());
            }
            if !seen.insert(city) {
                return Err(RouteError::DuplicateCity(city.to_owned()));
            }
        }
        // Check every declared link against what the graph already has.
        for (i, &(length, year)) in links.iter().enumerate() {
            if length == 0 {
                return Err(GraphError::ZeroLength.into());
            }
            if year == 0 {
                return Err(GraphError::ZeroYear.into());
            }
            let existing = self
                .net
                .city_id(cities[i])
                .zip(self.net.city_id(cities[i + 1]))
                .and_then(|(a, b)| self.net.road(a, b));
            if let Some(meta) = existing {
                if meta.length != length {
                    return Err(RouteError::LengthMismatch {
                        city1: cities[i].to_owned(),
                        city2: cities[i + 1].to_owned(),
                        have: meta.length,
                        given: length,
                    });
                }
                if year < meta.year {
                    return Err(GraphError::YearRegression { have: meta.year, given: year }.into());
                }
            }
        }

        // Commit: register cities, then create or re-year each road.
        let ids: Vec<CityId> = cities.iter().map(|c| self.net.add_city(c)).collect();
        for (i, &(length, year)) in links.iter().enumerate() {
            let (a, b) = (ids[i], ids[i + 1]);
            match self.net.road(a, b) {
                Some(meta) if year > meta.year => self.net.set_year(a, b, year),
                Some(_) => {}
                None => self.net.insert_road(a, b, RoadMeta { length, year }),
            }
        }
        debug!("route {id} recorded through {} cities", ids.len());
        self.index.attach_path(&ids, id);
        self.routes.set(id, ids);
        Ok(())
    }

    // ── Projection ────────────────────────────────────────────────────────

    /// Textual description of route `id`:
    /// `id;city;length;year;city;…;city`, with each road's current
    /// metadata.  Absent or out-of-range routes yield the empty string.
    pub fn route_description(&self, id: RouteId) -> String {
        let Some(seq) = self.routes.get(id) else {
            return String::new();
        };
        let mut out = id.to_string();
        for (i, &c) in seq.iter().enumerate() {
            out.push(';');
            out.push_str(self.net.city_name(c));
            if i + 1 < seq.len() {
                let meta = self.net.road(c, seq[i + 1]).expect("road on an active route");
                out.push_str(&format!(";{};{}", meta.length, meta.year));
            }
        }
        out
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn require_city(&self, name: &str) -> RouteResult<CityId> {
        self.net
            .city_id(name)
            .ok_or_else(|| GraphError::CityNotFound(name.to_owned()).into())
    }
}

impl Default for RoadMap {
    fn default() -> Self {
        Self::new()
    }
}
