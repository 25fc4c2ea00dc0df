//! Route-edge index: which routes traverse which road.
//!
//! The index is the exact inversion of the route table — for every present
//! route and every consecutive city pair on it, the pair's entry contains
//! that route id, and nothing else.  `remove_road` reads it to find the
//! routes it must repair without scanning the whole table.

use rustc_hash::FxHashMap;

use rn_core::{CityId, RouteId};

// ── EdgeKey ───────────────────────────────────────────────────────────────────

/// An unordered city pair, normalised so `{u,v}` and `{v,u}` collide.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EdgeKey {
    lo: CityId,
    hi: CityId,
}

impl EdgeKey {
    pub fn new(a: CityId, b: CityId) -> Self {
        debug_assert_ne!(a, b);
        if a < b { Self { lo: a, hi: b } } else { Self { lo: b, hi: a } }
    }

    /// The normalised endpoint pair, lower id first.
    pub fn cities(self) -> (CityId, CityId) {
        (self.lo, self.hi)
    }
}

// ── RouteEdgeIndex ────────────────────────────────────────────────────────────

/// Edge → multiset of route ids.
///
/// Entries are plain vectors: attachment is a push, enumeration is a slice
/// walk, and the same route may appear twice transiently while a multi-step
/// repair is in flight.  Detaching removes one occurrence.
#[derive(Default)]
pub struct RouteEdgeIndex {
    through: FxHashMap<EdgeKey, Vec<RouteId>>,
}

impl RouteEdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `route` traverses `edge`.
    pub fn attach(&mut self, edge: EdgeKey, route: RouteId) {
        self.through.entry(edge).or_default().push(route);
    }

    /// Remove one occurrence of `route` from `edge`'s entry.
    ///
    /// No-op when the route is not attached; empty entries are dropped.
    pub fn detach(&mut self, edge: EdgeKey, route: RouteId) {
        if let Some(routes) = self.through.get_mut(&edge) {
            if let Some(pos) = routes.iter().position(|&r| r == route) {
                routes.swap_remove(pos);
            }
            if routes.is_empty() {
                self.through.remove(&edge);
            }
        }
    }

    /// The routes currently traversing `edge` (unordered, possibly with
    /// transient duplicates).
    pub fn routes_through(&self, edge: EdgeKey) -> &[RouteId] {
        self.through.get(&edge).map_or(&[], Vec::as_slice)
    }

    /// Drop the entry for `edge` entirely.  Used when the road itself is
    /// deleted, after every attached route has been detached.
    pub fn erase_edge(&mut self, edge: EdgeKey) {
        self.through.remove(&edge);
    }

    /// Attach `route` to every consecutive pair of `seq`.
    pub fn attach_path(&mut self, seq: &[CityId], route: RouteId) {
        for pair in seq.windows(2) {
            self.attach(EdgeKey::new(pair[0], pair[1]), route);
        }
    }

    /// Detach `route` from every consecutive pair of `seq`.
    pub fn detach_path(&mut self, seq: &[CityId], route: RouteId) {
        for pair in seq.windows(2) {
            self.detach(EdgeKey::new(pair[0], pair[1]), route);
        }
    }

    /// Number of edges with at least one attached route.
    pub fn edge_count(&self) -> usize {
        self.through.len()
    }

    /// All `(edge, routes)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, &[RouteId])> {
        self.through.iter().map(|(&k, v)| (k, v.as_slice()))
    }
}
