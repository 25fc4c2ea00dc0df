//! Road network store.
//!
//! # Data layout
//!
//! Cities are dense: `CityId(n)` is the nth name ever registered, and ids are
//! never reused or freed.  Adjacency is one hash map per city,
//!
//! ```text
//! adjacency[u] : FxHashMap<CityId, RoadMeta>   // neighbour → (length, year)
//! ```
//!
//! so road lookup by endpoint pair is O(1) and neighbour iteration is linear
//! in the degree.  A road is stored in both endpoint rows; the two copies are
//! kept identical by every mutator.
//!
//! Unlike a build-once CSR graph, this store mutates for the whole process
//! lifetime — roads are added, re-yeared, and removed while routes exist on
//! top of them — which is why each row is a map rather than a sorted slice.

use log::debug;
use rustc_hash::FxHashMap;

use rn_core::{CityId, valid_city_name};

use crate::{GraphError, GraphResult};

// ── RoadMeta ──────────────────────────────────────────────────────────────────

/// Per-road metadata.
///
/// `length` is in km and positive; `year` is the build or most recent repair
/// year and never `0` (there is no year zero).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoadMeta {
    pub length: u32,
    pub year: i32,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// The mutable national road network: named cities plus bidirectional roads.
///
/// At most one road exists per unordered city pair.  Cities are immutable
/// once created and are never deleted.
#[derive(Default)]
pub struct RoadNetwork {
    /// City name by id.  Indexed by `CityId`; grows monotonically.
    names: Vec<String>,

    /// City id by name.  Exact inverse of `names`.
    ids: FxHashMap<String, CityId>,

    /// Per-city neighbour rows.  `adjacency[u][v]` and `adjacency[v][u]`
    /// always hold the same `RoadMeta`.
    adjacency: Vec<FxHashMap<CityId, RoadMeta>>,

    /// Number of roads (unordered pairs).
    road_count: usize,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Cities ────────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.names.len()
    }

    /// Id of `name`, if registered.
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.ids.get(name).copied()
    }

    /// Name of `id`.
    ///
    /// # Panics
    /// Panics if `id` was never returned by [`add_city`](Self::add_city).
    pub fn city_name(&self, id: CityId) -> &str {
        &self.names[id.index()]
    }

    /// Register `name` and return its id; returns the existing id when the
    /// city is already known.  Name validity is the caller's concern — the
    /// registry itself accepts any string.
    pub fn add_city(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = CityId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        self.adjacency.push(FxHashMap::default());
        id
    }

    // ── Roads ─────────────────────────────────────────────────────────────

    pub fn road_count(&self) -> usize {
        self.road_count
    }

    /// Metadata of the road `{u, v}`, if one exists.  Symmetric in `u`, `v`.
    pub fn road(&self, u: CityId, v: CityId) -> Option<RoadMeta> {
        self.adjacency.get(u.index())?.get(&v).copied()
    }

    /// Add a road between `c1` and `c2`, creating either city if missing.
    ///
    /// # Errors
    ///
    /// Fails on an invalid name, equal names, zero length, year 0, or when a
    /// road between the pair already exists.  The existing-road check can
    /// only fire when both cities already exist, so a failure never leaves a
    /// freshly created city behind.
    pub fn add_road(&mut self, c1: &str, c2: &str, length: u32, year: i32) -> GraphResult<()> {
        if !valid_city_name(c1) {
            return Err(GraphError::InvalidCityName(c1.to_owned()));
        }
        if !valid_city_name(c2) {
            return Err(GraphError::InvalidCityName(c2.to_owned()));
        }
        if c1 == c2 {
            return Err(GraphError::SameCity);
        }
        if length == 0 {
            return Err(GraphError::ZeroLength);
        }
        if year == 0 {
            return Err(GraphError::ZeroYear);
        }
        if let (Some(u), Some(v)) = (self.city_id(c1), self.city_id(c2)) {
            if self.road(u, v).is_some() {
                return Err(GraphError::RoadExists(c1.to_owned(), c2.to_owned()));
            }
        }
        let u = self.add_city(c1);
        let v = self.add_city(c2);
        self.insert_road(u, v, RoadMeta { length, year });
        debug!("road {c1} - {c2} added: length {length}, year {year}");
        Ok(())
    }

    /// Advance the build/repair year of the road between `c1` and `c2`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid name, a missing city or road, year 0, or a year
    /// older than the recorded one.  Repairing to the same year succeeds.
    pub fn repair_road(&mut self, c1: &str, c2: &str, year: i32) -> GraphResult<()> {
        if !valid_city_name(c1) {
            return Err(GraphError::InvalidCityName(c1.to_owned()));
        }
        if !valid_city_name(c2) {
            return Err(GraphError::InvalidCityName(c2.to_owned()));
        }
        if year == 0 {
            return Err(GraphError::ZeroYear);
        }
        let u = self
            .city_id(c1)
            .ok_or_else(|| GraphError::CityNotFound(c1.to_owned()))?;
        let v = self
            .city_id(c2)
            .ok_or_else(|| GraphError::CityNotFound(c2.to_owned()))?;
        let meta = self
            .road(u, v)
            .ok_or_else(|| GraphError::RoadNotFound(c1.to_owned(), c2.to_owned()))?;
        if year < meta.year {
            return Err(GraphError::YearRegression { have: meta.year, given: year });
        }
        self.set_year(u, v, year);
        debug!("road {c1} - {c2} repaired: year {} to {year}", meta.year);
        Ok(())
    }

    /// Insert a road by id into both endpoint rows, bypassing the name and
    /// metadata checks of [`add_road`](Self::add_road).  The pair must be
    /// distinct, registered, and must not already carry a road; callers have
    /// validated the metadata.
    pub fn insert_road(&mut self, u: CityId, v: CityId, meta: RoadMeta) {
        let prev_uv = self.adjacency[u.index()].insert(v, meta);
        let prev_vu = self.adjacency[v.index()].insert(u, meta);
        debug_assert!(prev_uv.is_none() && prev_vu.is_none());
        self.road_count += 1;
    }

    /// Overwrite the year on both copies of an existing road.  Callers have
    /// checked the road exists and the year does not regress.
    pub fn set_year(&mut self, u: CityId, v: CityId, year: i32) {
        if let Some(m) = self.adjacency[u.index()].get_mut(&v) {
            m.year = year;
        }
        if let Some(m) = self.adjacency[v.index()].get_mut(&u) {
            m.year = year;
        }
    }

    /// Delete the road `{u, v}`, returning its metadata.
    ///
    /// Route safety is not this store's concern: callers must first ensure
    /// no route still traverses the pair.
    pub fn remove_road(&mut self, u: CityId, v: CityId) -> Option<RoadMeta> {
        let meta = self.adjacency.get_mut(u.index())?.remove(&v)?;
        self.adjacency[v.index()].remove(&u);
        self.road_count -= 1;
        Some(meta)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterator over `(neighbour, meta)` for every road out of `u`.
    ///
    /// A fresh iterator value per call; order is unspecified.
    pub fn neighbours(&self, u: CityId) -> impl Iterator<Item = (CityId, RoadMeta)> + '_ {
        self.adjacency[u.index()].iter().map(|(&v, &m)| (v, m))
    }

    /// Number of roads incident to `u`.
    #[inline]
    pub fn degree(&self, u: CityId) -> usize {
        self.adjacency[u.index()].len()
    }
}
