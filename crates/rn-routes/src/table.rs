//! Fixed-capacity table of numbered routes.

use rn_core::{CityId, ROUTE_MAX, RouteId};

/// Slots `1..=ROUTE_MAX`; a slot is either absent or an ordered city
/// sequence.  Slot 0 exists but is permanently absent, so a `RouteId` indexes
/// the table directly.
///
/// The table stores sequences only — it knows nothing about the graph.  The
/// simple-path and endpoint invariants are maintained by the `RoadMap`
/// operations that feed it.
pub struct RouteTable {
    slots: Vec<Option<Vec<CityId>>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { slots: vec![None; ROUTE_MAX as usize + 1] }
    }

    /// `true` when `id` is in range and its slot holds a sequence.
    pub fn is_present(&self, id: RouteId) -> bool {
        self.get(id).is_some()
    }

    /// The sequence of `id`, if present.  Out-of-range ids are absent.
    pub fn get(&self, id: RouteId) -> Option<&[CityId]> {
        self.slots.get(id.index())?.as_deref()
    }

    /// Fill an absent slot.
    ///
    /// # Panics
    /// Panics if `id` is out of range or the slot is occupied — callers
    /// validate both before committing.
    pub fn set(&mut self, id: RouteId, seq: Vec<CityId>) {
        assert!(id.in_range(), "route id {id} out of range");
        let slot = &mut self.slots[id.index()];
        assert!(slot.is_none(), "route {id} already present");
        *slot = Some(seq);
    }

    /// Overwrite a present slot, returning the previous sequence.
    pub fn replace(&mut self, id: RouteId, seq: Vec<CityId>) -> Option<Vec<CityId>> {
        self.slots[id.index()].replace(seq)
    }

    /// Empty the slot, returning the sequence that was there.
    pub fn clear(&mut self, id: RouteId) -> Option<Vec<CityId>> {
        self.slots.get_mut(id.index())?.take()
    }

    /// All present routes in ascending id order.
    pub fn iter_present(&self) -> impl Iterator<Item = (RouteId, &[CityId])> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((RouteId(i as u16), slot.as_deref()?)))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
