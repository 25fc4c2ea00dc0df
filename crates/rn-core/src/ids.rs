//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can key hash maps and sorted
//! collections without ceremony.  The inner integer is `pub` to allow direct
//! indexing into id-indexed `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.
//!
//! `Display` prints the bare number — both ids appear verbatim in the textual
//! protocol (`RouteId` leads every route description line).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a city, dense and assigned in insertion order.
    /// The name↔id mapping is bijective and never shrinks.
    pub struct CityId(u32);
}

typed_id! {
    /// Number of a national route.  Valid route numbers are `1..=999`;
    /// `u16` keeps route-id lists compact.
    pub struct RouteId(u16);
}

/// Largest valid route number.  Route `0` is reserved as absent/invalid.
pub const ROUTE_MAX: u16 = 999;

impl RouteId {
    /// `true` for the numbers a route may actually carry (`1..=ROUTE_MAX`).
    #[inline]
    pub fn in_range(self) -> bool {
        self.0 >= 1 && self.0 <= ROUTE_MAX
    }
}
