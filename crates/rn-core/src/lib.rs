//! `rn-core` — foundational types for the roadnet workspace.
//!
//! This crate is a dependency of every other `rn-*` crate.  It intentionally
//! has no `rn-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`ids`]  | `CityId`, `RouteId`, `ROUTE_MAX`           |
//! | [`name`] | `valid_city_name` byte rule                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the id types.     |

pub mod ids;
pub mod name;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CityId, ROUTE_MAX, RouteId};
pub use name::valid_city_name;
