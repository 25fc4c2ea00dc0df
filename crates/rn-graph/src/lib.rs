//! `rn-graph` — the mutable road-network store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`network`] | `RoadNetwork`, `RoadMeta`                       |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                  |
//!
//! Higher layers (`rn-planner`, `rn-routes`) treat this crate as the single
//! source of truth for which cities and roads exist.

pub mod error;
pub mod network;


pub use error::{GraphError, GraphResult};
pub use network::{RoadMeta, RoadNetwork};
