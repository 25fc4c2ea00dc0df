//! `rn-routes` — numbered national routes over the road network.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`table`] | `RouteTable` — 999 numbered slots                         |
//! | [`index`] | `RouteEdgeIndex`, `EdgeKey` — which routes use which road |
//! | [`map`]   | `RoadMap` — the facade with the atomic operations         |
//! | [`error`] | `RouteError`, `RouteResult<T>`                            |
//!
//! Every mutation goes through [`RoadMap`]; the table and index are never
//! updated independently, which is what keeps them mutually consistent.

pub mod error;
pub mod index;
pub mod map;
pub mod table;


pub use error::{RouteError, RouteResult};
pub use index::{EdgeKey, RouteEdgeIndex};
pub use map::RoadMap;
pub use table::RouteTable;
