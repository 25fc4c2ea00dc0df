//! `rn-planner` — best-path queries over the road network.
//!
//! One module, one entry point: [`best_path`] answers "what is the best way
//! from here to there, and is it the only one?" under the
//! `(length, bottleneck year)` order.  Route construction and repair in
//! `rn-routes` are both built on this query.

pub mod search;

#[cfg(test)]
mod tests;

pub use search::{PathOutcome, PathPlan, best_path};
