//! Best-path search over the road network.
//!
//! # Cost order
//!
//! The cost of a path is the pair `(total length, bottleneck year)` where the
//! bottleneck year is the minimum build/repair year among its roads.  Path
//! `P₁` beats `P₂` when it is shorter, or equally long with a **newer**
//! bottleneck.  A best path is *unique* when no other feasible path reaches
//! the destination at the same cost pair.
//!
//! # Algorithm
//!
//! Label-correcting relaxation over a FIFO worklist (lengths are
//! non-negative, the graph mutates too often to amortise any preprocessing).
//! Per-vertex state is `(dist, year_best)`; a relaxation that strictly
//! improves the lex order overwrites the state and re-queues the vertex.
//!
//! Uniqueness is tracked during the same sweep: reaching a vertex at exactly
//! its current best state through a *different* predecessor marks the vertex
//! as tied.  The tie marks are cleared whenever the state improves, so after
//! the worklist drains they describe the final states only.  The best path is
//! ambiguous iff a tied vertex lies on the predecessor chain of the
//! destination.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use rn_core::CityId;
use rn_graph::RoadNetwork;

// ── Results ───────────────────────────────────────────────────────────────────

/// A fully reconstructed best path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPlan {
    /// City sequence from source to destination, inclusive.  Always ≥ 2
    /// entries and simple (the search relaxes each vertex state at most
    /// once per improvement, so no cycles survive reconstruction).
    pub cities: Vec<CityId>,
    /// Sum of road lengths along the path.
    pub length: u64,
    /// Minimum road year along the path.
    pub bottleneck: i32,
}

/// Outcome of a best-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// No feasible path (also returned for `src == dst`).
    NotFound,
    /// A best cost exists but more than one path achieves it.  The cost is
    /// carried so callers can still compare against another query.
    Ambiguous { length: u64, bottleneck: i32 },
    /// Exactly one path achieves the best cost.
    Found(PathPlan),
}

impl PathOutcome {
    /// Best cost pair if the destination was reachable at all.
    pub fn cost(&self) -> Option<(u64, i32)> {
        match *self {
            PathOutcome::NotFound => None,
            PathOutcome::Ambiguous { length, bottleneck } => Some((length, bottleneck)),
            PathOutcome::Found(ref plan) => Some((plan.length, plan.bottleneck)),
        }
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Find the best path from `src` to `dst`.
///
/// `forbidden` vertices may not be traversed (callers never include `src` or
/// `dst`).  `forbidden_road`, if set, excludes that single road from
/// relaxation — used when planning a detour around a road that is still in
/// the graph.
///
/// All per-vertex buffers are locals sized by the current city count and are
/// dropped on every return path.
pub fn best_path(
    net: &RoadNetwork,
    src: CityId,
    dst: CityId,
    forbidden: &FxHashSet<CityId>,
    forbidden_road: Option<(CityId, CityId)>,
) -> PathOutcome {
    if src == dst {
        return PathOutcome::NotFound;
    }
    let n = net.city_count();

    let mut dist = vec![u64::MAX; n];
    // Min year over the prefix; MAX is "no road traversed yet", newer than
    // any real year.
    let mut year_best = vec![i32::MAX; n];
    let mut prev = vec![CityId::INVALID; n];
    // Vertex reached at its current best state via a second predecessor.
    let mut tied = vec![false; n];
    let mut in_queue = vec![false; n];

    dist[src.index()] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(src);
    in_queue[src.index()] = true;

    while let Some(x) = queue.pop_front() {
        in_queue[x.index()] = false;
        if forbidden.contains(&x) {
            continue;
        }
        let dist_x = dist[x.index()];
        let year_x = year_best[x.index()];

        for (y, meta) in net.neighbours(x) {
            if let Some((a, b)) = forbidden_road {
                if (x == a && y == b) || (x == b && y == a) {
                    continue;
                }
            }
            let new_dist = dist_x + meta.length as u64;
            let new_year = year_x.min(meta.year);
            let yi = y.index();

            if new_dist < dist[yi] || (new_dist == dist[yi] && new_year > year_best[yi]) {
                dist[yi] = new_dist;
                year_best[yi] = new_year;
                prev[yi] = x;
                tied[yi] = false;
                if !in_queue[yi] {
                    queue.push_back(y);
                    in_queue[yi] = true;
                }
            } else if new_dist == dist[yi] && new_year == year_best[yi] && prev[yi] != x {
                tied[yi] = true;
            }
        }
    }

    if dist[dst.index()] == u64::MAX {
        return PathOutcome::NotFound;
    }

    // Walk the predecessor chain back to the source; any tied vertex on it
    // means a second path matches the best cost.
    let mut cities = Vec::new();
    let mut ambiguous = false;
    let mut cur = dst;
    loop {
        if tied[cur.index()] {
            ambiguous = true;
        }
        cities.push(cur);
        if cur == src {
            break;
        }
        cur = prev[cur.index()];
    }

    if ambiguous {
        return PathOutcome::Ambiguous {
            length: dist[dst.index()],
            bottleneck: year_best[dst.index()],
        };
    }

    cities.reverse();
    PathOutcome::Found(PathPlan {
        cities,
        length: dist[dst.index()],
        bottleneck: year_best[dst.index()],
    })
}
