//! Unit tests for rn-planner.
//!
//! Networks are built by hand per test; years and lengths are chosen so the
//! preferred path is forced, tied, or broken exactly as the test asserts.

#[cfg(test)]
mod helpers {
    use rn_core::CityId;
    use rn_graph::RoadNetwork;

    /// Build a network from `(from, to, length, year)` tuples and return the
    /// id of each distinct name in first-appearance order.
    pub fn net(roads: &[(&str, &str, u32, i32)]) -> RoadNetwork {
        let mut net = RoadNetwork::new();
        for &(a, b, len, year) in roads {
            net.add_road(a, b, len, year).unwrap();
        }
        net
    }

    pub fn id(net: &RoadNetwork, name: &str) -> CityId {
        net.city_id(name).unwrap()
    }

    pub fn names(net: &RoadNetwork, cities: &[CityId]) -> Vec<String> {
        cities.iter().map(|&c| net.city_name(c).to_owned()).collect()
    }
}

#[cfg(test)]
mod search {
    use rustc_hash::FxHashSet;

    use super::helpers::{id, names, net};
    use crate::{PathOutcome, best_path};

    fn no_forbidden() -> FxHashSet<rn_core::CityId> {
        FxHashSet::default()
    }

    #[test]
    fn straight_line() {
        let g = net(&[("A", "B", 10, 2000), ("B", "C", 10, 2000)]);
        let out = best_path(&g, id(&g, "A"), id(&g, "C"), &no_forbidden(), None);
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(names(&g, &plan.cities), ["A", "B", "C"]);
        assert_eq!(plan.length, 20);
        assert_eq!(plan.bottleneck, 2000);
    }

    #[test]
    fn same_city_is_not_found() {
        let g = net(&[("A", "B", 1, 2000)]);
        let a = id(&g, "A");
        assert_eq!(best_path(&g, a, a, &no_forbidden(), None), PathOutcome::NotFound);
    }

    #[test]
    fn disconnected_is_not_found() {
        let g = net(&[("A", "B", 1, 2000), ("C", "D", 1, 2000)]);
        let out = best_path(&g, id(&g, "A"), id(&g, "C"), &no_forbidden(), None);
        assert_eq!(out, PathOutcome::NotFound);
    }

    #[test]
    fn shorter_beats_newer() {
        // The long branch is freshly repaired; length still decides first.
        let g = net(&[
            ("A", "B", 1, 1950),
            ("B", "C", 1, 1950),
            ("A", "C", 10, 2020),
        ]);
        let out = best_path(&g, id(&g, "A"), id(&g, "C"), &no_forbidden(), None);
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(names(&g, &plan.cities), ["A", "B", "C"]);
        assert_eq!(plan.length, 2);
        assert_eq!(plan.bottleneck, 1950);
    }

    #[test]
    fn equal_cost_diamond_is_ambiguous() {
        let g = net(&[
            ("A", "B", 5, 2000),
            ("A", "C", 5, 2000),
            ("B", "D", 5, 2000),
            ("C", "D", 5, 2000),
        ]);
        let out = best_path(&g, id(&g, "A"), id(&g, "D"), &no_forbidden(), None);
        assert_eq!(out, PathOutcome::Ambiguous { length: 10, bottleneck: 2000 });
    }

    #[test]
    fn newer_bottleneck_wins_at_equal_length() {
        // Both branches are 10 long; the B branch bottoms out at 2010, the C
        // branch at 2000.
        let g = net(&[
            ("A", "B", 5, 2010),
            ("B", "D", 5, 2015),
            ("A", "C", 5, 2000),
            ("C", "D", 5, 2000),
        ]);
        let out = best_path(&g, id(&g, "A"), id(&g, "D"), &no_forbidden(), None);
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(names(&g, &plan.cities), ["A", "B", "D"]);
        assert_eq!(plan.length, 10);
        assert_eq!(plan.bottleneck, 2010);
    }

    #[test]
    fn bottleneck_is_minimum_year() {
        let g = net(&[
            ("A", "B", 1, 2010),
            ("B", "C", 1, 1995),
            ("C", "D", 1, 2005),
        ]);
        let out = best_path(&g, id(&g, "A"), id(&g, "D"), &no_forbidden(), None);
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(plan.bottleneck, 1995);
    }

    #[test]
    fn forbidden_vertex_forces_detour() {
        let g = net(&[
            ("A", "B", 1, 2000),
            ("B", "C", 1, 2000),
            ("A", "C", 10, 2000),
        ]);
        let mut forbidden = no_forbidden();
        forbidden.insert(id(&g, "B"));
        let out = best_path(&g, id(&g, "A"), id(&g, "C"), &forbidden, None);
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(names(&g, &plan.cities), ["A", "C"]);
        assert_eq!(plan.length, 10);
    }

    #[test]
    fn forbidden_road_forces_detour() {
        let g = net(&[
            ("A", "B", 1, 2000),
            ("A", "C", 4, 2000),
            ("C", "B", 4, 2000),
        ]);
        let a = id(&g, "A");
        let b = id(&g, "B");
        let out = best_path(&g, a, b, &no_forbidden(), Some((b, a)));
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(names(&g, &plan.cities), ["A", "C", "B"]);
        assert_eq!(plan.length, 8);
    }

    #[test]
    fn forbidding_the_only_road_is_not_found() {
        let g = net(&[("A", "B", 1, 2000)]);
        let a = id(&g, "A");
        let b = id(&g, "B");
        let out = best_path(&g, a, b, &no_forbidden(), Some((a, b)));
        assert_eq!(out, PathOutcome::NotFound);
    }

    #[test]
    fn tie_upstream_of_destination_is_detected() {
        // Two equal halves S→M, then a single edge M→T: the tie sits on an
        // interior vertex of the final chain.
        let g = net(&[
            ("S", "P", 1, 2000),
            ("P", "M", 1, 2000),
            ("S", "Q", 1, 2000),
            ("Q", "M", 1, 2000),
            ("M", "T", 1, 2000),
        ]);
        let out = best_path(&g, id(&g, "S"), id(&g, "T"), &no_forbidden(), None);
        assert_eq!(out, PathOutcome::Ambiguous { length: 3, bottleneck: 2000 });
    }

    #[test]
    fn stale_tie_is_cleared_by_improvement() {
        // Two equal 10-long ways to X tie, but the direct 3-long road
        // supersedes both; the stale tie must not leak into the verdict.
        let g = net(&[
            ("S", "A1", 5, 2000),
            ("A1", "X", 5, 2000),
            ("S", "A2", 4, 2000),
            ("A2", "X", 6, 2000),
            ("S", "X", 3, 2000),
            ("X", "T", 1, 2000),
        ]);
        let out = best_path(&g, id(&g, "S"), id(&g, "T"), &no_forbidden(), None);
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(names(&g, &plan.cities), ["S", "X", "T"]);
        assert_eq!(plan.length, 4);
    }

    #[test]
    fn tie_off_the_final_chain_is_ignored() {
        // D is reachable two equal ways, but the chain to T goes through E
        // only; the tie at D must not poison the verdict.
        let g = net(&[
            ("S", "B", 1, 2000),
            ("S", "C", 1, 2000),
            ("B", "D", 1, 2000),
            ("C", "D", 1, 2000),
            ("S", "E", 1, 2000),
            ("E", "T", 1, 2000),
        ]);
        let out = best_path(&g, id(&g, "S"), id(&g, "T"), &no_forbidden(), None);
        let PathOutcome::Found(plan) = out else { panic!("expected Found, got {out:?}") };
        assert_eq!(names(&g, &plan.cities), ["S", "E", "T"]);
    }

    #[test]
    fn cost_is_reported_for_ambiguous() {
        let g = net(&[
            ("A", "B", 5, 2000),
            ("A", "C", 5, 2000),
            ("B", "D", 5, 2000),
            ("C", "D", 5, 2000),
        ]);
        let out = best_path(&g, id(&g, "A"), id(&g, "D"), &no_forbidden(), None);
        assert_eq!(out.cost(), Some((10, 2000)));
        assert_eq!(PathOutcome::NotFound.cost(), None);
    }
}
