//! Property tests over randomly edited symbols.
//!
//! Symbols come from `random::draw_symbol`, so a failing case is replayed by
//! its `(seed, index)` pair.

use dsymbol::algorithms::{dualize, is_maximal_symmetry, max_symmetry, orientate, reorder};
use dsymbol::edit::Edit;
use dsymbol::isomorphic::isomorphic;
use dsymbol::random::{draw_symbol, RandomSymbolCfg, ReplayToken, StepCount};
use dsymbol::symbol::{DSymbol, Geometry, Orientation};
use proptest::prelude::*;

fn symbol(seed: u64, index: u64) -> DSymbol {
    let cfg = RandomSymbolCfg {
        steps: StepCount::Uniform { min: 0, max: 5 },
        max_size: 32,
        ..RandomSymbolCfg::default()
    };
    draw_symbol(&cfg, ReplayToken { seed, index }).expect("catalog bases fit the size cap")
}

fn involutions_hold(ds: &DSymbol) -> bool {
    (0..3).all(|i| ds.flags().all(|a| ds.s(i, ds.s(i, a)) == a))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_draws_are_consistent(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        prop_assert!(ds.validate().is_ok());
        prop_assert!(involutions_hold(&ds));
    }

    #[test]
    fn prop_text_round_trip(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        let text = ds.write();
        let back: DSymbol = text.parse().unwrap();
        prop_assert_eq!(back.write(), text);
        prop_assert_eq!(back, ds);
    }

    #[test]
    fn prop_dualize_is_an_involution(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        let dual = dualize(&ds);
        prop_assert!(dual.validate().is_ok());
        prop_assert_eq!(dualize(&dual), ds);
    }

    #[test]
    fn prop_max_symmetry_is_idempotent(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        let q = max_symmetry(&ds);
        prop_assert!(q.validate().is_ok());
        prop_assert!(is_maximal_symmetry(&q));
        prop_assert_eq!(ds.size() % q.size(), 0);
        prop_assert!(isomorphic(&max_symmetry(&q), &q, false));
    }

    #[test]
    fn prop_orientate_is_orientable(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        let o = orientate(&ds);
        prop_assert!(o.validate().is_ok());
        prop_assert_eq!(o.orientation(), Orientation::Orientable);
        let factor = if ds.orientation() == Orientation::Orientable { 1 } else { 2 };
        prop_assert_eq!(o.size(), factor * ds.size());
    }

    #[test]
    fn prop_curvature_sign_matches_geometry(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        let geometry = match ds.curvature().signum() {
            1 => Geometry::Spherical,
            0 => Geometry::Euclidean,
            _ => Geometry::Hyperbolic,
        };
        prop_assert_eq!(ds.geometry(), geometry);
        // Orientation cover and dual keep the geometry.
        prop_assert_eq!(orientate(&ds).geometry(), geometry);
        prop_assert_eq!(dualize(&ds).geometry(), geometry);
    }

    #[test]
    fn prop_edits_keep_symbols_consistent(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        for edit in Edit::applicable(&ds) {
            if let Some(out) = edit.apply(&ds) {
                prop_assert!(out.validate().is_ok(), "{:?} on {}", edit, ds);
                prop_assert!(involutions_hold(&out));
                prop_assert_eq!(out.geometry(), ds.geometry());
            }
        }
    }

    #[test]
    fn prop_reorder_is_an_isomorphism(seed: u64, index in 0u64..1024) {
        let ds = symbol(seed, index);
        let r = reorder(&ds);
        prop_assert!(isomorphic(&r, &ds, false));
    }
}
