use super::catalog;
use super::*;
use crate::error::DsError;
use crate::rational::Rational;

const TRUNCATED_TET: &str = "<1.1:3:1 2 3,2 3,1 3:6 3,3>";
const TWO_TWO_CROSS: &str = "<1.1:4:2 4,3 4,4 3:4,4>";

fn sym(text: &str) -> DSymbol {
    text.parse().unwrap()
}

#[test]
fn tetrahedron_invariants() {
    let ds = sym("<1.1:1:1,1,1:3,3>");
    assert_eq!(ds.size(), 1);
    for i in 0..3 {
        assert_eq!(ds.s(i, 0), 0);
    }
    assert_eq!((ds.m(0, 1, 0), ds.m(1, 2, 0), ds.m(0, 2, 0)), (3, 3, 2));
    assert_eq!(ds.m(1, 0, 0), 3);
    assert_eq!(ds.curvature(), Rational::new(1, 6));
    assert_eq!(ds.geometry(), Geometry::Spherical);
    assert_eq!(ds.orientation(), Orientation::Bordered);
    // Underlying surface of the quotient is a disk.
    assert_eq!(ds.euler_characteristic(), 1);
    assert_eq!(ds, catalog::tetrahedron());
}

#[test]
fn curvature_sign_matches_catalog_geometry() {
    assert_eq!(catalog::square_lattice().curvature(), Rational::zero());
    assert_eq!(catalog::square_lattice().geometry(), Geometry::Euclidean);
    assert_eq!(catalog::hexagonal_lattice().curvature(), Rational::zero());
    assert_eq!(catalog::cube().curvature(), Rational::new(1, 12));
    assert_eq!(catalog::heptagonal_tiling().curvature(), Rational::new(-1, 42));
    assert_eq!(catalog::heptagonal_tiling().geometry(), Geometry::Hyperbolic);
}

#[test]
fn text_round_trip_is_exact() {
    for text in [
        "<1.1:1:1,1,1:4,3>",
        TRUNCATED_TET,
        "<1.1:6:2 4 6,3 4 6,2 5 6:6 3,3>",
        "<1.1:4:2 4,2 4,3 4:3 3,4>",
        "<1.1:2:2,1 2,1 2:4,4 2>",
        TWO_TWO_CROSS,
        "<1.1:0:,,:,>",
    ] {
        assert_eq!(sym(text).write(), text);
    }
    let mut ds = catalog::cube_map();
    ds.set_nr(12, 3);
    let back = sym(&ds.write());
    assert_eq!(back, ds);
    assert_eq!(back.nr(), (12, 3));
}

#[test]
fn dimension_field_and_non_symbols() {
    assert_eq!(sym("<1.1:1 2:1,1,1:4,3>"), catalog::cube());
    assert_eq!(
        "<1.1:1 3:1,1,1:4,3>".parse::<DSymbol>(),
        Err(DsError::UnsupportedDimension(3))
    );
    assert_eq!(DSymbol::read("# a comment"), Ok(None));
    assert_eq!("hello".parse::<DSymbol>(), Err(DsError::NoSymbol));
    assert_eq!(DSymbol::read("  <1.1:1:1,1,1:3,3>  ").unwrap(), Some(catalog::tetrahedron()));
}

#[test]
fn huge_branching_values_have_exact_curvature() {
    let ds = sym("<1.1:1:1,1,1:4294967311,4294967357>");
    let k = ds.curvature();
    assert_eq!(k.signum(), -1);
    assert_eq!(ds.geometry(), Geometry::Hyperbolic);
    assert_eq!(
        k,
        Rational::new(-1, 2) + Rational::new(1, 4294967311) + Rational::new(1, 4294967357)
    );
}

#[test]
fn trailing_text_after_the_symbol_is_ignored() {
    assert_eq!(sym("<1.1:1:1,1,1:3,3> tetrahedron"), catalog::tetrahedron());
    assert_eq!(sym("<1.1:1:1,1,1:4,3>>"), catalog::cube());
    assert_eq!(DSymbol::read("<1.1:1:1,1,1:3,3>  # *332").unwrap(), Some(catalog::tetrahedron()));
}

#[test]
fn large_orbits_are_visited_once() {
    let torus = catalog::square_torus(8, 8);
    for (i, j) in ORBIT_PAIRS {
        let mut hits = vec![0usize; torus.size()];
        for a in torus.orbits(i, j) {
            torus.visit_orbit(i, j, a, |b| hits[b] += 1);
        }
        assert!(hits.iter().all(|&h| h == 1), "pair ({i},{j})");
    }
}

#[test]
fn malformed_text_is_rejected() {
    let parse_err = |t: &str| matches!(t.parse::<DSymbol>(), Err(DsError::Parse { .. }));
    assert!(parse_err("<1.1:2:,1 2,1 2:4,3 3>"));
    assert!(parse_err("<1.1:3:2 2 3,1 2 3,1 2 3:1,1 1 1>"));
    assert!(parse_err("<1.1:1:1,1,1:3>"));
    assert!(parse_err("<1.1:1:1,1,1:3,3"));
    assert!(parse_err("<1.1:1:1,1,1:3,3 3>"));
    assert!(parse_err("<1:1:1,1,1:3,3>"));
    assert!(parse_err("<1.1:1:9,1,1:3,3>"));
    // m01 = 3 on a chain of length 2.
    assert!(matches!(
        "<1.1:2:2,1 2,1 2:3,3 3>".parse::<DSymbol>(),
        Err(DsError::Inconsistent { .. })
    ));
}

#[test]
fn orbit_metrics_on_truncated_tetrahedron() {
    let ds = sym(TRUNCATED_TET);
    assert_eq!(ds.counts(), (2, 2, 1));
    assert_eq!(ds.orbits(0, 1).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(ds.orbit_length(1, 2, 0), 3);
    assert_eq!(ds.orbit_cardinality(1, 2, 0), 3);
    assert_eq!(ds.orbit_type(1, 2, 0), OrbitType::Chain);
    assert_eq!(ds.v(0, 1, 0), 3);
    assert_eq!(ds.v(0, 1, 2), 3);
    assert_eq!(ds.v(1, 2, 1), 1);
    assert_eq!(ds.orbit_flags(1, 2, 1), vec![1, 0, 2]);
    assert_eq!(
        ds.orbit_labels().collect::<Vec<_>>(),
        vec![(1, 2, 0), (0, 2, 0), (0, 2, 1), (0, 1, 0), (0, 1, 2)]
    );
    assert_eq!(ds.orbit_by_ordinal(0, 2, 2), Ok(1));
    assert!(matches!(
        ds.orbit_by_ordinal(0, 2, 3),
        Err(DsError::OutOfRange { count: 2, .. })
    ));
    assert!(ds.orbit_by_ordinal(1, 2, 0).is_err());
}

#[test]
fn fixpoint_in_orbit_reports_first_in_walk_order() {
    let ds = sym(TRUNCATED_TET);
    // Walk from flag 1 visits 1, 0, 2; flag 0 is fixed by s2 and comes first even
    // though flag 2 is fixed by s1.
    assert_eq!(ds.fixpoint_in_orbit(1, 2, 1), Some((0, 2)));
    assert_eq!(ds.fixpoint_in_orbit(1, 2, 2), Some((2, 1)));
    assert_eq!(ds.fixpoint_in_orbit(1, 2, 0), Some((0, 2)));
    let cyc = sym("<1.1:2:2,2,2:4,4>");
    assert_eq!(cyc.fixpoint_in_orbit(0, 1, 0), None);
    assert!(cyc.is_cycle(0, 1, 0));
    assert_eq!(cyc.orbit_cardinality(0, 1, 0), 2);
}

#[test]
fn next_orbit_marks_and_advances() {
    let ds = sym(TRUNCATED_TET);
    let mut visited = vec![false; ds.size()];
    let next = ds.next_orbit(0, 2, 0, &mut visited);
    assert_eq!(next, Some(1));
    assert_eq!(visited, vec![true, false, false]);
    assert_eq!(ds.next_orbit(0, 2, 1, &mut visited), None);
    assert!(visited.iter().all(|&v| v));
}

#[test]
fn setters_keep_orbits_constant() {
    let mut ds = sym(TRUNCATED_TET);
    ds.set_m(0, 1, 1, 12);
    assert_eq!((ds.m01[0], ds.m01[1], ds.m01[2]), (12, 12, 3));
    ds.set_v(0, 1, 2, 4);
    assert_eq!(ds.m(0, 1, 2), 4);
    assert!(ds.validate().is_ok());
    ds.set_m_flag(1, 2, 0, 5);
    assert!(ds.validate().is_err());
}

#[test]
fn raw_construction_and_append() {
    let mut ds = DSymbol::new(2);
    ds.set_s(0, 0, 1);
    ds.set_s(1, 0, 1);
    ds.set_s(2, 0, 1);
    ds.set_m(0, 1, 0, 4);
    ds.set_m(1, 2, 0, 4);
    assert_eq!(ds.write(), "<1.1:2:2,2,2:4,4>");
    assert_eq!(ds.orientation(), Orientation::Orientable);
    let copy = ds.clone();
    ds.append(&copy);
    assert_eq!(ds.size(), 4);
    assert_eq!(ds.s(0, 2), 3);
    assert!(!ds.is_connected());
    assert!(ds.validate().is_err());
}

#[test]
fn non_orientable_symbol() {
    let ds = sym(TWO_TWO_CROSS);
    assert_eq!(ds.orientation(), Orientation::NonOrientable);
    assert_eq!(ds.orientation().as_int(), 0);
    assert_eq!(ds.euler_characteristic(), 1);
    assert_eq!(ds.geometry(), Geometry::Euclidean);
}

#[test]
fn polygon_maps() {
    let cube = catalog::cube_map();
    assert_eq!(cube.size(), 48);
    assert_eq!(cube.counts(), (6, 12, 8));
    assert_eq!(cube.euler_characteristic(), 2);
    assert_eq!(cube.orientation(), Orientation::Orientable);
    assert!(cube.flags().all(|a| cube.m(0, 1, a) == 4 && cube.m(1, 2, a) == 3));

    let torus = catalog::square_torus(3, 3);
    assert_eq!(torus.size(), 72);
    assert_eq!(torus.euler_characteristic(), 0);
    assert_eq!(torus.curvature(), Rational::zero());

    let tet = DSymbol::from_vertex_cycles(&[
        vec![0, 1, 2],
        vec![0, 3, 1],
        vec![1, 3, 2],
        vec![2, 3, 0],
    ])
    .unwrap();
    assert_eq!(tet.euler_characteristic(), 2);
    assert_eq!(tet.geometry(), Geometry::Spherical);

    assert!(DSymbol::from_polygon_map(&[vec![(0, true), (0, true)]]).is_err());
}

#[test]
fn read_symbols_skips_comments_and_numbers_lines() {
    let text = "# header\n<1.1:1:1,1,1:3,3>\n\n<1.2:1:1,1,1:4,3>\n<1.3:1:1,1:4,3>\n";
    let all: Vec<_> = read_symbols(text).collect();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].as_ref().unwrap(), &catalog::tetrahedron());
    assert_eq!(all[1].as_ref().unwrap().nr(), (1, 2));
    match &all[2] {
        Err(DsError::Parse { reason }) => assert!(reason.starts_with("line 5")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
