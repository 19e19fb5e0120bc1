//! Canonical flag numbering by tile.

use crate::symbol::{DSymbol, Flag};

/// Renumber flags tile by tile, smaller tiles first.
///
/// Tiles (`{0,1}`-orbits) are ordered by flag count, ties by smallest flag.
/// Within a tile, flags are numbered in the order of the walk `a, s0(a), s1 s0(a), ...`
/// from its smallest flag.
pub fn reorder(ds: &DSymbol) -> DSymbol {
    let mut tiles: Vec<(usize, Flag)> = ds
        .orbits(0, 1)
        .map(|a| (ds.orbit_cardinality(0, 1, a), a))
        .collect();
    tiles.sort_unstable();

    let mut order: Vec<Flag> = Vec::with_capacity(ds.size());
    for (_, a) in tiles {
        order.extend(ds.orbit_flags(0, 1, a));
    }
    let mut label = vec![0; ds.size()];
    for (k, &a) in order.iter().enumerate() {
        label[a] = k;
    }

    let mut out = DSymbol::new(ds.size());
    out.set_nr(ds.nr1, ds.nr2);
    for a in ds.flags() {
        let la = label[a];
        for i in 0..3 {
            out.ops[i][la] = label[ds.s(i, a)];
        }
        out.m01[la] = ds.m01[a];
        out.m12[la] = ds.m12[a];
    }
    out
}
