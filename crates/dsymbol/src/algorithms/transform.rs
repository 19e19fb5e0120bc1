//! Dual symbol and orientation double cover.

use crate::symbol::{DSymbol, Orientation};

/// Swap the roles of vertices and tiles: `s0 <-> s2`, `m01 <-> m12`.
pub fn dualize(ds: &DSymbol) -> DSymbol {
    let mut out = ds.clone();
    out.ops.swap(0, 2);
    std::mem::swap(&mut out.m01, &mut out.m12);
    out
}

/// The orientation double cover, or a copy when `ds` is already orientable.
///
/// Flag `a` of the cover's first half and `a + n` of its second half both lie
/// over `a`. An involution step that changes the 2-coloring stays in the same
/// half; one that keeps the color (a fixed point or an orientation-reversing
/// step) crosses to the other half.
pub fn orientate(ds: &DSymbol) -> DSymbol {
    let (verdict, ori) = ds.compute_orientation();
    if verdict == Orientation::Orientable {
        return ds.clone();
    }
    let n = ds.size();
    let mut out = DSymbol::new(2 * n);
    out.set_nr(ds.nr1, ds.nr2);
    for i in 0..3 {
        for a in 0..n {
            let b = ds.s(i, a);
            let (lo, hi) = if ori[a] != ori[b] {
                (b, b + n)
            } else {
                (b + n, b)
            };
            out.ops[i][a] = lo;
            out.ops[i][a + n] = hi;
        }
    }
    for a in 0..n {
        out.m01[a] = ds.m01[a];
        out.m01[a + n] = ds.m01[a];
        out.m12[a] = ds.m12[a];
        out.m12[a + n] = ds.m12[a];
    }
    tracing::debug!(from = n, to = out.size(), "orientation double cover");
    out
}
