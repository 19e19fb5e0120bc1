//! Vertex truncation: cut a vertex off and replace it with a new tile.
//!
//! For every flag `a` of the vertex orbit two flags are added: `B[a]` on the old
//! tile's new side and `C[a]` on the new tile. Old corners are split by routing
//! `s1(a)` to `B[a]`, the new edge is `B[a] - s2 - C[a]`, and the new tile's
//! `s1` follows the old `s2` around the vertex. Every new vertex has degree 3.

use super::checked;
use crate::symbol::{DSymbol, Flag};
use crate::utils::{rescale, stabilizer, StabOverride};

pub fn truncate_vertex(ds: &DSymbol, vertex: usize) -> Option<DSymbol> {
    let v0 = ds.orbit_by_ordinal(1, 2, vertex).ok()?;
    truncate_vertex_at(ds, v0)
}

/// Truncation applies to every vertex; only the ordinal can be wrong.
pub fn can_truncate_vertex(ds: &DSymbol, vertex: usize) -> bool {
    ds.orbit_by_ordinal(1, 2, vertex).is_ok()
}

/// Truncate the vertex through flag `v0`.
pub fn truncate_vertex_at(ds: &DSymbol, v0: Flag) -> Option<DSymbol> {
    if v0 >= ds.size() {
        return None;
    }
    let mut vertex = ds.orbit_flags(1, 2, v0);
    vertex.sort_unstable();
    let n = ds.size();
    let k = vertex.len();
    let mut slot = vec![usize::MAX; n];
    for (t, &a) in vertex.iter().enumerate() {
        slot[a] = t;
    }
    let b = |a: Flag| n + slot[a];
    let c = |a: Flag| n + k + slot[a];

    let mut work = DSymbol::new(n + 2 * k);
    work.set_nr(ds.nr1, ds.nr2);
    for i in 0..3 {
        work.ops[i][..n].copy_from_slice(&ds.ops[i]);
    }
    work.m01[..n].copy_from_slice(&ds.m01);
    work.m12[..n].copy_from_slice(&ds.m12);

    for &a in &vertex {
        work.set_s(1, a, b(a));
        work.ops[0][b(a)] = b(ds.s(1, a));
        work.set_s(2, b(a), c(a));
        work.ops[0][c(a)] = c(ds.s(1, a));
        work.ops[1][c(a)] = c(ds.s(2, a));
    }

    let alive = vec![true; work.size()];
    let cut = stabilizer(ds, 1, 2, v0);
    let overrides: Vec<StabOverride> = vertex
        .iter()
        .map(|&a| StabOverride {
            i: 0,
            j: 1,
            flag: c(a),
            stab: cut.clone(),
        })
        .collect();
    rescale(&mut work, ds, &alive, &[(0, 1)], &overrides)?;
    for &a in &vertex {
        work.set_m(1, 2, a, 3);
    }
    checked(work, "truncate_vertex")
}
