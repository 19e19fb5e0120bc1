//! Merge the two tiles on either side of an edge.
//!
//! Feasible when neither tile has a rotation about its centre, each of the two
//! tiles meets the edge only once, and both end vertices keep degree at least
//! two. The edge's flags are deleted, `s1` is
//! relinked around them, and any vertex left with degree two is detached.

use super::checked;
use crate::rational::Rational;
use crate::symbol::{DSymbol, Flag};
use crate::utils::{compact_and_detach, number_of_incidences, rescale, StabOverride};

pub fn glue_tiles_around_edge(ds: &DSymbol, edge: usize) -> Option<DSymbol> {
    let e0 = ds.orbit_by_ordinal(0, 2, edge).ok()?;
    glue_tiles_around_edge_at(ds, e0)
}

pub fn can_glue_tiles_around_edge(ds: &DSymbol, edge: usize) -> bool {
    ds.orbit_by_ordinal(0, 2, edge)
        .is_ok_and(|e0| is_gluable(ds, e0))
}

fn is_gluable(ds: &DSymbol, e0: Flag) -> bool {
    if e0 >= ds.size() {
        return false;
    }
    let single_tile_contact = [e0, ds.s(2, e0)]
        .into_iter()
        .all(|x| ds.v(0, 1, x) == 1 && number_of_incidences(ds, 0, 1, 0, 2, x, e0) == 1);
    single_tile_contact
        && [e0, ds.s(0, e0)]
            .into_iter()
            .all(|x| ds.m(1, 2, x) >= number_of_incidences(ds, 1, 2, 0, 2, x, e0) + 2)
}

/// Merge the tiles at the edge through flag `e0`.
pub fn glue_tiles_around_edge_at(ds: &DSymbol, e0: Flag) -> Option<DSymbol> {
    if !is_gluable(ds, e0) {
        tracing::debug!(flag = e0 + 1, "tiles at edge cannot be glued");
        return None;
    }
    let edge = ds.orbit_mask(0, 2, e0);
    let edge_size = edge.iter().filter(|&&b| b).count();

    let mut relink: Vec<(Flag, Flag)> = Vec::new();
    for x in ds.flags().filter(|&x| !edge[x]) {
        let mut y = ds.s(1, x);
        if !edge[y] {
            continue;
        }
        let mut steps = 0;
        while edge[y] {
            y = ds.s(1, ds.s(2, y));
            steps += 1;
            if steps > ds.size() {
                return None;
            }
        }
        relink.push((x, y));
    }
    let mut work = ds.clone();
    for &(x, y) in &relink {
        work.ops[1][x] = y;
    }

    let alive: Vec<bool> = edge.iter().map(|&b| !b).collect();
    let merged = Rational::new(4, edge_size as i64);
    let overrides: Vec<StabOverride> = relink
        .iter()
        .map(|&(x, _)| StabOverride {
            i: 0,
            j: 1,
            flag: x,
            stab: merged.clone(),
        })
        .collect();
    rescale(&mut work, ds, &alive, &[(0, 1), (1, 2)], &overrides)?;
    let mut touched = vec![false; work.size()];
    for &(x, _) in &relink {
        touched[x] = true;
    }
    let out = compact_and_detach(&work, &edge, &touched)?;
    checked(out, "glue_tiles_around_edge")
}
