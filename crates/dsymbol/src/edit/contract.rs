//! Edge contraction.
//!
//! Both end vertices of the edge merge into one. Feasible when
//! - the vertices at both ends carry no rotation and meet the edge only once,
//! - both tiles along the edge keep at least one side of their own afterwards.
//!
//! Every flag whose `s1` pointed into the edge is relinked across it to the
//! flag the edge led to, and the edge's flags are deleted.

use super::checked;
use crate::rational::Rational;
use crate::symbol::{DSymbol, Flag};
use crate::utils::{number_of_incidences, remove_unused, rescale, StabOverride};

pub fn contract_edge(ds: &DSymbol, edge: usize) -> Option<DSymbol> {
    let e0 = ds.orbit_by_ordinal(0, 2, edge).ok()?;
    contract_edge_at(ds, e0)
}

pub fn can_contract_edge(ds: &DSymbol, edge: usize) -> bool {
    ds.orbit_by_ordinal(0, 2, edge)
        .is_ok_and(|e0| is_contractible(ds, e0))
}

fn is_contractible(ds: &DSymbol, e0: Flag) -> bool {
    if e0 >= ds.size() {
        return false;
    }
    for x in [e0, ds.s(0, e0)] {
        if ds.v(1, 2, x) != 1 || number_of_incidences(ds, 1, 2, 0, 2, x, e0) != 1 {
            return false;
        }
    }
    [e0, ds.s(2, e0)]
        .into_iter()
        .all(|x| ds.m(0, 1, x) > number_of_incidences(ds, 0, 1, 0, 2, x, e0))
}

/// Contract the edge through flag `e0`.
pub fn contract_edge_at(ds: &DSymbol, e0: Flag) -> Option<DSymbol> {
    if !is_contractible(ds, e0) {
        tracing::debug!(flag = e0 + 1, "edge is not contractible");
        return None;
    }
    let edge = ds.orbit_mask(0, 2, e0);
    let edge_size = edge.iter().filter(|&&b| b).count();

    let mut relink: Vec<(Flag, Flag)> = Vec::new();
    for x in ds.flags().filter(|&x| !edge[x]) {
        if edge[ds.s(1, x)] {
            let y = ds.s(1, ds.s(0, ds.s(1, x)));
            if edge[y] {
                return None;
            }
            relink.push((x, y));
        }
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
            i: 1,
            j: 2,
            flag: x,
            stab: merged.clone(),
        })
        .collect();
    rescale(&mut work, ds, &alive, &[(0, 1), (1, 2)], &overrides)?;
    checked(remove_unused(&work, &edge), "contract_edge")
}
