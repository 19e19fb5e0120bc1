//! Symmetry breaking by cyclic covers.
//!
//! A step picks an orbit `{i,j}` with branching number `v > 1`, a flag `x` on it
//! and one of its two involutions `s_k`. It stacks `d` copies of the symbol, `d`
//! a divisor of `v` that also divides the branching number of the other orbit
//! through `x` that uses `s_k`, and cuts `s_k(x)` open so that copy `c` links to
//! copy `c + 1 (mod d)`. The branching values stay put, so the branching number
//! of the cut orbit drops by `d`. Only oriented symbols are broken; rotations of
//! a non-orientable symbol are left to its orientation cover.
//!
//! A single cut branches over the two orbits that meet at the cut. Removing all
//! rotations usually needs covers that branch over more orbits at once, so the
//! full search also tries the covers of [`super::branched`].

use std::collections::HashSet;

use super::branched::branched_covers;
use crate::isomorphic::isomorphic;
use crate::orbifold::group_name;
use crate::symbol::{DSymbol, Orientation, ORBIT_PAIRS};

/// How far [`break_symmetries`] goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BreakMode {
    /// The first single step that succeeds.
    #[default]
    RemoveOne,
    /// Every symbol reachable by repeated steps, up to `max_results`.
    RemoveSome,
    /// Depth-first search for a cover in which no branching number exceeds 1.
    RemoveAll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakCfg {
    pub mode: BreakMode,
    /// Upper bound on the symbols `RemoveSome` collects and on the symbols
    /// `RemoveAll` expands.
    pub max_results: usize,
    /// `RemoveSome` keeps only one symbol per orbifold name.
    pub prune_repeated_names: bool,
}

impl Default for BreakCfg {
    fn default() -> Self {
        Self {
            mode: BreakMode::RemoveOne,
            max_results: 32,
            prune_repeated_names: false,
        }
    }
}

/// Some orbit has branching number above 1.
pub fn has_rotations(ds: &DSymbol) -> bool {
    ORBIT_PAIRS
        .iter()
        .any(|&(i, j)| ds.orbits(i, j).any(|a| ds.v(i, j, a) > 1))
}

fn divisors_desc(v: usize) -> impl Iterator<Item = usize> {
    (2..=v).rev().filter(move |d| v % d == 0)
}

/// `d` copies of `ds` with `s_k(x)` rewired between consecutive copies.
fn cyclic_cover(ds: &DSymbol, k: usize, x: usize, d: usize) -> DSymbol {
    let n = ds.size();
    let mut out = ds.clone();
    for _ in 1..d {
        out.append(ds);
    }
    let y = ds.s(k, x);
    for c in 0..d {
        let next = (c + 1) % d;
        out.ops[k][x + c * n] = y + next * n;
        out.ops[k][y + next * n] = x + c * n;
    }
    out
}

/// Single-step reductions of `ds`, in search order. With `first_only` the
/// search stops at the first valid one.
pub fn break_successors(ds: &DSymbol, first_only: bool) -> Vec<DSymbol> {
    let mut out = Vec::new();
    if ds.orientation() != Orientation::Orientable {
        tracing::debug!("symmetry breaking needs an orientable symbol");
        return out;
    }
    for (i, j) in ORBIT_PAIRS {
        for a in ds.orbits(i, j) {
            let v = ds.v(i, j, a);
            if v <= 1 {
                continue;
            }
            let l = 3 - i - j;
            for x in ds.orbit_flags(i, j, a) {
                for k in [i, j] {
                    let other = ds.v(k, l, x);
                    for d in divisors_desc(v).filter(|d| other % d == 0) {
                        let cover = cyclic_cover(ds, k, x, d);
                        if cover.validate().is_err() {
                            continue;
                        }
                        tracing::trace!(i, j, flag = x + 1, k, d, "break step");
                        out.push(cover);
                        if first_only {
                            return out;
                        }
                    }
                }
            }
        }
    }
    out
}

/// Lower the symmetry of an oriented symbol as `cfg.mode` asks.
///
/// Empty when no step applies: the symbol is not orientable or has no
/// rotations to break.
pub fn break_symmetries(ds: &DSymbol, cfg: &BreakCfg) -> Vec<DSymbol> {
    match cfg.mode {
        BreakMode::RemoveOne => break_successors(ds, true),
        BreakMode::RemoveAll => remove_all(ds, cfg.max_results).into_iter().collect(),
        BreakMode::RemoveSome => remove_some(ds, cfg),
    }
}

fn remove_all(ds: &DSymbol, max_expansions: usize) -> Option<DSymbol> {
    if !has_rotations(ds) {
        return None;
    }
    let mut seen: Vec<DSymbol> = Vec::new();
    let mut stack = vec![ds.clone()];
    let mut expanded = 0;
    while let Some(cur) = stack.pop() {
        if expanded == max_expansions {
            break;
        }
        expanded += 1;
        let mut fresh = Vec::new();
        for next in break_successors(&cur, false)
            .into_iter()
            .chain(branched_covers(&cur))
        {
            if !has_rotations(&next) {
                tracing::debug!(expanded, size = next.size(), "rotation-free cover found");
                return Some(next);
            }
            if seen
                .iter()
                .any(|s| s.size() == next.size() && isomorphic(s, &next, false))
            {
                continue;
            }
            seen.push(next.clone());
            fresh.push(next);
        }
        stack.extend(fresh.into_iter().rev());
    }
    tracing::debug!(expanded, "no rotation-free cover found");
    None
}

fn remove_some(ds: &DSymbol, cfg: &BreakCfg) -> Vec<DSymbol> {
    let mut results: Vec<DSymbol> = Vec::new();
    let mut names: HashSet<String> = HashSet::new();
    let mut stack = vec![ds.clone()];
    while let Some(cur) = stack.pop() {
        for next in break_successors(&cur, false) {
            if results.len() >= cfg.max_results {
                return results;
            }
            if results.iter().any(|r| isomorphic(r, &next, false)) {
                continue;
            }
            if cfg.prune_repeated_names && !names.insert(group_name(&next)) {
                continue;
            }
            results.push(next.clone());
            stack.push(next);
        }
    }
    results
}
