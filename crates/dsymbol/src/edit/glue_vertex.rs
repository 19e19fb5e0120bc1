//! Merge all tiles around a vertex into one.
//!
//! The vertex and every edge ending in it disappear. Feasible when no edge
//! joins the vertex to itself, every tile meets the vertex only once, and each
//! far end vertex keeps degree at least two. The merged tile inherits the
//! stabilizer of the removed vertex.

use super::checked;
use crate::rational::Rational;
use crate::symbol::{DSymbol, Flag};
use crate::utils::{compact_and_detach, number_of_incidences, rescale, stabilizer, StabOverride};

pub fn glue_tiles_around_vertex(ds: &DSymbol, vertex: usize) -> Option<DSymbol> {
    let v0 = ds.orbit_by_ordinal(1, 2, vertex).ok()?;
    glue_tiles_around_vertex_at(ds, v0)
}

pub fn can_glue_tiles_around_vertex(ds: &DSymbol, vertex: usize) -> bool {
    ds.orbit_by_ordinal(1, 2, vertex)
        .is_ok_and(|v0| is_gluable(ds, v0, &star(ds, v0)))
}

/// Flags of every edge incident to the vertex through `v0`.
fn star(ds: &DSymbol, v0: Flag) -> Vec<bool> {
    let mut mask = vec![false; ds.size()];
    ds.visit_orbit(1, 2, v0, |x| {
        ds.visit_orbit(0, 2, x, |y| mask[y] = true);
    });
    mask
}

fn is_gluable(ds: &DSymbol, v0: Flag, star: &[bool]) -> bool {
    let vertex = ds.orbit_flags(1, 2, v0);
    let in_vertex = ds.orbit_mask(1, 2, v0);
    for &x in &vertex {
        if in_vertex[ds.s(0, x)] || number_of_incidences(ds, 0, 1, 1, 2, x, v0) != 1 {
            return false;
        }
    }
    for &x in &vertex {
        let y = ds.s(0, x);
        let far = ds.orbit_flags(1, 2, y);
        let m = ds.m(1, 2, y) as i64;
        let on_star = far.iter().filter(|&&z| star[z]).count() as i64;
        let lost = Rational::new(on_star * m, far.len() as i64);
        if Rational::from_int(m) - lost < Rational::from_int(2) {
            return false;
        }
    }
    true
}

/// Merge the tiles around the vertex through flag `v0`.
pub fn glue_tiles_around_vertex_at(ds: &DSymbol, v0: Flag) -> Option<DSymbol> {
    if v0 >= ds.size() {
        return None;
    }
    let star = star(ds, v0);
    if !is_gluable(ds, v0, &star) {
        tracing::debug!(flag = v0 + 1, "tiles around vertex cannot be glued");
        return None;
    }

    let mut relink: Vec<(Flag, Flag)> = Vec::new();
    for x in ds.flags().filter(|&x| !star[x]) {
        let mut y = ds.s(1, x);
        if !star[y] {
            continue;
        }
        let mut steps = 0;
        while star[y] {
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

    let alive: Vec<bool> = star.iter().map(|&b| !b).collect();
    let merged = stabilizer(ds, 1, 2, v0);
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
    let out = compact_and_detach(&work, &star, &touched)?;
    checked(out, "glue_tiles_around_vertex")
}
