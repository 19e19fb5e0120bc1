//! Orbit traversal and derived orbit metrics.
//!
//! An `{i,j}`-orbit is walked by alternating `s_i`, `s_j` from a start flag. One
//! "double step" is `s_j ∘ s_i`; the orbit length `r` counts double steps until
//! the walk is back at the start. A chain walks out to one fixed point, turns,
//! and comes back, so its length equals its cardinality. A cycle visits each flag
//! once per direction, so its cardinality is `2r`.

use super::types::{DSymbol, Flag, OrbitType, ORBIT_PAIRS};
use crate::error::DsError;

impl DSymbol {
    /// Call `visitor` on each flag of the `{i,j}`-orbit of `a`, once, in walk
    /// order `a, s_i(a), s_j s_i(a), ...`.
    pub fn visit_orbit<F: FnMut(Flag)>(&self, i: usize, j: usize, a: Flag, mut visitor: F) {
        let mut seen = vec![false; self.size()];
        let mut b = a;
        let mut steps = 0usize;
        loop {
            for k in [i, j] {
                if !seen[b] {
                    seen[b] = true;
                    visitor(b);
                }
                b = self.s(k, b);
            }
            steps += 1;
            if b == a {
                return;
            }
            assert!(
                steps <= self.size(),
                "orbit ({i},{j}) at flag {a} does not close within {} steps",
                self.size()
            );
        }
    }

    /// Flags of the `{i,j}`-orbit of `a` in walk order.
    pub fn orbit_flags(&self, i: usize, j: usize, a: Flag) -> Vec<Flag> {
        let mut out = Vec::new();
        self.visit_orbit(i, j, a, |b| out.push(b));
        out
    }

    /// Orbit length `r`: double steps until the walk returns to `a`.
    pub fn orbit_length(&self, i: usize, j: usize, a: Flag) -> usize {
        let mut b = a;
        let mut r = 0usize;
        loop {
            b = self.s(j, self.s(i, b));
            r += 1;
            if b == a {
                return r;
            }
            assert!(
                r <= self.size(),
                "orbit ({i},{j}) at flag {a} is longer than the symbol"
            );
        }
    }

    /// Number of distinct flags in the orbit: `r` for a chain, `2r` for a cycle.
    pub fn orbit_cardinality(&self, i: usize, j: usize, a: Flag) -> usize {
        let r = self.orbit_length(i, j, a);
        match self.orbit_type(i, j, a) {
            OrbitType::Cycle => 2 * r,
            OrbitType::Chain => r,
        }
    }

    pub fn orbit_type(&self, i: usize, j: usize, a: Flag) -> OrbitType {
        if self.has_fixpoints(i, j, a) {
            OrbitType::Chain
        } else {
            OrbitType::Cycle
        }
    }

    #[inline]
    pub fn is_cycle(&self, i: usize, j: usize, a: Flag) -> bool {
        self.orbit_type(i, j, a) == OrbitType::Cycle
    }

    /// `true` if `s_i` or `s_j` fixes some flag of the orbit.
    pub fn has_fixpoints(&self, i: usize, j: usize, a: Flag) -> bool {
        self.fixpoint_in_orbit(i, j, a).is_some()
    }

    /// First flag in walk order fixed by `s_i` or `s_j`, with the index of the
    /// involution that fixes it (`i` is checked before `j` on the same flag).
    pub fn fixpoint_in_orbit(&self, i: usize, j: usize, a: Flag) -> Option<(Flag, usize)> {
        let mut found = None;
        self.visit_orbit(i, j, a, |b| {
            if found.is_none() {
                if self.s(i, b) == b {
                    found = Some((b, i));
                } else if self.s(j, b) == b {
                    found = Some((b, j));
                }
            }
        });
        found
    }

    /// Mark the orbit of `a` in `visited` and return the smallest flag not yet
    /// visited, if any.
    pub fn next_orbit(&self, i: usize, j: usize, a: Flag, visited: &mut [bool]) -> Option<Flag> {
        self.visit_orbit(i, j, a, |b| visited[b] = true);
        (a..self.size()).find(|&b| !visited[b])
    }

    /// Orbit representatives (smallest flag of each orbit), increasing.
    pub fn orbits(&self, i: usize, j: usize) -> Orbits<'_> {
        Orbits {
            ds: self,
            i,
            j,
            visited: vec![false; self.size()],
            next: if self.is_empty() { None } else { Some(0) },
        }
    }

    pub fn orbit_count(&self, i: usize, j: usize) -> usize {
        self.orbits(i, j).count()
    }

    /// `(i, j, representative)` for every orbit of the three types, in the order
    /// vertices, edges, tiles.
    pub fn orbit_labels(&self) -> impl Iterator<Item = (usize, usize, Flag)> + '_ {
        ORBIT_PAIRS
            .into_iter()
            .flat_map(move |(i, j)| self.orbits(i, j).map(move |a| (i, j, a)))
    }

    /// Representative of the `ordinal`-th `{i,j}`-orbit (1-based).
    pub fn orbit_by_ordinal(&self, i: usize, j: usize, ordinal: usize) -> Result<Flag, DsError> {
        let count = self.orbit_count(i, j);
        let what = match (i, j) {
            (0, 1) => "tile",
            (0, 2) => "edge",
            _ => "vertex",
        };
        if ordinal == 0 || ordinal > count {
            return Err(DsError::OutOfRange {
                what,
                index: ordinal,
                count,
            });
        }
        self.orbits(i, j)
            .nth(ordinal - 1)
            .ok_or(DsError::OutOfRange {
                what,
                index: ordinal,
                count,
            })
    }

    /// Membership mask of the orbit of `a`.
    pub(crate) fn orbit_mask(&self, i: usize, j: usize, a: Flag) -> Vec<bool> {
        let mut mask = vec![false; self.size()];
        self.visit_orbit(i, j, a, |b| mask[b] = true);
        mask
    }
}

/// Lazy walk over orbit representatives in increasing order; see [`DSymbol::orbits`].
pub struct Orbits<'a> {
    ds: &'a DSymbol,
    i: usize,
    j: usize,
    visited: Vec<bool>,
    next: Option<Flag>,
}

impl Iterator for Orbits<'_> {
    type Item = Flag;

    fn next(&mut self) -> Option<Flag> {
        let a = self.next?;
        self.next = self.ds.next_orbit(self.i, self.j, a, &mut self.visited);
        Some(a)
    }
}
