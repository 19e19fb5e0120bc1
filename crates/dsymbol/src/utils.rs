//! Helpers shared by the editing operators.
//!
//! - Incidence counting between orbits of different types.
//! - Compaction after deleting flags.
//! - Re-deriving `m01`/`m12` after a relink from orbit stabilizers.
//! - Splicing out vertices left with degree 2.
//!
//! Stabilizers: an `{i,j}`-orbit with branching value `m` and `card` flags has a
//! stabilizer of order `2m / card` in the symmetry group. Surgery that keeps the
//! group also keeps the stabilizer of every surviving orbit, so the new branching
//! value is `stab * card_new / 2`. Orbits merged by an edit get their stabilizer
//! from the operator instead.

use crate::rational::Rational;
use crate::symbol::{DSymbol, Flag};

/// How many elements of the `{k,l}`-orbit of `b` are incident to the
/// `{i,j}`-orbit of `a`: `|O_ij(a) ∩ O_kl(b)| * m_ij(a) / card_ij(a)`.
///
/// For example the number of times a given edge occurs along a tile boundary,
/// counted in the tiling rather than in the symbol.
pub fn number_of_incidences(
    ds: &DSymbol,
    i: usize,
    j: usize,
    k: usize,
    l: usize,
    a: Flag,
    b: Flag,
) -> usize {
    let mask = ds.orbit_mask(k, l, b);
    let mut common = 0;
    let mut card = 0;
    ds.visit_orbit(i, j, a, |x| {
        card += 1;
        if mask[x] {
            common += 1;
        }
    });
    let num = common * ds.m(i, j, a);
    debug_assert!(num % card == 0, "fractional incidence count");
    num / card
}

/// Order of the stabilizer of the `{i,j}`-orbit of `a`: `2m / card`.
pub fn stabilizer(ds: &DSymbol, i: usize, j: usize, a: Flag) -> Rational {
    Rational::new(
        2 * ds.m(i, j, a) as i64,
        ds.orbit_cardinality(i, j, a) as i64,
    )
}

/// Compact `ds` by dropping the flags marked in `unused`.
///
/// Retained flags below the new size keep their number. Each retained flag at or
/// above the new size moves into a hole left below it, holes and movers both
/// taken in increasing order. Fixed points stay fixed under the relabeling.
pub fn remove_unused(ds: &DSymbol, unused: &[bool]) -> DSymbol {
    compact(ds, unused).0
}

/// [`remove_unused`], also returning where each old flag went.
pub(crate) fn compact(ds: &DSymbol, unused: &[bool]) -> (DSymbol, Vec<Option<Flag>>) {
    let n = ds.size();
    let new_size = n - unused.iter().filter(|&&u| u).count();
    let holes = (0..new_size).filter(|&a| unused[a]);
    let movers = (new_size..n).filter(|&a| !unused[a]);
    let mut label: Vec<Flag> = (0..n).collect();
    for (hole, mover) in holes.zip(movers) {
        label[mover] = hole;
    }

    let mut out = DSymbol::new(new_size);
    out.set_nr(ds.nr1, ds.nr2);
    for a in (0..n).filter(|&a| !unused[a]) {
        let la = label[a];
        for i in 0..3 {
            out.ops[i][la] = label[ds.s(i, a)];
        }
        out.m01[la] = ds.m01[a];
        out.m12[la] = ds.m12[a];
    }
    let moved = (0..n).map(|a| (!unused[a]).then_some(label[a])).collect();
    (out, moved)
}

/// Carry a flag mask through a relabeling from [`compact`].
fn carry(mask: &[bool], label: &[Option<Flag>], size: usize) -> Vec<bool> {
    let mut out = vec![false; size];
    for (a, l) in label.iter().enumerate() {
        if let Some(l) = *l {
            out[l] = mask[a];
        }
    }
    out
}

/// A stabilizer assigned to a merged orbit, keyed by any flag the orbit contains.
#[derive(Clone, Debug)]
pub(crate) struct StabOverride {
    pub i: usize,
    pub j: usize,
    pub flag: Flag,
    pub stab: Rational,
}

/// Recompute the branching values of `pairs` on the live flags of `work` after a
/// relink. `old` is the symbol before the edit, with the same flag numbering for
/// every flag it has.
///
/// `None` when the stabilizers of an orbit disagree or give a fractional `m`:
/// the edit does not describe a tiling with the same group.
pub(crate) fn rescale(
    work: &mut DSymbol,
    old: &DSymbol,
    alive: &[bool],
    pairs: &[(usize, usize)],
    overrides: &[StabOverride],
) -> Option<()> {
    for &(i, j) in pairs {
        let mut done = vec![false; work.size()];
        for a in work.flags() {
            if !alive[a] || done[a] {
                continue;
            }
            let orbit = work.orbit_flags(i, j, a);
            for &x in &orbit {
                done[x] = true;
            }
            let forced = overrides
                .iter()
                .find(|o| o.i == i && o.j == j && orbit.contains(&o.flag))
                .map(|o| o.stab.clone());
            let stab = match forced {
                Some(s) => s,
                None => {
                    let mut seen: Option<Rational> = None;
                    for &x in orbit.iter().filter(|&&x| x < old.size()) {
                        let s = stabilizer(old, i, j, x);
                        if *seen.get_or_insert_with(|| s.clone()) != s {
                            return None;
                        }
                    }
                    seen?
                }
            };
            let m = (stab * Rational::from_int(orbit.len() as i64) / Rational::from_int(2))
                .as_integer()?;
            if m <= 0 {
                return None;
            }
            for &x in &orbit {
                work.set_m_flag(i, j, x, m as usize);
            }
        }
    }
    Some(())
}

/// Splice out the degree-2 vertex through `p` (its `m12` is 2).
///
/// Each tile passing through the vertex loses that corner: `s0` is relinked
/// around the vertex orbit and `m01` re-derived. Returns the edited symbol and
/// the mask of flags that became unused (the vertex orbit), without compacting.
pub fn splice_di_vertex(ds: &DSymbol, p: Flag) -> Option<(DSymbol, Vec<bool>)> {
    if ds.m(1, 2, p) != 2 {
        return None;
    }
    let in_vertex = ds.orbit_mask(1, 2, p);
    let mut relink = Vec::new();
    for a in ds.flags().filter(|&a| in_vertex[a]) {
        let b = ds.s(0, a);
        if in_vertex[b] {
            return None;
        }
        let mut cur = a;
        let target = loop {
            let c = ds.s(1, cur);
            let e = ds.s(0, c);
            if e == c {
                break b;
            }
            if !in_vertex[e] {
                break e;
            }
            cur = e;
            if cur == a {
                return None;
            }
        };
        relink.push((b, target));
    }
    let mut work = ds.clone();
    for (b, target) in relink {
        work.ops[0][b] = target;
    }
    let alive: Vec<bool> = in_vertex.iter().map(|&v| !v).collect();
    rescale(&mut work, ds, &alive, &[(0, 1)], &[])?;
    Some((work, in_vertex))
}

/// [`splice_di_vertex`] followed by compaction.
pub fn detach_di_vertex(ds: &DSymbol, p: Flag) -> Option<DSymbol> {
    let (work, unused) = splice_di_vertex(ds, p)?;
    Some(remove_unused(&work, &unused))
}

/// Drop the flags in `unused`, then detach the vertices through `touched` that
/// were left with degree 2. Degree-2 vertices elsewhere in the symbol stay.
pub(crate) fn compact_and_detach(
    ds: &DSymbol,
    unused: &[bool],
    touched: &[bool],
) -> Option<DSymbol> {
    let (mut ds, label) = compact(ds, unused);
    let mut touched = carry(touched, &label, ds.size());
    while let Some(p) = ds.flags().find(|&a| touched[a] && ds.m(1, 2, a) == 2) {
        tracing::trace!(flag = p + 1, size = ds.size(), "detach degree-2 vertex");
        let (work, gone) = splice_di_vertex(&ds, p)?;
        let (next, label) = compact(&work, &gone);
        touched = carry(&touched, &label, next.size());
        ds = next;
    }
    Some(ds)
}
