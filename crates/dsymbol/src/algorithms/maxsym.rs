//! Quotient by the automorphism group.
//!
//! An automorphism is determined by the image of flag 0. For each candidate image
//! `a` with the same `(m01, m12)`, the identification `0 ~ a` is closed under
//! `s0, s1, s2` with a union-find; the candidate fails when two identified flags
//! carry different branching values. The candidate with the fewest classes gives
//! the largest quotient step, and the procedure repeats on the quotient until no
//! candidate survives.

use crate::symbol::{DSymbol, Flag};

struct UnionFind {
    parent: Vec<Flag>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: Flag) -> Flag {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }
}

/// Close `0 ~ a` under the involutions. Returns the class representative (the
/// smallest member) of every flag, or `None` on a branching mismatch.
pub fn symmetry_classes(ds: &DSymbol, a: Flag) -> Option<Vec<Flag>> {
    let n = ds.size();
    let mut uf = UnionFind::new(n);
    let mut work = vec![(0, a)];
    while let Some((x, y)) = work.pop() {
        let (rx, ry) = (uf.find(x), uf.find(y));
        if rx == ry {
            continue;
        }
        if ds.m01[rx] != ds.m01[ry] || ds.m12[rx] != ds.m12[ry] {
            return None;
        }
        uf.parent[ry] = rx;
        for i in 0..3 {
            work.push((ds.s(i, x), ds.s(i, y)));
        }
    }
    let roots: Vec<Flag> = (0..n).map(|x| uf.find(x)).collect();
    let mut smallest = vec![usize::MAX; n];
    for x in 0..n {
        let r = roots[x];
        smallest[r] = smallest[r].min(x);
    }
    Some(roots.into_iter().map(|r| smallest[r]).collect())
}

/// Collapse each class to its representative; representatives keep their
/// relative order.
pub fn quotient(ds: &DSymbol, classes: &[Flag]) -> DSymbol {
    let n = ds.size();
    let mut index = vec![usize::MAX; n];
    let mut reps = Vec::new();
    for a in 0..n {
        if classes[a] == a {
            index[a] = reps.len();
            reps.push(a);
        }
    }
    let mut out = DSymbol::new(reps.len());
    out.set_nr(ds.nr1, ds.nr2);
    for (k, &r) in reps.iter().enumerate() {
        for i in 0..3 {
            out.ops[i][k] = index[classes[ds.s(i, r)]];
        }
        out.m01[k] = ds.m01[r];
        out.m12[k] = ds.m12[r];
    }
    out
}

/// The maximally symmetric quotient of `ds` (a copy if it is already maximal).
pub fn max_symmetry(ds: &DSymbol) -> DSymbol {
    let mut cur = ds.clone();
    loop {
        let mut best: Option<(usize, Vec<Flag>)> = None;
        for a in 1..cur.size() {
            if cur.m01[a] != cur.m01[0] || cur.m12[a] != cur.m12[0] {
                continue;
            }
            let Some(classes) = symmetry_classes(&cur, a) else {
                continue;
            };
            let count = classes.iter().enumerate().filter(|&(x, &c)| x == c).count();
            if best.as_ref().map_or(true, |(k, _)| count < *k) {
                best = Some((count, classes));
            }
        }
        match best {
            Some((count, classes)) if count < cur.size() => {
                tracing::debug!(from = cur.size(), to = count, "symmetry quotient");
                cur = quotient(&cur, &classes);
            }
            _ => return cur,
        }
    }
}

pub fn is_maximal_symmetry(ds: &DSymbol) -> bool {
    max_symmetry(ds).size() == ds.size()
}
