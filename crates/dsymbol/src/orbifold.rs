//! Conway orbifold names of the symmetry group encoded by a D-symbol.
//!
//! Model
//! - Cone points: `{i,j}`-cycles (no fixed points) with branching number `v > 1`.
//! - Boundaries: flags fixed by some `s_k` lie on mirrors. A boundary is walked
//!   segment by segment: from a segment `(a, k)` with `s_k(a) = a`, follow the
//!   chain `{k, out}` to its other fixed end; the branching number of that chain,
//!   if `> 1`, is a corner of the boundary. The next chain uses the third index.
//! - Each boundary is reduced to its lexicographically largest rotation, taken
//!   over both walking directions; boundaries are listed in descending order.
//! - Handles (`o`) or crosscaps (`x`) follow from the Euler characteristic:
//!   `2 - χ - #boundaries` is twice the number of handles on an orientable
//!   quotient, and the number of crosscaps otherwise.
//!
//! Token order: handles, cones, a literal `1` when nothing else describes the
//! group, then `*` plus corners per boundary, then crosscaps.

use std::fmt;

use crate::symbol::{DSymbol, Flag, ORBIT_PAIRS};

/// One token of an orbifold name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameToken {
    /// Cone or corner order (>= 2).
    Number(usize),
    /// Start of a mirror boundary.
    Star,
    /// Handle `o`.
    Handle,
    /// Crosscap `x`.
    Crosscap,
    /// The trivial marker `1`.
    One,
}

impl fmt::Display for NameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NameToken::Number(n) if n < 10 => write!(f, "{n}"),
            NameToken::Number(n) => write!(f, "({n})"),
            NameToken::Star => f.write_str("*"),
            NameToken::Handle => f.write_str("o"),
            NameToken::Crosscap => f.write_str("x"),
            NameToken::One => f.write_str("1"),
        }
    }
}

/// Structured orbifold name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrbifoldName {
    pub handles: usize,
    /// Cone orders, descending.
    pub cones: Vec<usize>,
    /// Corner orders per boundary, each in canonical rotation, boundaries descending.
    pub boundaries: Vec<Vec<usize>>,
    pub crosscaps: usize,
}

impl OrbifoldName {
    pub fn of(ds: &DSymbol) -> Self {
        let mut cones = Vec::new();
        for (i, j) in ORBIT_PAIRS {
            for a in ds.orbits(i, j) {
                if ds.is_cycle(i, j, a) {
                    let v = ds.v(i, j, a);
                    if v > 1 {
                        cones.push(v);
                    }
                }
            }
        }
        cones.sort_unstable_by(|a, b| b.cmp(a));

        let mut boundaries: Vec<Vec<usize>> = boundary_corners(ds)
            .into_iter()
            .map(|seq| {
                let mut rev = seq.clone();
                rev.reverse();
                largest_rotation(&seq).max(largest_rotation(&rev))
            })
            .collect();
        boundaries.sort_unstable_by(|a, b| b.cmp(a));

        let chi = ds.euler_characteristic();
        let rest = (2 - chi - boundaries.len() as i64).max(0) as usize;
        let (handles, crosscaps) = if ds.orientation().is_consistent() {
            (rest / 2, 0)
        } else {
            (0, rest)
        };
        Self {
            handles,
            cones,
            boundaries,
            crosscaps,
        }
    }

    pub fn tokens(&self) -> Vec<NameToken> {
        let mut out = vec![NameToken::Handle; self.handles];
        out.extend(self.cones.iter().map(|&c| NameToken::Number(c)));
        let has_corners = self.boundaries.iter().any(|b| !b.is_empty());
        if self.cones.is_empty() && !has_corners && self.handles == 0 && self.crosscaps == 0 {
            out.push(NameToken::One);
        }
        for b in &self.boundaries {
            out.push(NameToken::Star);
            out.extend(b.iter().map(|&c| NameToken::Number(c)));
        }
        out.extend(std::iter::repeat(NameToken::Crosscap).take(self.crosscaps));
        out
    }

    /// Degenerate spherical patterns with no discrete group: `*p`, `pq` and
    /// `*pq` with `p != q`.
    pub fn is_invalid_spherical_group(&self) -> bool {
        is_invalid_spherical_group(&self.tokens())
    }
}

impl fmt::Display for OrbifoldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.tokens() {
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

/// Token list of the orbifold name of `ds`.
pub fn orbifold_tokens(ds: &DSymbol) -> Vec<NameToken> {
    OrbifoldName::of(ds).tokens()
}

/// The orbifold name as a string, e.g. `*632`, `4*2`, `o`, `22x`.
pub fn group_name(ds: &DSymbol) -> String {
    OrbifoldName::of(ds).to_string()
}

pub fn is_invalid_spherical_group(tokens: &[NameToken]) -> bool {
    use NameToken::{Number, Star};
    match *tokens {
        [Star, Number(_)] => true,
        [Number(p), Number(q)] => p != q,
        [Star, Number(p), Number(q)] => p != q,
        _ => false,
    }
}

/// Walk from `a` (fixed by `s_k`) along the chain `{k, i}`, starting with `s_i`,
/// to its other end. Returns that flag and the index that fixes it.
fn other_chain_end(ds: &DSymbol, a: Flag, k: usize, i: usize) -> (Flag, usize) {
    let mut b = a;
    let mut cur = i;
    loop {
        let c = ds.s(cur, b);
        if c == b {
            return (b, cur);
        }
        b = c;
        cur = if cur == i { k } else { i };
    }
}

/// Corner sequences of all boundary components, in walk order.
fn boundary_corners(ds: &DSymbol) -> Vec<Vec<usize>> {
    let mut used = vec![[false; 3]; ds.size()];
    let mut out = Vec::new();
    for a in ds.flags() {
        for k in 0..3 {
            if ds.s(k, a) != a || used[a][k] {
                continue;
            }
            let mut seq = Vec::new();
            let (mut x, mut kk) = (a, k);
            let mut exit = if k == 0 { 1 } else { 0 };
            loop {
                used[x][kk] = true;
                let (b, fk) = other_chain_end(ds, x, kk, exit);
                let v = ds.v(kk, exit, x);
                if v > 1 {
                    seq.push(v);
                }
                let next_exit = 3 - kk - exit;
                x = b;
                kk = fk;
                exit = next_exit;
                if used[x][kk] {
                    break;
                }
            }
            out.push(seq);
        }
    }
    out
}

/// Lexicographically largest cyclic rotation of `seq`.
fn largest_rotation(seq: &[usize]) -> Vec<usize> {
    let n = seq.len();
    let doubled: Vec<usize> = seq.iter().chain(seq.iter()).copied().collect();
    (0..n)
        .map(|r| &doubled[r..r + n])
        .max()
        .map(<[usize]>::to_vec)
        .unwrap_or_default()
}
