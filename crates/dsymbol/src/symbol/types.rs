//! The D-symbol value type and its primitive accessors.
//!
//! Flags are dense 0-based indices internally; the textual format is 1-based and
//! the conversion happens only in `text.rs`.

use std::fmt;

use crate::rational::Rational;

/// A flag (chamber) of a D-symbol: an index into `0..size`.
pub type Flag = usize;

/// The three orbit pairs in the fixed enumeration order used throughout:
/// vertices `(1,2)`, edges `(0,2)`, tiles `(0,1)`.
pub const ORBIT_PAIRS: [(usize, usize); 3] = [(1, 2), (0, 2), (0, 1)];

/// Orbit shape: a cycle has no fixed point under either involution, a chain has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrbitType {
    Cycle = 1,
    Chain = 2,
}

/// Result of the 2-coloring in [`DSymbol::compute_orientation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// No consistent 2-coloring exists.
    NonOrientable = 0,
    /// Consistent, but some involution fixes a flag (mirror boundary present).
    Bordered = 1,
    /// Consistent and fixed-point free.
    Orientable = 2,
}

impl Orientation {
    #[inline]
    pub fn as_int(self) -> u8 {
        self as u8
    }

    /// `true` unless the coloring failed.
    #[inline]
    pub fn is_consistent(self) -> bool {
        self != Orientation::NonOrientable
    }
}

/// Ambient geometry, classified by the sign of the curvature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
    Spherical,
    Euclidean,
    Hyperbolic,
}

impl Geometry {
    pub fn from_curvature(k: Rational) -> Self {
        match k.signum() {
            1 => Geometry::Spherical,
            0 => Geometry::Euclidean,
            _ => Geometry::Hyperbolic,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Geometry::Spherical => "Spherical",
            Geometry::Euclidean => "Euclidean",
            Geometry::Hyperbolic => "Hyperbolic",
        };
        f.write_str(s)
    }
}

/// A two-dimensional Delaney–Dress symbol.
///
/// Owns three involution arrays and the two editable rows of the branching
/// matrix (`m02` is the constant 2). Values compare structurally: two symbols are
/// `==` only when they agree flag by flag; use [`crate::isomorphic`] for
/// relabeling-invariant comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DSymbol {
    pub(crate) nr1: usize,
    pub(crate) nr2: usize,
    pub(crate) ops: [Vec<Flag>; 3],
    pub(crate) m01: Vec<usize>,
    pub(crate) m12: Vec<usize>,
}

impl Default for DSymbol {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DSymbol {
    /// A symbol with `size` flags, every involution the identity and
    /// `m01 = m12 = 1`. Valid as is only for `size <= 1`; construction code
    /// rewires it with the setters.
    pub fn new(size: usize) -> Self {
        let id: Vec<Flag> = (0..size).collect();
        Self {
            nr1: 1,
            nr2: 1,
            ops: [id.clone(), id.clone(), id],
            m01: vec![1; size],
            m12: vec![1; size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.m01.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[inline]
    pub fn flags(&self) -> std::ops::Range<Flag> {
        0..self.size()
    }

    /// Family id and index within the family. Display-only labels.
    #[inline]
    pub fn nr(&self) -> (usize, usize) {
        (self.nr1, self.nr2)
    }

    pub fn set_nr(&mut self, nr1: usize, nr2: usize) {
        self.nr1 = nr1;
        self.nr2 = nr2;
    }

    /// `s_i(a)`.
    #[inline]
    pub fn s(&self, i: usize, a: Flag) -> Flag {
        self.ops[i][a]
    }

    /// Set `s_i(a) = b` and `s_i(b) = a`.
    pub fn set_s(&mut self, i: usize, a: Flag, b: Flag) {
        self.ops[i][a] = b;
        self.ops[i][b] = a;
    }

    /// Branching value `m_ij(a)`; `m02` is always 2.
    #[inline]
    pub fn m(&self, i: usize, j: usize, a: Flag) -> usize {
        match ordered(i, j) {
            (0, 1) => self.m01[a],
            (1, 2) => self.m12[a],
            (0, 2) => 2,
            p => panic!("no branching entry for pair {p:?}"),
        }
    }

    /// Write `v` on every flag of the `{i,j}`-orbit of `a`.
    pub fn set_m(&mut self, i: usize, j: usize, a: Flag, v: usize) {
        let (i, j) = ordered(i, j);
        if (i, j) == (0, 2) {
            debug_assert_eq!(v, 2, "m02 is fixed at 2");
            return;
        }
        for b in self.orbit_flags(i, j, a) {
            self.set_m_flag(i, j, b, v);
        }
    }

    /// Write `v` on the single flag `a`.
    ///
    /// Leaves the orbit-constant invariant to the caller; construction code uses
    /// it while an orbit is only partially linked.
    pub fn set_m_flag(&mut self, i: usize, j: usize, a: Flag, v: usize) {
        match ordered(i, j) {
            (0, 1) => self.m01[a] = v,
            (1, 2) => self.m12[a] = v,
            (0, 2) => debug_assert_eq!(v, 2, "m02 is fixed at 2"),
            p => panic!("no branching entry for pair {p:?}"),
        }
    }

    /// Branching number `v_ij(a) = m_ij(a) / r_ij(a)`.
    ///
    /// Panics when `m` is not a multiple of the orbit length: that is a broken
    /// symbol, not a recoverable condition.
    pub fn v(&self, i: usize, j: usize, a: Flag) -> usize {
        let r = self.orbit_length(i, j, a);
        let m = self.m(i, j, a);
        assert!(
            m % r == 0,
            "m{i}{j}={m} is not a multiple of the orbit length {r} at flag {a}"
        );
        m / r
    }

    /// Set the branching number, i.e. `m_ij = v * r_ij` on the whole orbit.
    pub fn set_v(&mut self, i: usize, j: usize, a: Flag, v: usize) {
        let r = self.orbit_length(i, j, a);
        self.set_m(i, j, a, v * r);
    }

    /// Append a disjoint copy of `other`; its flags are shifted by the old size.
    ///
    /// The result is disconnected until the caller relinks the two parts.
    pub fn append(&mut self, other: &DSymbol) {
        let off = self.size();
        for i in 0..3 {
            self.ops[i].extend(other.ops[i].iter().map(|&b| b + off));
        }
        self.m01.extend_from_slice(&other.m01);
        self.m12.extend_from_slice(&other.m12);
    }

    /// Number of tiles, edges and vertices: the `(0,1)`, `(0,2)` and `(1,2)`
    /// orbit counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.orbit_count(0, 1),
            self.orbit_count(0, 2),
            self.orbit_count(1, 2),
        )
    }
}

#[inline]
pub(crate) fn ordered(i: usize, j: usize) -> (usize, usize) {
    if i <= j {
        (i, j)
    } else {
        (j, i)
    }
}
