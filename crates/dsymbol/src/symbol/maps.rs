//! D-symbols of oriented polygonal maps with trivial symmetry.
//!
//! Each face corner `k` of face `f` contributes two flags: `(f,k,0)` at the start
//! of the face's `k`-th edge and `(f,k,1)` at its end. Then
//! - `s0` swaps the two ends of an edge inside a face,
//! - `s1` joins the end of edge `k` to the start of edge `k+1`,
//! - `s2` glues the two sides of an edge across faces.
//!
//! `m01` and `m12` are set to the orbit lengths (face and vertex degrees), which is
//! the symbol of the map under the trivial group.

use std::collections::HashMap;

use super::types::DSymbol;
use crate::error::DsError;

/// One use of an edge along a face boundary: `(edge id, traversed forward?)`.
pub type EdgeUse = (usize, bool);

impl DSymbol {
    /// Build from faces given as boundary walks of edge uses.
    ///
    /// Every edge must be used exactly twice, once in each direction.
    pub fn from_polygon_map(faces: &[Vec<EdgeUse>]) -> Result<DSymbol, DsError> {
        let mut base = Vec::with_capacity(faces.len());
        let mut n = 0;
        for f in faces {
            if f.is_empty() {
                return Err(DsError::parse("face with no edges"));
            }
            base.push(n);
            n += 2 * f.len();
        }
        let flag = |f: usize, k: usize, end: usize| base[f] + 2 * k + end;

        let mut ds = DSymbol::new(n);
        let mut uses: HashMap<usize, Vec<(usize, usize, bool)>> = HashMap::new();
        for (f, face) in faces.iter().enumerate() {
            let p = face.len();
            for (k, &(edge, forward)) in face.iter().enumerate() {
                ds.set_s(0, flag(f, k, 0), flag(f, k, 1));
                ds.set_s(1, flag(f, k, 1), flag(f, (k + 1) % p, 0));
                uses.entry(edge).or_default().push((f, k, forward));
            }
        }
        for (edge, u) in &uses {
            match u.as_slice() {
                [(f, k, d1), (g, l, d2)] if d1 != d2 => {
                    ds.set_s(2, flag(*f, *k, 0), flag(*g, *l, 1));
                    ds.set_s(2, flag(*f, *k, 1), flag(*g, *l, 0));
                }
                _ => {
                    return Err(DsError::parse(format!(
                        "edge {edge} must be used twice in opposite directions"
                    )))
                }
            }
        }
        for (i, j) in [(0, 1), (1, 2)] {
            let reps: Vec<_> = ds.orbits(i, j).collect();
            for a in reps {
                let r = ds.orbit_length(i, j, a);
                ds.set_m(i, j, a, r);
            }
        }
        ds.validate()?;
        Ok(ds)
    }

    /// Build from faces given as cyclic vertex lists (consistently oriented).
    ///
    /// Edges are identified by their unordered vertex pair, so the map must not
    /// have two edges joining the same pair of vertices.
    pub fn from_vertex_cycles(faces: &[Vec<usize>]) -> Result<DSymbol, DsError> {
        let mut edge_ids: HashMap<(usize, usize), (usize, usize)> = HashMap::new();
        let mut walks = Vec::with_capacity(faces.len());
        for face in faces {
            let p = face.len();
            let mut walk = Vec::with_capacity(p);
            for k in 0..p {
                let (u, v) = (face[k], face[(k + 1) % p]);
                let key = (u.min(v), u.max(v));
                let next = edge_ids.len();
                let (id, first_tail) = *edge_ids.entry(key).or_insert((next, u));
                walk.push((id, first_tail == u));
            }
            walks.push(walk);
        }
        Self::from_polygon_map(&walks)
    }
}
