//! Local surgery on D-symbols.
//!
//! Purpose
//! - Edit the tiling encoded by a symbol while keeping its symmetry group:
//!   contract an edge, merge the two tiles at an edge, merge all tiles around a
//!   vertex, truncate a vertex. Symmetry breaking lowers the group instead.
//!
//! Contract
//! - Operators take `&DSymbol` and an edge or vertex ordinal, 1-based in the
//!   order of [`DSymbol::orbits`]. They return a new symbol, or `None` when the
//!   ordinal is out of range or the edit does not apply. The input is never
//!   modified.
//! - Branching values after a relink are re-derived from orbit stabilizers
//!   (`crate::utils::rescale`): surviving orbits keep theirs, merged orbits get
//!   one from the operator.
//!
//! Layout
//! - `contract.rs`, `glue_edge.rs`, `glue_vertex.rs`, `truncate.rs`: the four
//!   group-preserving operators.
//! - `break_sym.rs`: symmetry breaking by cyclic covers.
//! - `branched.rs`: covers of prime degree branched over several orbits.

mod branched;
mod break_sym;
mod contract;
mod glue_edge;
mod glue_vertex;
mod truncate;

pub use break_sym::{break_symmetries, break_successors, has_rotations, BreakCfg, BreakMode};
pub use contract::{can_contract_edge, contract_edge, contract_edge_at};
pub use glue_edge::{can_glue_tiles_around_edge, glue_tiles_around_edge, glue_tiles_around_edge_at};
pub use glue_vertex::{
    can_glue_tiles_around_vertex, glue_tiles_around_vertex, glue_tiles_around_vertex_at,
};
pub use truncate::{can_truncate_vertex, truncate_vertex, truncate_vertex_at};

use crate::symbol::DSymbol;

/// A group-preserving edit with its target ordinal, for callers that pick edits
/// at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    ContractEdge(usize),
    GlueTilesAroundEdge(usize),
    GlueTilesAroundVertex(usize),
    TruncateVertex(usize),
}

impl Edit {
    pub fn apply(self, ds: &DSymbol) -> Option<DSymbol> {
        match self {
            Edit::ContractEdge(e) => contract_edge(ds, e),
            Edit::GlueTilesAroundEdge(e) => glue_tiles_around_edge(ds, e),
            Edit::GlueTilesAroundVertex(v) => glue_tiles_around_vertex(ds, v),
            Edit::TruncateVertex(v) => truncate_vertex(ds, v),
        }
    }

    /// Every edit of this symbol that applies.
    pub fn applicable(ds: &DSymbol) -> Vec<Edit> {
        let edges = ds.orbit_count(0, 2);
        let vertices = ds.orbit_count(1, 2);
        let mut out = Vec::new();
        for e in 1..=edges {
            if can_contract_edge(ds, e) {
                out.push(Edit::ContractEdge(e));
            }
            if can_glue_tiles_around_edge(ds, e) {
                out.push(Edit::GlueTilesAroundEdge(e));
            }
        }
        for v in 1..=vertices {
            if can_glue_tiles_around_vertex(ds, v) {
                out.push(Edit::GlueTilesAroundVertex(v));
            }
            out.push(Edit::TruncateVertex(v));
        }
        out
    }
}

/// Validate an edited symbol before handing it out.
fn checked(out: DSymbol, op: &'static str) -> Option<DSymbol> {
    match out.validate() {
        Ok(()) => {
            tracing::debug!(op, size = out.size(), "edit applied");
            Some(out)
        }
        Err(e) => {
            tracing::warn!(op, error = %e, "edit produced an inconsistent symbol");
            None
        }
    }
}
