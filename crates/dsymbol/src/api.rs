//! Curated re-exports for the command-line front end and experiments.
//!
//! Not a stable surface; names follow the modules they come from.

// Core type and text format
pub use crate::error::DsError;
pub use crate::symbol::{catalog, read_symbols, DSymbol, EdgeUse, Flag, Geometry, Orientation};
// Invariants and classification
pub use crate::isomorphic::isomorphic;
pub use crate::orbifold::{group_name, OrbifoldName};
pub use crate::symmetry_class::SymmetryClass;
// Whole-symbol algorithms
pub use crate::algorithms::{
    all_tiles_are_disks, dualize, is_maximal_symmetry, is_simple_tiling, max_symmetry,
    orientate, reorder,
};
// Surgery
pub use crate::edit::{
    break_symmetries, contract_edge, glue_tiles_around_edge, glue_tiles_around_vertex,
    truncate_vertex, BreakCfg, BreakMode, Edit,
};
// Random symbols
pub use crate::random::{
    draw_symbol, draw_symbols, RandomSymbolCfg, ReplayToken as SymbolReplay, StepCount,
};
