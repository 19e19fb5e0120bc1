//! The D-symbol data structure.
//!
//! Purpose
//! - Hold a two-dimensional Delaney–Dress symbol: flags `0..size`, three
//!   involutions `s0, s1, s2`, and the branching values `m01`, `m12` (`m02 = 2`).
//! - Provide orbit algebra (walks, lengths, cardinalities, fixed points), the
//!   topological invariants (Euler characteristic, orientation, curvature) and
//!   the single-line text format.
//!
//! Layout
//! - `types.rs` (the value type and setters), `orbits.rs` (walks and metrics),
//!   `invariants.rs` (invariants and validation), `text.rs` (read/write),
//!   `maps.rs` (symbols of polygonal maps), `catalog.rs` (named fixtures).
//!
//! Terminology: `{0,1}`-orbits are tiles, `{0,2}`-orbits edges, `{1,2}`-orbits
//! vertices.

pub mod catalog;
mod invariants;
mod maps;
mod orbits;
mod text;
mod types;

pub use maps::EdgeUse;
pub use orbits::Orbits;
pub use text::read_symbols;
pub use types::{DSymbol, Flag, Geometry, OrbitType, Orientation, ORBIT_PAIRS};
pub(crate) use types::ordered;

#[cfg(test)]
mod tests;
