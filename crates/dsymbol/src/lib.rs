//! Delaney–Dress symbols of two-dimensional periodic tilings.
//!
//! A D-symbol encodes a tiling of the sphere, plane or hyperbolic plane together
//! with its symmetry group as a finite set of flags, three involutions and two
//! branching maps. This crate parses and writes the textual format, computes the
//! usual invariants (curvature, Euler characteristic, orientation, Conway
//! orbifold name), transforms symbols (dual, orientation cover, maximal symmetry
//! quotient, canonical numbering) and edits the tiling by local surgery.
//!
//! Conventions
//! - Flags are 0-based in memory and 1-based in text and in every ordinal that
//!   callers pass in or read out.
//! - Functions take `&DSymbol` and return new values; editing operators return
//!   `None` when they do not apply.
//! - The library logs through `tracing` and installs no subscriber.

pub mod algorithms;
pub mod api;
pub mod edit;
pub mod error;
pub mod isomorphic;
pub mod orbifold;
pub mod random;
pub mod rational;
pub mod symbol;
pub mod symmetry_class;
pub mod utils;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::DsError;
pub use rational::Rational;
pub use symbol::DSymbol;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::edit::{BreakCfg, BreakMode, Edit};
    pub use crate::error::DsError;
    pub use crate::orbifold::{group_name, OrbifoldName};
    pub use crate::rational::Rational;
    pub use crate::symbol::{catalog, read_symbols, DSymbol, Flag, Geometry, Orientation};
    pub use crate::symmetry_class::SymmetryClass;
}
