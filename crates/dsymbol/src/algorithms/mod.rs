//! Whole-symbol algorithms.
//!
//! - `transform.rs`: dual symbol and orientation double cover.
//! - `maxsym.rs`: quotient by the automorphism group.
//! - `reorder.rs`: canonical numbering by tile size.
//! - `disks.rs`: tests that tiles are disks and that the tiling is simple.
//!
//! All functions take `&DSymbol` and return new values.

mod disks;
mod maxsym;
mod reorder;
mod transform;

pub use disks::{all_tiles_are_disks, is_simple_tiling};
pub use maxsym::{is_maximal_symmetry, max_symmetry, quotient, symmetry_classes};
pub use reorder::reorder;
pub use transform::{dualize, orientate};
