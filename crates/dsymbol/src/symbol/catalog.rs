//! Small named symbols used as fixtures, generator seeds and demo inputs.

use super::types::DSymbol;

/// The one-flag symbol with every involution fixing the flag: the symmetry type
/// of a regular `{m01, m12}` tiling (mirrors on all three sides of the chamber).
pub fn single_flag(m01: usize, m12: usize) -> DSymbol {
    let mut ds = DSymbol::new(1);
    ds.m01[0] = m01.max(1);
    ds.m12[0] = m12.max(1);
    ds
}

/// Tetrahedron, `*332`.
pub fn tetrahedron() -> DSymbol {
    single_flag(3, 3)
}

/// Cube, `*432`.
pub fn cube() -> DSymbol {
    single_flag(4, 3)
}

/// Octahedron, `*432`.
pub fn octahedron() -> DSymbol {
    single_flag(3, 4)
}

/// Square lattice, `*442`.
pub fn square_lattice() -> DSymbol {
    single_flag(4, 4)
}

/// Hexagonal lattice, `*632`.
pub fn hexagonal_lattice() -> DSymbol {
    single_flag(6, 3)
}

/// Triangle lattice, `*632`.
pub fn triangle_lattice() -> DSymbol {
    single_flag(3, 6)
}

/// The `{7,3}` hyperbolic tiling, `*732`.
pub fn heptagonal_tiling() -> DSymbol {
    single_flag(7, 3)
}

/// Every catalog symbol, spherical first.
pub fn all() -> Vec<DSymbol> {
    vec![
        tetrahedron(),
        cube(),
        octahedron(),
        square_lattice(),
        hexagonal_lattice(),
        triangle_lattice(),
        heptagonal_tiling(),
    ]
}

/// The cube as a polygonal map with trivial symmetry (48 flags, name `1`).
pub fn cube_map() -> DSymbol {
    let faces = vec![
        vec![0, 1, 2, 3],
        vec![4, 7, 6, 5],
        vec![0, 4, 5, 1],
        vec![1, 5, 6, 2],
        vec![2, 6, 7, 3],
        vec![3, 7, 4, 0],
    ];
    map_or_empty(&faces)
}

/// A `w × h` grid of squares on the torus with trivial symmetry (name `o`).
///
/// Needs `w, h >= 3` so that no two edges share both endpoints.
pub fn square_torus(w: usize, h: usize) -> DSymbol {
    let (w, h) = (w.max(3), h.max(3));
    let vertex = |i: usize, j: usize| (i % w) + w * (j % h);
    let mut faces = Vec::with_capacity(w * h);
    for i in 0..w {
        for j in 0..h {
            faces.push(vec![
                vertex(i, j),
                vertex(i + 1, j),
                vertex(i + 1, j + 1),
                vertex(i, j + 1),
            ]);
        }
    }
    map_or_empty(&faces)
}

/// Two triangles inside a hexagonal outer face that touches one vertex twice.
/// The outer face is not a disk.
pub fn figure_eight_map() -> DSymbol {
    let faces = vec![vec![0, 1, 2, 0, 3, 4], vec![0, 2, 1], vec![0, 4, 3]];
    map_or_empty(&faces)
}

/// Four lunes between the poles of a sphere, with a vertex in the middle of every
/// meridian. Every tile is a disk, but neighbouring lunes share two edges.
pub fn lunes_map() -> DSymbol {
    let faces: Vec<Vec<usize>> = (0..4)
        .map(|k| vec![0, 2 + k, 1, 2 + (k + 1) % 4])
        .collect();
    map_or_empty(&faces)
}

// The face lists above are fixed and well formed.
fn map_or_empty(faces: &[Vec<usize>]) -> DSymbol {
    DSymbol::from_vertex_cycles(faces).unwrap_or_default()
}
