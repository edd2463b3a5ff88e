/// ==============================================================================================
/// ===================================== Stencil Geometry =======================================
/// ==============================================================================================
///
/// Offset tables for every supported neighborhood, in voxel units. An "offset" is a
/// `(dx, dy, dz)` triple to be added (with periodic wrap) to a voxel's coordinates.
///
/// The upstream `CellularAutomata::Lattice` header that defines these tables was not present
/// in the retrieved source (only the filter that calls it survived); these are reconstructed
/// from the documented shape/count constraints rather than copied byte-for-byte. See
/// `DESIGN.md` for the reconstruction rationale.

pub type Offset = (i32, i32, i32);

/// The six axis-aligned unit offsets: exactly one nonzero component.
pub fn faces() -> [Offset; 6] {
    [
        (1, 0, 0), (-1, 0, 0),
        (0, 1, 0), (0, -1, 0),
        (0, 0, 1), (0, 0, -1),
    ]
}

/// The twelve edge-diagonal offsets: exactly two nonzero components.
pub fn edges() -> [Offset; 12] {
    let mut out = [(0, 0, 0); 12];
    let mut k = 0;
    for &(da, db) in &[(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        out[k] = (da, db, 0);
        out[k + 1] = (da, 0, db);
        out[k + 2] = (0, da, db);
        k += 3;
    }
    out
}

/// The eight corner offsets: all three components nonzero.
pub fn corners() -> [Offset; 8] {
    let mut out = [(0, 0, 0); 8];
    let mut k = 0;
    for &sx in &[1, -1] {
        for &sy in &[1, -1] {
            for &sz in &[1, -1] {
                out[k] = (sx, sy, sz);
                k += 1;
            }
        }
    }
    out
}

/// Von Neumann: the 6 face neighbors.
pub fn von_neumann() -> [Offset; 6] {
    faces()
}

/// Eighteen-cell / cubeoctahedron: all offsets with at most 2 nonzero components
/// (faces + edges).
pub fn eighteen_cell() -> [Offset; 18] {
    let mut out = [(0, 0, 0); 18];
    out[..6].copy_from_slice(&faces());
    out[6..].copy_from_slice(&edges());
    out
}

/// Moore: all offsets with at least 1 nonzero component (faces + edges + corners).
pub fn moore() -> [Offset; 26] {
    let mut out = [(0, 0, 0); 26];
    out[..6].copy_from_slice(&faces());
    out[6..18].copy_from_slice(&edges());
    out[18..].copy_from_slice(&corners());
    out
}

/// Canonical (unrotated) 14-cell template: faces + corners.
pub fn fourteen_cell_base() -> [Offset; 14] {
    let mut out = [(0, 0, 0); 14];
    out[..6].copy_from_slice(&faces());
    out[6..].copy_from_slice(&corners());
    out
}

/// Canonical (unrotated) 20-cell template: edges + corners.
pub fn twenty_cell_base() -> [Offset; 20] {
    let mut out = [(0, 0, 0); 20];
    out[..12].copy_from_slice(&edges());
    out[12..].copy_from_slice(&corners());
    out
}

/// One "face layer" of the 8-cell sphere-approximating shell: the 8 offsets in the
/// 3x3 layer orthogonal to `axis` at `sign` (excluding the direct axis neighbor itself).
/// `axis` is 0=x, 1=y, 2=z.
pub fn eight_cell_face_layer(axis: usize, sign: i32) -> [Offset; 8] {
    let other = match axis {
        0 => (1usize, 2usize),
        1 => (0usize, 2usize),
        2 => (0usize, 1usize),
        _ => unreachable!("axis must be 0, 1 or 2"),
    };
    let mut out = [(0, 0, 0); 8];
    let mut k = 0;
    for da in [-1, 0, 1] {
        for db in [-1, 0, 1] {
            if da == 0 && db == 0 {
                continue;
            }
            let mut v = [0i32; 3];
            v[other.0] = da;
            v[other.1] = db;
            v[axis] = sign;
            out[k] = (v[0], v[1], v[2]);
            k += 1;
        }
    }
    out
}

/// All 6 orientation variants of the 8-cell template, indexed `0..6` as
/// (axis=0 +, axis=0 -, axis=1 +, axis=1 -, axis=2 +, axis=2 -).
pub fn eight_cell_variant(variant: u8) -> [Offset; 8] {
    let (axis, sign) = match variant % 6 {
        0 => (0, 1),
        1 => (0, -1),
        2 => (1, 1),
        3 => (1, -1),
        4 => (2, 1),
        _ => (2, -1),
    };
    eight_cell_face_layer(axis, sign)
}

/// The extended-Moore anti-clumping shell: every offset within Chebyshev distance 2
/// of the origin, excluding the origin itself (124 offsets). Strictly contains the
/// Moore-26 shell, which is the widest growth neighborhood.
pub fn extended_moore() -> [Offset; 124] {
    let mut out = [(0, 0, 0); 124];
    let mut k = 0;
    for dx in -2..=2 {
        for dy in -2..=2 {
            for dz in -2..=2 {
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                out[k] = (dx, dy, dz);
                k += 1;
            }
        }
    }
    debug_assert_eq!(k, 124);
    out
}
