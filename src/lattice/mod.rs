/// ==============================================================================================
/// ======================================= Lattice Geometry =======================================
/// ==============================================================================================
///
/// Pure, read-only geometry: the mapping between 3D coordinates and linear voxel indices,
/// periodic wrap, and the seven neighbor enumerators. Holds no simulation state and is
/// immutably shared across worker threads (`&Lattice`, or `Arc<Lattice>` if a host needs to
/// move it across an async boundary).

pub mod offsets;
pub mod rotation;

use crate::config::{Dimensions, NeighborhoodKind};
use offsets::Offset;

#[derive(Debug, Clone, Copy)]
pub struct Lattice {
    dims: Dimensions,
}

impl Lattice {
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.dims.num_voxels()
    }

    /// Linear index from 3D coordinates: i = x + Nx*y + Nx*Ny*z.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.dims.x * y + self.dims.x * self.dims.y * z
    }

    /// Recover 3D coordinates from a linear index (inverse of `index`).
    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize, usize) {
        let x = i % self.dims.x;
        let y = (i / self.dims.x) % self.dims.y;
        let z = i / (self.dims.x * self.dims.y);
        (x, y, z)
    }

    /// Apply an offset to a voxel's coordinates with periodic wrap on all three axes.
    #[inline]
    fn wrapped_index(&self, x: usize, y: usize, z: usize, offset: Offset) -> usize {
        let wx = (x as i64 + offset.0 as i64).rem_euclid(self.dims.x as i64) as usize;
        let wy = (y as i64 + offset.1 as i64).rem_euclid(self.dims.y as i64) as usize;
        let wz = (z as i64 + offset.2 as i64).rem_euclid(self.dims.z as i64) as usize;
        self.index(wx, wy, wz)
    }

    #[inline]
    fn map_offsets<const N: usize>(&self, i: usize, offsets: &[Offset; N]) -> [usize; N] {
        let (x, y, z) = self.coords(i);
        let mut out = [0usize; N];
        for (dst, &o) in out.iter_mut().zip(offsets.iter()) {
            *dst = self.wrapped_index(x, y, z, o);
        }
        out
    }

    pub fn von_neumann(&self, i: usize) -> [usize; 6] {
        self.map_offsets(i, &offsets::von_neumann())
    }

    pub fn eight_cell(&self, i: usize, variant: u8) -> [usize; 8] {
        self.map_offsets(i, &offsets::eight_cell_variant(variant))
    }

    pub fn fourteen_cell(&self, i: usize, variant: u8) -> [usize; 14] {
        let template = rotation::rotate_variant(&offsets::fourteen_cell_base(), variant);
        self.map_offsets(i, &template)
    }

    pub fn eighteen_cell(&self, i: usize) -> [usize; 18] {
        self.map_offsets(i, &offsets::eighteen_cell())
    }

    pub fn twenty_cell(&self, i: usize, variant: u8) -> [usize; 20] {
        let template = rotation::rotate_variant(&offsets::twenty_cell_base(), variant);
        self.map_offsets(i, &template)
    }

    pub fn moore(&self, i: usize) -> [usize; 26] {
        self.map_offsets(i, &offsets::moore())
    }

    /// The anti-clumping shell used only during nucleation, never for growth.
    pub fn extended_moore(&self, i: usize) -> [usize; 124] {
        self.map_offsets(i, &offsets::extended_moore())
    }

    /// How many orientation variants a neighborhood kind exposes (1 = no variants).
    #[inline]
    pub fn variant_count(kind: NeighborhoodKind) -> u8 {
        match kind {
            NeighborhoodKind::VonNeumann | NeighborhoodKind::EighteenCell | NeighborhoodKind::Moore => 1,
            NeighborhoodKind::EightCell => 6,
            NeighborhoodKind::FourteenCell | NeighborhoodKind::TwentyCell => 4,
        }
    }

    /// Dispatch to the enumerator for `kind`, writing linear neighbor indices into
    /// `out` and returning the number written. `out` must be at least 26 entries long
    /// (the largest growth neighborhood); the caller slices the result with the
    /// returned length.
    pub fn neighbors_into(&self, i: usize, kind: NeighborhoodKind, variant: u8, out: &mut [usize; 26]) -> usize {
        match kind {
            NeighborhoodKind::VonNeumann => {
                let n = self.von_neumann(i);
                out[..6].copy_from_slice(&n);
                6
            }
            NeighborhoodKind::EightCell => {
                let n = self.eight_cell(i, variant);
                out[..8].copy_from_slice(&n);
                8
            }
            NeighborhoodKind::FourteenCell => {
                let n = self.fourteen_cell(i, variant);
                out[..14].copy_from_slice(&n);
                14
            }
            NeighborhoodKind::EighteenCell => {
                let n = self.eighteen_cell(i);
                out[..18].copy_from_slice(&n);
                18
            }
            NeighborhoodKind::TwentyCell => {
                let n = self.twenty_cell(i, variant);
                out[..20].copy_from_slice(&n);
                20
            }
            NeighborhoodKind::Moore => {
                let n = self.moore(i);
                out[..26].copy_from_slice(&n);
                26
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice(n: usize) -> Lattice {
        Lattice::new(Dimensions::new(n, n, n))
    }

    #[test]
    fn index_and_coords_round_trip() {
        let lat = lattice(5);
        for z in 0..5 {
            for y in 0..5 {
                for x in 0..5 {
                    let i = lat.index(x, y, z);
                    assert_eq!(lat.coords(i), (x, y, z));
                }
            }
        }
    }

    #[test]
    fn periodic_wrap_in_every_direction() {
        let lat = lattice(3);
        // voxel (2,2,2) offset by (+1,+1,+1) wraps to (0,0,0).
        let i = lat.index(2, 2, 2);
        let corners = lat.moore(i);
        let target = lat.index(0, 0, 0);
        assert!(corners.contains(&target), "wrap-around corner neighbor missing");
    }

    #[test]
    fn von_neumann_excludes_self_and_has_six_unique_neighbors() {
        let lat = lattice(4);
        let i = lat.index(1, 1, 1);
        let n = lat.von_neumann(i);
        assert_eq!(n.len(), 6);
        assert!(!n.contains(&i));
        let mut sorted = n.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
    }

    #[test]
    fn neighbors_into_matches_variant_count_lengths() {
        let lat = lattice(6);
        let i = lat.index(3, 3, 3);
        let mut buf = [0usize; 26];
        for kind in [
            NeighborhoodKind::VonNeumann,
            NeighborhoodKind::EightCell,
            NeighborhoodKind::FourteenCell,
            NeighborhoodKind::EighteenCell,
            NeighborhoodKind::TwentyCell,
            NeighborhoodKind::Moore,
        ] {
            let n = lat.neighbors_into(i, kind, 0, &mut buf);
            let expected = match kind {
                NeighborhoodKind::VonNeumann => 6,
                NeighborhoodKind::EightCell => 8,
                NeighborhoodKind::FourteenCell => 14,
                NeighborhoodKind::EighteenCell => 18,
                NeighborhoodKind::TwentyCell => 20,
                NeighborhoodKind::Moore => 26,
            };
            assert_eq!(n, expected, "{kind:?}");
        }
    }
}
