use ndarray::Array2;

/// Single coordinate axis, used for positions and the board dimension.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Converts `(x, y)` into an ndarray index.
///
/// Grids are stored row-major with `y` as the outer axis, so the flat storage order is
/// `x + y * dimension`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn square(dimension: Coord) -> CellCount {
    let dimension = dimension as CellCount;
    dimension.saturating_mul(dimension)
}

/// Flat index of `coords` on a square grid, `None` when out of bounds.
pub fn flat_index((x, y): Coord2, dimension: Coord) -> Option<usize> {
    if x < dimension && y < dimension {
        Some(usize::from(x) + usize::from(y) * usize::from(dimension))
    } else {
        None
    }
}

/// Inverse of [`flat_index`].
pub fn coords_of(index: usize, dimension: Coord) -> Option<Coord2> {
    let dimension = usize::from(dimension);
    if dimension == 0 || index >= dimension * dimension {
        return None;
    }
    let x = (index % dimension).try_into().ok()?;
    let y = (index / dimension).try_into().ok()?;
    Some((x, y))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            cols.try_into().unwrap_or(Coord::MAX),
            rows.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(coords, bounds)
    }
}

/// Offsets of the eight surrounding cells, row by row.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds neighbors of a cell, at most eight, never the cell itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offsets: NEIGHBOR_OFFSETS.iter(),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let ((x, y), (width, height)) = (self.center, self.bounds);
        self.offsets.find_map(|&(dx, dy)| {
            let nx = x.checked_add_signed(dx).filter(|&nx| nx < width)?;
            let ny = y.checked_add_signed(dy).filter(|&ny| ny < height)?;
            Some((nx, ny))
        })
    }
}
