use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for lit-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait FlipCrossIterExt {
    fn iter_flip_cross(&self, target: Coord2) -> FlipCrossIter;
}

impl<T> FlipCrossIterExt for Array2<T> {
    fn iter_flip_cross(&self, target: Coord2) -> FlipCrossIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        FlipCrossIter::new(target, size)
    }
}

/// The press target followed by its four orthogonal neighbors.
const DISPLACEMENTS: [(isize, isize); 5] = [
    (0, 0),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Yields the in-bounds subset of the flip cross around a target cell. The
/// target may itself be out of bounds; it is then skipped like any other
/// out-of-bounds candidate.
#[derive(Debug)]
pub struct FlipCrossIter {
    target: Coord2,
    bounds: Coord2,
    index: u8,
}

impl FlipCrossIter {
    fn new(target: Coord2, bounds: Coord2) -> Self {
        Self {
            target,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for FlipCrossIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.target, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
