use super::direction::Direction;
use rand::Rng;

/// A cell on (or just off) the playing field.  `x` grows to the right and `y`
/// grows downwards, with `(0, 0)` in the top-left corner.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one step away from `self` in `direction`.  The result
    /// may lie outside of any grid.
    pub(crate) fn offset(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A square playing field of fixed size
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    size: u16,
}

impl Grid {
    pub(crate) fn new(size: u16) -> Grid {
        Grid { size }
    }

    /// Return the number of cells along each side of the grid
    pub(crate) fn size(self) -> u16 {
        self.size
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.size).pow(2)
    }

    pub(crate) fn is_empty(self) -> bool {
        self.size == 0
    }

    /// Test whether `cell` lies on the grid
    pub(crate) fn in_bounds(self, cell: Cell) -> bool {
        let bound = 0..i32::from(self.size);
        bound.contains(&cell.x) && bound.contains(&cell.y)
    }

    /// The cell the snake starts from
    pub(crate) fn center(self) -> Cell {
        let mid = i32::from(self.size / 2);
        Cell::new(mid, mid)
    }

    /// Iterate over every cell of the grid, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let size = i32::from(self.size);
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }

    /// Pick a cell of the grid uniformly at random.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty.
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let size = i32::from(self.size);
        Cell::new(rng.random_range(0..size), rng.random_range(0..size))
    }
}
