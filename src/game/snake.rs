use super::grid::Cell;
use std::collections::{HashSet, VecDeque};

/// A snake on the grid.
///
/// The segments are stored head-first: the front of the deque is the head and
/// the back is the tip of the tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) segments: VecDeque<Cell>,
}

impl Snake {
    /// Create a new snake consisting of just a head at `head`
    pub(crate) fn new(head: Cell) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.segments[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over the snake's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    /// Test whether any segment of the snake, head and tail included, covers
    /// `cell`
    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Return the set of cells covered by the snake
    pub(crate) fn occupied(&self) -> HashSet<Cell> {
        self.segments().collect()
    }

    /// Prepend a new head.  The caller is responsible for checking that
    /// `head` is free.
    pub(crate) fn push_head(&mut self, head: Cell) {
        self.segments.push_front(head);
    }

    /// Drop the last segment of the tail.  A snake never shrinks below its
    /// head.
    pub(crate) fn pop_tail(&mut self) {
        if self.segments.len() > 1 {
            let _ = self.segments.pop_back();
        }
    }
}
