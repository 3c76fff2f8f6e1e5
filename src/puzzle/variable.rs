use serde::{Deserialize, Serialize};

/// Reading direction of a crossword slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

/// A crossword slot: a run of cells starting at `(row, col)` extending
/// `length` cells in `direction`.
///
/// Identity is the full field tuple; two distinct slots never compare equal
/// even if they would hold the same word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// The grid cell holding character position `i` of this slot.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + i),
            Direction::Down => (self.row + i, self.col),
        }
    }

    /// Iterates over all cells covered by this slot, in character order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| self.cell(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn across_cells_extend_rightwards() {
        let v = Variable::new(2, 1, Direction::Across, 3);
        let cells: Vec<_> = v.cells().collect();
        assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn down_cells_extend_downwards() {
        let v = Variable::new(0, 4, Direction::Down, 2);
        let cells: Vec<_> = v.cells().collect();
        assert_eq!(cells, vec![(0, 4), (1, 4)]);
    }

    #[test]
    fn identity_is_by_slot_not_length_alone() {
        let a = Variable::new(0, 0, Direction::Across, 3);
        let b = Variable::new(0, 0, Direction::Down, 3);
        assert_ne!(a, b);
        assert_eq!(a, Variable::new(0, 0, Direction::Across, 3));
    }
}
