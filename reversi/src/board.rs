use super::constants::{EMPTY_CELL, FIRST_PLAYER_STONE, OFF_BOARD, SECOND_PLAYER_STONE};

/// Stone value played by `player_index`.
pub fn stone(player_index: usize) -> i8 {
    if player_index == 0 {
        FIRST_PLAYER_STONE
    } else {
        SECOND_PLAYER_STONE
    }
}

/// Row-major grid of cells. `x` runs rightward, `y` downward, and the
/// flat index of `(x, y)` is `width * y + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<i8>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width * height],
        }
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<i8>) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "cell vector does not match the board dimensions"
        );

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `(x, y)`, or [`OFF_BOARD`] outside the board. Scans can
    /// step past the edge and read "neither color" without a separate
    /// bounds check.
    pub fn cell(&self, x: i32, y: i32) -> i8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return OFF_BOARD;
        }

        self.cells[self.index_of(x, y)]
    }

    pub fn cell_at(&self, index: usize) -> i8 {
        self.cells[index]
    }

    pub fn set(&mut self, x: i32, y: i32, value: i8) {
        let index = self.index_of(x, y);
        self.cells[index] = value;
    }

    pub fn set_at(&mut self, index: usize, value: i8) {
        self.cells[index] = value;
    }

    pub fn index_of(&self, x: i32, y: i32) -> usize {
        (self.width as i32 * y + x) as usize
    }

    pub fn coords_of(&self, index: usize) -> (i32, i32) {
        ((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn count(&self, value: i8) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }
}
