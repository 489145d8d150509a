//! Carve a thin-corridor maze into a rectangular grid
//!
//! The carver starts from a random cell and grows a single corridor by
//! randomized backtracking depth-first search. Two adjacency rules keep the
//! corridor from ever running alongside itself or touching itself corner to
//! corner, so the carved cells always form one loop-free passage.
//!
//! # Examples
//! ```
//! use maze_carver::path_carver::PathCarver;
//!
//! let mut carver = PathCarver::new(Some(7));
//! let grid = carver.carve_path(9, 9).unwrap();
//! println!("{}", grid.render_digits());
//! ```

pub mod path_carver;

use anyhow::bail;
use itertools::Itertools;

/// Location in the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Rectangular field of carved/uncarved cells
///
/// Cells are stored row-major and addressed as `[y][x]`. The grid is created
/// blank, carved in place by [`path_carver::PathCarver`], and rendered once
/// carving is finished.
pub struct Grid {
    cells: Vec<Vec<bool>>,
}

impl Grid {
    const C_CARVED: char = '1';
    const C_EMPTY: char = '0';
    const S_CARVED: char = '🟩';
    const S_EMPTY: char = '🟫';

    /// Create a blank grid with every cell uncarved
    ///
    /// ## Arguments
    /// - `height`: Number of rows, at least 1.
    /// - `width`: Number of columns, at least 1.
    ///
    /// Returns error for an empty grid in either dimension.
    pub fn new(height: usize, width: usize) -> anyhow::Result<Self> {
        if height == 0 || width == 0 {
            bail!("Grid dimensions must be at least 1x1, got {}x{}", height, width);
        }
        Ok(Grid {
            cells: (0..height)
                .map(|_| (0..width).map(|_| false).collect())
                .collect(),
        })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    /// Whether `pos` lies inside the grid
    pub fn contains(&self, pos: Point) -> bool {
        pos.y < self.height() && pos.x < self.width()
    }

    pub fn is_visited(&self, pos: Point) -> bool {
        self.cells[pos.y][pos.x]
    }

    /// Mark the cell at `pos` as carved
    ///
    /// Carving is one-way; there is no operation to blank a cell again.
    pub fn visit(&mut self, pos: Point) {
        self.cells[pos.y][pos.x] = true;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Render rows of `1` (carved) and `0` (uncarved), space separated
    pub fn render_digits(&self) -> String {
        self.render(Self::C_CARVED, Self::C_EMPTY, " ")
    }

    /// Render rows of emoji squares, `🟩` for carved and `🟫` for uncarved
    pub fn render_emojis(&self) -> String {
        self.render(Self::S_CARVED, Self::S_EMPTY, "")
    }

    fn render(&self, carved: char, empty: char, separator: &str) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell { carved } else { empty })
                    .join(separator)
            })
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Grid, Point};

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn empty_dimensions_are_rejected() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn visiting_marks_a_single_cell() {
        let mut grid = Grid::new(2, 3).unwrap();
        let pos = Point { x: 2, y: 1 };

        assert!(!grid.is_visited(pos));
        grid.visit(pos);

        assert!(grid.is_visited(pos));
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn contains_matches_grid_bounds() {
        let grid = Grid::new(2, 3).unwrap();

        assert!(grid.contains(Point { x: 0, y: 0 }));
        assert!(grid.contains(Point { x: 2, y: 1 }));
        assert!(!grid.contains(Point { x: 3, y: 0 }));
        assert!(!grid.contains(Point { x: 0, y: 2 }));
        // Offset arithmetic below zero wraps to usize::MAX
        assert!(!grid.contains(Point { x: usize::MAX, y: 0 }));
    }

    #[test]
    fn digit_rendering_marks_carved_cells() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.visit(Point { x: 0, y: 0 });
        grid.visit(Point { x: 1, y: 1 });

        assert_eq!(grid.render_digits(), "1 0\n0 1");
    }

    #[test]
    fn emoji_rendering_marks_carved_cells() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.visit(Point { x: 0, y: 0 });
        grid.visit(Point { x: 1, y: 1 });

        assert_eq!(grid.render_emojis(), "🟩🟫\n🟫🟩");
    }
}
