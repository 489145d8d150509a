//! Maze path carving

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{Grid, Point};

/// Randomized backtracking path carver.
pub struct PathCarver {
    random: StdRng,
}

impl PathCarver {
    const NEIGHBOURS_SIDE: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
    const NEIGHBOURS_CORNER: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a corridor into a fresh `height` x `width` grid
    ///
    /// Starting from a random cell, extend the corridor one cell at a time
    /// with randomized depth-first search. When the head of the path has no
    /// cell left that can be carved without touching the existing corridor,
    /// back up along the path and continue from the previous cell. The walk
    /// runs on an explicit stack, so grid size is not limited by call depth.
    ///
    /// A short corridor is a valid outcome; on a 1x1 grid only the start
    /// cell is carved.
    pub fn carve_path(&mut self, height: usize, width: usize) -> anyhow::Result<Grid> {
        let mut grid = Grid::new(height, width)?;

        let start = Point {
            x: self.random.gen_range(0..grid.width()),
            y: self.random.gen_range(0..grid.height()),
        };
        grid.visit(start);

        let mut stack = vec![start];
        while let Some(&head) = stack.last() {
            let candidates = Self::candidate_cells(&grid, head);
            if let Some(&next) = candidates.choose(&mut self.random) {
                grid.visit(next);
                stack.push(next);
            } else {
                stack.pop();
            }
        }

        Ok(grid)
    }

    /// In-bounds cells one step up, down, left or right of `pos`
    pub fn orthogonal_neighbours(grid: &Grid, pos: Point) -> Vec<Point> {
        Self::in_bounds(grid, pos, &Self::NEIGHBOURS_SIDE)
    }

    /// In-bounds cells one diagonal step away from `pos`
    pub fn diagonal_neighbours(grid: &Grid, pos: Point) -> Vec<Point> {
        Self::in_bounds(grid, pos, &Self::NEIGHBOURS_CORNER)
    }

    /// Cells into which the corridor may grow from `current`
    ///
    /// An orthogonal neighbour qualifies when it is uncarved, when none of
    /// its own orthogonal neighbours except `current` is carved, and when
    /// every carved diagonal neighbour it has is itself an orthogonal
    /// neighbour of `current`. The last rule blocks corner-to-corner contact
    /// between separate stretches of the corridor.
    fn candidate_cells(grid: &Grid, current: Point) -> Vec<Point> {
        let around_current = Self::orthogonal_neighbours(grid, current);
        around_current
            .iter()
            .filter(|&&cell| {
                !grid.is_visited(cell)
                    && Self::orthogonal_neighbours(grid, cell)
                        .into_iter()
                        .all(|side| side == current || !grid.is_visited(side))
                    && Self::diagonal_neighbours(grid, cell)
                        .into_iter()
                        .all(|corner| !grid.is_visited(corner) || around_current.contains(&corner))
            })
            .copied()
            .collect()
    }

    fn in_bounds(grid: &Grid, pos: Point, offsets: &[(i32, i32); 4]) -> Vec<Point> {
        offsets
            .iter()
            .map(|&(dx, dy)| Point {
                x: (pos.x as i32 + dx) as usize,
                y: (pos.y as i32 + dy) as usize,
            })
            .filter(|&cell| grid.contains(cell))
            .collect()
    }
}
