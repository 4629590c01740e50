use crate::{Point2, Swapper};
use grid::Grid;
use log::{debug, trace};

/// The shared trail grid. Cells are addressed by flooring continuous
/// coordinates; every cell holds a non-negative intensity.
pub struct ScalarField {
    grid: Swapper<Grid<f32>>,
    width: usize,
    height: usize,
}

impl ScalarField {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// A field with every cell set to `init_value`. If either dimension is
    /// zero the field is empty in both.
    pub fn filled(width: usize, height: usize, init_value: f32) -> Self {
        let (width, height) = if width == 0 || height == 0 {
            (0, 0)
        } else {
            (width, height)
        };
        let init_values = vec![init_value.max(0.0); width * height];
        let grid = Grid::from_vec(init_values, width);

        debug!(
            "Created new field with {} rows and {} columns",
            grid.rows(),
            grid.cols()
        );

        Self {
            grid: Swapper::from_live(grid),
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Intensity of the cell containing `(x, y)`, or 0 when that cell lies
    /// outside the grid.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        match self.cell_index(x, y) {
            Some((col, row)) => self.get(col, row).unwrap_or(0.0),
            None => 0.0,
        }
    }

    pub fn sample_at(&self, location: Point2) -> f32 {
        self.sample(location.x, location.y)
    }

    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        self.grid.live().get(row, col).copied()
    }

    /// Add `amount` to the cell containing `(x, y)`. Out of bounds
    /// coordinates are ignored.
    pub fn deposit(&mut self, x: f32, y: f32, amount: f32) {
        let amount = amount.max(0.0);

        match self
            .cell_index(x, y)
            .and_then(|(col, row)| self.grid.live_mut().get_mut(row, col))
        {
            Some(cell) => *cell += amount,
            None => trace!("Dropped deposit at out of bounds location ({}, {})", x, y),
        }
    }

    pub fn deposit_at(&mut self, location: Point2, amount: f32) {
        self.deposit(location.x, location.y, amount)
    }

    /// Scale every cell by `1 - rate`.
    pub fn decay(&mut self, rate: f32) {
        let retained = (1.0 - rate).max(0.0).min(1.0);

        self.grid
            .live_mut()
            .iter_mut()
            .for_each(|intensity| *intensity *= retained)
    }

    /// Blend each cell toward the mean of its four toroidal neighbours by
    /// `rate`. With `rate` in `[0, 1]` every output is a convex combination
    /// of inputs, so cells stay non-negative.
    pub fn diffuse(&mut self, rate: f32) {
        if self.is_empty() {
            return;
        }

        let rate = rate.max(0.0).min(1.0);
        let (width, height) = (self.width, self.height);
        let (live, scratch) = self.grid.read_live_write_scratch();

        for row in 0..height {
            for col in 0..width {
                let [north, east, south, west] = neighbor_indexes(col, row, width, height);
                let neighbor_mean = [north, east, south, west]
                    .iter()
                    .map(|&(c, r)| live[r][c])
                    .sum::<f32>()
                    * 0.25;
                let value = live[row][col];

                scratch[row][col] = value + rate * (neighbor_mean - value);
            }
        }

        self.grid.swap()
    }

    pub fn clear(&mut self) {
        self.grid
            .live_mut()
            .iter_mut()
            .for_each(|intensity| *intensity = 0.0)
    }

    /// Row-major iterator over every cell, suitable for handing to a renderer.
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.grid.live().iter()
    }

    pub fn total(&self) -> f32 {
        self.iter().sum()
    }

    fn cell_index(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (col, row) = (x.floor(), y.floor());

        if col >= 0.0 && col < self.width as f32 && row >= 0.0 && row < self.height as f32 {
            Some((col as usize, row as usize))
        } else {
            None
        }
    }
}

/// (col, row) of the north, east, south and west neighbours, wrapping at the
/// edges.
fn neighbor_indexes(col: usize, row: usize, cols: usize, rows: usize) -> [(usize, usize); 4] {
    let west = if col == 0 { cols - 1 } else { col - 1 };
    let east = if col + 1 == cols { 0 } else { col + 1 };
    let north = if row == 0 { rows - 1 } else { row - 1 };
    let south = if row + 1 == rows { 0 } else { row + 1 };

    [(col, north), (east, row), (col, south), (west, row)]
}
