//! One generation of Conway's rules (B3/S23) on a bounded grid.
//!
//! Every cell is evaluated from the previous generation only, so the order of
//! evaluation does not matter. Positions past the edge do not exist: corner
//! cells have three candidate neighbours and edge cells five.

use crate::traits_and_structs::{Cell, Grid};

/// How a cell is painted in the frame showing its current generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderCategory {
    #[default]
    Background,
    Alive,
    AboutToDie,
}

/// One [`RenderCategory`] per cell, row-major, same shape as its grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderMap {
    categories: Vec<RenderCategory>,
    width: usize,
    height: usize,
}

impl RenderMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-bounds positions read as background.
    pub fn category(&self, row: usize, col: usize) -> RenderCategory {
        if row < self.height && col < self.width {
            self.categories[col + row * self.width]
        } else {
            RenderCategory::default()
        }
    }
}

/// Live cells among the in-bounds Moore neighbours of `(row, col)`.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let rows = row.saturating_sub(1)..=(row + 1).min(grid.height() - 1);
    let mut count = 0;
    for r in rows {
        for c in col.saturating_sub(1)..=(col + 1).min(grid.width() - 1) {
            if (r, c) != (row, col) && grid.is_alive(r, c) {
                count += 1;
            }
        }
    }
    count
}

fn dies(cell: Cell, live_neighbors: u8) -> bool {
    cell.is_alive() && !(2..=3).contains(&live_neighbors)
}

fn is_born_or_survives(cell: Cell, live_neighbors: u8) -> bool {
    match cell {
        Cell::Alive => (2..=3).contains(&live_neighbors),
        Cell::Dead => live_neighbors == 3,
    }
}

pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    if dies(cell, live_neighbors) {
        Cell::Dead
    } else {
        Cell::new(is_born_or_survives(cell, live_neighbors))
    }
}

/// Categorised from the current state, not the next one: a cell born this
/// step is still painted as background and only shows as alive next frame.
pub fn classify_cell(cell: Cell, live_neighbors: u8) -> RenderCategory {
    match cell {
        Cell::Dead => RenderCategory::Background,
        Cell::Alive if dies(cell, live_neighbors) => RenderCategory::AboutToDie,
        Cell::Alive => RenderCategory::Alive,
    }
}

/// The render map for `grid` without advancing it.
pub fn classify(grid: &Grid) -> RenderMap {
    step(grid).1
}

/// Computes the next generation and the render map of the current one.
/// `grid` is left untouched.
pub fn step(grid: &Grid) -> (Grid, RenderMap) {
    let mut next = grid.blank_like();
    let mut categories = Vec::with_capacity(grid.width() * grid.height());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let cell = grid.get(row, col).unwrap_or_default();
            let n = live_neighbors(grid, row, col);
            next.set(row, col, next_state(cell, n));
            categories.push(classify_cell(cell, n));
        }
    }
    let map = RenderMap {
        categories,
        width: grid.width(),
        height: grid.height(),
    };
    (next, map)
}
