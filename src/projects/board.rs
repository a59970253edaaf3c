use log::info;
use randomize::PCG32;

use super::patterns::{Pattern, GLIDER, GOSPER_GLIDER_GUN};
use crate::auxiliary::randomizer::generate_seed;
use crate::traits_and_structs::{Cell, Grid, LifeError};

pub const DEFAULT_ALIVE_PROBABILITY: f32 = 0.2;

pub const GUN_OFFSET: (usize, usize) = (5, 5);
pub const GLIDER_OFFSET: (usize, usize) = (20, 50);

/// How the first generation is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Every cell independently alive with the configured probability.
    Random,
    /// Blank board with a glider gun and a lone glider.
    Patterns,
}

/// A fixed seed gives a reproducible board, otherwise the OS supplies one.
pub fn new_rng(seed: Option<u64>) -> PCG32 {
    match seed {
        Some(s) => (s, s.rotate_left(32) | 1).into(),
        None => generate_seed().into(),
    }
}

pub fn check_probability(alive_probability: f32) -> Result<(), LifeError> {
    // `contains` is false for NaN as well
    if (0.0..=1.0).contains(&alive_probability) {
        Ok(())
    } else {
        Err(LifeError::InvalidProbability(alive_probability))
    }
}

pub fn random_grid(
    width: usize,
    height: usize,
    alive_probability: f32,
    rng: &mut PCG32,
) -> Result<Grid, LifeError> {
    check_probability(alive_probability)?;
    let mut grid = Grid::new_empty(width, height)?;
    for row in 0..height {
        for col in 0..width {
            let alive = randomize::f32_half_open_right(rng.next_u32()) < alive_probability;
            grid.set(row, col, Cell::new(alive));
        }
    }
    Ok(grid)
}

/// Copies `pattern` onto a copy of `grid` with its top-left corner at
/// `(row, col)`. The whole stencil box is overwritten, dead cells included.
/// A pattern that does not fit entirely is rejected, never clipped.
pub fn stamp_pattern(
    pattern: &Pattern,
    row: usize,
    col: usize,
    grid: &Grid,
) -> Result<Grid, LifeError> {
    let fits = row
        .checked_add(pattern.rows)
        .is_some_and(|end| end <= grid.height())
        && col
            .checked_add(pattern.cols)
            .is_some_and(|end| end <= grid.width());
    if !fits {
        return Err(LifeError::PatternOutOfBounds {
            pattern: pattern.name,
            row,
            col,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut stamped = grid.clone();
    for r in 0..pattern.rows {
        for c in 0..pattern.cols {
            stamped.set(row + r, col + c, Cell::new(pattern.is_alive(r, c)));
        }
    }
    Ok(stamped)
}

/// The fixed layout: gun at (5, 5), glider at (20, 50).
pub fn pattern_grid(width: usize, height: usize) -> Result<Grid, LifeError> {
    let grid = Grid::new_empty(width, height)?;
    let grid = stamp_pattern(&GOSPER_GLIDER_GUN, GUN_OFFSET.0, GUN_OFFSET.1, &grid)?;
    stamp_pattern(&GLIDER, GLIDER_OFFSET.0, GLIDER_OFFSET.1, &grid)
}

pub fn initial_grid(
    seeding: Seeding,
    width: usize,
    height: usize,
    alive_probability: f32,
    rng: &mut PCG32,
) -> Result<Grid, LifeError> {
    let grid = match seeding {
        Seeding::Random => random_grid(width, height, alive_probability, rng)?,
        Seeding::Patterns => pattern_grid(width, height)?,
    };
    info!(
        "seeded {}x{} board ({:?}) with {} live cells",
        width,
        height,
        seeding,
        grid.population()
    );
    Ok(grid)
}
