use std::fmt;
use std::io;

/// Everything that can go wrong while configuring or hosting a simulation.
#[derive(Debug)]
pub enum LifeError {
    /// A grid dimension was zero.
    InvalidDimensions { width: usize, height: usize },
    /// Alive probability outside `[0, 1]`.
    InvalidProbability(f32),
    /// Cells smaller than two pixels leave nothing to paint.
    InvalidCellSize(u32),
    /// The screen in pixels does not fit a `u32`.
    ScreenTooLarge { width: usize, height: usize, cell_size: u32 },
    /// Stamping would write past the edge of the grid.
    PatternOutOfBounds {
        pattern: &'static str,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    Window(winit::error::OsError),
    Render(pixels::Error),
    Io(io::Error),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions: {}x{}", width, height)
            }
            LifeError::InvalidProbability(p) => {
                write!(f, "Alive probability must be within [0, 1], got {}", p)
            }
            LifeError::InvalidCellSize(size) => {
                write!(f, "Cell size must be at least 2 pixels, got {}", size)
            }
            LifeError::ScreenTooLarge {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "Screen of {}x{} cells at {} px per cell is too large",
                width, height, cell_size
            ),
            LifeError::PatternOutOfBounds {
                pattern,
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "Pattern '{}' at ({}, {}) does not fit a {}x{} grid",
                pattern, row, col, width, height
            ),
            LifeError::Window(e) => write!(f, "Window creation failed: {}", e),
            LifeError::Render(e) => write!(f, "Rendering failed: {}", e),
            LifeError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LifeError::Window(e) => Some(e),
            LifeError::Render(e) => Some(e),
            LifeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<winit::error::OsError> for LifeError {
    fn from(e: winit::error::OsError) -> Self {
        LifeError::Window(e)
    }
}

impl From<pixels::Error> for LifeError {
    fn from(e: pixels::Error) -> Self {
        LifeError::Render(e)
    }
}

impl From<io::Error> for LifeError {
    fn from(e: io::Error) -> Self {
        LifeError::Io(e)
    }
}
