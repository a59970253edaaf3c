pub mod automata_trait;
pub mod cell;
pub mod error;
pub mod grid;

pub use automata_trait::CellAutomata;
pub use cell::Cell;
pub use error::LifeError;
pub use grid::Grid;
