use super::error::LifeError;

/// What the window loop needs from an automaton.
///
/// `x`/`y` arguments are frame pixel positions, not cell coordinates.
pub trait CellAutomata {
    fn update(&mut self);
    fn draw(&self, screen: &mut [u8]);
    fn toggle(&mut self, x: isize, y: isize) -> bool;
    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool);
    fn clear(&mut self);
    fn randomize(&mut self) -> Result<(), LifeError>;
    fn reset(&mut self) -> Result<(), LifeError>;
    fn describe() -> String;
}
