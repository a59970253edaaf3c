pub mod board;
pub mod life;
pub mod patterns;
pub mod simulator;
