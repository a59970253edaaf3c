use crate::projects::board::{check_probability, Seeding, DEFAULT_ALIVE_PROBABILITY};
use crate::projects::simulator::RenderCategory;
use crate::traits_and_structs::LifeError;

pub const DEFAULT_WIDTH: usize = 120;
pub const DEFAULT_HEIGHT: usize = 90;
pub const DEFAULT_CELL_SIZE: u32 = 8;

/// RGBA colours for each kind of pixel on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: [u8; 4],
    /// The one-pixel gaps between cells.
    pub grid: [u8; 4],
    pub about_to_die: [u8; 4],
    pub alive: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [10, 10, 40, 0xff],
            grid: [30, 30, 60, 0xff],
            about_to_die: [200, 200, 225, 0xff],
            alive: [255, 255, 215, 0xff],
        }
    }
}

impl Palette {
    pub fn color(&self, category: RenderCategory) -> [u8; 4] {
        match category {
            RenderCategory::Background => self.background,
            RenderCategory::Alive => self.alive,
            RenderCategory::AboutToDie => self.about_to_die,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub seeding: Seeding,
    pub alive_probability: f32,
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            seeding: Seeding::Random,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_size < 2 {
            return Err(LifeError::InvalidCellSize(self.cell_size));
        }
        check_probability(self.alive_probability)?;
        self.screen_size().map(|_| ())
    }

    /// Frame size in pixels.
    pub fn screen_size(&self) -> Result<(u32, u32), LifeError> {
        let too_large = || LifeError::ScreenTooLarge {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
        };
        let scale = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|c| c.checked_mul(self.cell_size))
                .ok_or_else(too_large)
        };
        Ok((scale(self.width)?, scale(self.height)?))
    }
}
