#![forbid(unsafe_code)]

use log::{debug, error};
use pixels::{Pixels, SurfaceTexture};
use randomize::PCG32;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use super::board::{initial_grid, new_rng, Seeding};
use super::simulator::{classify, step, RenderMap};
use crate::auxiliary::config::LifeConfig;
use crate::auxiliary::window::create_window;
use crate::traits_and_structs::{Cell, CellAutomata, Grid, LifeError};

pub fn run_life(config: LifeConfig) -> Result<(), LifeError> {
    let screen = config.screen_size()?;
    let automata = Life::new(config)?;
    run_automata(automata, "John Conway's Game of Life", screen)
}

/// Drives `automata` from the winit event loop: one update and one redraw
/// per pass, until the window closes.
pub fn run_automata<A: CellAutomata + 'static>(
    mut automata: A,
    title: &str,
    screen: (u32, u32),
) -> Result<(), LifeError> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height) = create_window(title, screen, &event_loop)?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(screen.0, screen.1, surface_texture)?;
    let mut paused = false;

    let mut draw_state: Option<bool> = None;

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            automata.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                match paused {
                    true => println!("paused"),
                    false => println!("unpaused"),
                }
            }
            if input.key_pressed(VirtualKeyCode::Space) {
                // Space is frame-step, so ensure we're paused
                println!("frame advanced");
                paused = true;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                println!("reset with random conditions");
                if let Err(e) = automata.randomize() {
                    error!("{}", e);
                }
            }
            if input.key_pressed(VirtualKeyCode::G) {
                println!("reset with glider gun");
                if let Err(e) = automata.reset() {
                    error!("{}", e);
                }
            }
            if input.key_pressed(VirtualKeyCode::C) {
                println!("screen cleared");
                automata.clear();
            }

            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    let prev_x = mx - dx;
                    let prev_y = my - dy;

                    let (mx_i, my_i) = pixels
                        .window_pos_to_pixel((mx, my))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    let (px_i, py_i) = pixels
                        .window_pos_to_pixel((prev_x, prev_y))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    (
                        (mx_i as isize, my_i as isize),
                        (px_i as isize, py_i as isize),
                    )
                })
                .unwrap_or_default();

            if input.mouse_pressed(0) {
                debug!("Mouse click at {:?}", mouse_cell);
                draw_state = Some(automata.toggle(mouse_cell.0, mouse_cell.1));
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                debug!("Draw at {:?} => {:?}", mouse_prev_cell, mouse_cell);
                if release || held {
                    automata.set_line(
                        mouse_prev_cell.0,
                        mouse_prev_cell.1,
                        mouse_cell.0,
                        mouse_cell.1,
                        draw_alive,
                    );
                }
                if release || !held {
                    debug!("Draw end");
                    draw_state = None;
                }
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            if !paused || input.key_pressed(VirtualKeyCode::Space) {
                automata.update();
            }
            window.request_redraw();
        }
    });
}

/// The board on screen together with how to paint it.
///
/// `render_map` always describes the generation being shown. After
/// [`Life::update`] the stored `grid` is already one generation ahead of it,
/// the same way a frame is painted while its successor is computed.
pub struct Life {
    grid: Grid,
    render_map: RenderMap,
    rng: PCG32,
    config: LifeConfig,
    generation: u64,
}

impl Life {
    pub fn new(config: LifeConfig) -> Result<Self, LifeError> {
        config.validate()?;
        let mut rng = new_rng(config.seed);
        let grid = initial_grid(
            config.seeding,
            config.width,
            config.height,
            config.alive_probability,
            &mut rng,
        )?;
        Ok(Self {
            render_map: classify(&grid),
            grid,
            rng,
            config,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn reseed(&mut self, seeding: Seeding) -> Result<(), LifeError> {
        let grid = initial_grid(
            seeding,
            self.config.width,
            self.config.height,
            self.config.alive_probability,
            &mut self.rng,
        )?;
        self.replace_grid(grid);
        self.generation = 0;
        Ok(())
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.render_map = classify(&grid);
        self.grid = grid;
    }

    /// Maps a frame pixel to the `(row, col)` of the cell covering it.
    fn cell_at(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let cs = self.config.cell_size as isize;
        let (row, col) = (y.div_euclid(cs), x.div_euclid(cs));
        self.grid
            .grid_idx(row, col)
            .map(|_| (row as usize, col as usize))
    }
}

impl CellAutomata for Life {
    fn update(&mut self) {
        let (next, map) = step(&self.grid);
        self.render_map = map;
        self.grid = next;
        self.generation += 1;
        debug!(
            "generation {}: {} live cells",
            self.generation(),
            self.grid().population()
        );
    }

    /// Paints every cell as a `cell_size - 1` square at
    /// `(col * cell_size, row * cell_size)` over the grid colour.
    fn draw(&self, screen: &mut [u8]) {
        let cs = self.config.cell_size as usize;
        let stride = self.render_map.width() * cs;
        debug_assert_eq!(screen.len(), 4 * stride * self.render_map.height() * cs);
        let palette = &self.config.palette;
        for (i, pix) in screen.chunks_exact_mut(4).enumerate() {
            let (x, y) = (i % stride, i / stride);
            let color = if x % cs == cs - 1 || y % cs == cs - 1 {
                palette.grid
            } else {
                palette.color(self.render_map.category(y / cs, x / cs))
            };
            pix.copy_from_slice(&color);
        }
    }

    fn toggle(&mut self, x: isize, y: isize) -> bool {
        let toggled = self
            .cell_at(x, y)
            .and_then(|(row, col)| self.grid.toggle(row, col));
        match toggled {
            Some(cell) => {
                self.render_map = classify(&self.grid);
                cell.is_alive()
            }
            None => false,
        }
    }

    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool) {
        let cs = self.config.cell_size as isize;
        let max_col = self.grid.width() as isize - 1;
        let max_row = self.grid.height() as isize - 1;
        // clamp the start onto the board, then draw until the line leaves it
        let start = (
            x0.div_euclid(cs).clamp(0, max_col),
            y0.div_euclid(cs).clamp(0, max_row),
        );
        let end = (x1.div_euclid(cs), y1.div_euclid(cs));
        for (col, row) in line_drawing::Bresenham::new(start, end) {
            if self.grid.grid_idx(row, col).is_none() {
                break;
            }
            self.grid.set(row as usize, col as usize, Cell::new(alive));
        }
        self.render_map = classify(&self.grid);
    }

    fn clear(&mut self) {
        self.grid.clear();
        self.render_map = classify(&self.grid);
    }

    fn randomize(&mut self) -> Result<(), LifeError> {
        self.reseed(Seeding::Random)
    }

    fn reset(&mut self) -> Result<(), LifeError> {
        self.reseed(Seeding::Patterns)
    }

    fn describe() -> String {
        "Conway's Game of Life: a cell with two or three live neighbours survives, \
         a dead cell with exactly three is born. Cells about to die are drawn pale."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auxiliary::config::Palette;
    use crate::projects::simulator::RenderCategory;

    fn small_config(seeding: Seeding) -> LifeConfig {
        LifeConfig {
            width: 6,
            height: 5,
            cell_size: 3,
            seeding,
            alive_probability: 0.0,
            seed: Some(11),
            palette: Palette::default(),
        }
    }

    fn pixel(screen: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
        let i = 4 * (x + y * stride);
        [screen[i], screen[i + 1], screen[i + 2], screen[i + 3]]
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = small_config(Seeding::Random);
        config.alive_probability = 2.0;
        assert!(matches!(Life::new(config), Err(LifeError::InvalidProbability(_))));
        // the glider gun does not fit a 6x5 board
        assert!(matches!(
            Life::new(small_config(Seeding::Patterns)),
            Err(LifeError::PatternOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_run_life_returns_setup_errors() {
        let config = LifeConfig {
            cell_size: 1,
            ..Default::default()
        };
        assert!(matches!(run_life(config), Err(LifeError::InvalidCellSize(1))));
        let config = LifeConfig {
            width: 40,
            seeding: Seeding::Patterns,
            ..Default::default()
        };
        assert!(matches!(
            run_life(config),
            Err(LifeError::PatternOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_toggle_maps_pixels_to_cells() {
        let mut life = Life::new(small_config(Seeding::Random)).unwrap();
        assert_eq!(life.grid().population(), 0);
        // pixel (7, 4) lies in column 2, row 1
        assert!(life.toggle(7, 4));
        assert!(life.grid().is_alive(1, 2));
        assert!(!life.toggle(7, 4));
        assert!(!life.toggle(-1, 0));
        assert!(!life.toggle(18, 0));
        assert_eq!(life.grid().population(), 0);
    }

    #[test]
    fn test_set_line_paints_cells() {
        let mut life = Life::new(small_config(Seeding::Random)).unwrap();
        life.set_line(0, 0, 17, 0, true);
        for col in 0..6 {
            assert!(life.grid().is_alive(0, col));
        }
        assert_eq!(life.grid().population(), 6);
        life.set_line(0, 0, 100, 0, false);
        assert_eq!(life.grid().population(), 0);
    }

    #[test]
    fn test_update_advances_and_paints_previous_generation() {
        let mut life = Life::new(small_config(Seeding::Random)).unwrap();
        // horizontal blinker through (2, 1..=3)
        life.set_line(3, 6, 9, 6, true);
        assert_eq!(life.grid().population(), 3);
        life.update();
        assert_eq!(life.generation(), 1);
        assert!(life.grid().is_alive(1, 2));
        assert!(!life.grid().is_alive(2, 1));
        // the map still shows the horizontal phase
        assert_eq!(life.render_map.category(2, 1), RenderCategory::AboutToDie);
        assert_eq!(life.render_map.category(2, 2), RenderCategory::Alive);
        assert_eq!(life.render_map.category(1, 2), RenderCategory::Background);
    }

    #[test]
    fn test_draw_layout() {
        let mut life = Life::new(small_config(Seeding::Random)).unwrap();
        life.toggle(0, 0); // lone cell at (0, 0), about to die
        life.toggle(4, 4); // cell (1, 1) gives each one neighbour
        let palette = Palette::default();
        let stride = 6 * 3;
        let mut screen = vec![0u8; 4 * stride * 5 * 3];
        life.draw(&mut screen);

        assert_eq!(pixel(&screen, stride, 0, 0), palette.about_to_die);
        assert_eq!(pixel(&screen, stride, 1, 1), palette.about_to_die);
        // last column and row of every cell is grid colour
        assert_eq!(pixel(&screen, stride, 2, 0), palette.grid);
        assert_eq!(pixel(&screen, stride, 0, 2), palette.grid);
        assert_eq!(pixel(&screen, stride, 3, 0), palette.background);
        assert_eq!(pixel(&screen, stride, 3, 3), palette.about_to_die);
        assert_eq!(pixel(&screen, stride, 17, 14), palette.grid);
        assert_eq!(pixel(&screen, stride, 16, 13), palette.background);
    }

    #[test]
    fn test_draw_alive_block() {
        let mut life = Life::new(small_config(Seeding::Random)).unwrap();
        life.set_line(3, 3, 6, 3, true);
        life.set_line(3, 6, 6, 6, true);
        let stride = 6 * 3;
        let mut screen = vec![0u8; 4 * stride * 5 * 3];
        life.draw(&mut screen);
        assert_eq!(pixel(&screen, stride, 3, 3), Palette::default().alive);
        assert_eq!(pixel(&screen, stride, 7, 7), Palette::default().alive);
    }

    #[test]
    fn test_clear_and_reseed() {
        let mut config = small_config(Seeding::Random);
        config.alive_probability = 1.0;
        let mut life = Life::new(config).unwrap();
        assert_eq!(life.grid().population(), 30);
        life.update();
        life.clear();
        assert_eq!(life.grid().population(), 0);
        assert_eq!(life.render_map.category(0, 0), RenderCategory::Background);
        life.randomize().unwrap();
        assert_eq!(life.grid().population(), 30);
        assert_eq!(life.generation(), 0);
        // the fixed layout needs a larger board, and the failed reset keeps the old one
        assert!(life.reset().is_err());
        assert_eq!(life.grid().population(), 30);
    }

    #[test]
    fn test_default_board_runs() {
        let config = LifeConfig {
            seeding: Seeding::Patterns,
            ..Default::default()
        };
        let mut life = Life::new(config).unwrap();
        let initial = life.grid().clone();
        assert_eq!(initial.population(), 41);
        for _ in 0..30 {
            life.update();
        }
        assert_eq!(life.generation(), 30);
        assert!(life.grid().population() > 0);
        assert_ne!(life.grid(), &initial);
        assert!(!Life::describe().is_empty());
    }
}
