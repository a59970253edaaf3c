use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::traits_and_structs::LifeError;

/// Create a window whose inner size matches the frame one-to-one.
///
/// Returns `(window, surface_width, surface_height)`.
pub fn create_window(
    title: &str,
    (width, height): (u32, u32),
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32), LifeError> {
    let size = PhysicalSize::new(width, height);
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(size)
        .with_min_inner_size(size)
        .build(event_loop)?;
    let surface = window.inner_size();

    Ok((window, surface.width, surface.height))
}
