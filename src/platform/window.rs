//! Native window via winit
//!
//! The event loop is pumped once per tick with `run_return`, so the game
//! loop stays a plain blocking `loop { wait; poll; tick; draw }`.

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

use super::input::InputSource;
use crate::error::SnakeError;
use crate::renderer::PixelsRenderer;
use crate::settings::Settings;
use crate::sim::{Direction, InputEvent};

/// Translate a pressed key into a game input
pub fn map_key(key: VirtualKeyCode) -> Option<InputEvent> {
    match key {
        VirtualKeyCode::Up => Some(InputEvent::Turn(Direction::Up)),
        VirtualKeyCode::Down => Some(InputEvent::Turn(Direction::Down)),
        VirtualKeyCode::Left => Some(InputEvent::Turn(Direction::Left)),
        VirtualKeyCode::Right => Some(InputEvent::Turn(Direction::Right)),
        VirtualKeyCode::Escape => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Input source that drains the winit event queue
pub struct WinitInput {
    event_loop: EventLoop<()>,
}

impl InputSource for WinitInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => events.push(InputEvent::Quit),
                Event::WindowEvent {
                    event:
                        WindowEvent::KeyboardInput {
                            input:
                                KeyboardInput {
                                    state: ElementState::Pressed,
                                    virtual_keycode: Some(key),
                                    ..
                                },
                            ..
                        },
                    ..
                } => events.extend(map_key(key)),
                // Queue drained for this tick
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => {}
            }
        });

        events
    }
}

/// Create the game window and its framebuffer
pub fn open(settings: &Settings) -> Result<(WinitInput, PixelsRenderer), SnakeError> {
    let event_loop = EventLoop::new();
    let size = LogicalSize::new(settings.screen_width as f64, settings.screen_height as f64);
    let window = WindowBuilder::new()
        .with_title(settings.title.as_str())
        .with_inner_size(size)
        .with_resizable(false)
        .build(&event_loop)?;

    let pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(settings.screen_width, settings.screen_height, surface_texture)?
    };

    log::info!(
        "Window ready: {}x{} px, {}px cells",
        settings.screen_width,
        settings.screen_height,
        settings.cell_size
    );

    let renderer = PixelsRenderer::new(
        window,
        pixels,
        settings.screen_width,
        settings.screen_height,
        settings.cell_size,
    );
    Ok((WinitInput { event_loop }, renderer))
}
