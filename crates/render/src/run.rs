//! Event loop for the windowed driver.

use std::sync::Arc;

use anyhow::{Context, Result};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::state::State;

pub fn run() -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Relief Terrain")
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let mut state = pollster::block_on(State::new(window.clone()))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == state.window().id() => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => elwt.exit(),
            WindowEvent::Resized(physical_size) => {
                state.resize(*physical_size);
            }
            WindowEvent::RedrawRequested => {
                state.update();
                match state.render() {
                    Ok(()) => {}
                    // Reconfigure the surface if lost
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        tracing::error!("out of GPU memory, exiting");
                        elwt.exit();
                    }
                    // Outdated and Timeout resolve themselves next frame
                    Err(e) => tracing::warn!("surface error: {e:?}"),
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            state.window().request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
