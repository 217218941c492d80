use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::renderer::Renderer;
use game::scene::{CANVAS_HEIGHT, CANVAS_WIDTH};
use game::Demo;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Tumblebox...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Tumblebox")
            .with_inner_size(winit::dpi::LogicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer: Option<Renderer> = None;
    let mut demo = Demo::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| {
            match event {
                Event::Resumed => {
                    if renderer.is_some() {
                        return;
                    }
                    // GPU acquisition is the only async boundary in the program
                    match pollster::block_on(Renderer::new(window.clone())) {
                        Ok(r) => {
                            renderer = Some(r);
                            demo.start();
                        }
                        Err(e) => {
                            error!("Renderer initialization failed: {e}");
                            elwt.exit();
                        }
                    }
                }
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::Resized(physical_size),
                    ..
                } => {
                    if let Some(renderer) = renderer.as_mut() {
                        renderer.resize(physical_size);
                    }
                }
                Event::WindowEvent {
                    event: WindowEvent::RedrawRequested,
                    ..
                } => {
                    if let Some(renderer) = renderer.as_mut() {
                        for contact in demo.advance() {
                            info!("{contact}");
                        }
                        demo.emit_debug();

                        match renderer.render(demo.debug_lines()) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                renderer.reconfigure();
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                error!("GPU out of memory, shutting down...");
                                elwt.exit();
                            }
                            Err(e) => warn!("Frame dropped: {e}"),
                        }
                        demo.finish_frame();
                    }
                }
                Event::AboutToWait => {
                    // Request redraw on next frame
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
