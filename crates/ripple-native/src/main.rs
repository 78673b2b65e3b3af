use anyhow::Context;
use clap::Parser;
use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use ripple_core::{canvas_to_ndc, FrameDriver, PointerTracker, RippleEffect, Viewport};
use ripple_render::{GpuState, ImageRgba};

mod cli;

type NativeDriver<'w> = FrameDriver<PointerTracker, GpuState<'w>>;

fn load_image(path: &std::path::Path) -> anyhow::Result<ImageRgba> {
    let decoded = image::open(path)
        .with_context(|| format!("loading {}", path.display()))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    log::info!("[image] {} decoded {}x{}", path.display(), width, height);
    Ok(ImageRgba {
        width,
        height,
        pixels: decoded.into_raw(),
    })
}

fn resize(driver: &mut NativeDriver<'_>, size: winit::dpi::PhysicalSize<u32>) {
    let (iw, ih) = driver.sink().image_size();
    match Viewport::fit(size.width, size.height, iw, ih) {
        Ok(viewport) => {
            driver.sink_mut().resize(size.width, size.height);
            driver.effect_mut().set_viewport(viewport);
        }
        // minimized windows report 0x0; keep the last good viewport
        Err(e) => log::debug!("ignoring resize: {}", e),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Cli::parse();
    let config = args.ripple_config();
    config.validate().context("invalid ripple settings")?;

    // The image must be loaded before the effect or the GPU state exist.
    let image = load_image(&args.image)?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = WindowBuilder::new()
        .with_title("Ripple")
        .build(&event_loop)
        .context("creating window")?;
    let size = window.inner_size();

    let viewport = Viewport::fit(size.width, size.height, image.width, image.height)?;
    let mut effect = RippleEffect::new(config, viewport)?;
    effect.set_debug(args.debug);
    let gpu = pollster::block_on(GpuState::new(
        &window,
        size.width,
        size.height,
        &image,
        effect.config().capacity,
    ))
    .context("initializing GPU")?;
    drop(image);

    let mut driver: NativeDriver<'_> = FrameDriver::new(effect, PointerTracker::new(), gpu);
    let mut last_frame = Instant::now();
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => resize(&mut driver, size),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let (w, h) = driver.sink().size();
            let ndc = canvas_to_ndc(position.x as f32, position.y as f32, w as f32, h as f32);
            driver.pointer_mut().set_position(ndc);
        }
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => match logical_key {
            Key::Character(c) if c.eq_ignore_ascii_case("d") => {
                let on = driver.effect_mut().toggle_debug();
                log::info!("[keys] debug {}", if on { "on" } else { "off" });
            }
            Key::Named(NamedKey::Escape) => elwt.exit(),
            _ => {}
        },
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;
            match driver.frame(dt) {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    driver.sink_mut().reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    elwt.exit()
                }
                Err(e) => log::warn!("frame skipped: {:?}", e),
            }
        }
        Event::LoopExiting => log::info!("shutting down, releasing GPU resources"),
        _ => {}
    })?;
    Ok(())
}
