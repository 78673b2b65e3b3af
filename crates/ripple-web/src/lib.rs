#![cfg(target_arch = "wasm32")]
use instant::Instant;
use ripple_core::{
    FrameDriver, PointerTracker, RippleConfig, RippleEffect, Viewport, DEFAULT_IMAGE_URL,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod dom;
mod events;
mod frame;
mod loader;

const CANVAS_ID: &str = "app-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop and release GPU resources. The effect cannot be
/// restarted without reloading the page.
#[wasm_bindgen]
pub fn dispose() {
    log::info!("ripple-web dispose requested");
    frame::request_shutdown();
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    frame::wire_canvas_resize(&canvas);

    // Everything below waits on the image; the loop must not start before it.
    let url = canvas
        .get_attribute("data-image")
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());
    let image = loader::fetch_rgba(&url).await?;

    let config = RippleConfig::default();
    let viewport = Viewport::fit(canvas.width(), canvas.height(), image.width, image.height)?;
    let effect = RippleEffect::new(config, viewport)?;
    let gpu = frame::init_gpu(&canvas, &image, effect.config().capacity).await?;
    drop(image);

    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    events::wire_pointermove(&canvas, tracker.clone());

    let shared: frame::SharedFrame = Rc::new(RefCell::new(Some(frame::FrameContext {
        driver: FrameDriver::new(effect, tracker, gpu),
        canvas: canvas.clone(),
        last_instant: Instant::now(),
    })));
    events::wire_debug_toggle(shared.clone());

    frame::start_loop(shared);
    Ok(())
}
