use instant::Instant;
use ripple_core::{FrameDriver, PointerTracker, Viewport};
use ripple_render::{GpuState, ImageRgba};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub type WebDriver = FrameDriver<Rc<RefCell<PointerTracker>>, GpuState<'static>>;

/// `None` once the effect has been disposed.
pub type SharedFrame = Rc<RefCell<Option<FrameContext>>>;

thread_local! {
    static SHUTDOWN: Cell<bool> = const { Cell::new(false) };
}

pub fn request_shutdown() {
    SHUTDOWN.with(|s| s.set(true));
}

fn shutdown_requested() -> bool {
    SHUTDOWN.with(|s| s.get())
}

pub struct FrameContext {
    pub driver: WebDriver,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.sync_viewport();

        if let Err(e) = self.driver.frame(dt_sec) {
            match e {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    self.driver.sink_mut().reconfigure()
                }
                other => log::error!("render error: {:?}", other),
            }
        }
    }

    /// Pick up canvas size changes made by the resize listener.
    fn sync_viewport(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) == self.driver.sink().size() {
            return;
        }
        let (iw, ih) = self.driver.sink().image_size();
        match Viewport::fit(w, h, iw, ih) {
            Ok(viewport) => {
                self.driver.sink_mut().resize(w, h);
                self.driver.effect_mut().set_viewport(viewport);
            }
            Err(e) => log::warn!("ignoring resize: {}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    image: &ImageRgba,
    capacity: usize,
) -> anyhow::Result<GpuState<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    GpuState::new(target, canvas.width(), canvas.height(), image, capacity).await
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Drive `frame` from requestAnimationFrame until shutdown is requested. On
/// shutdown the context is dropped (releasing GPU resources) and no further
/// frame is scheduled.
pub fn start_loop(frame: SharedFrame) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if shutdown_requested() {
            if frame.borrow_mut().take().is_some() {
                log::info!("[frame] loop stopped, resources released");
            }
            return;
        }
        if let Some(ctx) = frame.borrow_mut().as_mut() {
            ctx.frame();
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
