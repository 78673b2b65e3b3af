use ripple_core::{canvas_to_ndc, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to the canvas, in NDC.
#[inline]
fn pointer_canvas_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    canvas_to_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Feed window-level pointer moves into the shared tracker; the frame loop
/// turns them into velocity samples.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, tracker: Rc<RefCell<PointerTracker>>) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = pointer_canvas_ndc(&ev, &canvas);
        tracker.borrow_mut().set_position(ndc);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
