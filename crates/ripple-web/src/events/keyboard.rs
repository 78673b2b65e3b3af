use crate::frame::SharedFrame;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `d` toggles the renderer's debug overlay.
pub fn wire_debug_toggle(frame: SharedFrame) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        if !matches!(ev.key().as_str(), "d" | "D") {
            return;
        }
        if let Some(ctx) = frame.borrow_mut().as_mut() {
            let on = ctx.driver.effect_mut().toggle_debug();
            log::info!("[keys] debug {}", if on { "on" } else { "off" });
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
