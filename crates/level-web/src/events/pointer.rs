use crate::frame::LevelApp;
use crate::input;
use level_core::InputEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub app: Rc<RefCell<LevelApp>>,
    pub rotor: web::HtmlElement,
}

/// Presses only count on the dial itself; moves and releases are tracked on
/// the window so a drag survives leaving the dial.
pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let rotor_for_listener = w.rotor.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (dx, dy) = input::pointer_offset(&ev, &w.rotor);
        w.app.borrow_mut().handle(InputEvent::PointerDown { dx, dy });
        log::debug!("[rotor] press at ({:.1}, {:.1})", dx, dy);
        _ = w.rotor.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = rotor_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut app = w.app.borrow_mut();
        if !app.state.rotor().is_dragging() {
            return;
        }
        let (dx, dy) = input::pointer_offset(&ev, &w.rotor);
        app.handle(InputEvent::PointerMove { dx, dy });
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (dx, dy) = input::pointer_offset(&ev, &w.rotor);
        w.app.borrow_mut().handle(InputEvent::PointerUp { dx, dy });
        if w.rotor.has_pointer_capture(ev.pointer_id()) {
            _ = w.rotor.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.app.borrow_mut().handle(InputEvent::PointerCancel);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
