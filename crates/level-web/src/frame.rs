use crate::dom;
use crate::overlay;
use crate::render::DomTarget;
use level_core::{AngleReadout, InputEvent, LevelTargets, SimulatorState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct LevelApp {
    pub state: SimulatorState,
    pub targets: LevelTargets<DomTarget>,
    pub container: web::HtmlElement,
    pub document: web::Document,
}

impl LevelApp {
    /// Feed one event and redraw everything if it changed visible state.
    pub fn handle(&mut self, event: InputEvent) {
        if self.state.apply(event) {
            self.redraw();
        }
    }

    pub fn resize(&mut self) {
        let vp = dom::container_viewport(&self.container);
        self.handle(InputEvent::ViewportResize {
            width: vp.width,
            height: vp.height,
        });
    }

    pub fn redraw(&mut self) {
        let screen = dom::screen_orientation();
        let layout = self.state.layout(screen);
        self.targets.apply(&layout, self.state.viewport());

        match self.state.last_sample() {
            Some(sample) => {
                overlay::update_readout(&self.document, &AngleReadout::from_sample(&sample));
                overlay::sync_rotate_hint(&self.document, screen.is_portrait());
            }
            None => overlay::sync_rotate_hint(&self.document, false),
        }
    }
}

/// Sweep the bubbles on every animation frame until the first real sensor
/// reading arrives, then let the loop lapse.
pub fn start_demo_loop(app: Rc<RefCell<LevelApp>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut origin_ms: Option<f64> = None;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let start = *origin_ms.get_or_insert(now_ms);
        {
            let mut app = app.borrow_mut();
            if app.state.has_sensor_data() {
                log::info!("[demo] sensor active; stopping demo sweep");
                return;
            }
            app.handle(InputEvent::DemoTick {
                elapsed_sec: (now_ms - start) / 1000.0,
            });
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
