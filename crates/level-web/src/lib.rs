#![cfg(target_arch = "wasm32")]
use level_core::{LevelTargets, SimulatorParams, SimulatorState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::*;
use render::DomTarget;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("level-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn simulator_params(container: &web::HtmlElement) -> SimulatorParams {
    let mut params = SimulatorParams::default();
    let attr = container.get_attribute(THROTTLE_ATTR);
    match input::parse_throttle_ms(attr.as_deref()) {
        Some(ms) => params.throttle_interval_ms = ms,
        None if attr.is_some() => {
            log::warn!("[config] ignoring invalid {}={:?}", THROTTLE_ATTR, attr);
        }
        None => {}
    }
    params
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = dom::query_html(&document, CONTAINER_SELECTOR)?;
    let rotor = dom::query_html(&document, ROTOR_SELECTOR)?;
    let targets = LevelTargets {
        vertical: DomTarget::new(dom::query_html(&document, BUBBLE_VERTICAL_SELECTOR)?),
        horizontal: DomTarget::new(dom::query_html(&document, BUBBLE_HORIZONTAL_SELECTOR)?),
        rotating: DomTarget::new(dom::query_html(&document, BUBBLE_ROTATING_SELECTOR)?),
        rotor: DomTarget::new(rotor.clone()),
    };

    // Keep touch drags on the dial from scrolling the page
    _ = rotor.style().set_property("touch-action", "none");

    let state = SimulatorState::new(simulator_params(&container))?;
    log::info!(
        "[config] sensor throttle {:.1} ms",
        state.params().throttle_interval_ms
    );

    let app = Rc::new(RefCell::new(frame::LevelApp {
        state,
        targets,
        container,
        document,
    }));
    // the resize event is always accepted, so this also draws the first frame
    app.borrow_mut().resize();

    let app_resize = app.clone();
    dom::add_window_listener("resize", move || app_resize.borrow_mut().resize());
    let app_orient = app.clone();
    dom::add_window_listener("orientationchange", move || app_orient.borrow_mut().resize());

    events::wire_input_handlers(events::InputWiring {
        app: app.clone(),
        rotor,
    });
    events::wire_orientation(app.clone());
    frame::start_demo_loop(app);

    Ok(())
}
