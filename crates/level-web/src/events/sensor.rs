use crate::constants::PERMISSION_BUTTON_ID;
use crate::dom;
use crate::frame::LevelApp;
use level_core::{InputEvent, OrientationSample};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

static LISTENING: AtomicBool = AtomicBool::new(false);
static AWAITING: AtomicBool = AtomicBool::new(false);

/// How the browser exposes orientation events.
enum SensorSupport {
    /// iOS 13+: `DeviceOrientationEvent.requestPermission()` must resolve to
    /// `"granted"` before events flow.
    NeedsPermission {
        ctor: JsValue,
        request: js_sys::Function,
    },
    Available,
    Unsupported,
}

fn sensor_support(window: &web::Window) -> SensorSupport {
    let window: &JsValue = window.as_ref();
    let ctor = match js_sys::Reflect::get(window, &JsValue::from_str("DeviceOrientationEvent")) {
        Ok(c) if !c.is_undefined() && !c.is_null() => c,
        _ => return SensorSupport::Unsupported,
    };
    match js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    {
        Some(request) => SensorSupport::NeedsPermission { ctor, request },
        None => SensorSupport::Available,
    }
}

/// Start listening for orientation events, asking for permission where the
/// platform requires it. Without a sensor the demo sweep keeps running.
pub fn wire_orientation(app: Rc<RefCell<LevelApp>>) {
    let Some(window) = web::window() else {
        return;
    };
    match sensor_support(&window) {
        SensorSupport::Available => attach_listener(app),
        SensorSupport::NeedsPermission { .. } => {
            // A request outside a user gesture is rejected on iOS; the
            // button retries from a click.
            request_permission(app.clone());
            if let Some(document) = dom::window_document() {
                dom::add_click_listener(&document, PERMISSION_BUTTON_ID, move || {
                    request_permission(app.clone());
                });
            }
        }
        SensorSupport::Unsupported => {
            log::warn!("[sensor] device orientation not supported; running demo sweep");
        }
    }
}

fn request_permission(app: Rc<RefCell<LevelApp>>) {
    if LISTENING.load(Ordering::SeqCst) || AWAITING.swap(true, Ordering::SeqCst) {
        return;
    }
    spawn_local(async move {
        match ask_permission().await {
            Ok(true) => attach_listener(app),
            Ok(false) => log::error!("[sensor] permission for motion sensors was denied"),
            Err(e) => log::warn!("[sensor] permission request failed: {:?}", e),
        }
        AWAITING.store(false, Ordering::SeqCst);
    });
}

async fn ask_permission() -> anyhow::Result<bool> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let SensorSupport::NeedsPermission { ctor, request } = sensor_support(&window) else {
        return Ok(true);
    };
    let promise = request
        .call0(&ctor)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let state = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(state.as_string().as_deref() == Some("granted"))
}

fn attach_listener(app: Rc<RefCell<LevelApp>>) {
    if LISTENING.swap(true, Ordering::SeqCst) {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            let sample = OrientationSample::from_optional(ev.alpha(), ev.beta(), ev.gamma());
            app.borrow_mut().handle(InputEvent::SensorSample {
                sample,
                timestamp_ms: ev.time_stamp(),
            });
        }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    closure.forget();
    log::info!("[sensor] listening for deviceorientation");
}
