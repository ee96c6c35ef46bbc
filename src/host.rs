use globe_core::{GlobeError, HostEnvironment, ResizeHandler, Subscription};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Browser host: navigator, viewport and window resize events.
///
/// Every probe degrades to `None` when the API is missing (sandboxed
/// iframes, workers), which the detector reads as full capability.
pub struct WebHost {
    window: Option<web::Window>,
}

impl WebHost {
    pub fn new() -> Self {
        Self {
            window: web::window(),
        }
    }
}

impl Default for WebHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnvironment for WebHost {
    fn user_agent(&self) -> Option<String> {
        self.window.as_ref()?.navigator().user_agent().ok()
    }

    fn touch_capable(&self) -> Option<bool> {
        let w = self.window.as_ref()?;
        let points = w.navigator().max_touch_points();
        let ontouchstart = js_sys::Reflect::has(w, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        Some(points > 0 || ontouchstart)
    }

    fn viewport_width(&self) -> Option<f64> {
        self.window.as_ref()?.inner_width().ok()?.as_f64()
    }

    fn on_resize(&self, mut handler: ResizeHandler) -> globe_core::Result<Subscription> {
        let window = self
            .window
            .clone()
            .ok_or_else(|| GlobeError::host("no window"))?;
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| GlobeError::host(format!("{:?}", e)))?;
        Ok(Subscription::new(move || {
            _ = window.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            log::debug!("[host] resize listener removed");
        }))
    }
}
