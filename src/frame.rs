use crate::constants::MAX_FRAME_DELTA_SEC;
use crate::dom;
use crate::fallback;
use crate::render::CanvasRenderer;
use globe_core::{FrameOutcome, GlobeSurface, Subscription};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub surface: GlobeSurface,
    pub renderer: CanvasRenderer,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) -> anyhow::Result<()> {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DELTA_SEC);
        self.last_instant = now;

        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.surface.set_aspect(w as f32 / h as f32);

        if let FrameOutcome::Detached = self.surface.frame(dt_sec) {
            log::trace!("[frame] surface not mounted");
        }
        self.renderer.render(&self.surface)
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until the guard drops.
///
/// A failing frame stops the loop, swaps the canvas for the placeholder and
/// runs `on_fault` once from a zero-delay timeout, outside the tick.
pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    on_fault: impl FnOnce() + 'static,
) -> Subscription {
    let mut on_fault: Option<Box<dyn FnOnce()>> = Some(Box::new(on_fault));
    let running = Rc::new(Cell::new(true));
    let handle = Rc::new(Cell::new(None::<i32>));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.set(None);
        if !running_tick.get() {
            return;
        }
        let result = match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(),
            Err(_) => Ok(()),
        };
        if let Err(e) = result {
            log::error!("render error: {:?}", e);
            running_tick.set(false);
            let canvas = frame_ctx.borrow().canvas.clone();
            fallback::show(&canvas);
            if let Some(f) = on_fault.take() {
                defer(f);
            }
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            handle_tick.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }) as Box<dyn FnMut()>));

    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }

    Subscription::new(move || {
        running.set(false);
        if let (Some(w), Some(id)) = (web::window(), handle.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference.
        tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    })
}

/// Run `f` on a fresh task once the current callback has returned.
fn defer(f: Box<dyn FnOnce()>) {
    let Some(w) = web::window() else {
        log::warn!("[frame] no window, teardown skipped");
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), 0)
    {
        log::error!("[frame] could not schedule teardown: {:?}", e);
    }
}
