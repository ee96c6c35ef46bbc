use crate::dom;
use crate::input::{self, DragState};
use globe_core::{OrbitController, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitController>>,
    pub drag: Rc<RefCell<DragState>>,
}

/// Pointer drag → orbit rotation. Zoom and pan have no handlers.
pub fn wire_orbit_input(
    canvas: &web::HtmlCanvasElement,
    orbit: Rc<RefCell<OrbitController>>,
) -> anyhow::Result<Vec<Subscription>> {
    // Touch drags steer the globe instead of scrolling the page.
    _ = canvas.style().set_property("touch-action", "none");
    let w = OrbitWiring {
        canvas: canvas.clone(),
        orbit,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    Ok(vec![
        wire_pointerdown(&w)?,
        wire_pointermove(&w)?,
        wire_pointerup(&w, "pointerup")?,
        wire_pointerup(&w, "pointercancel")?,
    ])
}

fn wire_pointerdown(w: &OrbitWiring) -> anyhow::Result<Subscription> {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen_pointer(&target, "pointerdown", move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        if w.drag.borrow_mut().begin(ev.pointer_id(), pos) {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }
    })
}

fn wire_pointermove(w: &OrbitWiring) -> anyhow::Result<Subscription> {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen_pointer(&target, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let Some(delta) = w.drag.borrow_mut().move_to(ev.pointer_id(), pos) else {
            return;
        };
        ev.prevent_default();
        let height = input::canvas_css_height(&w.canvas);
        if let Ok(mut orbit) = w.orbit.try_borrow_mut() {
            orbit.drag(delta.x, delta.y, height);
        }
    })
}

fn wire_pointerup(w: &OrbitWiring, event: &'static str) -> anyhow::Result<Subscription> {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen_pointer(&target, event, move |ev: web::PointerEvent| {
        w.drag.borrow_mut().end(ev.pointer_id());
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    })
}
