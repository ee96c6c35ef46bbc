#![cfg(target_arch = "wasm32")]
use globe_core::{
    Capability, CapabilityCell, CapabilityDetector, Catalog, DetectorHandle, GlobeConfig,
    GlobeSurface, OrbitSettings, Subscription,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fallback;
mod frame;
mod host;
mod input;
mod mount;
mod project;
mod render;

/// Everything a mounted globe holds on to. Dropping it tears the globe down;
/// each registration is its own guard, released in field order.
struct MountedGlobe {
    _frame_loop: Subscription,
    _pointer: Vec<Subscription>,
    _capability_log: Subscription,
    _detector: DetectorHandle,
    _frame_ctx: Rc<RefCell<frame::FrameContext>>,
}

thread_local! {
    static MOUNTED: mount::MountSlot<MountedGlobe> = const { mount::MountSlot::new() };
}

fn selected_catalog() -> Catalog {
    if cfg!(feature = "reduced-catalog") {
        Catalog::reduced()
    } else {
        Catalog::full()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    match init() {
        Ok(globe) => MOUNTED.with(|m| m.install(globe)),
        Err(e) => {
            // The page keeps rendering; only the globe is replaced.
            log::error!("init error: {:?}", e);
            match canvas_by_id(constants::CANVAS_ID) {
                Ok(canvas) => fallback::show(&canvas),
                Err(_) => fallback::show_without_canvas(),
            }
        }
    }
    Ok(())
}

/// Stop the frame loop and drop every listener the globe registered.
#[wasm_bindgen]
pub fn unmount() {
    if MOUNTED.with(|m| m.release()) {
        log::info!("globe-web unmounted");
    }
}

fn teardown_after_fault() {
    if MOUNTED.with(|m| m.release()) {
        log::warn!("globe-web torn down after render fault");
    }
}

fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn init() -> anyhow::Result<MountedGlobe> {
    let canvas = canvas_by_id(constants::CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);

    // Acquired first; an early return below releases the resize listener.
    let detector = CapabilityDetector::attach(Rc::new(host::WebHost::new()), CapabilityCell::default());
    let capability_log = detector.cell().subscribe(|c: Capability| {
        log::info!(
            "[globe] auto-rotation {}",
            if c.is_constrained() { "paused" } else { "resumed" }
        );
    });

    let config = GlobeConfig::default();
    let renderer = render::CanvasRenderer::new(&canvas, &config)?;
    let mut surface = GlobeSurface::new(config, OrbitSettings::default(), detector.cell().clone());
    let catalog = selected_catalog();
    surface.mount(&catalog);
    log::info!(
        "[globe] {} labels, capability {:?}",
        catalog.len(),
        detector.capability()
    );

    let pointer = events::wire_orbit_input(&canvas, surface.orbit())?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        surface,
        renderer,
        canvas: canvas.clone(),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx.clone(), teardown_after_fault);

    Ok(MountedGlobe {
        _frame_loop: frame_loop,
        _pointer: pointer,
        _capability_log: capability_log,
        _detector: detector,
        _frame_ctx: frame_ctx,
    })
}
