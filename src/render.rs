use crate::constants::{LABEL_FONT_FAMILY, LABEL_MIN_FONT_PX, WIREFRAME_LINE_WIDTH_CSS};
use crate::dom;
use crate::project::{back_to_front, pixels_per_unit, project_point, rgba_css};
use globe_core::{GlobeConfig, GlobeSurface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws the globe surface onto a 2D canvas context.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    background: String,
    wire_style: String,
    label_style: String,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement, config: &GlobeConfig) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            background: rgba_css(config.background_color, 1.0),
            wire_style: rgba_css(config.wireframe_color, config.wireframe_opacity),
            label_style: rgba_css(config.label_color, 1.0),
        })
    }

    pub fn render(&self, surface: &GlobeSurface) -> anyhow::Result<()> {
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        let ctx = &self.ctx;

        ctx.set_fill_style_str(&self.background);
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

        let Some(node) = surface.node() else {
            return Ok(());
        };
        let camera = surface.camera();
        let view_proj = camera.view_projection();
        let model = node.transform();
        let mvp = view_proj * model;

        // Wireframe
        ctx.set_stroke_style_str(&self.wire_style);
        ctx.set_line_width(WIREFRAME_LINE_WIDTH_CSS * dom::device_pixel_ratio());
        ctx.begin_path();
        for (a, b) in node.sphere().segments() {
            let (Some(pa), Some(pb)) = (
                project_point(mvp, a, width, height),
                project_point(mvp, b, width, height),
            ) else {
                continue;
            };
            ctx.move_to(pa.screen.x as f64, pa.screen.y as f64);
            ctx.line_to(pb.screen.x as f64, pb.screen.y as f64);
        }
        ctx.stroke();

        // Labels, far ones first so near ones paint over them
        let projected: Vec<_> = node
            .world_labels()
            .filter_map(|(text, p)| project_point(view_proj, p, width, height).map(|pp| (text, pp)))
            .collect();
        let depths: Vec<f32> = projected.iter().map(|(_, p)| p.depth).collect();

        ctx.set_fill_style_str(&self.label_style);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let font_world = surface.config().label_font_size;
        for i in back_to_front(&depths) {
            let (text, p) = &projected[i];
            let px = (font_world * pixels_per_unit(camera.fovy_radians, height, p.depth))
                .max(LABEL_MIN_FONT_PX);
            ctx.set_font(&format!("{:.1}px {}", px, LABEL_FONT_FAMILY));
            ctx.fill_text(text, p.screen.x as f64, p.screen.y as f64)
                .map_err(|e| anyhow::anyhow!("fill_text: {:?}", e))?;
        }
        Ok(())
    }
}
