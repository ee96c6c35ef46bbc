use glam::Vec2;
use web_sys as web;

/// Single-pointer drag tracking for the orbit controller.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    /// Start tracking `pointer_id`; ignored while another pointer drags.
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) -> bool {
        if self.active && self.pointer_id != pointer_id {
            return false;
        }
        *self = Self {
            active: true,
            pointer_id,
            last: pos,
        };
        true
    }

    /// Movement since the previous event for the tracked pointer.
    pub fn move_to(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if !self.active || self.pointer_id != pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if self.pointer_id == pointer_id {
            self.active = false;
        }
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn canvas_css_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}
