//! Browser backends: 2D canvas surface and DOM text slots

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use super::{Color, DrawSurface, HudSink, HudSlot};

const FONT_FAMILY: &str = "'Comic Sans MS'";

/// `DrawSurface` over a canvas 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        Ok(Self { canvas, ctx })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_text(&mut self, text: &str, center: Vec2, font_px: f32, color: Color) {
        self.ctx.set_font(&format!("{}px {}", font_px, FONT_FAMILY));
        self.ctx.set_fill_style_str(&color.to_css());
        if let Err(e) = self.ctx.fill_text(text, center.x as f64, center.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// `HudSink` writing into the `score`/`time`/`message` elements.
///
/// Missing elements are skipped; writes are skipped when the text is unchanged.
pub struct DomHud {
    score: Option<Element>,
    time: Option<Element>,
    message: Option<Element>,
}

impl DomHud {
    pub fn new(document: &Document) -> Self {
        let lookup = |slot: HudSlot| {
            let el = document.get_element_by_id(slot.element_id());
            if el.is_none() {
                log::warn!("HUD element #{} not found", slot.element_id());
            }
            el
        };
        Self {
            score: lookup(HudSlot::Score),
            time: lookup(HudSlot::Time),
            message: lookup(HudSlot::Message),
        }
    }

    fn element(&self, slot: HudSlot) -> Option<&Element> {
        match slot {
            HudSlot::Score => self.score.as_ref(),
            HudSlot::Time => self.time.as_ref(),
            HudSlot::Message => self.message.as_ref(),
        }
    }
}

impl HudSink for DomHud {
    fn set_text(&mut self, slot: HudSlot, text: &str) {
        if let Some(el) = self.element(slot) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }
}
