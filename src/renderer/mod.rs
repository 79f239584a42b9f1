//! Rendering ports
//!
//! The scene is drawn through `DrawSurface` and the HUD through `HudSink`, so
//! the game can be drawn into a browser canvas or a recording test double.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, DomHud};
pub use scene::{bounce_offset, draw_scene, hud_message, update_hud};

use glam::Vec2;

/// RGBA color; channels 0-255, alpha 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Minimal 2D drawing surface (pixel coordinates, origin top-left)
pub trait DrawSurface {
    /// Clear the whole surface
    fn clear(&mut self);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Color, line_width: f32);
    /// Draw text centered on `center`
    fn fill_text(&mut self, text: &str, center: Vec2, font_px: f32, color: Color);
}

/// Text slots next to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudSlot {
    Score,
    Time,
    Message,
}

impl HudSlot {
    /// DOM element id
    pub fn element_id(&self) -> &'static str {
        match self {
            HudSlot::Score => "score",
            HudSlot::Time => "time",
            HudSlot::Message => "message",
        }
    }
}

/// Sink for HUD text
pub trait HudSink {
    fn set_text(&mut self, slot: HudSlot, text: &str);
}
