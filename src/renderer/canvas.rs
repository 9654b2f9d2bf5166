//! Drawing surface abstraction
//!
//! Game entities draw themselves onto a `Canvas` in screen pixels (origin at
//! the top-left corner, y pointing down). `VertexCanvas` tessellates the
//! primitives into triangles for the GPU pipeline.

use glam::Vec2;

use super::font;
use super::shapes;
use super::vertex::Vertex;
use crate::config::Colour;
use crate::consts::{CIRCLE_SEGMENTS, TEXT_SCALE};

/// 2D primitives the game needs from a renderer
pub trait Canvas {
    /// Start a new frame filled with `colour`
    fn clear(&mut self, colour: Colour);

    fn fill_circle(&mut self, center: Vec2, radius: f32, colour: Colour);

    /// Axis-aligned rectangle from its top-left corner
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, colour: Colour);

    /// Text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, colour: Colour, origin: Vec2);

    /// Size `text` would occupy when drawn
    fn text_extent(&self, text: &str) -> Vec2;

    /// Finish the frame and show it
    fn present(&mut self);
}

/// Collects one frame of primitives as colored triangles
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    background: Colour,
    pending: Vec<Vertex>,
    frame: Vec<Vertex>,
    text_scale: f32,
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self::new(TEXT_SCALE)
    }
}

impl VertexCanvas {
    pub fn new(text_scale: f32) -> Self {
        Self {
            background: Colour::BLACK,
            pending: Vec::new(),
            frame: Vec::new(),
            text_scale,
        }
    }

    /// Clear colour of the last frame
    pub fn background(&self) -> Colour {
        self.background
    }

    /// Triangles of the last presented frame
    pub fn frame(&self) -> &[Vertex] {
        &self.frame
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self, colour: Colour) {
        self.background = colour;
        self.pending.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, colour: Colour) {
        self.pending
            .extend(shapes::circle(center, radius, colour.to_rgba(), CIRCLE_SEGMENTS));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, colour: Colour) {
        self.pending.extend(shapes::rect(origin, size, colour.to_rgba()));
    }

    fn draw_text(&mut self, text: &str, colour: Colour, origin: Vec2) {
        let color = colour.to_rgba();
        for (cell_origin, cell_size) in font::layout(text, origin, self.text_scale) {
            self.pending.extend(shapes::rect(cell_origin, cell_size, color));
        }
    }

    fn text_extent(&self, text: &str) -> Vec2 {
        font::text_extent(text, self.text_scale)
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.frame, &mut self.pending);
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_moves_pending_to_frame() {
        let mut canvas = VertexCanvas::default();
        canvas.clear(Colour::BLACK);
        canvas.fill_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), Colour::WHITE);
        assert!(canvas.frame().is_empty());

        canvas.present();
        assert_eq!(canvas.frame().len(), 6);

        // Next frame starts empty
        canvas.clear(Colour::rgb(10, 20, 30));
        canvas.present();
        assert!(canvas.frame().is_empty());
        assert_eq!(canvas.background(), Colour::rgb(10, 20, 30));
    }

    #[test]
    fn test_circle_uses_configured_segments() {
        let mut canvas = VertexCanvas::default();
        canvas.fill_circle(Vec2::new(50.0, 50.0), 10.0, Colour::WHITE);
        canvas.present();
        assert_eq!(canvas.frame().len(), (CIRCLE_SEGMENTS * 3) as usize);
    }

    #[test]
    fn test_text_is_tessellated_into_cells() {
        let mut canvas = VertexCanvas::default();
        canvas.draw_text("1", Colour::WHITE, Vec2::ZERO);
        canvas.present();
        assert!(!canvas.frame().is_empty());
        assert_eq!(canvas.frame().len() % 6, 0);
        assert_eq!(canvas.text_extent("1"), Vec2::new(5.0, 7.0) * TEXT_SCALE);
    }
}
