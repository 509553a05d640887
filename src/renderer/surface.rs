//! Drawing surface contract
//!
//! Origin is the top-left corner and y grows downward.

use glam::Vec2;

/// The primitive operations a frame is drawn with
pub trait RenderSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase the whole surface
    fn clear(&mut self);
    /// Color used by every following fill
    fn set_fill_style(&mut self, color: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
    fn draw_line(&mut self, from: Vec2, to: Vec2);

    // Path building; `fill` closes and fills the current path
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn quadratic_curve_to(&mut self, control: Vec2, to: Vec2);
    fn fill(&mut self);
}
