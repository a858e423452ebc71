//! Simple leaf elements.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::context::Context;
use crate::element::{CursorTrackable, DropTarget, Drawable, Limits};
use crate::impl_element;
use cgmath::Vector2;

/// Empty space of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    pub size: Vector2<f64>,
}

impl Spacer {
    pub fn new(size: Vector2<f64>) -> Spacer {
        Spacer { size }
    }
}

impl Drawable for Spacer {
    fn limits(&self, _: &Context) -> Limits {
        Limits::fixed(self.size)
    }
}

impl CursorTrackable for Spacer {}
impl DropTarget for Spacer {}

impl_element! {
    impl for Spacer;
}

/// A themed panel background with a minimum size; the usual body of a tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub min_size: Vector2<f64>,
}

impl Panel {
    pub fn new(min_size: Vector2<f64>) -> Panel {
        Panel { min_size }
    }
}

impl Drawable for Panel {
    fn limits(&self, _: &Context) -> Limits {
        Limits {
            min: self.min_size,
            ..Limits::default()
        }
    }

    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        ctx.theme.draw_panel(canvas, ctx.bounds);
    }
}

impl CursorTrackable for Panel {}
impl DropTarget for Panel {}

impl_element! {
    impl for Panel;
}

/// A filled rectangle of a fixed height, e.g. a row in a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: Color,
    pub height: f64,
}

impl Swatch {
    pub fn new(color: Color, height: f64) -> Swatch {
        Swatch { color, height }
    }
}

impl Drawable for Swatch {
    fn limits(&self, _: &Context) -> Limits {
        Limits {
            min: Vector2::new(0., self.height),
            max: Vector2::new(f64::INFINITY, self.height),
        }
    }

    fn draw(&mut self, ctx: &Context, canvas: &mut dyn Canvas) {
        canvas.fill_style(self.color);
        canvas.add_rect(ctx.bounds);
        canvas.fill();
    }
}

impl CursorTrackable for Swatch {}
impl DropTarget for Swatch {}

impl_element! {
    impl for Swatch;
}
