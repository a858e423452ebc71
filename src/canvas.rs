//! Vector drawing.

use crate::color::Color;
use crate::rect::{Circle, Rect};
use cgmath::Point2;

/// The drawing surface elements render to.
///
/// Paths are built with `move_to`/`line_to`/`add_*` and consumed by `stroke` or `fill`.
pub trait Canvas {
    fn stroke_style(&mut self, color: Color);
    fn fill_style(&mut self, color: Color);
    fn line_width(&mut self, width: f64);
    fn move_to(&mut self, point: Point2<f64>);
    fn line_to(&mut self, point: Point2<f64>);
    fn add_rect(&mut self, rect: Rect);
    fn add_round_rect(&mut self, rect: Rect, radius: f64);
    fn add_circle(&mut self, circle: Circle);
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// A recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    StrokeStyle(Color),
    FillStyle(Color),
    LineWidth(f64),
    MoveTo(Point2<f64>),
    LineTo(Point2<f64>),
    Rect(Rect),
    RoundRect(Rect, f64),
    Circle(Circle),
    Stroke,
    Fill,
}

/// A canvas that records every call in order, to be replayed by a backend.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> DisplayList {
        DisplayList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Removes and returns all recorded commands.
    pub fn drain(&mut self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.commands.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays the recorded commands onto another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for command in &self.commands {
            match *command {
                DrawCommand::StrokeStyle(c) => canvas.stroke_style(c),
                DrawCommand::FillStyle(c) => canvas.fill_style(c),
                DrawCommand::LineWidth(w) => canvas.line_width(w),
                DrawCommand::MoveTo(p) => canvas.move_to(p),
                DrawCommand::LineTo(p) => canvas.line_to(p),
                DrawCommand::Rect(r) => canvas.add_rect(r),
                DrawCommand::RoundRect(r, radius) => canvas.add_round_rect(r, radius),
                DrawCommand::Circle(c) => canvas.add_circle(c),
                DrawCommand::Stroke => canvas.stroke(),
                DrawCommand::Fill => canvas.fill(),
            }
        }
    }
}

impl Canvas for DisplayList {
    fn stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }
    fn fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillStyle(color));
    }
    fn line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
    fn move_to(&mut self, point: Point2<f64>) {
        self.commands.push(DrawCommand::MoveTo(point));
    }
    fn line_to(&mut self, point: Point2<f64>) {
        self.commands.push(DrawCommand::LineTo(point));
    }
    fn add_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }
    fn add_round_rect(&mut self, rect: Rect, radius: f64) {
        self.commands.push(DrawCommand::RoundRect(rect, radius));
    }
    fn add_circle(&mut self, circle: Circle) {
        self.commands.push(DrawCommand::Circle(circle));
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_preserves_order() {
        let mut list = DisplayList::new();
        list.line_width(2.);
        list.move_to(Point2::new(0., 5.));
        list.line_to(Point2::new(10., 5.));
        list.stroke();

        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(list.commands(), copy.commands());

        assert_eq!(list.drain().count(), 4);
        assert!(list.is_empty());
    }
}
