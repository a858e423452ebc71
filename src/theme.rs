//! Themes.
//!
//! A theme is plain data plus a few drawing hooks. It reaches elements through the
//! [`Context`](crate::Context), so views don’t need to carry it in their properties.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Error;
use crate::rect::{Circle, Rect};
use cgmath::Point2;

/// Drawing parameters shared by all elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Highlight color for drop indicators and similar feedback.
    pub indicator_hilite_color: Color,

    // panels
    pub panel_corner_radius: f64,
    pub panel_color: Color,
    /// Shadow rectangle relative to the panel bounds, as (left, top, right, bottom) deltas.
    pub panel_shadow_offset: Rect,

    // sliders
    /// Fraction of the slider’s thickness.
    pub slider_knob_radius: f64,
    /// Fraction of the slider’s thickness.
    pub slider_slot_size: f64,
    pub slider_knob_fill_color: Color,
    pub slider_knob_outline_color: Color,

    // fonts
    pub icons: String,
    pub sans: String,
    pub sans_bold: String,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            indicator_hilite_color: Color::rgba8(0, 190, 255, 255),
            panel_corner_radius: 3.,
            panel_color: Color::rgba8(28, 30, 34, 192),
            panel_shadow_offset: Rect::from_ltrb(-10., -10., 20., 30.),
            slider_knob_radius: 0.25,
            slider_slot_size: 0.2,
            slider_knob_fill_color: Color::rgba8(40, 43, 48, 255),
            slider_knob_outline_color: Color::rgba8(0, 0, 0, 92),
            icons: "icons".into(),
            sans: "sans".into(),
            sans_bold: "sans-bold".into(),
        }
    }
}

impl Theme {
    /// Returns a copy of this theme with string overrides applied.
    ///
    /// Colors are given as `#rrggbb` or `#rrggbbaa`; everything else as numbers or names.
    pub fn with_overrides<I, K, V>(&self, overrides: I) -> Result<Theme, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut theme = self.clone();
        for (key, value) in overrides {
            theme.set(key.as_ref(), value.as_ref())?;
        }
        Ok(theme)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let invalid = || Error::InvalidThemeValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let color = || value.parse::<Color>().map_err(|_| invalid());
        let number = || value.trim().parse::<f64>().map_err(|_| invalid());

        match key {
            "indicator_hilite_color" => self.indicator_hilite_color = color()?,
            "panel_corner_radius" => self.panel_corner_radius = number()?,
            "panel_color" => self.panel_color = color()?,
            "slider_knob_radius" => self.slider_knob_radius = number()?,
            "slider_slot_size" => self.slider_slot_size = number()?,
            "slider_knob_fill_color" => self.slider_knob_fill_color = color()?,
            "slider_knob_outline_color" => self.slider_knob_outline_color = color()?,
            "icons" => self.icons = value.to_string(),
            "sans" => self.sans = value.to_string(),
            "sans_bold" => self.sans_bold = value.to_string(),
            _ => return Err(Error::UnknownThemeKey(key.to_string())),
        }
        Ok(())
    }

    /// Draws a panel background with its drop shadow.
    pub fn draw_panel(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        let offset = self.panel_shadow_offset;
        let shadow = Rect::from_ltrb(
            bounds.left() + offset.left(),
            bounds.top() + offset.top(),
            bounds.right() + offset.right(),
            bounds.bottom() + offset.bottom(),
        );
        canvas.fill_style(Color::new(0., 0., 0., 0.125));
        canvas.add_round_rect(shadow, self.panel_corner_radius * 2.);
        canvas.fill();

        canvas.fill_style(self.panel_color);
        canvas.add_round_rect(bounds, self.panel_corner_radius);
        canvas.fill();
    }

    /// Draws a slider slot and its knob; `pos` is in `0..=1`.
    pub fn draw_slider(&self, canvas: &mut dyn Canvas, pos: f64, bounds: Rect) {
        let horizontal = bounds.width() > bounds.height();
        let thickness = if horizontal { bounds.height() } else { bounds.width() };
        let slot = thickness * self.slider_slot_size;
        let slot_bounds = if horizontal {
            let y = bounds.center().y - slot / 2.;
            Rect::from_ltrb(bounds.left(), y, bounds.right(), y + slot)
        } else {
            let x = bounds.center().x - slot / 2.;
            Rect::from_ltrb(x, bounds.top(), x + slot, bounds.bottom())
        };

        canvas.fill_style(self.slider_knob_outline_color);
        canvas.add_round_rect(slot_bounds, slot / 2.);
        canvas.fill();

        self.draw_slider_knob(canvas, pos, bounds);
    }

    pub fn draw_slider_knob(&self, canvas: &mut dyn Canvas, pos: f64, bounds: Rect) {
        let knob = self.slider_knob_position(pos, bounds);

        canvas.fill_style(self.slider_knob_fill_color);
        canvas.add_circle(knob);
        canvas.fill();

        canvas.stroke_style(self.slider_knob_outline_color);
        canvas.line_width(1.);
        canvas.add_circle(knob);
        canvas.stroke();
    }

    /// Where the knob sits for a slider value `pos` in `0..=1`.
    pub fn slider_knob_position(&self, pos: f64, bounds: Rect) -> Circle {
        let pos = pos.max(0.).min(1.);
        if bounds.width() > bounds.height() {
            let radius = bounds.height() * self.slider_knob_radius;
            let x = bounds.left() + radius + pos * (bounds.width() - 2. * radius);
            Circle::new(Point2::new(x, bounds.center().y), radius)
        } else {
            // vertical sliders grow upward
            let radius = bounds.width() * self.slider_knob_radius;
            let y = bounds.bottom() - radius - pos * (bounds.height() - 2. * radius);
            Circle::new(Point2::new(bounds.center().x, y), radius)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};

    #[test]
    fn overrides_apply_in_order() {
        let theme = Theme::default()
            .with_overrides(vec![
                ("indicator_hilite_color", "#ff000080"),
                ("panel_corner_radius", "6"),
                ("sans", "Inter"),
            ])
            .unwrap();
        assert_eq!(theme.indicator_hilite_color, Color::rgba8(255, 0, 0, 128));
        assert_eq!(theme.panel_corner_radius, 6.);
        assert_eq!(theme.sans, "Inter");
        assert_eq!(theme.sans_bold, Theme::default().sans_bold);
    }

    #[test]
    fn overrides_reject_bad_input() {
        let theme = Theme::default();
        assert_eq!(
            theme.with_overrides(vec![("no_such_key", "1")]),
            Err(Error::UnknownThemeKey("no_such_key".into()))
        );
        assert_eq!(
            theme.with_overrides(vec![("panel_color", "red")]),
            Err(Error::InvalidThemeValue {
                key: "panel_color".into(),
                value: "red".into(),
            })
        );
    }

    #[test]
    fn knob_tracks_value() {
        let theme = Theme::default();
        let bounds = Rect::from_ltrb(0., 0., 100., 20.);
        let start = theme.slider_knob_position(0., bounds);
        let end = theme.slider_knob_position(1., bounds);
        assert_eq!(start.radius, 5.);
        assert_eq!(start.center, Point2::new(5., 10.));
        assert_eq!(end.center, Point2::new(95., 10.));
        assert_eq!(theme.slider_knob_position(7., bounds), end, "value is clamped");
    }

    #[test]
    fn panel_draws_shadow_then_body() {
        let theme = Theme::default();
        let mut list = DisplayList::new();
        let bounds = Rect::from_ltrb(0., 0., 50., 50.);
        theme.draw_panel(&mut list, bounds);
        assert_eq!(
            list.commands()[list.commands().len() - 2],
            DrawCommand::RoundRect(bounds, theme.panel_corner_radius)
        );
    }
}
