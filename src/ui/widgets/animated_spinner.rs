// SPDX-License-Identifier: MPL-2.0
//! Indeterminate analysis spinner drawn on a canvas.
//!
//! A faint full ring with a brand-violet three-quarter arc sweeping over it.
//! The caller advances `rotation` from a tick subscription; the widget itself
//! holds no clock.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Portion of the ring covered by the moving arc.
const SWEEP: f32 = 1.5 * PI;

/// Line segments used to approximate the arc.
const ARC_SEGMENTS: u32 = 48;

/// Spinner shown in the results panel while a scan is being analyzed.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a brand-colored spinner at the given rotation angle.
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color: palette::PRIMARY_500,
            size: sizing::SPINNER_DIAMETER,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn stroke_width(&self) -> f32 {
        self.size / 12.0
    }
}

fn arc_point(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let width = self.stroke_width();
                let radius = frame.width().min(frame.height()) / 2.0 - width;

                // Faint full ring behind the moving arc
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(width).with_color(Color {
                        a: 0.2,
                        ..self.color
                    }),
                );

                // Sweeping arc, -90° offset so rotation zero starts at the top
                let start_angle = self.rotation - PI / 2.0;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(arc_point(center, radius, start_angle));
                for i in 1..=ARC_SEGMENTS {
                    let angle = start_angle + SWEEP * (i as f32 / ARC_SEGMENTS as f32);
                    arc_path.line_to(arc_point(center, radius, angle));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_brand_color_and_diameter_token() {
        let spinner = AnimatedSpinner::new(0.0);
        assert_eq!(spinner.color, palette::PRIMARY_500);
        assert_eq!(spinner.size, sizing::SPINNER_DIAMETER);
    }

    #[test]
    fn stroke_width_scales_with_diameter() {
        let spinner = AnimatedSpinner::new(1.2);
        assert_eq!(spinner.stroke_width(), sizing::SPINNER_DIAMETER / 12.0);
    }
}
