//! Canvas drawing for plan and section views
//!
//! Paints a `foundation_core::drawing::Drawing` scaled uniformly to fit
//! the canvas bounds. Line widths and text sizes are in screen pixels;
//! geometry is in model millimetres.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use foundation_core::drawing::{Drawing, Layer, Point as ModelPoint, Rgb, Shape, TextAnchor};

use crate::Message;

/// Blank border around the drawing (px)
const MARGIN: f32 = 24.0;
/// Smallest radius a bar circle is drawn with (px)
const MIN_CIRCLE_PX: f32 = 1.5;

/// Convert a drawing colour to an Iced colour
pub fn layer_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_f32();
    Color::from_rgb(r, g, b)
}

/// Model-to-screen mapping for one frame
struct Transform {
    min: ModelPoint,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Transform {
    fn fit(drawing: &Drawing, size: Size) -> Option<Self> {
        let bounds = drawing.bounds();
        if bounds.is_empty() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return None;
        }

        let avail_w = (size.width - 2.0 * MARGIN).max(1.0);
        let avail_h = (size.height - 2.0 * MARGIN).max(1.0);
        let scale = (avail_w / bounds.width() as f32).min(avail_h / bounds.height() as f32);

        // Center the drawing in the available area
        let used_w = bounds.width() as f32 * scale;
        let used_h = bounds.height() as f32 * scale;
        Some(Self {
            min: bounds.min,
            scale,
            offset_x: MARGIN + (avail_w - used_w) / 2.0,
            offset_y: MARGIN + (avail_h - used_h) / 2.0,
        })
    }

    fn point(&self, p: ModelPoint) -> Point {
        Point::new(
            self.offset_x + (p.x - self.min.x) as f32 * self.scale,
            self.offset_y + (p.y - self.min.y) as f32 * self.scale,
        )
    }

    fn length(&self, value: f64) -> f32 {
        value as f32 * self.scale
    }
}

/// Canvas program for the selected view's drawing
pub struct DrawingCanvas {
    drawing: Drawing,
}

impl DrawingCanvas {
    pub fn new(drawing: Drawing) -> Self {
        Self { drawing }
    }

    fn draw_shape(&self, frame: &mut Frame, transform: &Transform, layer: Layer, shape: &Shape) {
        let stroke_color = layer_color(layer.stroke());
        let stroke = Stroke::default()
            .with_color(stroke_color)
            .with_width(layer.stroke_px());

        match shape {
            Shape::Line { from, to } => {
                let line = Path::line(transform.point(*from), transform.point(*to));
                frame.stroke(&line, stroke);
            }
            Shape::Rect { origin, width, height } => {
                let rect = Path::rectangle(
                    transform.point(*origin),
                    Size::new(transform.length(*width), transform.length(*height)),
                );
                if let Some(fill) = layer.fill() {
                    frame.fill(&rect, layer_color(fill));
                }
                frame.stroke(&rect, stroke);
            }
            Shape::Circle { center, radius } => {
                let circle = Path::circle(
                    transform.point(*center),
                    transform.length(*radius).max(MIN_CIRCLE_PX),
                );
                if let Some(fill) = layer.fill() {
                    frame.fill(&circle, layer_color(fill));
                }
                frame.stroke(&circle, stroke);
            }
            Shape::Text {
                at,
                content,
                size,
                anchor,
                vertical,
            } => {
                // Canvas text does not rotate; vertical labels sit left of their line instead
                let align_x = match (anchor, vertical) {
                    (_, true) | (TextAnchor::End, _) => iced::alignment::Horizontal::Right,
                    (TextAnchor::Middle, false) => iced::alignment::Horizontal::Center,
                    (TextAnchor::Start, false) => iced::alignment::Horizontal::Left,
                };
                let label = Text {
                    content: content.clone(),
                    position: transform.point(*at),
                    color: stroke_color,
                    size: iced::Pixels(*size),
                    align_x: align_x.into(),
                    align_y: if *vertical {
                        iced::alignment::Vertical::Center
                    } else {
                        iced::alignment::Vertical::Bottom
                    },
                    ..Text::default()
                };
                frame.fill_text(label);
            }
        }
    }
}

impl canvas::Program<Message> for DrawingCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // White paper so drawing colours read the same in both themes
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        if let Some(transform) = Transform::fit(&self.drawing, bounds.size()) {
            for element in &self.drawing.elements {
                self.draw_shape(&mut frame, &transform, element.layer, &element.shape);
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation_core::config::FoundationConfig;
    use foundation_core::drawing::plan_drawing;

    #[test]
    fn test_fit_stays_inside_bounds() {
        let drawing = plan_drawing(&FoundationConfig::default());
        let size = Size::new(800.0, 500.0);
        let transform = Transform::fit(&drawing, size).unwrap();

        let bounds = drawing.bounds();
        let top_left = transform.point(bounds.min);
        let bottom_right = transform.point(bounds.max);
        assert!(top_left.x >= MARGIN - 0.01 && top_left.y >= MARGIN - 0.01);
        assert!(bottom_right.x <= size.width - MARGIN + 0.01);
        assert!(bottom_right.y <= size.height - MARGIN + 0.01);
    }

    #[test]
    fn test_layer_color() {
        let color = layer_color(Rgb(255, 0, 0));
        assert_eq!(color, Color::from_rgb(1.0, 0.0, 0.0));
    }
}
