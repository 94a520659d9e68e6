//! SVG rendering for plan and section drawings
//!
//! The drawing is scaled uniformly to fit `SvgOptions::width_px`, with a
//! title above and a legend below the model area.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::drawing::{Drawing, Layer, Point, Shape, TextAnchor, LABEL_SIZE, TITLE_SIZE};

/// Smallest radius (px) a bar circle is drawn with
const MIN_CIRCLE_PX: f64 = 1.5;
/// Legend swatch size (px)
const SWATCH_PX: f64 = 12.0;
/// Height of one legend row (px)
const LEGEND_ROW_PX: f64 = 18.0;

/// Output options for [`render_svg`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    /// Total document width in pixels
    pub width_px: f64,
    /// Blank border around the model area in pixels
    pub padding_px: f64,
    /// Draw the legend below the drawing
    pub legend: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width_px: 900.0,
            padding_px: 40.0,
            legend: true,
        }
    }
}

/// Serialize a drawing as a standalone SVG document
pub fn render_svg(drawing: &Drawing, options: &SvgOptions) -> String {
    SvgDocument { drawing, options }.to_string()
}

/// Escape text content for XML
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

struct SvgDocument<'a> {
    drawing: &'a Drawing,
    options: &'a SvgOptions,
}

/// Model-to-pixel mapping
struct Viewport {
    min: Point,
    scale: f64,
    left: f64,
    top: f64,
}

impl Viewport {
    fn map(&self, p: Point) -> (f64, f64) {
        (
            self.left + (p.x - self.min.x) * self.scale,
            self.top + (p.y - self.min.y) * self.scale,
        )
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn style_attr(layer: Layer, closed: bool) -> String {
    let fill = match layer.fill() {
        Some(rgb) if closed => rgb.hex(),
        _ => "none".to_string(),
    };
    format!(
        r#"stroke="{}" stroke-width="{:.2}" fill="{}""#,
        layer.stroke().hex(),
        layer.stroke_px(),
        fill
    )
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = self.options.padding_px;
        let bounds = self.drawing.bounds();
        let (min, model_w, model_h) = if bounds.is_empty() || bounds.width() <= 0.0 {
            (Point::default(), 1.0, 1.0)
        } else {
            (bounds.min, bounds.width(), bounds.height().max(1.0))
        };

        let title_h = TITLE_SIZE as f64 * 2.0;
        let inner_w = (self.options.width_px - 2.0 * pad).max(1.0);
        let scale = inner_w / model_w;
        let legend_h = if self.options.legend {
            self.drawing.legend.len() as f64 * LEGEND_ROW_PX + LABEL_SIZE as f64
        } else {
            0.0
        };
        let total_h = title_h + pad + model_h * scale + pad + legend_h;

        let viewport = Viewport {
            min,
            scale,
            left: pad,
            top: title_h + pad,
        };

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" font-family="sans-serif">"#,
            w = self.options.width_px,
            h = total_h
        )?;
        writeln!(svg, r#"  <rect x="0" y="0" width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{:.0}" font-weight="bold" fill="{}">{}</text>"#,
            pad,
            TITLE_SIZE as f64 * 1.5,
            TITLE_SIZE,
            Layer::Annotation.stroke().hex(),
            escape_xml(&self.drawing.title)
        )?;

        for element in &self.drawing.elements {
            write_shape(&mut svg, &viewport, element.layer, &element.shape)?;
        }

        if self.options.legend {
            let mut y = total_h - legend_h + LABEL_SIZE as f64 / 2.0;
            for entry in &self.drawing.legend {
                let closed = entry.layer.fill().is_some();
                writeln!(
                    svg,
                    r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}/>"#,
                    pad,
                    y,
                    SWATCH_PX,
                    SWATCH_PX,
                    style_attr(entry.layer, closed)
                )?;
                writeln!(
                    svg,
                    r#"  <text x="{:.2}" y="{:.2}" font-size="{:.0}" dominant-baseline="middle" fill="{}">{}</text>"#,
                    pad + SWATCH_PX + 6.0,
                    y + SWATCH_PX / 2.0,
                    LABEL_SIZE,
                    Layer::Annotation.stroke().hex(),
                    escape_xml(&entry.label)
                )?;
                y += LEGEND_ROW_PX;
            }
        }

        writeln!(svg, "</svg>")?;
        f.write_str(&svg)
    }
}

fn write_shape(svg: &mut String, viewport: &Viewport, layer: Layer, shape: &Shape) -> fmt::Result {
    match shape {
        Shape::Line { from, to } => {
            let (x1, y1) = viewport.map(*from);
            let (x2, y2) = viewport.map(*to);
            writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                x1,
                y1,
                x2,
                y2,
                style_attr(layer, false)
            )
        }
        Shape::Rect { origin, width, height } => {
            let (x, y) = viewport.map(*origin);
            writeln!(
                svg,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}/>"#,
                x,
                y,
                width * viewport.scale,
                height * viewport.scale,
                style_attr(layer, true)
            )
        }
        Shape::Circle { center, radius } => {
            let (cx, cy) = viewport.map(*center);
            writeln!(
                svg,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                cx,
                cy,
                (radius * viewport.scale).max(MIN_CIRCLE_PX),
                style_attr(layer, true)
            )
        }
        Shape::Text {
            at,
            content,
            size,
            anchor,
            vertical,
        } => {
            let (x, y) = viewport.map(*at);
            let transform = if *vertical {
                format!(r#" transform="rotate(-90 {:.2} {:.2})""#, x, y)
            } else {
                String::new()
            };
            writeln!(
                svg,
                r#"  <text x="{:.2}" y="{:.2}" font-size="{:.0}" text-anchor="{}" fill="{}"{}>{}</text>"#,
                x,
                y,
                size,
                anchor_attr(*anchor),
                layer.stroke().hex(),
                transform,
                escape_xml(content)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FoundationConfig;
    use crate::drawing::{plan_drawing, section_drawing};
    use crate::metrics::plan_grid;

    #[test]
    fn test_plan_svg_has_one_line_per_bar() {
        let config = FoundationConfig::default();
        let svg = render_svg(&plan_drawing(&config), &SvgOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));

        let rebar_stroke = format!(r#"stroke="{}""#, Layer::Rebar.stroke().hex());
        let bar_lines = svg
            .lines()
            .filter(|l| l.trim_start().starts_with("<line") && l.contains(&rebar_stroke))
            .count();
        assert_eq!(bar_lines, plan_grid(&config).len());
    }

    #[test]
    fn test_section_svg_has_circles() {
        let config = FoundationConfig::default();
        let drawing = section_drawing(&config);
        let svg = render_svg(&drawing, &SvgOptions::default());
        let circles = svg.matches("<circle").count();
        assert_eq!(circles, drawing.count(Layer::Rebar));
        assert!(svg.contains("rotate(-90"));
    }

    #[test]
    fn test_width_option() {
        let config = FoundationConfig::default();
        let options = SvgOptions {
            width_px: 400.0,
            ..SvgOptions::default()
        };
        let svg = render_svg(&plan_drawing(&config), &options);
        assert!(svg.contains(r#"width="400""#));
    }

    #[test]
    fn test_without_legend() {
        let config = FoundationConfig::default();
        let options = SvgOptions {
            legend: false,
            ..SvgOptions::default()
        };
        let svg = render_svg(&plan_drawing(&config), &options);
        assert!(!svg.contains("Concrete slab"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
