//! SVG export.
//!
//! Data coordinates go straight into the viewBox; the y axis is flipped so
//! larger wire coordinates appear higher up. One data unit maps to
//! [`PIXELS_PER_UNIT`] pixels of the declared width and height.

use std::fmt::Write;

use crate::figure::{Figure, Primitive};

/// Pixels per data unit in the declared SVG size.
pub const PIXELS_PER_UNIT: f64 = 72.0;

/// Font sizes are in points; convert to data units.
const POINTS_PER_UNIT: f64 = 72.0;

impl Figure {
    /// Render the figure as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (x0, x1) = self.xlim;
        let (y0, y1) = self.ylim;
        let view_w = x1 - x0;
        let view_h = y1 - y0;
        // Scale font sizes so text occupies the same share of the figure as on paper.
        let text_scale = if self.width > 0.0 {
            view_w / self.width / POINTS_PER_UNIT
        } else {
            1.0 / POINTS_PER_UNIT
        };
        let flip = |y: f64| y0 + y1 - y;

        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.2}\" height=\"{:.2}\" viewBox=\"{:.4} {:.4} {:.4} {:.4}\">",
            self.width * PIXELS_PER_UNIT,
            self.height * PIXELS_PER_UNIT,
            x0,
            y0,
            view_w,
            view_h
        );
        let _ = write!(
            svg,
            "<rect x=\"{x0:.4}\" y=\"{y0:.4}\" width=\"{view_w:.4}\" height=\"{view_h:.4}\" fill=\"{}\"/>",
            css_color(&self.facecolor)
        );

        for primitive in &self.primitives {
            match primitive {
                Primitive::Line(l) => {
                    let _ = write!(
                        svg,
                        "<line x1=\"{:.4}\" y1=\"{:.4}\" x2=\"{:.4}\" y2=\"{:.4}\" stroke=\"{}\" stroke-width=\"{:.4}\"/>",
                        l.x1,
                        flip(l.y1),
                        l.x2,
                        flip(l.y2),
                        css_color(&l.color),
                        l.width * text_scale
                    );
                }
                Primitive::Circle(c) => {
                    let _ = write!(
                        svg,
                        "<circle cx=\"{:.4}\" cy=\"{:.4}\" r=\"{:.4}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.4}\"/>",
                        c.cx,
                        flip(c.cy),
                        c.radius,
                        css_color(&c.fillcolor),
                        css_color(&c.edgecolor),
                        c.width * text_scale
                    );
                }
                Primitive::Rectangle(r) => {
                    let fill = r.fillcolor.as_deref().map_or("none".to_string(), css_color);
                    let dash = if r.dashed {
                        format!(" stroke-dasharray=\"{:.4} {:.4}\"", 0.06, 0.04)
                    } else {
                        String::new()
                    };
                    let _ = write!(
                        svg,
                        "<rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.4}\"{}/>",
                        r.x,
                        flip(r.y + r.height),
                        r.width,
                        r.height,
                        fill,
                        css_color(&r.edgecolor),
                        r.linewidth * text_scale,
                        dash
                    );
                }
                Primitive::Text(t) => {
                    let size = t.size * text_scale;
                    let y = flip(t.y);
                    if let Some(b) = &t.boxed {
                        // Box sized from the glyph count; there is no font metric here.
                        let w = (t.text.chars().count() as f64 * 0.6 + 0.6) * size;
                        let h = 1.4 * size;
                        let _ = write!(
                            svg,
                            "<rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.4}\"/>",
                            t.x - w / 2.0,
                            y - h / 2.0,
                            w,
                            h,
                            css_color(&b.fillcolor),
                            css_color(&b.edgecolor),
                            b.linewidth * text_scale
                        );
                    }
                    let _ = write!(
                        svg,
                        "<text x=\"{:.4}\" y=\"{:.4}\" font-family=\"serif\" font-size=\"{:.4}\" fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
                        t.x,
                        y,
                        size,
                        css_color(&t.color),
                        escape_xml(&t.text)
                    );
                }
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Expand single-letter colour shorthands to CSS names.
pub fn css_color(color: &str) -> String {
    match color {
        "w" => "white",
        "k" => "black",
        "r" => "red",
        "g" => "green",
        "b" => "blue",
        "c" => "cyan",
        "m" => "magenta",
        "y" => "yellow",
        other => other,
    }
    .to_string()
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Canvas, Line, Rectangle, Text, TextBox};

    fn figure() -> Figure {
        Figure::new((2.0, 1.0), (-0.5, 1.5), (-0.5, 0.5), "w", "#000000")
    }

    #[test]
    fn test_svg_header_and_background() {
        let svg = figure().to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"144.00\""));
        assert!(svg.contains("viewBox=\"-0.5000 -0.5000 2.0000 1.0000\""));
        assert!(svg.contains("fill=\"white\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let mut fig = figure();
        fig.line(Line {
            x1: 0.0,
            y1: 0.5,
            x2: 1.0,
            y2: 0.5,
            color: "k".into(),
            width: 1.0,
        });
        let svg = fig.to_svg();
        assert!(svg.contains("y1=\"-0.5000\""));
        assert!(svg.contains("stroke=\"black\""));
    }

    #[test]
    fn test_text_is_escaped_and_boxed() {
        let mut fig = figure();
        fig.text(Text {
            x: 0.0,
            y: 0.0,
            text: "|q<0>⟩".into(),
            color: "k".into(),
            size: 14.0,
            boxed: Some(TextBox {
                edgecolor: "#000000".into(),
                fillcolor: "w".into(),
                linewidth: 1.0,
            }),
        });
        let svg = fig.to_svg();
        assert!(svg.contains("|q&lt;0&gt;⟩"));
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_dashed_rectangle() {
        let mut fig = figure();
        fig.rectangle(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 0.5,
            edgecolor: "#000000".into(),
            fillcolor: None,
            linewidth: 1.0,
            dashed: true,
        });
        let svg = fig.to_svg();
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_css_color_shorthand() {
        assert_eq!(css_color("w"), "white");
        assert_eq!(css_color("#abcdef"), "#abcdef");
    }
}
