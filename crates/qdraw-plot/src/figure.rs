//! Drawing surface and the recorded figure.

use serde::Serialize;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
    pub width: f64,
}

/// A filled circle with an outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub edgecolor: String,
    pub fillcolor: String,
    pub width: f64,
}

/// An axis-aligned rectangle. `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub edgecolor: String,
    /// `None` leaves the interior unfilled.
    pub fillcolor: Option<String>,
    pub linewidth: f64,
    pub dashed: bool,
}

/// Outline and fill of the box drawn behind a text glyph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBox {
    pub edgecolor: String,
    pub fillcolor: String,
    pub linewidth: f64,
}

/// Text centred on `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: String,
    pub size: f64,
    /// Present for gate boxes, absent for bare labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxed: Option<TextBox>,
}

/// Any recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Text(Text),
}

/// A drawing surface accepting primitives in data coordinates.
pub trait Canvas {
    /// Draw a line segment.
    fn line(&mut self, line: Line);

    /// Draw a circle.
    fn circle(&mut self, circle: Circle);

    /// Draw a rectangle.
    fn rectangle(&mut self, rectangle: Rectangle);

    /// Draw text.
    fn text(&mut self, text: Text);
}

/// A rendered circuit diagram.
///
/// Coordinates are in data units with y pointing up. Two figures are equal
/// when their sizes, limits and every primitive are equal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Figure width in scale units.
    pub width: f64,
    /// Figure height in scale units.
    pub height: f64,
    /// Visible x range.
    pub xlim: (f64, f64),
    /// Visible y range.
    pub ylim: (f64, f64),
    /// Background colour.
    pub facecolor: String,
    /// Frame colour.
    pub edgecolor: String,
    /// Primitives in drawing order.
    pub primitives: Vec<Primitive>,
}

impl Figure {
    /// Create an empty figure.
    pub fn new(
        size: (f64, f64),
        xlim: (f64, f64),
        ylim: (f64, f64),
        facecolor: impl Into<String>,
        edgecolor: impl Into<String>,
    ) -> Self {
        Self {
            width: size.0,
            height: size.1,
            xlim,
            ylim,
            facecolor: facecolor.into(),
            edgecolor: edgecolor.into(),
            primitives: vec![],
        }
    }

    /// Recorded lines.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(l) => Some(l),
            _ => None,
        })
    }

    /// Recorded circles.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(c) => Some(c),
            _ => None,
        })
    }

    /// Recorded rectangles.
    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rectangle(r) => Some(r),
            _ => None,
        })
    }

    /// Recorded texts.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Serialize the figure to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Canvas for Figure {
    fn line(&mut self, line: Line) {
        self.primitives.push(Primitive::Line(line));
    }

    fn circle(&mut self, circle: Circle) {
        self.primitives.push(Primitive::Circle(circle));
    }

    fn rectangle(&mut self, rectangle: Rectangle) {
        self.primitives.push(Primitive::Rectangle(rectangle));
    }

    fn text(&mut self, text: Text) {
        self.primitives.push(Primitive::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_records_in_order() {
        let mut fig = Figure::new((1.0, 1.0), (-0.5, 0.5), (-0.5, 0.5), "w", "k");
        fig.line(Line {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 0.0,
            color: "k".into(),
            width: 1.0,
        });
        fig.text(Text {
            x: 0.0,
            y: 0.0,
            text: "H".into(),
            color: "k".into(),
            size: 14.0,
            boxed: None,
        });
        assert_eq!(fig.primitives.len(), 2);
        assert!(matches!(fig.primitives[0], Primitive::Line(_)));
        assert_eq!(fig.texts().count(), 1);
        assert_eq!(fig.circles().count(), 0);
    }

    #[test]
    fn test_json_tags_primitives() {
        let mut fig = Figure::new((1.0, 1.0), (0.0, 1.0), (0.0, 1.0), "w", "k");
        fig.circle(Circle {
            cx: 0.0,
            cy: 0.0,
            radius: 0.1,
            edgecolor: "k".into(),
            fillcolor: "w".into(),
            width: 1.0,
        });
        let json = fig.to_json().unwrap();
        assert!(json.contains(r#""type": "circle""#));
    }
}
