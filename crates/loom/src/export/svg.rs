//! SVG export backend.
//!
//! [`SvgRenderingContext`] turns drawing calls into SVG elements, one per
//! line, and [`create`](SvgRenderingContext::create) wraps them into a
//! complete document. Output depends only on the calls made, so the same
//! drawing always serializes to the same bytes.
//!
//! # Document Layout
//!
//! ```text
//! <svg viewBox="X Y W H" xmlns="http://www.w3.org/2000/svg">
//! <defs><filter id="shadow" ...>...</filter></defs><g transform="translate(0.5,0.5)" stroke-width="0.75">
//! ...elements...
//! </g></svg>
//! ```
//!
//! The view box is the diagram bounds grown by [`MARGIN`] on every side.
//! Shadows are offset copies blurred by the `shadow` filter and are emitted
//! just before the shape they belong to.
//!
//! # Colors
//!
//! Colors are written as names from a fixed palette. Any other color is
//! written as [`FALLBACK_COLOR`].

use log::{debug, warn};

use loom_core::{
    color::Color,
    draw::{DropShadow, Font, FontDimension, LineStyle, Path, PathElement, RenderingContext},
    geometry::{Alignment, Rectangle},
};

/// Space around the diagram bounds.
pub const MARGIN: i32 = 7;

/// Serialization of colors outside the palette.
pub const FALLBACK_COLOR: &str = "rgb(90%, 90%, 60%)";

/// Corner radius of rounded rectangles.
const CORNER_RADIUS: i32 = 10;

/// Reduction applied to font sizes so text fits the measured boxes.
const FONT_SIZE_ADJUSTMENT: f64 = 0.25;

const PALETTE: [(&str, [u8; 4]); 13] = [
    ("black", [0, 0, 0, 255]),
    ("white", [255, 255, 255, 255]),
    ("gray", [128, 128, 128, 255]),
    ("lightgray", [211, 211, 211, 255]),
    ("darkgray", [169, 169, 169, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("orange", [255, 165, 0, 255]),
    ("pink", [255, 192, 203, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("cyan", [0, 255, 255, 255]),
];

/// A [`RenderingContext`] that builds an SVG document.
///
/// # Examples
///
/// ```
/// # use loom::export::svg::SvgRenderingContext;
/// # use loom_core::{color::Color, draw::{LineStyle, RenderingContext}, geometry::Rectangle};
/// let mut svg = SvgRenderingContext::new(Rectangle::new(50, 50, 100, 100));
/// svg.stroke_line(1, 1, 1, 1, Color::default(), LineStyle::Solid);
///
/// let document = svg.create();
/// assert!(document.starts_with("<svg viewBox=\"43 43 114 114\""));
/// assert!(document.contains("<line x1=\"1\" y1=\"1\" x2=\"1\" y2=\"1\" stroke=\"black\"/>"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgRenderingContext {
    view_box: Rectangle,
    elements: Vec<String>,
}

impl SvgRenderingContext {
    /// Creates an empty document sized to show `bounds`.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            view_box: bounds.inset(MARGIN),
            elements: Vec::new(),
        }
    }

    /// Returns the complete SVG document for everything drawn so far.
    pub fn create(&self) -> String {
        debug!(elements = self.elements.len(); "Serializing SVG document");

        let mut document = format!(
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            self.view_box.x(),
            self.view_box.y(),
            self.view_box.width(),
            self.view_box.height()
        );
        document.push_str("<defs><filter id=\"shadow\" x=\"-10%\" y=\"-10%\">\n");
        document.push_str("  <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"1\" />\n");
        document.push_str(
            "</filter></defs><g transform=\"translate(0.5,0.5)\" stroke-width=\"0.75\">\n",
        );
        for element in &self.elements {
            document.push_str(element);
            document.push('\n');
        }
        document.push_str("</g></svg>");
        document
    }

    fn push(&mut self, element: String) {
        self.elements.push(element);
    }
}

impl RenderingContext for SvgRenderingContext {
    fn draw_rectangle(
        &mut self,
        rectangle: Rectangle,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    ) {
        if let Some(shadow) = shadow {
            let offset = shadow.offset();
            self.push(format!(
                "<rect width=\"{}\" height=\"{}\" x=\"{}\" y=\"{}\" stroke=\"none\" fill=\"lightgray\" style=\"filter:url(#shadow);\"/>",
                rectangle.width(),
                rectangle.height(),
                rectangle.x() + offset,
                rectangle.y() + offset
            ));
        }
        self.push(format!(
            "<rect width=\"{}\" height=\"{}\" x=\"{}\" y=\"{}\" stroke=\"{}\" fill=\"{}\"/>",
            rectangle.width(),
            rectangle.height(),
            rectangle.x(),
            rectangle.y(),
            color_name(stroke),
            color_name(fill)
        ));
    }

    fn draw_rounded_rectangle(
        &mut self,
        rectangle: Rectangle,
        stroke: Color,
        fill: Color,
        shadow: Option<&DropShadow>,
    ) {
        if let Some(shadow) = shadow {
            let offset = shadow.offset();
            self.push(format!(
                "<rect width=\"{}\" height=\"{}\" x=\"{}\" y=\"{}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" stroke=\"none\" fill=\"lightGray\" style=\"filter:url(#shadow);\"/>",
                rectangle.width(),
                rectangle.height(),
                rectangle.x() + offset,
                rectangle.y() + offset
            ));
        }
        self.push(format!(
            "<rect width=\"{}\" height=\"{}\" x=\"{}\" y=\"{}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" stroke=\"{}\" fill=\"{}\"/>",
            rectangle.width(),
            rectangle.height(),
            rectangle.x(),
            rectangle.y(),
            color_name(stroke),
            color_name(fill)
        ));
    }

    fn draw_oval(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    ) {
        let (rx, ry) = (width / 2, height / 2);
        let (cx, cy) = (x + rx, y + ry);
        if let Some(shadow) = shadow {
            let offset = shadow.offset();
            self.push(format!(
                "<ellipse rx=\"{rx}\" ry=\"{ry}\" cx=\"{}\" cy=\"{}\" stroke=\"none\" fill=\"lightgray\" style=\"filter:url(#shadow);\"/>",
                cx + offset,
                cy + offset
            ));
        }
        self.push(format!(
            "<ellipse rx=\"{rx}\" ry=\"{ry}\" cx=\"{cx}\" cy=\"{cy}\" stroke=\"{}\" fill=\"{}\"/>",
            color_name(stroke),
            color_name(fill)
        ));
    }

    fn draw_closed_path(
        &mut self,
        path: &Path,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    ) {
        let data = path_data(path);
        if let Some(shadow) = shadow {
            let offset = shadow.offset();
            self.push(format!(
                "<path d=\"{data}\" stroke=\"none\" fill=\"lightGray\"  transform=\"translate({offset} {offset})\" style=\"filter:url(#shadow);\"/>"
            ));
        }
        self.push(format!(
            "<path d=\"{data}\" stroke=\"{}\" fill=\"{}\"/>",
            color_name(stroke),
            color_name(fill)
        ));
    }

    fn stroke_path(&mut self, path: &Path, color: Color, style: LineStyle) {
        self.push(format!(
            "<path d=\"{}\" stroke=\"{}\" fill=\"none\"{}/>",
            path_data(path),
            color_name(color),
            dash_attribute(style)
        ));
    }

    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, style: LineStyle) {
        self.push(format!(
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{}\"{}/>",
            color_name(color),
            dash_attribute(style)
        ));
    }

    fn stroke_arc(
        &mut self,
        center_x: i32,
        center_y: i32,
        radius: i32,
        start_angle: i32,
        arc_length: i32,
        color: Color,
    ) {
        let (x1, y1) = arc_point(center_x, center_y, radius, start_angle);
        let (x2, y2) = arc_point(center_x, center_y, radius, (start_angle - arc_length) % 360);
        // Always the large clockwise arc; short arcs are drawn the long way round.
        self.push(format!(
            "<path d=\"M {x1} {y1} A {radius} {radius} 0 1 1 {x2} {y2}\" stroke=\"{}\" fill=\"none\"/>",
            color_name(color)
        ));
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rectangle,
        alignment: Alignment,
        color: Color,
        font: &Font,
        dimension: FontDimension,
    ) {
        let (x, anchor) = match alignment {
            Alignment::Left => (bounds.x(), "start"),
            Alignment::Center => (bounds.center().x(), "middle"),
            Alignment::Right => (bounds.max_x(), "end"),
        };
        let y = bounds.max_y() - dimension.baseline_offset();

        let mut element = format!(
            "<text x=\"{x}\" y=\"{y}\" text-anchor=\"{anchor}\" font-family=\"{}\" font-size=\"{:.2}px\"",
            escape_xml(font.family()),
            f64::from(font.size()) - FONT_SIZE_ADJUSTMENT
        );
        if font.is_italic() {
            element.push_str(" font-style=\"italic\"");
        }
        if font.is_bold() {
            element.push_str(" font-weight=\"bold\"");
        }
        element.push_str(&format!(
            " fill=\"{}\">{}</text>",
            color_name(color),
            escape_xml(text)
        ));
        self.push(element);
    }
}

/// Returns the palette name of `color`, or [`FALLBACK_COLOR`].
fn color_name(color: Color) -> &'static str {
    let rgba = color.to_rgba8();
    match PALETTE.iter().find(|(_, value)| *value == rgba) {
        Some((name, _)) => name,
        None => {
            warn!(color:% = color; "Color is not in the SVG palette, using fallback");
            FALLBACK_COLOR
        }
    }
}

fn dash_attribute(style: LineStyle) -> String {
    style
        .to_svg_value()
        .map(|dashes| format!(" stroke-dasharray=\"{dashes}\""))
        .unwrap_or_default()
}

fn path_data(path: &Path) -> String {
    path.elements()
        .iter()
        .map(|element| match *element {
            PathElement::MoveTo { x, y } => format!("M {x} {y}"),
            PathElement::LineTo { x, y } => format!("L {x} {y}"),
            PathElement::QuadCurveTo {
                control_x,
                control_y,
                x,
                y,
            } => format!("Q {control_x} {control_y} {x} {y}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Point on the circle at `angle` degrees, 0 at north and clockwise positive.
fn arc_point(center_x: i32, center_y: i32, radius: i32, angle: i32) -> (i32, i32) {
    let radians = f64::from(angle).to_radians();
    let radius = f64::from(radius);
    (
        center_x + round_half_up(radians.sin() * radius),
        center_y + round_half_up(radians.cos() * radius),
    )
}

/// Rounds to the nearest integer, with halves going towards positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
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
    use float_cmp::approx_eq;

    use super::*;

    const HEADER: &str = "<svg viewBox=\"43 43 114 114\" xmlns=\"http://www.w3.org/2000/svg\">\n\
        <defs><filter id=\"shadow\" x=\"-10%\" y=\"-10%\">\n  \
        <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"1\" />\n\
        </filter></defs><g transform=\"translate(0.5,0.5)\" stroke-width=\"0.75\">\n";

    fn context() -> SvgRenderingContext {
        SvgRenderingContext::new(Rectangle::new(50, 50, 100, 100))
    }

    fn color(name: &str) -> Color {
        Color::new(name).unwrap()
    }

    fn path() -> Path {
        let mut path = Path::new();
        path.move_to(100, 100).line_to(100, 100).quad_to(0, 0, 0, 0);
        path
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(context().create(), format!("{HEADER}</g></svg>"));
    }

    #[test]
    fn test_create_is_repeatable() {
        let mut svg = context();
        svg.draw_rectangle(
            Rectangle::new(0, 0, 10, 10),
            color("white"),
            color("black"),
            Some(&DropShadow::default()),
        );
        assert_eq!(svg.create(), svg.create());
    }

    #[test]
    fn test_elements_one_per_line() {
        let mut svg = context();
        svg.stroke_line(1, 1, 1, 1, color("black"), LineStyle::Solid);
        svg.stroke_line(2, 2, 3, 3, color("red"), LineStyle::Dotted);

        assert_eq!(
            svg.create(),
            format!(
                "{HEADER}<line x1=\"1\" y1=\"1\" x2=\"1\" y2=\"1\" stroke=\"black\"/>\n\
                 <line x1=\"2\" y1=\"2\" x2=\"3\" y2=\"3\" stroke=\"red\" stroke-dasharray=\"3.0 3.0\"/>\n\
                 </g></svg>"
            )
        );
    }

    #[test]
    fn test_empty_dotted_path() {
        let mut svg = context();
        svg.stroke_path(&Path::new(), color("black"), LineStyle::Dotted);
        assert!(svg.create().contains(
            "<path d=\"\" stroke=\"black\" fill=\"none\" stroke-dasharray=\"3.0 3.0\"/>"
        ));
    }

    #[test]
    fn test_path_data() {
        let mut svg = context();
        svg.stroke_path(&path(), color("black"), LineStyle::Solid);
        assert!(svg.create().contains(
            "<path d=\"M 100 100 L 100 100 Q 0 0 0 0\" stroke=\"black\" fill=\"none\"/>"
        ));
    }

    #[test]
    fn test_closed_path_with_shadow() {
        let mut svg = context();
        svg.draw_closed_path(
            &Path::new(),
            color("white"),
            color("black"),
            Some(&DropShadow::default()),
        );
        let output = svg.create();

        let shadow = "<path d=\"\" stroke=\"none\" fill=\"lightGray\"  transform=\"translate(2 2)\" style=\"filter:url(#shadow);\"/>";
        let shape = "<path d=\"\" stroke=\"black\" fill=\"white\"/>";
        assert!(output.contains(shadow));
        assert!(output.contains(shape));
        assert!(output.find(shadow) < output.find(shape));
    }

    #[test]
    fn test_closed_path_fill_matches_argument() {
        let mut svg = context();
        svg.draw_closed_path(&Path::new(), color("black"), color("black"), None);
        let output = svg.create();
        assert!(output.contains("<path d=\"\" stroke=\"black\" fill=\"black\"/>"));
        assert!(!output.contains("filter:url(#shadow)"));
    }

    #[test]
    fn test_unsupported_color_falls_back() {
        let mut svg = context();
        svg.draw_closed_path(
            &Path::new(),
            color("aliceblue"),
            color("black"),
            Some(&DropShadow::default()),
        );
        assert!(svg.create().contains("fill=\"rgb(90%, 90%, 60%)\""));
    }

    #[test]
    fn test_palette_matches_by_value() {
        assert_eq!(color_name(color("#ffffff")), "white");
        assert_eq!(color_name(color("rgb(211, 211, 211)")), "lightgray");
        assert_eq!(color_name(color("darkgrey")), "darkgray");
        assert_eq!(color_name(color("fuchsia")), "magenta");
        assert_eq!(color_name(color("black").with_alpha(0.5)), FALLBACK_COLOR);
    }

    #[test]
    fn test_rectangle_with_shadow() {
        let mut svg = context();
        svg.draw_rectangle(
            Rectangle::new(50, 50, 100, 100),
            color("white"),
            color("black"),
            Some(&DropShadow::default()),
        );
        assert_eq!(
            svg.create(),
            format!(
                "{HEADER}<rect width=\"100\" height=\"100\" x=\"52\" y=\"52\" stroke=\"none\" fill=\"lightgray\" style=\"filter:url(#shadow);\"/>\n\
                 <rect width=\"100\" height=\"100\" x=\"50\" y=\"50\" stroke=\"black\" fill=\"white\"/>\n\
                 </g></svg>"
            )
        );
    }

    #[test]
    fn test_rounded_rectangle_with_shadow() {
        let mut svg = context();
        svg.draw_rounded_rectangle(
            Rectangle::new(50, 50, 100, 100),
            color("black"),
            color("white"),
            Some(&DropShadow::default()),
        );
        let output = svg.create();
        assert!(output.contains(
            "<rect width=\"100\" height=\"100\" x=\"52\" y=\"52\" rx=\"10\" ry=\"10\" stroke=\"none\" fill=\"lightGray\" style=\"filter:url(#shadow);\"/>"
        ));
        assert!(output.contains(
            "<rect width=\"100\" height=\"100\" x=\"50\" y=\"50\" rx=\"10\" ry=\"10\" stroke=\"black\" fill=\"white\"/>"
        ));
    }

    #[test]
    fn test_oval_with_shadow() {
        let mut svg = context();
        svg.draw_oval(
            2,
            2,
            100,
            100,
            color("white"),
            color("black"),
            Some(&DropShadow::default()),
        );
        let output = svg.create();
        assert!(output.contains(
            "<ellipse rx=\"50\" ry=\"50\" cx=\"54\" cy=\"54\" stroke=\"none\" fill=\"lightgray\" style=\"filter:url(#shadow);\"/>"
        ));
        assert!(output.contains(
            "<ellipse rx=\"50\" ry=\"50\" cx=\"52\" cy=\"52\" stroke=\"black\" fill=\"white\"/>"
        ));
    }

    #[test]
    fn test_custom_shadow_offset() {
        let mut svg = context();
        svg.draw_rectangle(
            Rectangle::new(0, 0, 10, 10),
            color("white"),
            color("black"),
            Some(&DropShadow::new(5)),
        );
        assert!(svg.create().contains("x=\"5\" y=\"5\" stroke=\"none\""));
    }

    #[test]
    fn test_arc() {
        let mut svg = context();
        svg.stroke_arc(10, 10, 2, 3, 2, color("black"));
        assert!(svg.create().contains(
            "<path d=\"M 10 12 A 2 2 0 1 1 10 12\" stroke=\"black\" fill=\"none\"/>"
        ));
    }

    #[test]
    fn test_arc_endpoints() {
        let (center, radius) = (50, 10);
        for start in [0, 45, 90, 180] {
            for length in [30, 90, 180, 270] {
                let mut svg = SvgRenderingContext::new(Rectangle::new(0, 0, 200, 200));
                svg.stroke_arc(center, center, radius, start, length, color("black"));

                let end = (start - length) % 360;
                let point = |angle: i32| {
                    let radians = f64::from(angle).to_radians();
                    (
                        center + (radians.sin() * 10.0 + 0.5).floor() as i32,
                        center + (radians.cos() * 10.0 + 0.5).floor() as i32,
                    )
                };
                let (x1, y1) = point(start);
                let (x2, y2) = point(end);
                let expected = format!(
                    "<path d=\"M {x1} {y1} A {radius} {radius} 0 1 1 {x2} {y2}\" stroke=\"black\" fill=\"none\"/>"
                );
                assert!(svg.create().contains(&expected), "start {start} length {length}");
            }
        }
    }

    #[test]
    fn test_arc_quarter_points() {
        let mut svg = context();
        svg.stroke_arc(0, 0, 10, 90, 90, color("black"));
        assert!(svg.create().contains("d=\"M 10 0 A 10 10 0 1 1 0 10\""));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.6), -1);
        assert_eq!(round_half_up(1.49), 1);
    }

    #[test]
    fn test_text_centered_italic() {
        let mut svg = context();
        svg.draw_text(
            "Testing",
            Rectangle::new(50, 50, 100, 100),
            Alignment::Center,
            color("black"),
            &Font::new("Arial", 12).with_italic(true),
            FontDimension::new(12, 12),
        );
        assert!(svg.create().contains(
            "<text x=\"100\" y=\"138\" text-anchor=\"middle\" font-family=\"Arial\" font-size=\"11.75px\" font-style=\"italic\" fill=\"black\">Testing</text>"
        ));
    }

    #[test]
    fn test_text_bold() {
        let mut svg = context();
        svg.draw_text(
            "Testing",
            Rectangle::new(50, 50, 100, 100),
            Alignment::Center,
            color("black"),
            &Font::new("Arial", 12).with_bold(true),
            FontDimension::new(12, 12),
        );
        let output = svg.create();
        assert!(output.contains("font-weight=\"bold\""));
        assert!(!output.contains("font-style"));
    }

    #[test]
    fn test_text_alignment_anchors() {
        let bounds = Rectangle::new(50, 50, 100, 20);
        let font = Font::new("Arial", 12);
        let mut svg = context();
        svg.draw_text("l", bounds, Alignment::Left, color("black"), &font, FontDimension::new(16, 4));
        svg.draw_text("r", bounds, Alignment::Right, color("black"), &font, FontDimension::new(16, 4));
        let output = svg.create();
        assert!(output.contains("<text x=\"50\" y=\"66\" text-anchor=\"start\""));
        assert!(output.contains("<text x=\"150\" y=\"66\" text-anchor=\"end\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut svg = context();
        svg.draw_text(
            "List<T> & \"more\"",
            Rectangle::new(0, 0, 100, 20),
            Alignment::Left,
            color("black"),
            &Font::new("Arial", 12),
            FontDimension::new(16, 4),
        );
        assert!(svg
            .create()
            .contains(">List&lt;T&gt; &amp; &quot;more&quot;</text>"));
    }

    #[test]
    fn test_font_size_adjustment() {
        let mut svg = context();
        svg.draw_text(
            "x",
            Rectangle::new(0, 0, 10, 10),
            Alignment::Left,
            color("black"),
            &Font::new("Arial", 24),
            FontDimension::new(10, 2),
        );
        let output = svg.create();
        let size: f64 = output
            .split("font-size=\"")
            .nth(1)
            .and_then(|rest| rest.split("px").next())
            .unwrap()
            .parse()
            .unwrap();
        assert!(approx_eq!(f64, size, 24.0 - FONT_SIZE_ADJUSTMENT, ulps = 2));
        assert!(output.contains("font-size=\"23.75px\""));
    }
}
