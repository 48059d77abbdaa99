//! A rendering backend that records every call.
//!
//! [`RecordingContext`] keeps the calls it receives as [`DrawCommand`] values in
//! call order, which lets renderers be checked for exactly what they would
//! draw without a real surface.

use crate::{
    color::Color,
    draw::{DropShadow, Font, FontDimension, LineStyle, Path, RenderingContext},
    geometry::{Alignment, Rectangle},
};

/// One recorded [`RenderingContext`] call with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rectangle {
        rectangle: Rectangle,
        fill: Color,
        stroke: Color,
        shadow: Option<DropShadow>,
    },
    RoundedRectangle {
        rectangle: Rectangle,
        stroke: Color,
        fill: Color,
        shadow: Option<DropShadow>,
    },
    Oval {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: Color,
        stroke: Color,
        shadow: Option<DropShadow>,
    },
    ClosedPath {
        path: Path,
        fill: Color,
        stroke: Color,
        shadow: Option<DropShadow>,
    },
    StrokePath {
        path: Path,
        color: Color,
        style: LineStyle,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        style: LineStyle,
    },
    Arc {
        center_x: i32,
        center_y: i32,
        radius: i32,
        start_angle: i32,
        arc_length: i32,
        color: Color,
    },
    Text {
        text: String,
        bounds: Rectangle,
        alignment: Alignment,
        color: Color,
        font: Font,
        dimension: FontDimension,
    },
}

impl DrawCommand {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }

    /// Returns `true` for plain and rounded rectangles.
    pub fn is_rectangle(&self) -> bool {
        matches!(self, Self::Rectangle { .. } | Self::RoundedRectangle { .. })
    }
}

/// Collects drawing calls instead of rendering them.
///
/// # Examples
///
/// ```
/// # use loom_core::{color::Color, draw::{DrawCommand, LineStyle, RecordingContext, RenderingContext}};
/// let mut context = RecordingContext::new();
/// context.stroke_line(0, 0, 10, 0, Color::default(), LineStyle::Dotted);
///
/// assert_eq!(context.len(), 1);
/// assert!(matches!(
///     context.commands()[0],
///     DrawCommand::Line { x2: 10, style: LineStyle::Dotted, .. }
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the recorded line strokes.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| command.is_line())
    }

    /// Returns the recorded text calls.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| command.is_text())
    }

    /// Returns the recorded plain and rounded rectangles.
    pub fn rectangles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| command.is_rectangle())
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl RenderingContext for RecordingContext {
    fn draw_rectangle(
        &mut self,
        rectangle: Rectangle,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    ) {
        self.record(DrawCommand::Rectangle {
            rectangle,
            fill,
            stroke,
            shadow: shadow.copied(),
        });
    }

    fn draw_rounded_rectangle(
        &mut self,
        rectangle: Rectangle,
        stroke: Color,
        fill: Color,
        shadow: Option<&DropShadow>,
    ) {
        self.record(DrawCommand::RoundedRectangle {
            rectangle,
            stroke,
            fill,
            shadow: shadow.copied(),
        });
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
        self.record(DrawCommand::Oval {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            shadow: shadow.copied(),
        });
    }

    fn draw_closed_path(
        &mut self,
        path: &Path,
        fill: Color,
        stroke: Color,
        shadow: Option<&DropShadow>,
    ) {
        self.record(DrawCommand::ClosedPath {
            path: path.clone(),
            fill,
            stroke,
            shadow: shadow.copied(),
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, style: LineStyle) {
        self.record(DrawCommand::StrokePath {
            path: path.clone(),
            color,
            style,
        });
    }

    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, style: LineStyle) {
        self.record(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            style,
        });
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
        self.record(DrawCommand::Arc {
            center_x,
            center_y,
            radius,
            start_angle,
            arc_length,
            color,
        });
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
        self.record(DrawCommand::Text {
            text: text.to_string(),
            bounds,
            alignment,
            color,
            font: font.clone(),
            dimension,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_call_order() {
        let mut context = RecordingContext::new();
        assert!(context.is_empty());

        let black = Color::default();
        let rectangle = Rectangle::new(0, 0, 10, 10);
        context.draw_rectangle(rectangle, black, black, Some(&DropShadow::default()));
        context.stroke_line(0, 0, 5, 5, black, LineStyle::Solid);
        context.draw_text(
            "label",
            rectangle,
            Alignment::Center,
            black,
            &Font::new("Arial", 12),
            FontDimension::new(16, 4),
        );

        assert_eq!(context.len(), 3);
        assert!(matches!(
            context.commands()[0],
            DrawCommand::Rectangle {
                shadow: Some(_),
                ..
            }
        ));
        assert!(context.commands()[1].is_line());
        assert!(context.commands()[2].is_text());
    }

    #[test]
    fn test_recording_filters() {
        let mut context = RecordingContext::new();
        let black = Color::default();
        let rectangle = Rectangle::new(0, 0, 10, 10);
        context.draw_rectangle(rectangle, black, black, None);
        context.draw_rounded_rectangle(rectangle, black, black, None);
        context.stroke_line(0, 0, 5, 5, black, LineStyle::Dotted);
        context.stroke_arc(0, 0, 5, 0, 90, black);

        assert_eq!(context.rectangles().count(), 2);
        assert_eq!(context.lines().count(), 1);
        assert_eq!(context.texts().count(), 0);
        assert_eq!(context.into_commands().len(), 4);
    }
}
