//! Multi-line text layout.
//!
//! [`StringRenderer`] splits a string into lines, draws each non-blank line in
//! its own line box and, when requested, underlines it. All measurements come
//! from an injected [`FontMetrics`] provider.
//!
//! # Example
//!
//! ```
//! # use std::rc::Rc;
//! # use loom_core::{
//! #     draw::{ApproximateMetrics, Decoration, Decorations, RecordingContext, StringRenderer, TextDefinition},
//! #     geometry::{Alignment, Rectangle},
//! # };
//! let renderer = StringRenderer::new(
//!     Rc::new(TextDefinition::default()),
//!     Rc::new(ApproximateMetrics),
//!     Alignment::Center,
//!     Decorations::from(Decoration::Bold),
//! );
//!
//! let mut context = RecordingContext::new();
//! renderer.draw("Name\n\nType", Rectangle::new(0, 0, 100, 48), &mut context);
//! assert_eq!(context.texts().count(), 2);
//! ```

use std::{fmt, rc::Rc};

use crate::{
    color::Color,
    draw::{Font, FontDimension, FontMetrics, LineStyle, RenderingContext},
    geometry::{Alignment, Dimension, Rectangle},
};

/// A text style flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Italic,
    Underlined,
}

impl Decoration {
    fn bit(self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Italic => 1 << 1,
            Self::Underlined => 1 << 2,
        }
    }
}

/// A set of [`Decoration`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decorations(u8);

impl Decorations {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, decoration: Decoration) -> bool {
        self.0 & decoration.bit() != 0
    }

    pub fn insert(&mut self, decoration: Decoration) {
        self.0 |= decoration.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the decorations present in either set.
    pub fn union(self, other: Decorations) -> Self {
        Self(self.0 | other.0)
    }
}

impl From<Decoration> for Decorations {
    fn from(decoration: Decoration) -> Self {
        Self(decoration.bit())
    }
}

impl FromIterator<Decoration> for Decorations {
    fn from_iter<I: IntoIterator<Item = Decoration>>(iter: I) -> Self {
        let mut decorations = Self::empty();
        for decoration in iter {
            decorations.insert(decoration);
        }
        decorations
    }
}

impl fmt::Debug for Decorations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(
                [Decoration::Bold, Decoration::Italic, Decoration::Underlined]
                    .into_iter()
                    .filter(|decoration| self.contains(*decoration)),
            )
            .finish()
    }
}

/// Base text style shared by all renderers of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Color,
}

impl TextDefinition {
    pub fn new(font_family: impl Into<String>, font_size: u16, color: Color) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            color,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new("Arial", 12, Color::default())
    }
}

/// Draws and measures possibly multi-line strings with one alignment and
/// one set of decorations.
///
/// Each line occupies a box of [`line_height`](Self::line_height) starting at
/// the top of the bounds. Blank lines keep their slot but draw nothing.
#[derive(Clone)]
pub struct StringRenderer {
    definition: Rc<TextDefinition>,
    metrics: Rc<dyn FontMetrics>,
    alignment: Alignment,
    decorations: Decorations,
}

impl fmt::Debug for StringRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringRenderer")
            .field("definition", &self.definition)
            .field("alignment", &self.alignment)
            .field("decorations", &self.decorations)
            .finish_non_exhaustive()
    }
}

impl StringRenderer {
    pub fn new(
        definition: Rc<TextDefinition>,
        metrics: Rc<dyn FontMetrics>,
        alignment: Alignment,
        decorations: Decorations,
    ) -> Self {
        Self {
            definition,
            metrics,
            alignment,
            decorations,
        }
    }

    /// Returns a renderer sharing this one's style with `extra` decorations added.
    pub fn with_decorations(&self, extra: Decorations) -> Self {
        Self {
            decorations: self.decorations.union(extra),
            ..self.clone()
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn decorations(&self) -> Decorations {
        self.decorations
    }

    /// Draws `text` line by line from the top of `bounds`.
    pub fn draw(&self, text: &str, bounds: Rectangle, context: &mut dyn RenderingContext) {
        let line_height = self.line_height();
        let mut y = bounds.y();
        for line in text.split('\n') {
            let line_box = Rectangle::new(bounds.x(), y, bounds.width(), line_height);
            self.draw_single_line(line, line_box, context);
            y += line_height;
        }
    }

    fn draw_single_line(&self, line: &str, line_box: Rectangle, context: &mut dyn RenderingContext) {
        if line.trim().is_empty() {
            return;
        }

        let font = self.font();
        let font_dimension = self.font_dimension();
        let color = self.definition.color();
        context.draw_text(
            line,
            line_box,
            self.alignment,
            color,
            &font,
            font_dimension,
        );

        if self.decorations.contains(Decoration::Underlined) {
            let text_width = self.dimension(line).width();
            let mut x1 = line_box.x();
            if self.alignment == Alignment::Center {
                x1 += (line_box.width() - text_width) / 2;
            }
            // Halfway between the baseline and the bottom of the line box.
            let y = line_box.max_y() - font_dimension.baseline_offset() / 2;
            context.stroke_line(x1, y, x1 + text_width, y, color, LineStyle::Solid);
        }
    }

    /// Returns the size `text` takes up, or [`Dimension::NULL`] for an empty string.
    pub fn dimension(&self, text: &str) -> Dimension {
        if text.is_empty() {
            return Dimension::NULL;
        }
        self.metrics.measure(&self.font(), text)
    }

    /// Returns the height of one line of text.
    pub fn line_height(&self) -> i32 {
        self.dimension("|").height()
    }

    /// Returns the line height and the space below the baseline for the current font.
    pub fn font_dimension(&self) -> FontDimension {
        let line_height = self.line_height();
        let descent = line_height - self.metrics.baseline_offset(&self.font());
        FontDimension::new(line_height, descent.max(0))
    }

    /// Returns the font selected by the definition and the bold and italic decorations.
    pub fn font(&self) -> Font {
        Font::new(self.definition.font_family(), self.definition.font_size())
            .with_bold(self.decorations.contains(Decoration::Bold))
            .with_italic(self.decorations.contains(Decoration::Italic))
    }
}
