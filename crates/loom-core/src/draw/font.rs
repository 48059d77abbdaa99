//! Fonts and font metrics.
//!
//! Text measurement is abstracted behind [`FontMetrics`] so layout code never
//! talks to a font system directly. Two providers are available:
//!
//! - [`CosmicTextMetrics`] shapes text with real system fonts.
//! - [`ApproximateMetrics`] derives every measurement from the font size alone,
//!   which makes the result independent of the fonts installed on the machine.

use std::sync::{Mutex, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::{info, trace};

use crate::geometry::Dimension;

/// Conversion factor from points to pixels at standard DPI.
const POINTS_TO_PIXELS: f32 = 4.0 / 3.0;

/// Line height relative to the pixel font size.
const LINE_SPACING: f32 = 1.15;

/// A concrete font request: family, point size and style flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    family: String,
    size: u16,
    bold: bool,
    italic: bool,
}

impl Font {
    /// Creates a regular (non-bold, non-italic) font.
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the size in points.
    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }
}

/// The vertical metrics of one line of text.
///
/// `baseline_offset` is the distance from the baseline to the bottom of the
/// line box, so it never exceeds `line_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontDimension {
    line_height: i32,
    baseline_offset: i32,
}

impl FontDimension {
    pub fn new(line_height: i32, baseline_offset: i32) -> Self {
        debug_assert!(
            baseline_offset <= line_height,
            "baseline offset {baseline_offset} exceeds line height {line_height}"
        );
        Self {
            line_height,
            baseline_offset,
        }
    }

    pub fn line_height(self) -> i32 {
        self.line_height
    }

    pub fn baseline_offset(self) -> i32 {
        self.baseline_offset
    }
}

/// Measures text for layout.
///
/// Implementations must be pure with respect to their inputs: the same font
/// and text always give the same result.
pub trait FontMetrics {
    /// Returns the size of the rendered text, rounded to whole units.
    ///
    /// Multi-line text is as wide as its widest line and as tall as all of
    /// its lines together.
    fn measure(&self, font: &Font, text: &str) -> Dimension;

    /// Returns the distance between the top of a line and its baseline.
    fn baseline_offset(&self, font: &Font) -> i32;
}

/// Text metrics computed by shaping with `cosmic-text`.
///
/// The `FontSystem` is created once and reused; a mutex serializes callers so
/// each measurement sees a consistent font state.
pub struct CosmicTextMetrics {
    font_system: Mutex<FontSystem>,
}

impl Default for CosmicTextMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CosmicTextMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicTextMetrics").finish_non_exhaustive()
    }
}

impl CosmicTextMetrics {
    /// Loads the system fonts.
    pub fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Shapes `text` and returns `(width, height, ascent)` of the layout in pixels.
    fn shape(&self, font: &Font, text: &str) -> (f32, f32, f32) {
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size_px = f32::from(font.size()) * POINTS_TO_PIXELS;
        let metrics = Metrics::new(font_size_px, font_size_px * LINE_SPACING);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new()
            .family(Family::Name(font.family()))
            .weight(if font.is_bold() {
                Weight::BOLD
            } else {
                Weight::NORMAL
            })
            .style(if font.is_italic() {
                Style::Italic
            } else {
                Style::Normal
            });

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        let mut ascent: Option<f32> = None;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                width = width.max(last.x + last.w);
            }
            ascent.get_or_insert(run.line_y - run.line_top);
            height += metrics.line_height;
        }

        (width, height.max(metrics.line_height), ascent.unwrap_or(font_size_px))
    }
}

impl FontMetrics for CosmicTextMetrics {
    fn measure(&self, font: &Font, text: &str) -> Dimension {
        let (width, height, _) = self.shape(font, text);
        let dimension = Dimension::new(width.round() as i32, height.round() as i32);
        trace!(text = text, width = dimension.width(), height = dimension.height(); "Measured text");
        dimension
    }

    fn baseline_offset(&self, font: &Font) -> i32 {
        let (_, _, ascent) = self.shape(font, "|");
        ascent.round() as i32
    }
}

/// Deterministic metrics derived from the font size.
///
/// Every character advances by the same amount, so results do not depend on
/// the family or on installed fonts. Used for reproducible exports.
///
/// At 12pt a line is 16 units high, the baseline sits 12 units below the top
/// and a regular character advances by 7.2 units.
///
/// # Examples
///
/// ```
/// # use loom_core::draw::{ApproximateMetrics, Font, FontMetrics};
/// let metrics = ApproximateMetrics;
/// let font = Font::new("Arial", 12);
///
/// let size = metrics.measure(&font, "Hello");
/// assert_eq!(size.width(), 36);
/// assert_eq!(size.height(), 16);
/// assert_eq!(metrics.baseline_offset(&font), 12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMetrics;

impl ApproximateMetrics {
    fn line_height(font: &Font) -> i32 {
        (i32::from(font.size()) * 4 + 2) / 3
    }

    fn char_width(font: &Font) -> f32 {
        let width = f32::from(font.size()) * 0.6;
        if font.is_bold() { width * 1.1 } else { width }
    }
}

impl FontMetrics for ApproximateMetrics {
    fn measure(&self, font: &Font, text: &str) -> Dimension {
        let lines: Vec<&str> = text.split('\n').collect();
        let widest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or_default();
        let width = (widest as f32 * Self::char_width(font)).round() as i32;
        Dimension::new(width, lines.len() as i32 * Self::line_height(font))
    }

    fn baseline_offset(&self, font: &Font) -> i32 {
        i32::from(font.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_builders() {
        let font = Font::new("Arial", 12).with_bold(true).with_italic(true);
        assert_eq!(font.family(), "Arial");
        assert_eq!(font.size(), 12);
        assert!(font.is_bold());
        assert!(font.is_italic());

        let regular = Font::new("Arial", 12);
        assert!(!regular.is_bold());
        assert!(!regular.is_italic());
        assert_ne!(regular, font);
    }

    #[test]
    fn test_font_dimension_accessors() {
        let dimension = FontDimension::new(16, 4);
        assert_eq!(dimension.line_height(), 16);
        assert_eq!(dimension.baseline_offset(), 4);
    }

    #[test]
    #[should_panic(expected = "exceeds line height")]
    #[cfg(debug_assertions)]
    fn test_font_dimension_rejects_large_offset() {
        FontDimension::new(10, 11);
    }

    #[test]
    fn test_approximate_metrics_single_line() {
        let font = Font::new("Arial", 12);
        assert_eq!(ApproximateMetrics.measure(&font, "|"), Dimension::new(7, 16));
        assert_eq!(ApproximateMetrics.measure(&font, "Hello"), Dimension::new(36, 16));
    }

    #[test]
    fn test_approximate_metrics_multiline() {
        let font = Font::new("Arial", 12);
        let size = ApproximateMetrics.measure(&font, "a\nlonger\nb");
        assert_eq!(size, Dimension::new(43, 48));
    }

    #[test]
    fn test_approximate_metrics_bold_is_wider() {
        let regular = Font::new("Arial", 12);
        let bold = regular.clone().with_bold(true);
        let text = "Interface";
        assert!(
            ApproximateMetrics.measure(&bold, text).width()
                > ApproximateMetrics.measure(&regular, text).width()
        );
    }

    #[test]
    fn test_approximate_metrics_scales_with_size() {
        let small = Font::new("Arial", 12);
        let large = Font::new("Arial", 24);
        assert_eq!(ApproximateMetrics.measure(&large, "|").height(), 32);
        assert_eq!(ApproximateMetrics.baseline_offset(&large), 24);
        assert!(
            ApproximateMetrics.baseline_offset(&small)
                < ApproximateMetrics.measure(&small, "|").height()
        );
    }

    #[test]
    fn test_cosmic_text_metrics_empty_line_has_height() {
        let metrics = CosmicTextMetrics::new();
        let font = Font::new("sans-serif", 12);
        let size = metrics.measure(&font, "");
        assert_eq!(size.width(), 0);
        assert!(size.height() > 0);
    }

    #[test]
    fn test_cosmic_text_metrics_more_lines_are_taller() {
        let metrics = CosmicTextMetrics::new();
        let font = Font::new("sans-serif", 12);
        let one = metrics.measure(&font, "Line");
        let two = metrics.measure(&font, "Line\nLine");
        assert!(two.height() > one.height());
        assert!(metrics.baseline_offset(&font) <= one.height());
    }
}
