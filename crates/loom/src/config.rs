//! Configuration types for Loom diagram rendering.
//!
//! This module provides the resolved style a diagram is rendered with. All
//! types implement [`serde::Deserialize`] for loading from external sources;
//! fields that are not set keep their default values.
//!
//! # Overview
//!
//! - [`RenderConfig`] - Top-level configuration combining font and style settings.
//! - [`FontConfig`] - Font family and point size for all diagram text.
//! - [`StyleConfig`] - Stroke, fill, note and text colors.
//!
//! # Example
//!
//! ```
//! # use loom::config::RenderConfig;
//! let config = RenderConfig::default();
//! assert_eq!(config.font().name(), "Arial");
//! assert!(config.style().stroke().is_ok());
//! ```

use serde::Deserialize;

use loom_core::{color::Color, draw::TextDefinition};

use crate::LoomError;

/// Top-level rendering configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Font configuration section.
    #[serde(default)]
    font: FontConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified font and style configurations.
    pub fn new(font: FontConfig, style: StyleConfig) -> Self {
        Self { font, style }
    }

    /// Returns the font configuration.
    pub fn font(&self) -> &FontConfig {
        &self.font
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Builds the base text style for a render pass.
    ///
    /// # Errors
    ///
    /// Returns [`LoomError::Config`] if the text color cannot be parsed.
    pub fn text_definition(&self) -> Result<TextDefinition, LoomError> {
        let color = self.style.text().map_err(LoomError::Config)?;
        Ok(TextDefinition::new(
            self.font.name(),
            self.font.size(),
            color,
        ))
    }
}

/// Font used for all diagram text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    name: String,
    size: u16,
}

impl FontConfig {
    pub fn new(name: impl Into<String>, size: u16) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Returns the font family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the font size in points.
    pub fn size(&self) -> u16 {
        self.size
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::new("Arial", 12)
    }
}

/// Colors used by the node renderers, stored as CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    stroke: String,
    fill: String,
    note_fill: String,
    text: String,
}

impl StyleConfig {
    /// Creates a style from CSS color strings. Colors are validated on access.
    pub fn new(
        stroke: impl Into<String>,
        fill: impl Into<String>,
        note_fill: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            stroke: stroke.into(),
            fill: fill.into(),
            note_fill: note_fill.into(),
            text: text.into(),
        }
    }

    /// Returns the outline [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke(&self) -> Result<Color, String> {
        parse_color("stroke", &self.stroke)
    }

    /// Returns the [`Color`] node bodies are filled with.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn fill(&self) -> Result<Color, String> {
        parse_color("fill", &self.fill)
    }

    /// Returns the [`Color`] notes are filled with.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn note_fill(&self) -> Result<Color, String> {
        parse_color("note fill", &self.note_fill)
    }

    /// Returns the [`Color`] of text and underlines.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn text(&self) -> Result<Color, String> {
        parse_color("text", &self.text)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new("black", "white", "rgb(230, 230, 153)", "black")
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {field} color in config: {err}"))
}
