//! Line-style definitions.
//!
//! Loom diagrams only distinguish continuous lines from dotted ones (used for
//! lifelines, unterminated activations and dependency edges).
//!
//! # SVG Attribute Mapping
//!
//! | Rust Value | SVG `stroke-dasharray` |
//! |------------|------------------------|
//! | `Solid`    | *(absent)*             |
//! | `Dotted`   | `"3.0 3.0"`            |

/// Defines the visual pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dotted line with equal dash and gap lengths (3px dash, 3px gap)
    Dotted,
}

impl LineStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    ///
    /// # Examples
    ///
    /// ```
    /// use loom_core::draw::LineStyle;
    ///
    /// assert_eq!(LineStyle::Solid.to_svg_value(), None);
    /// assert_eq!(LineStyle::Dotted.to_svg_value(), Some("3.0 3.0"));
    /// ```
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dotted => Some("3.0 3.0"),
        }
    }
}
