//! Backend-agnostic drawing for diagram elements.
//!
//! The [`RenderingContext`] trait is the seam between the layout code and the
//! rendering backends: node renderers describe what to draw as calls on a
//! context, and each backend (an interactive surface, an SVG document, a test
//! recorder) decides how to realize them.
//!
//! Text is laid out by [`StringRenderer`], which measures strings through an
//! injected [`FontMetrics`] provider.

mod context;
mod font;
pub mod markup;
mod recording;
mod stroke;
mod text;

pub use context::{DropShadow, Path, PathElement, RenderingContext};
pub use font::{ApproximateMetrics, CosmicTextMetrics, Font, FontDimension, FontMetrics};
pub use recording::{DrawCommand, RecordingContext};
pub use stroke::LineStyle;
pub use text::{Decoration, Decorations, StringRenderer, TextDefinition};
