//! Static exports of rendered diagrams.
//!
//! Each exporter is a [`RenderingContext`](loom_core::draw::RenderingContext)
//! backend that accumulates output while node renderers draw on it.

pub mod svg;
