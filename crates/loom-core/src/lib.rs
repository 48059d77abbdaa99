//! Loom Core Types and Drawing Primitives
//!
//! This crate provides the foundational pieces of the Loom UML renderer. It
//! includes:
//!
//! - **Geometry**: Integer points, dimensions and rectangles ([`geometry`] module)
//! - **Grid**: Snapping of coordinates to the diagram grid ([`grid`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: The rendering-backend protocol, fonts, font metrics and
//!   multi-line text layout ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod grid;
