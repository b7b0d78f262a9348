//! Vexel Core
//!
//! This crate contains the shared foundation for the Vexel 2D geometry
//! toolkit: the RGBA [`Color`] type used by fill/stroke styles and
//! structured-logging initialization.

pub mod color;
pub mod logging;

pub use color::Color;
