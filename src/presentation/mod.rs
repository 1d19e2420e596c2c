//! Rendering model for the form's email field.
//!
//! The browser glue owns the DOM; this module owns the decisions. A verdict
//! goes in, one [`FieldRendering`] comes out, and nothing is kept between
//! calls.

pub mod binding;
pub mod render;
pub mod style;

pub use binding::{FieldBinding, FieldHost, MessageRegion, init_validation};
pub use render::{FieldRendering, MessageView, on_blur, render};
pub use style::FieldStyle;
