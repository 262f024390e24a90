//! Primitive Components
//!
//! Basic building blocks the form fields compose.

pub mod checkbox;
pub mod text_input;
pub mod textarea;
