//! Formkit
//!
//! Reusable form-field components for GPUI applications: error-list
//! rendering and labeled input/textarea/checkbox wrappers. Validation,
//! submission, and routing live outside this crate; components only display
//! what callers pass down and notify the focus-control bindings in
//! [`state::bindings`].

pub mod app;
pub mod components;
pub mod error;
pub mod state;
