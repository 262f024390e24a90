//! Shared state accessible across components.

pub mod bindings;

pub use bindings::{ControlEvent, ControlState, FieldBinding, FieldKey, FormBindings};
