//! Error types for formkit
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//!
//! The component layer itself never fails: missing optional props degrade to
//! omitted UI. The only fault surface is the focus-control binding registry.

use snafu::Snafu;

/// Main error type for the library
#[derive(Debug, Snafu)]
pub enum Error {
    /// Lookup of a focus-control binding that was never registered
    #[snafu(display("No binding registered for field {name:?} in form {form:?}"))]
    MissingBinding { form: String, name: String },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
