//! Application modules

pub mod application;
pub mod gallery;
