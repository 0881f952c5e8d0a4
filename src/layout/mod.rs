//! Layout engine for computing node positions
//!
//! This module takes a [`Tree`](crate::tree::Tree) and computes a tidy
//! top-down layout, producing a [`TreeLayout`] with one position and label
//! box per node plus the overall [`TreeSize`].

pub mod config;
pub mod engine;
pub mod error;
pub mod measure;
pub mod types;

pub use config::{LayoutConfig, SEPARATION_RANGE};
pub use engine::compute;
pub use error::LayoutError;
pub use measure::{EstimatedMeasurer, TextBox, TextMeasurer};
pub use types::*;
