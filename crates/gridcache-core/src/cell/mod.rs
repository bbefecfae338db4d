//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Ref`] - A cell's location (e.g., "A1")
//! - [`Range`] - A rectangle of cells (e.g., "A1:B10")
//! - [`Cell`] - The value and formula held by a cell
//! - [`Grid`] - A sparse map of cells keyed by reference text

mod address;
mod value;

pub use address::{column_to_letters, letters_to_column, Range, Ref};
pub use value::{Cell, Grid};
