//! # gridcache-clipboard
//!
//! Conversion between sparse grids and the tab/newline delimited text used
//! for copy and paste.
//!
//! ```rust
//! use gridcache_clipboard::{grid_to_string, string_to_grid};
//! use gridcache_core::Ref;
//!
//! let grid = string_to_grid(Ref::new(2, 2), "a\tb\nc\td").unwrap();
//! assert_eq!(grid.len(), 4);
//! assert_eq!(grid_to_string(&grid).unwrap(), "a\tb\nc\td");
//! ```

mod error;
mod options;
mod reader;
mod writer;

pub use error::{ClipboardError, ClipboardResult};
pub use options::GridTextOptions;
pub use reader::{string_to_grid, GridTextReader};
pub use writer::{grid_to_string, GridTextWriter};
