//! Rendering layer for peek.
//!
//! - [theme]: the fixed color palette and styling helpers.
//! - [panes]: styled content lines for the DIRS and FILES panels.
//! - [render]: layout arithmetic, box drawing, and the horizontal join.

pub mod panes;
pub mod render;
pub mod theme;

pub use panes::{Line, dir_lines, file_lines};
pub use render::{
    Layout, PANEL_GAP, Panel, footer_line, join_horizontal, split_layout, wide_layout,
};
