//! Core logic for peek.
//!
//! This module contains the non-UI pieces of the program:
//! - [fm]: the single directory scan (see [scan_dir], [Entry]).
//! - [formatter]: panel ordering and display formatting ([Listing], sizes,
//!   truncation, subtitles).
//! - [terminal]: terminal size query with a sane fallback.
//!
//! Most callers will import [scan_dir], [Entry], and [Listing] from here.

pub mod fm;
pub mod formatter;
pub mod terminal;

pub use fm::{Entry, scan_dir};
pub use formatter::{
    Listing, MAX_NAME_LEN, count_label, dir_subtitle, human_size, truncate_name,
};
pub use terminal::size_or_default;
