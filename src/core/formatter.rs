//! Sorting and display formatting for peek entries.
//!
//! The [Listing] struct splits one directory scan into the two panel lists
//! and applies their ordering rules: directories by case-insensitive name,
//! files by decreasing size.
//!
//! Also holds the free formatting functions used by the panes: human-readable
//! sizes, width-aware name truncation, subtitles, and count labels.

use crate::core::Entry;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard cap on the name column, regardless of panel width.
pub const MAX_NAME_LEN: usize = 40;

const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// The two panel lists produced from one directory scan.
pub struct Listing {
    dirs: Vec<Entry>,
    files: Vec<Entry>,
}

impl Listing {
    /// Splits scanned entries into the dir and file lists and sorts them.
    /// With `files_only`, directories are dropped entirely, so they neither
    /// render nor show up in the footer count.
    pub fn from_entries(entries: Vec<Entry>, files_only: bool) -> Self {
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            if entry.is_dir() {
                if !files_only {
                    dirs.push(entry);
                }
            } else {
                files.push(entry);
            }
        }
        dirs.sort_by(|a, b| {
            a.name_str()
                .to_lowercase()
                .cmp(&b.name_str().to_lowercase())
        });
        files.sort_by(|a, b| b.size().cmp(&a.size()));
        Listing { dirs, files }
    }

    #[inline]
    pub fn dirs(&self) -> &[Entry] {
        &self.dirs
    }

    #[inline]
    pub fn files(&self) -> &[Entry] {
        &self.files
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    /// Terminal rows a full render would need: two rows per entry in the
    /// taller list, plus box chrome and margins.
    pub fn needed_height(&self) -> usize {
        2 * self.dirs.len().max(self.files.len()) + 10
    }
}

/// Formats a byte count with 1024-based units (B, K, M, G, T).
///
/// Sizes below 1 K print as integer bytes, values below 10 in their unit keep
/// one decimal, larger values truncate to an integer. Values beyond T stay
/// in T.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if value >= 10.0 {
        format!("{} {}", value as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Truncates a name to a display-width budget, appending `…` when cut.
///
/// Width is measured in terminal columns (unicode-width), so wide glyphs
/// count as two and multi-byte names are never cut mid-character. The budget
/// never drops below 4 columns.
pub fn truncate_name(name: &str, max: usize) -> String {
    let max = max.max(4);
    if name.width() <= max {
        return name.to_string();
    }
    let budget = max - 1;
    let mut out = String::with_capacity(budget + 3);
    let mut used = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pluralized count label: `1 dir`, `3 files`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Subtitle line under a directory name: `empty`, or its immediate child
/// counts like `2 dirs, 1 file`.
pub fn dir_subtitle(sub_dirs: usize, sub_files: usize) -> String {
    if sub_dirs == 0 && sub_files == 0 {
        return "empty".to_string();
    }
    let mut parts = Vec::with_capacity(2);
    if sub_dirs > 0 {
        parts.push(count_label(sub_dirs, "dir"));
    }
    if sub_files > 0 {
        parts.push(count_label(sub_files, "file"));
    }
    parts.join(", ")
}
