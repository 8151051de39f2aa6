//! Panel content builders for peek.
//!
//! Turns the sorted entry lists into styled [Line]s: one name row and one
//! subtitle row per entry. Layout and borders live in [crate::ui::render].

use crate::core::{Entry, dir_subtitle, human_size, truncate_name};
use crate::ui::theme;

use unicode_width::UnicodeWidthStr;

/// A styled line plus its visible width.
///
/// The text carries ANSI escapes, so the renderer pads from `width` instead
/// of the string length.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub width: usize,
}

impl Line {
    pub fn styled(plain: &str, styled: String) -> Self {
        Line {
            text: styled,
            width: plain.width(),
        }
    }

    pub fn empty() -> Self {
        Line {
            text: String::new(),
            width: 0,
        }
    }
}

fn name_line(entry: &Entry, name_max: usize) -> Line {
    let name = truncate_name(&entry.name_str(), name_max);
    let color = theme::name_color(entry.is_dir(), entry.is_hidden(), entry.is_symlink());
    Line::styled(&name, theme::paint(&name, color))
}

/// Lines for the DIRS panel: name plus child-count subtitle per directory.
pub fn dir_lines(dirs: &[Entry], name_max: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(dirs.len() * 2);
    for dir in dirs {
        lines.push(name_line(dir, name_max));
        let sub = dir_subtitle(dir.sub_dirs(), dir.sub_files());
        lines.push(Line::styled(&sub, theme::subtitle(&sub)));
    }
    lines
}

/// Lines for the FILES panel: name plus human-readable size per file.
pub fn file_lines(files: &[Entry], name_max: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(files.len() * 2);
    for file in files {
        lines.push(name_line(file, name_max));
        let size = human_size(file.size());
        lines.push(Line::styled(&size, theme::subtitle(&size)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn entry(name: &str, flags: u8, size: u64) -> Entry {
        Entry::new(OsString::from(name), flags, size, None)
    }

    #[test]
    fn two_lines_per_entry() {
        let files = vec![entry("a.txt", 0, 2048), entry("b.txt", 0, 0)];
        let lines = file_lines(&files, 20);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].text.contains("2.0 K"));
        assert!(lines[3].text.contains("0 B"));
    }

    #[test]
    fn line_width_ignores_escapes() {
        let files = vec![entry("readme.md", 0, 1)];
        let lines = file_lines(&files, 20);
        assert_eq!(lines[0].width, "readme.md".len());
        assert!(lines[0].text.len() > lines[0].width);
    }

    #[test]
    fn names_are_truncated_to_budget() {
        let files = vec![entry("extremely_long_file_name.tar.gz", 0, 1)];
        let lines = file_lines(&files, 10);
        assert_eq!(lines[0].width, 10);
    }
}
