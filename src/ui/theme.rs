//! Color palette and styling helpers for peek.
//!
//! One fixed green-on-dark theme. All styled text goes through these helpers
//! so the panes and the renderer never touch escape codes directly.

use crossterm::style::{Color, Stylize};

pub const TITLE: Color = Color::Rgb { r: 0x00, g: 0xff, b: 0x66 };
pub const DIR_NAME: Color = Color::Rgb { r: 0x00, g: 0xff, b: 0x66 };
pub const FILE_NAME: Color = Color::Rgb { r: 0x00, g: 0xcc, b: 0x55 };
pub const DOTTED: Color = Color::Rgb { r: 0x00, g: 0x5c, b: 0x2e };
pub const SYMLINK: Color = Color::Rgb { r: 0x00, g: 0xff, b: 0xaa };
pub const SUBTITLE: Color = Color::Rgb { r: 0x00, g: 0x3d, b: 0x1a };
pub const BORDER: Color = Color::Rgb { r: 0x00, g: 0x4d, b: 0x26 };
pub const FOOTER: Color = Color::Rgb { r: 0x00, g: 0x3d, b: 0x1a };
pub const ERROR: Color = Color::Rgb { r: 0xff, g: 0x33, b: 0x34 };

/// Bold panel title (`DIRS` / `FILES`).
pub fn title(text: &str) -> String {
    text.with(TITLE).bold().to_string()
}

/// Dim italic subtitle under an entry name.
pub fn subtitle(text: &str) -> String {
    text.with(SUBTITLE).italic().to_string()
}

/// Box border fragments.
pub fn border(text: &str) -> String {
    text.with(BORDER).to_string()
}

/// Footer count line, also used for the `empty` notice.
pub fn footer(text: &str) -> String {
    text.with(FOOTER).to_string()
}

/// Fatal error message on stderr.
pub fn error(text: &str) -> String {
    text.with(ERROR).to_string()
}

pub fn paint(text: &str, color: Color) -> String {
    text.with(color).to_string()
}

/// Name color for an entry: symlinks win, then hidden, then the dir/file
/// base color.
pub fn name_color(is_dir: bool, hidden: bool, symlink: bool) -> Color {
    if symlink {
        SYMLINK
    } else if hidden {
        DOTTED
    } else if is_dir {
        DIR_NAME
    } else {
        FILE_NAME
    }
}
