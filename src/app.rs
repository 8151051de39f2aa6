//! One-shot application flow for peek.
//!
//! Scan the target, shape the listing, pick a layout for the current
//! terminal, optionally shrink the Alacritty font, render, print. No state
//! outlives the run.

use crate::config::FontScale;
use crate::core::{Listing, scan_dir, size_or_default};
use crate::ui;
use crate::ui::theme;

use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// How long to wait for the terminal to pick up a font change before
/// re-querying its size.
const FONT_SETTLE: Duration = Duration::from_millis(200);

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub show_all: bool,
    pub files_only: bool,
    pub target: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            show_all: false,
            files_only: false,
            target: PathBuf::from("."),
        }
    }
}

/// Runs one full listing pass.
///
/// The only fallible step is reading the target directory; everything after
/// that renders from memory.
pub fn run(opts: &Options) -> io::Result<()> {
    let entries = scan_dir(&opts.target, opts.show_all, !opts.files_only)?;
    let listing = Listing::from_entries(entries, opts.files_only);

    if listing.is_empty() {
        println!("{}", theme::footer("  empty"));
        return Ok(());
    }

    let (mut width, height) = size_or_default();

    // Guard restores the original font size when it drops at end of run.
    let font_guard = FontScale::engage(listing.needed_height(), height);
    if font_guard.is_some() {
        thread::sleep(FONT_SETTLE);
        width = size_or_default().0;
    }

    let block = render_listing(&listing, opts.files_only, width);
    println!("\n{}\n", block);
    println!(
        "{}\n",
        ui::footer_line(listing.dirs().len(), listing.files().len())
    );
    Ok(())
}

/// Renders the panel block: two panels side by side, or a single wide panel
/// when one side is empty or directories are disabled.
fn render_listing(listing: &Listing, files_only: bool, width: usize) -> String {
    if files_only || listing.dirs().is_empty() {
        let layout = ui::wide_layout(width);
        let lines = ui::file_lines(listing.files(), layout.name_max);
        return ui::Panel::render("FILES", &lines, layout).rows().join("\n");
    }
    if listing.files().is_empty() {
        let layout = ui::wide_layout(width);
        let lines = ui::dir_lines(listing.dirs(), layout.name_max);
        return ui::Panel::render("DIRS", &lines, layout).rows().join("\n");
    }

    let layout = ui::split_layout(width);
    let left = ui::Panel::render("DIRS", &ui::dir_lines(listing.dirs(), layout.name_max), layout);
    let right = ui::Panel::render(
        "FILES",
        &ui::file_lines(listing.files(), layout.name_max),
        layout,
    );
    ui::join_horizontal(&left, &right, ui::PANEL_GAP)
}
