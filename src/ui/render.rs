//! Box rendering and layout arithmetic for peek.
//!
//! Computes panel widths from the terminal size, draws the rounded-border
//! boxes around pane content, and joins the two panels side by side.
//!
//! This module stays pure text-in, text-out: it knows nothing about the
//! filesystem, only [Line]s and widths.

use crate::core::{MAX_NAME_LEN, count_label};
use crate::ui::panes::Line;
use crate::ui::theme;

/// Gap between the two panels.
pub const PANEL_GAP: usize = 2;
/// Narrowest text column a panel will shrink to.
pub const MIN_INNER: usize = 20;
/// Columns consumed per panel by border and horizontal padding.
const CHROME: usize = 6;

/// Text width and name budget for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub inner: usize,
    pub name_max: usize,
}

impl Layout {
    fn for_inner(inner: usize) -> Self {
        let inner = inner.max(MIN_INNER);
        Layout {
            inner,
            name_max: (inner - 2).min(MAX_NAME_LEN),
        }
    }
}

/// Layout for the two-panel view: the width is split evenly around the gap.
pub fn split_layout(term_width: usize) -> Layout {
    let panel_outer = term_width.saturating_sub(PANEL_GAP) / 2;
    Layout::for_inner(panel_outer.saturating_sub(CHROME))
}

/// Layout for the single wide panel used when one side is empty or the
/// directory panel is disabled.
pub fn wide_layout(term_width: usize) -> Layout {
    Layout::for_inner(term_width.saturating_sub(CHROME))
}

/// A rendered box: equal-width styled rows, ready to print or join.
pub struct Panel {
    rows: Vec<String>,
    width: usize,
}

impl Panel {
    /// Draws a bordered panel: rounded corners, one padding row above and
    /// below, a bold title, a blank row, then the content lines. Every row
    /// has the same visible width of `inner + 6` columns.
    pub fn render(title: &str, lines: &[Line], layout: Layout) -> Panel {
        let inner = layout.inner;
        let horizontal = "─".repeat(inner + 4);
        let mut rows = Vec::with_capacity(lines.len() + 6);

        rows.push(theme::border(&format!("╭{}╮", horizontal)));
        rows.push(Self::blank_row(inner));
        let title_line = Line::styled(title, theme::title(title));
        rows.push(Self::body_row(&title_line, inner));
        rows.push(Self::blank_row(inner));
        for line in lines {
            rows.push(Self::body_row(line, inner));
        }
        rows.push(Self::blank_row(inner));
        rows.push(theme::border(&format!("╰{}╯", horizontal)));

        Panel {
            rows,
            width: inner + CHROME,
        }
    }

    #[inline]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    fn body_row(line: &Line, inner: usize) -> String {
        // Lines wider than the panel never happen (names are pre-truncated),
        // but saturate rather than panic if one slips through.
        let pad = inner.saturating_sub(line.width);
        format!(
            "{}  {}{}  {}",
            theme::border("│"),
            line.text,
            " ".repeat(pad),
            theme::border("│"),
        )
    }

    fn blank_row(inner: usize) -> String {
        Self::body_row(&Line::empty(), inner)
    }
}

/// Joins two panels side by side, top-aligned. When the shorter panel runs
/// out of rows it is padded with blanks of its own width so the other
/// panel's column stays put.
pub fn join_horizontal(left: &Panel, right: &Panel, gap: usize) -> String {
    let height = left.height().max(right.height());
    let gap = " ".repeat(gap);
    let mut out = String::new();
    for i in 0..height {
        match left.rows().get(i) {
            Some(row) => out.push_str(row),
            None => out.push_str(&" ".repeat(left.width())),
        }
        out.push_str(&gap);
        if let Some(row) = right.rows().get(i) {
            out.push_str(row);
        }
        out.push('\n');
    }
    out.pop();
    out
}

/// Footer line under the panels: `  2 dirs, 5 files`. Zero counts are left
/// out entirely.
pub fn footer_line(dir_count: usize, file_count: usize) -> String {
    let mut parts = Vec::with_capacity(2);
    if dir_count > 0 {
        parts.push(count_label(dir_count, "dir"));
    }
    if file_count > 0 {
        parts.push(count_label(file_count, "file"));
    }
    format!("  {}", theme::footer(&parts.join(", ")))
}
