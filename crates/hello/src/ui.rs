//! Terminal output helpers: section headers, tree items and optional color.

use owo_colors::OwoColorize;
use std::io::Write;

/// Emoji markers for each report section
pub mod emojis {
    pub const SYSTEM: &str = "📊";
    pub const TIME: &str = "🕐";
    pub const PROJECT: &str = "📁";
    pub const TIP: &str = "💡";
    pub const STAR: &str = "🌟";
}

/// Tree glyphs for section items
pub mod symbols {
    pub const BRANCH: &str = "├─";
    pub const LAST: &str = "└─";
}

/// Applies styling when color is enabled, passes text through otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn header(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn key(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.color {
            text.bright_magenta().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Write a section header like "📊 System Information:"
pub fn write_section<W: Write>(
    out: &mut W,
    painter: &Painter,
    icon: &str,
    title: &str,
) -> std::io::Result<()> {
    writeln!(out, "{} {}", icon, painter.header(&format!("{}:", title)))
}

/// Write one "  ├─ Key: value" item; `last` closes the tree with └─
pub fn write_item<W: Write>(
    out: &mut W,
    painter: &Painter,
    key: &str,
    value: &str,
    last: bool,
) -> std::io::Result<()> {
    let glyph = if last { symbols::LAST } else { symbols::BRANCH };
    writeln!(
        out,
        "  {} {} {}",
        glyph,
        painter.key(&format!("{}:", key)),
        value
    )
}
