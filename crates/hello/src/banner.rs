//! Startup banner

use crate::ui::Painter;
use std::io::Write;

/// The decorative block printed before anything else
pub const BANNER: &str = "\
╔═══════════════════════════════════════════════════════╗
║                                                       ║
║   🚀 Welcome to Claude Code Practice! 🚀             ║
║                                                       ║
║   Building amazing projects with AI assistance       ║
║                                                       ║
╚═══════════════════════════════════════════════════════╝";

/// Indented empty line closing the banner block
pub const BANNER_TRAILER: &str = "    ";

/// Write the banner: a leading blank line, the box, then the trailer line
pub fn render_banner<W: Write>(out: &mut W, painter: &Painter) -> std::io::Result<()> {
    writeln!(out)?;
    for line in BANNER.lines() {
        writeln!(out, "{}", painter.accent(line))?;
    }
    writeln!(out, "{}", BANNER_TRAILER)?;
    Ok(())
}
