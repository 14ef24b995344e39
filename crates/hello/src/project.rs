//! Static project metadata

use crate::ui::{self, emojis, Painter};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: &'static str,
    pub branch: &'static str,
    pub purpose: &'static str,
    pub status: &'static str,
}

pub const PROJECT: ProjectInfo = ProjectInfo {
    name: "Claude Code Practice",
    branch: "claude/improve-branch-naming-01Bj2CthHw3aB9JU8Nk9wACE",
    purpose: "Learning and experimenting with Claude Code",
    status: "✨ Active Development",
};

/// Write the project section: name, branch, purpose, status
pub fn render_project_info<W: Write>(
    out: &mut W,
    project: &ProjectInfo,
    painter: &Painter,
) -> std::io::Result<()> {
    ui::write_section(out, painter, emojis::PROJECT, "Project Information")?;
    ui::write_item(out, painter, "Name", project.name, false)?;
    ui::write_item(out, painter, "Branch", project.branch, false)?;
    ui::write_item(out, painter, "Purpose", project.purpose, false)?;
    ui::write_item(out, painter, "Status", project.status, true)?;
    writeln!(out)
}
