//! Console Reporter: runs the sections in their fixed order
//!
//! banner → host info → date & time → project info → closing lines

use crate::banner::render_banner;
use crate::clock::{render_timestamp, Timestamp};
use crate::config::{OutputMode, ReportConfig};
use crate::error::ReportError;
use crate::host::{render_host_info, HostInfo};
use crate::project::{render_project_info, ProjectInfo, PROJECT};
use crate::ui::{emojis, Painter};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

pub const TIP_LINE: &str = "Tip: Run 'hello' to see this message again!";
pub const GREETING_LINE: &str = "Happy coding with Claude!";

/// Everything one invocation prints
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub host: HostInfo,
    pub timestamp: Timestamp,
    pub project: ProjectInfo,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Gather host facts and read the clock once
    pub fn collect(&self) -> Result<Report, ReportError> {
        let host = HostInfo::collect()?;
        let timestamp = Timestamp::now(self.config.locale);
        debug!(epoch = timestamp.epoch_seconds, week = timestamp.week_number, "clock read");
        Ok(Report {
            host,
            timestamp,
            project: PROJECT,
        })
    }

    /// Collect a fresh report and write it in the configured format
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Report, ReportError> {
        let report = self.collect()?;
        match self.config.output {
            OutputMode::Text => self.render(out, &report)?,
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        info!(output = ?self.config.output, "report written");
        Ok(report)
    }

    /// Write an already collected report as text
    pub fn render<W: Write>(&self, out: &mut W, report: &Report) -> Result<(), ReportError> {
        let painter = Painter::new(self.config.color);
        render_banner(out, &painter)?;
        render_host_info(out, &report.host, &painter)?;
        render_timestamp(out, &report.timestamp, &painter)?;
        render_project_info(out, &report.project, &painter)?;
        writeln!(out, "{} {}", emojis::TIP, TIP_LINE)?;
        writeln!(out, "{} {}", emojis::STAR, GREETING_LINE)?;
        Ok(())
    }
}
