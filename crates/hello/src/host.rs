//! Host facts: OS name and release, toolchain version, CPU architecture

use crate::error::ReportError;
use crate::ui::{self, emojis, Painter};
use serde::Serialize;
use std::io::Write;
use sysinfo::System;
use tracing::debug;

/// Version of the toolchain that built this binary, embedded by build.rs
pub const RUNTIME_VERSION: &str = env!("HELLO_RUSTC_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    pub os_name: String,
    pub os_release: String,
    pub runtime_version: String,
    pub cpu_arch: String,
}

impl HostInfo {
    /// Query the running system.
    ///
    /// The kernel release has no fallback: if the platform cannot report it
    /// the whole report fails with `EnvironmentQuery`.
    pub fn collect() -> Result<Self, ReportError> {
        let os_name = kernel_os_name(std::env::consts::OS);
        let os_release = required("OS release", System::kernel_version())?;
        let cpu_arch = System::cpu_arch()
            .filter(|arch| !arch.trim().is_empty())
            .unwrap_or_else(|| std::env::consts::ARCH.to_string());

        let host = Self {
            os_name,
            os_release,
            runtime_version: RUNTIME_VERSION.to_string(),
            cpu_arch,
        };
        debug!(
            os = %host.os_name,
            release = %host.os_release,
            arch = %host.cpu_arch,
            "host facts collected"
        );
        Ok(host)
    }
}

/// Kernel-level OS name as `uname -s` reports it (Linux, Darwin, Windows),
/// not the distribution name
pub fn kernel_os_name(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn required(what: &str, value: Option<String>) -> Result<String, ReportError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ReportError::EnvironmentQuery(format!("{} unavailable", what))),
    }
}

/// Write the system section: OS, toolchain, architecture
pub fn render_host_info<W: Write>(
    out: &mut W,
    host: &HostInfo,
    painter: &Painter,
) -> std::io::Result<()> {
    ui::write_section(out, painter, emojis::SYSTEM, "System Information")?;
    ui::write_item(
        out,
        painter,
        "OS",
        &format!("{} {}", host.os_name, host.os_release),
        false,
    )?;
    ui::write_item(out, painter, "Rust", &host.runtime_version, false)?;
    ui::write_item(out, painter, "Architecture", &host.cpu_arch, true)?;
    writeln!(out)
}
