//! hello - prints a banner, host facts, the current time and project info.
//!
//! The library exposes each section renderer so tests can drive them with
//! fixed data; the `hello` binary just wires the CLI to [`report::Reporter`].

pub mod banner;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod project;
pub mod report;
pub mod ui;

pub use error::ReportError;
pub use report::{Report, Reporter};
