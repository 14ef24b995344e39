//! Build script for hello.
//!
//! Sets:
//! - HELLO_RUSTC_VERSION: version token of the compiling toolchain (e.g. 1.78.0)
//! - HELLO_BUILD_DATE: UTC build date

use std::env;
use std::process::Command;

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    // "rustc 1.78.0 (9b00956e5 2024-04-29)" -> "1.78.0"
    let rustc_version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();

    println!("cargo:rustc-env=HELLO_RUSTC_VERSION={}", rustc_version);
    println!("cargo:rustc-env=HELLO_BUILD_DATE={}", build_date);

    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-changed=build.rs");
}
