//! Version command implementation

use corvus::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("{}", version_text());
    Ok(())
}

fn version_text() -> String {
    format!(
        "{} {}\n\nBuild info:\n  Minimum Rust version: {}\n  Profile: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_RUST_VERSION"),
        build_profile()
    )
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
