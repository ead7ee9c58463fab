//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("diffbase {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  libgit2: {}", libgit2_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn libgit2_version() -> String {
    let (major, minor, patch) = git2::Version::get().libgit2_version();
    format!("{major}.{minor}.{patch}")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
