use std::env;
use std::process::Command;

fn main() {
    // Ask the compiler cargo is driving for its version string, so the
    // running binary can report the toolchain it was built with.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "rustc (unknown)".to_string());

    println!("cargo:rustc-env=INFO_SERVER_RUSTC_VERSION={}", version);
}
