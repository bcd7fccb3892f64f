use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only the viewer links SDL2
    if env::var_os("CARGO_FEATURE_VIEWER").is_none() {
        return;
    }

    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        match homebrew_prefix("sdl2") {
            Ok(prefix) => println!("cargo:rustc-link-search={}/lib", prefix),
            Err(e) => println!("cargo:warning={}; install it with 'brew install sdl2'", e),
        }
    }
}

fn homebrew_prefix(package: &str) -> Result<String, String> {
    let output = Command::new("brew")
        .args(["--prefix", package])
        .output()
        .map_err(|e| format!("Failed to execute brew command: {}", e))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(format!("Package {} not found in homebrew", package))
    }
}
