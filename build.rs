//! Build script for spotivault.
//!
//! Copies the configuration template into the user's local data directory
//! during compilation, so a fresh install finds a ready-to-edit
//! `.env.example` next to where the application expects its `.env`.
//!
//! Destination:
//! - Linux: `~/.local/share/spotivault/.env.example`
//! - macOS: `~/Library/Application Support/spotivault/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotivault/.env.example`
//!
//! A missing template only produces a cargo warning; directory creation or
//! copy failures abort the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotivault");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
