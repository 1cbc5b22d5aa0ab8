//! Build script for chapterbeats.
//!
//! Places the `.env.example` template next to the location where
//! `config::load_env` looks for the real `.env` file, so a fresh install
//! has a ready-to-edit configuration:
//!
//! - Linux: `~/.local/share/chapterbeats/.env.example`
//! - macOS: `~/Library/Application Support/chapterbeats/.env.example`
//! - Windows: `%LOCALAPPDATA%/chapterbeats/.env.example`

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let template = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(".env.example");

    let mut target_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    target_dir.push("chapterbeats");

    if !template.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
        return Ok(());
    }

    // A read-only data dir (sandboxed builds) must not break compilation.
    if let Err(e) = fs::create_dir_all(&target_dir)
        .and_then(|_| fs::copy(&template, target_dir.join(".env.example")).map(|_| ()))
    {
        println!(
            "cargo:warning=could not install .env.example into {}: {}",
            target_dir.display(),
            e
        );
    }

    Ok(())
}
