use anyhow::Result;
use glider_icons::icon_gen::{verify_icons, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

fn main() -> Result<()> {
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("Checking glider icons in: {}", dir.display());
    verify_icons(&dir)?;
    println!("✓ All icons match the glider");
    Ok(())
}
