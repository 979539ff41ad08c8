use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::errors::output_context;

/// Write battles one per line, replacing any existing file
pub fn write_battles<P: AsRef<Path>>(path: P, battles: &[String]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| output_context(path))?;
    }

    fs::write(path, battles.join("\n")).with_context(|| output_context(path))?;

    info!("Wrote {} battles to {}", battles.len(), path.display());
    Ok(())
}
