use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$PAYOUTS_HOME`, or `~/.payouts`.
pub fn payouts_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PAYOUTS_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".payouts"))
}

pub fn ensure_payouts_home() -> Result<PathBuf> {
    let dir = payouts_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
