use std::path::Path;

use anyhow::Result;

use carousel_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write defaults unless a file is already there
pub fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Configuration already exists at {}", config_path.display());
        return Ok(());
    }

    AppConfig::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "Wrote default configuration");
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
