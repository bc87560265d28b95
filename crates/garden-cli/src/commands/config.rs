use anyhow::Result;

use garden_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

/// Write the default configuration, leaving an existing file alone
pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }

    AppConfig::default().save()?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}
