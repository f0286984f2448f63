use anyhow::Result;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    println!(
        "File exists: {}\n",
        if config_path.exists() {
            "yes"
        } else {
            "no (using defaults)"
        }
    );

    println!("Settings:");
    println!("  data_path: {}", config.data_path.display());
    println!("  strict: {}", config.strict);

    println!("\nPriority: CLI args > ENV vars (FEST_*) > Config file > Defaults");

    Ok(())
}

pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure festivals.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
