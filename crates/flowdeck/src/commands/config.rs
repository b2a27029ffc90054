use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = Config::load_or_default();
    println!("{}", "Flowdeck configuration".bold());
    println!(
        "  {} {}",
        "defaults.theme:".dimmed(),
        config.theme_name()
    );
    println!(
        "  {} {} ms",
        "defaults.speed_ms:".dimmed(),
        config.speed_ms()
    );
    println!(
        "  {} {}",
        "icons.dir:".dimmed(),
        config.icons_dir().display()
    );
    match Config::path() {
        Ok(path) if path.exists() => println!("\nLoaded from {}", path.display()),
        Ok(path) => println!("\nNo config file yet; defaults shown. Path: {}", path.display()),
        Err(_) => {}
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
