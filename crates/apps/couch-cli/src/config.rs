use anyhow::Result;
use couch_core::env::get_base_dir;
use couch_core::{Config, ConfigManager};

use crate::ui::Layout;

pub fn handle_config(get: Option<String>, set: Option<String>, reset: bool) -> Result<()> {
    let layout = Layout::new();
    let base_dir = get_base_dir()?;
    let mut manager = ConfigManager::new(&base_dir)?;

    if reset {
        layout.header("config");
        manager.reset()?;
        layout.success("Config reset to defaults");
        return Ok(());
    }

    if let Some(key) = get {
        match manager.config.get(&key) {
            Ok(value) => println!("{}", value),
            Err(e) => layout.error(&e.to_string()),
        }
        return Ok(());
    }

    if let Some(key_value) = set {
        let Some((key, value)) = key_value.split_once('=') else {
            layout.error("Usage: couch config --set key=value");
            return Ok(());
        };
        layout.header("config");
        match manager.set(key.trim(), value.trim()) {
            Ok(()) => layout.success(&format!("Set {} = {}", key.trim(), value.trim())),
            Err(e) => layout.error(&e.to_string()),
        }
        return Ok(());
    }

    layout.header("configuration");
    layout.section_start("cf", "Current Settings");
    for key in Config::KEYS {
        layout.row_property(key, &manager.config.get(key)?);
    }
    layout.section_end();
    layout.footer(&format!("File: {}", manager.path().display()));
    layout.footer("Use 'couch config --set key=value' to change settings");
    Ok(())
}
