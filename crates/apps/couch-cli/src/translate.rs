use anyhow::Result;
use couch_core::{AppError, Args};

use crate::context::Context;
use crate::ui::Layout;

pub fn handle_t(ctx: &Context, key: &str, positional: Vec<String>, named: Vec<String>) -> Result<()> {
    let layout = Layout::new();

    let mut args = Args::list(positional);
    for pair in &named {
        let Some((name, value)) = pair.split_once('=') else {
            layout.error(&format!("Expected NAME=VALUE, got '{}'", pair));
            return Ok(());
        };
        args.insert(name.trim(), value);
    }

    match ctx.translator.try_t(key, &args) {
        Ok(text) => println!("{}", text),
        Err(AppError::MissingTranslation { locale, key }) => {
            layout.error(&format!("No message '{}' for locale '{}'", key, locale));
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
