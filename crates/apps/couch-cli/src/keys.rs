use anyhow::Result;

use crate::context::Context;
use crate::ui::Layout;

pub fn handle_keys(ctx: &Context, prefix: Option<String>) -> Result<()> {
    let layout = Layout::new();
    let locale = ctx.translator.locale();
    let Some(catalog) = ctx.translator.catalog(locale) else {
        layout.error(&format!("No catalog loaded for locale '{}'", locale));
        return Ok(());
    };

    let prefix = prefix.unwrap_or_default();
    for key in catalog.keys().iter().filter(|k| k.starts_with(&prefix)) {
        println!("{}", key);
    }
    Ok(())
}
