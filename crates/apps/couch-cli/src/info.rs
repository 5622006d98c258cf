use anyhow::Result;

use crate::context::Context;
use crate::ui::Layout;

pub fn handle_info(ctx: &Context) -> Result<()> {
    let layout = Layout::new();
    let translator = &ctx.translator;

    layout.header("couchsport");
    layout.section_start("lc", "Localization");
    layout.row_property("locale", translator.locale().as_str());
    layout.row_property("fallback", translator.fallback_locale().as_str());
    let locales: Vec<String> = translator
        .available_locales()
        .iter()
        .map(|l| l.to_string())
        .collect();
    layout.row_property("available", &locales.join(", "));
    let messages = translator
        .catalog(translator.locale())
        .map_or(0, |c| c.len());
    layout.row_property("messages", &messages.to_string());
    layout.section_end();

    layout.section_start("fl", "Filters");
    for filter in ctx.filters.iter() {
        layout.row_property(filter.name(), filter.description());
    }
    layout.section_end();
    layout.footer("Run 'couch --help' for commands");
    Ok(())
}
