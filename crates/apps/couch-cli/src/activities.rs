use anyhow::Result;
use couch_core::activities;

use crate::context::Context;
use crate::ui::Layout;

pub fn handle_activities(ctx: &Context, search: Option<String>) -> Result<()> {
    let layout = Layout::new();
    let query = search.unwrap_or_default();
    let found = activities::find(&query);

    layout.header("activities");
    layout.section_start("ac", &format!("{} of {}", found.len(), activities::all().len()));
    if found.is_empty() {
        layout.item_simple(&format!("Nothing matches '{}'", query));
    }
    for activity in &found {
        // Active catalog first, built-in label otherwise
        let key = format!("allActivities.{}", activity.id);
        let label = ctx
            .translator
            .try_t(&key, &Default::default())
            .unwrap_or_else(|_| activity.label.to_string());
        layout.row_property(activity.id, &label);
    }
    layout.section_end();
    Ok(())
}
