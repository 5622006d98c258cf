use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::context::Context;

pub fn handle_render(ctx: &Context, template: &str, data: Option<String>) -> Result<()> {
    let data: Value = match data {
        Some(raw) => serde_json::from_str(&raw).context("--data must be a JSON document")?,
        None => Value::Object(Default::default()),
    };
    println!("{}", ctx.view().render(template, &data)?);
    Ok(())
}
