use anyhow::Result;
use crossterm::style::Stylize;

use crate::context::Context;
use crate::ui::DIM;

pub fn handle_filter(ctx: &Context, chain: &str, value: Option<String>) -> Result<()> {
    match ctx.filters.apply_chain(value.as_deref(), chain)? {
        Some(out) => println!("{}", out),
        None => println!("{}", "(no output)".with(DIM).italic()),
    }
    Ok(())
}
