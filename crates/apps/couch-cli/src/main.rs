use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod activities;
mod config;
mod context;
mod filter;
mod info;
mod keys;
mod render;
mod translate;
mod ui;

#[derive(Parser)]
#[command(name = "couch")]
#[command(version)]
#[command(about = "couchsport - localized text and display filters", long_about = None)]
#[command(styles = styles())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Extra JSON catalog to load; the file stem names the locale
    #[arg(short, long, global = true)]
    catalog: Vec<PathBuf>,

    /// Override the configured locale
    #[arg(short, long, global = true)]
    locale: Option<String>,
}

fn styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Styles};
    Styles::styled()
        .header(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .usage(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Translate a message key")]
    T {
        key: String,
        args: Vec<String>,
        #[arg(long, short = 'n', value_name = "NAME=VALUE")]
        named: Vec<String>,
    },
    #[command(about = "Run a value through a filter chain, e.g. \"shorten(5) | capitalize\"")]
    Filter { chain: String, value: Option<String> },
    #[command(about = "List sport activities")]
    Activities {
        #[arg(long, short)]
        search: Option<String>,
    },
    #[command(about = "Render a template against JSON data")]
    Render {
        template: String,
        #[arg(long, short)]
        data: Option<String>,
    },
    #[command(about = "List message keys")]
    Keys { prefix: Option<String> },
    #[command(about = "Manage configuration")]
    Config {
        #[arg(long, short)]
        get: Option<String>,
        #[arg(long, short)]
        set: Option<String>,
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::opt_format)
        .start()?;

    let cli = Cli::parse();
    let load = || context::Context::new(&cli.catalog, cli.locale.as_deref());

    match cli.command {
        Some(Commands::T { key, args, named }) => translate::handle_t(&load()?, &key, args, named),
        Some(Commands::Filter { chain, value }) => filter::handle_filter(&load()?, &chain, value),
        Some(Commands::Activities { search }) => activities::handle_activities(&load()?, search),
        Some(Commands::Render { template, data }) => {
            render::handle_render(&load()?, &template, data)
        }
        Some(Commands::Keys { prefix }) => keys::handle_keys(&load()?, prefix),
        Some(Commands::Config { get, set, reset }) => config::handle_config(get, set, reset),
        None => info::handle_info(&load()?),
    }
}
