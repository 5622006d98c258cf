pub mod activities;
pub mod config;
pub mod env;
pub mod error;
pub mod filters;
pub mod i18n;
pub mod view;

pub use config::{Config, ConfigManager};
pub use error::{AppError, AppResult};
pub use filters::{AppFilters, Filter, FilterOptions, FilterRegistry};
pub use i18n::{Args, Locale, MessageCatalog, Translator};
pub use view::ViewContext;
