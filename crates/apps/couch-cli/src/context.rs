use anyhow::Result;
use couch_core::env::get_base_dir;
use couch_core::{Config, ConfigManager, FilterRegistry, Translator, ViewContext};
use std::path::PathBuf;

/// Everything a command needs to render text: settings, catalogs, filters.
pub struct Context {
    pub config: Config,
    pub translator: Translator,
    pub filters: FilterRegistry,
}

impl Context {
    /// Loads settings, built-in and configured catalogs, then `extra_catalogs`.
    pub fn new(extra_catalogs: &[PathBuf], locale: Option<&str>) -> Result<Self> {
        let base_dir = get_base_dir()?;
        let config = ConfigManager::new(&base_dir)?.config;

        let mut translator = Translator::from_config(&config)?;
        translator.load_files(extra_catalogs)?;
        if let Some(locale) = locale {
            translator.set_locale(locale);
        }

        let filters = FilterRegistry::with_defaults(&config.filter_options())?;
        log::debug!(
            "Locale '{}' (fallback '{}'), {} catalog(s) loaded",
            translator.locale(),
            translator.fallback_locale(),
            translator.available_locales().len()
        );

        Ok(Self {
            config,
            translator,
            filters,
        })
    }

    pub fn view(&self) -> ViewContext<'_> {
        ViewContext::new(&self.filters, &self.translator)
    }
}
