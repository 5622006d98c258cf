use super::{builtin, builtin_locales, interpolate, Args, Locale, MessageCatalog};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::path::Path;

/// Resolves dotted keys to localized text.
///
/// Lookup order is the active locale, then the fallback locale. A key that
/// resolves to a group instead of a string counts as missing.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    fallback: Locale,
    catalogs: HashMap<Locale, MessageCatalog>,
}

impl Translator {
    /// Translator preloaded with every built-in catalog.
    pub fn new(locale: impl Into<Locale>, fallback: impl Into<Locale>) -> Self {
        let mut translator = Self::empty(locale, fallback);
        for tag in builtin_locales() {
            let locale = Locale::new(tag);
            if let Some(catalog) = builtin(&locale) {
                translator.add_catalog(locale, catalog.clone());
            }
        }
        translator
    }

    pub fn empty(locale: impl Into<Locale>, fallback: impl Into<Locale>) -> Self {
        Self {
            locale: locale.into(),
            fallback: fallback.into(),
            catalogs: HashMap::new(),
        }
    }

    /// Built-in catalogs plus every file listed in `config.catalog_files`.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let mut translator = Self::new(config.locale.as_str(), config.fallback_locale.as_str());
        translator.load_files(&config.catalog_files)?;
        Ok(translator)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<Locale>) {
        self.locale = locale.into();
    }

    pub fn fallback_locale(&self) -> &Locale {
        &self.fallback
    }

    /// Locales with at least one catalog, sorted.
    pub fn available_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<_> = self.catalogs.keys().cloned().collect();
        locales.sort();
        locales
    }

    pub fn catalog(&self, locale: &Locale) -> Option<&MessageCatalog> {
        self.catalogs.get(locale)
    }

    /// Adds `catalog` to `locale`, merging over anything already loaded.
    pub fn add_catalog(&mut self, locale: impl Into<Locale>, catalog: MessageCatalog) {
        self.catalogs
            .entry(locale.into())
            .or_default()
            .merge(catalog);
    }

    /// Loads JSON catalogs; each file's stem names its locale (`fr.json`).
    pub fn load_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> AppResult<()> {
        for path in paths {
            let path = path.as_ref();
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "Cannot derive a locale from catalog file name {:?}",
                        path
                    ))
                })?;
            let catalog = MessageCatalog::from_path(path)?;
            log::info!(
                "Loaded {} message(s) for locale '{}' from {}",
                catalog.len(),
                Locale::new(stem),
                path.display()
            );
            self.add_catalog(Locale::new(stem), catalog);
        }
        Ok(())
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(text) = self.catalogs.get(&self.locale).and_then(|c| c.text(key)) {
            return Some(text);
        }
        if self.fallback == self.locale {
            return None;
        }
        let text = self.catalogs.get(&self.fallback).and_then(|c| c.text(key))?;
        log::debug!(
            "'{}' missing in locale '{}', using fallback '{}'",
            key,
            self.locale,
            self.fallback
        );
        Some(text)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn try_t(&self, key: &str, args: &Args) -> AppResult<String> {
        self.lookup(key)
            .map(|text| interpolate(text, args))
            .ok_or_else(|| AppError::MissingTranslation {
                locale: self.locale.to_string(),
                key: key.to_string(),
            })
    }

    /// Like [`Translator::try_t`], but a missing key yields the key itself.
    pub fn t(&self, key: &str, args: &Args) -> String {
        match self.try_t(key, args) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{}", e);
                key.to_string()
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::default(), Locale::default())
    }
}
