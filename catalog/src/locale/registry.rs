use crate::error::{CatalogError, CatalogResult};
use crate::locale::builtin::{self, BUILTIN_LOCALES};
use crate::locale::types::{LocaleCode, LocaleMeta, LocaleTable};
use std::collections::BTreeSet;

/// How much of the default locale's key set a locale translates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub code: LocaleCode,
    pub translated: usize,
    pub total: usize,
    /// Keys that fall back to the default locale, sorted.
    pub missing: Vec<String>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Whole percent, rounded down. An empty default locale counts as complete.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.translated * 100) / self.total) as u8
    }
}

/// Fixed catalog of locale tables with the fallback chain
/// active locale, then [`LocaleCode::DEFAULT`], then the key itself.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    tables: Vec<LocaleTable>,
}

impl LocaleRegistry {
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_sources(BUILTIN_LOCALES)
    }

    pub fn from_sources(sources: &[(&str, &str)]) -> CatalogResult<Self> {
        let tables = sources
            .iter()
            .map(|(name, content)| builtin::parse_table(name, content))
            .collect::<CatalogResult<Vec<_>>>()?;
        Self::from_tables(tables)
    }

    /// Order tables by code and check them against the default locale.
    ///
    /// Every code must be defined exactly once, and no locale may define a
    /// key the default locale lacks.
    pub fn from_tables(tables: Vec<LocaleTable>) -> CatalogResult<Self> {
        let mut slots: Vec<Option<LocaleTable>> = vec![None; LocaleCode::ALL.len()];

        for table in tables {
            if table.meta.name.trim().is_empty() {
                return Err(CatalogError::EmptyDisplayName {
                    kind: "locale",
                    id: table.code().to_string(),
                });
            }

            let slot = &mut slots[table.code().index()];
            if slot.is_some() {
                return Err(CatalogError::Duplicate {
                    kind: "locale",
                    id: table.code().to_string(),
                });
            }
            *slot = Some(table);
        }

        let tables = LocaleCode::ALL
            .into_iter()
            .zip(slots)
            .map(|(code, slot)| {
                slot.ok_or_else(|| CatalogError::Missing {
                    kind: "locale",
                    id: code.to_string(),
                })
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        let default = &tables[LocaleCode::DEFAULT.index()];
        for table in &tables {
            let mut extra: Vec<String> = table
                .keys()
                .filter(|key| !default.contains(key))
                .map(str::to_string)
                .collect();
            if !extra.is_empty() {
                extra.sort();
                return Err(CatalogError::KeysOutsideDefault {
                    locale: table.code().to_string(),
                    keys: extra,
                });
            }
        }

        log::debug!("Locale registry assembled with {} locales", tables.len());
        Ok(Self { tables })
    }

    pub fn table(&self, code: LocaleCode) -> &LocaleTable {
        &self.tables[code.index()]
    }

    pub fn meta(&self, code: LocaleCode) -> &LocaleMeta {
        &self.table(code).meta
    }

    /// Locales in declaration order.
    pub fn list(&self) -> impl Iterator<Item = &LocaleMeta> {
        self.tables.iter().map(|table| &table.meta)
    }

    /// Resolve `key` for `code`. Never fails: the last resort is `key` itself.
    pub fn translate<'a>(&'a self, code: LocaleCode, key: &'a str) -> &'a str {
        if let Some(text) = self.table(code).get(key) {
            return text;
        }
        if let Some(text) = self.table(LocaleCode::DEFAULT).get(key) {
            return text;
        }
        log::trace!("No translation for '{key}' in '{code}' or the default locale");
        key
    }

    pub fn coverage(&self, code: LocaleCode) -> Coverage {
        let default = self.table(LocaleCode::DEFAULT);
        let table = self.table(code);

        let missing: BTreeSet<&str> = default.keys().filter(|key| !table.contains(key)).collect();

        Coverage {
            code,
            translated: default.len() - missing.len(),
            total: default.len(),
            missing: missing.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
