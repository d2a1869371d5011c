//! Source data: the table to arrange plus read-only lookups.
//!
//! A source directory holds one JSON file per source, named after it:
//! the table (`groups.json` by default), a color lookup keyed by label,
//! and any number of detail lookups whose values serve as tooltips for
//! the column of the same name. A detail lookup's key order can double as
//! the canonical sort order of its column.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::resolver::PermutationResolver;
use crate::types::Table;

/// Which files make up a source directory and how they are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    /// File extension of every source file.
    pub extension: String,
    /// Source holding the table itself (required).
    pub table: String,
    /// Source mapping lowercased labels to CSS colors.
    pub colors: String,
    /// Sources mapping lowercased labels to tooltip text, one per column.
    pub details: Vec<String>,
    /// Column whose label picks the background color of its whole row.
    pub color_column: String,
    /// Columns whose detail lookup key order is their canonical order.
    pub canonical: Vec<String>,
    /// Background used when a row has no color.
    pub default_color: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            table: "groups".to_string(),
            colors: "colors".to_string(),
            details: vec![
                "realms".to_string(),
                "projects".to_string(),
                "months".to_string(),
            ],
            color_column: "colors".to_string(),
            canonical: vec!["months".to_string()],
            default_color: "#000".to_string(),
        }
    }
}

impl SourceConfig {
    /// Read a manifest; missing fields keep their defaults.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `Json` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn path_for(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.{}", self.extension))
    }
}

/// An ordered label → text mapping.
///
/// Keys are matched against lowercased labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lookup {
    entries: Vec<(String, String)>,
}

impl Lookup {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        let key = label.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Lookup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::serde_helpers::ordered_entries(deserializer).map(|entries| Self { entries })
    }
}

/// The read-only lookups of a source directory.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub colors: Option<Lookup>,
    /// `(column, lookup)` pairs in configured order.
    pub details: Vec<(String, Lookup)>,
}

impl Lookups {
    /// Install or replace the detail lookup for `column`.
    pub fn set_detail(&mut self, column: &str, lookup: Lookup) {
        self.details.retain(|(name, _)| name != column);
        self.details.push((column.to_string(), lookup));
    }

    #[must_use]
    pub fn detail(&self, column: &str) -> Option<&Lookup> {
        self.details
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, lookup)| lookup)
    }

    /// Tooltip text for a label in `column`.
    #[must_use]
    pub fn tooltip(&self, column: &str, label: &str) -> Option<&str> {
        self.detail(column)?.get(label)
    }

    #[must_use]
    pub fn color(&self, label: &str) -> Option<&str> {
        self.colors.as_ref()?.get(label)
    }

    /// Canonical orders for the configured columns that have a detail lookup.
    #[must_use]
    pub fn canonical_orders(&self, config: &SourceConfig) -> Vec<(String, Vec<String>)> {
        config
            .canonical
            .iter()
            .filter_map(|column| {
                let lookup = self.detail(column)?;
                Some((column.clone(), lookup.keys().map(str::to_string).collect()))
            })
            .collect()
    }

    /// A resolver preloaded with [`canonical_orders`](Self::canonical_orders).
    #[must_use]
    pub fn resolver(&self, config: &SourceConfig) -> PermutationResolver {
        PermutationResolver::with_canonical_orders(self.canonical_orders(config))
    }
}

/// Load a source directory into its table and lookups.
///
/// Only the table is required. A lookup that is missing or malformed
/// is skipped with a warning.
///
/// # Errors
/// `Io` if the table file cannot be read; `Json`, `Shape`, or
/// `DuplicateColumn` if it does not parse as an aligned table.
pub fn load_dir(dir: &Path, config: &SourceConfig) -> Result<(Table, Lookups)> {
    let table_path = config.path_for(dir, &config.table);
    let text = fs::read_to_string(&table_path)?;
    let table = crate::import::parse_table(&text)?;
    info!(
        path = %table_path.display(),
        columns = table.width(),
        rows = table.height(),
        "loaded table source"
    );

    let colors = read_lookup(&config.path_for(dir, &config.colors));
    let details = config
        .details
        .iter()
        .filter_map(|name| {
            read_lookup(&config.path_for(dir, name)).map(|lookup| (name.clone(), lookup))
        })
        .collect();

    Ok((table, Lookups { colors, details }))
}

fn read_lookup(path: &Path) -> Option<Lookup> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "lookup source absent");
            return None;
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping unreadable lookup source");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(lookup) => Some(lookup),
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping malformed lookup source");
            None
        }
    }
}
