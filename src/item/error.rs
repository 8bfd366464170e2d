use std::path::PathBuf;
use thiserror::Error;

use super::definition::ItemId;

/// Errors raised while loading or querying the item catalog
///
/// All of these are data-integrity failures: every valid item id comes
/// from the catalog itself, so callers abort startup rather than recover.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("unable to read item catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source isn't a valid list of item records (includes unknown fields)
    #[error("malformed item catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share an id
    #[error("item id {0} is defined more than once")]
    DuplicateId(ItemId),

    /// A record has a blank display name
    #[error("item {0} has an empty name")]
    EmptyName(ItemId),

    /// Lookup of an id the catalog doesn't contain
    #[error("item id {0} not found in catalog")]
    NotFound(ItemId),
}
