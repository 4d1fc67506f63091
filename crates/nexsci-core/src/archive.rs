//! Fetching the archive table and reading it through a single cache file.

use crate::error::{Error, Result};
use crate::group::GroupSelection;
use crate::query::{self, ARCHIVE_URL};
use crate::schema::{ColumnCatalog, SCHEMA_URL, SchemaResolver, UncertaintyCatalog};
use crate::table::{HOSTNAME_COLUMN, LETTER_COLUMN, PlanetTable};
use crate::transit::TransitParameterSet;
use nexsci_fetch::TextSource;
use std::path::Path;

pub const DEFAULT_LETTER: &str = "b";

const ERROR_PREFIX: &str = "ERROR";

/// Endpoints for the documentation page and the table API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveUrls {
    pub schema: String,
    pub archive: String,
}

impl Default for ArchiveUrls {
    fn default() -> Self {
        Self {
            schema: SCHEMA_URL.to_string(),
            archive: ARCHIVE_URL.to_string(),
        }
    }
}

/// Entry point for querying the archive through an injected [`TextSource`].
pub struct Archive<C: TextSource> {
    client: C,
    urls: ArchiveUrls,
}

impl<C: TextSource> Archive<C> {
    pub fn new(client: C) -> Self {
        Self::with_urls(client, ArchiveUrls::default())
    }

    pub fn with_urls(client: C, urls: ArchiveUrls) -> Self {
        Self { client, urls }
    }

    pub fn urls(&self) -> &ArchiveUrls {
        &self.urls
    }

    pub fn schema(&self) -> SchemaResolver<&C> {
        SchemaResolver::with_url(&self.client, self.urls.schema.as_str())
    }

    /// Both catalogs from a single read of the documentation page.
    pub fn catalogs(&self) -> Result<(ColumnCatalog, UncertaintyCatalog)> {
        let doc = self.schema().fetch_document()?;
        Ok((
            ColumnCatalog::from_document(&doc)?,
            UncertaintyCatalog::from_document(&doc)?,
        ))
    }

    pub fn download_url(&self, selection: GroupSelection) -> Result<String> {
        let (catalog, unc) = self.catalogs()?;
        let url = query::build_download_url(&self.urls.archive, &catalog, &unc, selection);
        tracing::debug!(%selection, %url, "built download url");
        Ok(url)
    }

    /// One read of `url`, parsed as CSV. No retry.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] on transport failure, on a CSV parse failure, on an
    /// `ERROR` body (the API reports bad queries with HTTP 200), and when the
    /// header carries none of the columns named in the `select=` clause.
    pub fn fetch_table(&self, url: &str) -> Result<PlanetTable> {
        tracing::info!(archive = %self.urls.archive, "downloading data");
        let text = self.client.get_text(url).map_err(Error::fetch)?;

        if text.trim_start().starts_with(ERROR_PREFIX) {
            return Err(Error::Fetch(format!(
                "archive rejected the query: {}",
                error_message(&text)
            )));
        }

        let table = PlanetTable::from_csv(&text).map_err(Error::fetch)?;
        let requested = requested_columns(url);
        if !requested.is_empty() && !requested.iter().any(|c| table.has_column(c)) {
            return Err(Error::Fetch(format!(
                "response has none of the requested columns, header is [{}]",
                table.headers().join(",")
            )));
        }
        Ok(table)
    }

    /// Read-through cache keyed only by `path`.
    ///
    /// A missing file is always fetched and written; an existing file is
    /// re-fetched and overwritten when `force_refresh` is set and read as-is
    /// otherwise, without touching the network. There is no staleness check.
    ///
    /// # Errors
    ///
    /// Any failure is logged and returned as [`Error::Download`] wrapping the
    /// cause; callers should treat it as terminal.
    pub fn download_or_cache(
        &self,
        selection: GroupSelection,
        path: &Path,
        force_refresh: bool,
    ) -> Result<PlanetTable> {
        let attempt = || -> Result<PlanetTable> {
            if path.is_file() && !force_refresh {
                tracing::debug!(path = %path.display(), "reading cached table");
                let text = nexsci_fetch::read_to_string(path).map_err(|source| Error::Cache {
                    path: path.to_path_buf(),
                    source,
                })?;
                return PlanetTable::from_csv(&text)
                    .map_err(|e| Error::Fetch(format!("{}: {e}", path.display())));
            }

            let table = self.fetch_table(&self.download_url(selection)?)?;
            let bytes = table.to_csv().map_err(Error::fetch)?;
            nexsci_fetch::atomic_write(path, &bytes).map_err(|source| Error::Cache {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), rows = table.len(), "saved table");
            Ok(table)
        };

        attempt().map_err(|e| {
            tracing::error!(error = %e, "download attempt unsuccessful");
            Error::Download(Box::new(e))
        })
    }

    /// Rows whose host name and planet letter match exactly.
    ///
    /// # Errors
    ///
    /// [`Error::NoMatch`] when no row matches.
    pub fn query_row(
        &self,
        hostname: &str,
        selection: GroupSelection,
        letter: &str,
        path: &Path,
        force_refresh: bool,
    ) -> Result<PlanetTable> {
        let table = self.download_or_cache(selection, path, force_refresh)?;
        select_planet(&table, hostname, letter)
    }

    /// Transit parameters for `hostname`/`letter` from the full ("all") table.
    pub fn transit_parameters(
        &self,
        hostname: &str,
        letter: &str,
        path: &Path,
        force_refresh: bool,
    ) -> Result<TransitParameterSet> {
        let rows = self.query_row(hostname, GroupSelection::All, letter, path, force_refresh)?;
        if rows.len() > 1 {
            tracing::warn!(hostname, letter, rows = rows.len(), "several rows match, using the first");
        }
        let row = rows.row(0).ok_or_else(|| Error::NoMatch {
            hostname: hostname.to_string(),
            letter: letter.to_string(),
        })?;
        TransitParameterSet::from_row(&row)
    }
}

/// Column names listed after `&select=`.
fn requested_columns(url: &str) -> Vec<&str> {
    url.split_once("&select=")
        .map(|(_, select)| select.split(',').filter(|name| !name.is_empty()).collect())
        .unwrap_or_default()
}

/// Non-empty lines of an error body joined on one line, markup removed.
fn error_message(text: &str) -> String {
    text.lines()
        .map(|line| line.replace("<br>", " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filter `table` down to one planet.
///
/// Cells are trimmed when the table is read, so `hostname` and `letter` are
/// trimmed too before the exact comparison.
pub fn select_planet(table: &PlanetTable, hostname: &str, letter: &str) -> Result<PlanetTable> {
    for column in [HOSTNAME_COLUMN, LETTER_COLUMN] {
        if !table.has_column(column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }

    let (hostname, letter) = (hostname.trim(), letter.trim());
    let rows = table.filter(|row| {
        row.get(HOSTNAME_COLUMN) == Some(hostname) && row.get(LETTER_COLUMN) == Some(letter)
    });

    if rows.is_empty() {
        return Err(Error::NoMatch {
            hostname: hostname.to_string(),
            letter: letter.to_string(),
        });
    }
    Ok(rows)
}
