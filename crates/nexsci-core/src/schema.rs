//! Column catalogs parsed from the archive's published column documentation.
//!
//! The documentation page carries five tables in a fixed order (default,
//! planet, stellar, photometry, color). Column 0 of each table is the
//! database column name; column 3 describes its uncertainty columns as
//! `(+) <upper> (-) <lower>`.

use crate::error::{Error, Result};
use crate::group::{GroupSelection, ParameterGroup};
use crate::html::{self, HtmlTable};
use nexsci_fetch::TextSource;
use std::collections::HashSet;

pub const SCHEMA_URL: &str =
    "https://exoplanetarchive.ipac.caltech.edu/docs/API_exoplanet_columns.html";

const NAME_COLUMN: usize = 0;
const UNCERTAINTY_COLUMN: usize = 3;

// Footnote dagger, and its UTF-8-read-as-cp1252 form "â€ ".
const ARTIFACT_CHARS: &[char] = &['\u{2020}', '\u{e2}', '\u{20ac}', '\u{a0}'];

const PLUS_MARKER: &str = "(+)";
const MINUS_MARKER: &str = "(-)";

// The documentation misspells the a/Rs upper error column.
const KNOWN_TYPOS: &[(&str, &str)] = &[("pl_ratdorperr1", "pl_ratdorerr1")];

/// Strip stray encoding artifacts and whitespace around a scraped column name.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || ARTIFACT_CHARS.contains(&c))
        .to_string()
}

/// Replace known misspelled column names with the names the archive serves.
pub fn correct_known_typos(names: &mut [String]) {
    for name in names.iter_mut() {
        if let Some((_, fixed)) = KNOWN_TYPOS.iter().find(|(typo, _)| name.as_str() == *typo) {
            *name = (*fixed).to_string();
        }
    }
}

/// Split a `(+) <upper> (-) <lower>` cell into `(upper, lower)`.
///
/// Cells lacking either marker, or with an empty name on either side, give
/// `None`.
pub fn split_uncertainty_cell(cell: &str) -> Option<(String, String)> {
    let plus_at = cell.find(PLUS_MARKER)?;
    let minus_at = cell.find(MINUS_MARKER)?;

    // Each name runs from its marker to the other marker or the end of the cell.
    let segment = |from: usize, other: usize| {
        let to = if other > from { other } else { cell.len() };
        normalize_column_name(&cell[from..to])
    };

    let plus = segment(plus_at + PLUS_MARKER.len(), minus_at);
    let minus = segment(minus_at + MINUS_MARKER.len(), plus_at);
    (!plus.is_empty() && !minus.is_empty()).then_some((plus, minus))
}

/// The parsed documentation page: exactly one table per [`ParameterGroup`].
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    tables: Vec<HtmlTable>,
}

impl SchemaDocument {
    /// Parse the documentation HTML.
    ///
    /// # Errors
    ///
    /// [`Error::SchemaFetch`] when fewer than five tables are present or a
    /// table has no header. Tables past the fifth are ignored.
    pub fn parse(html: &str) -> Result<Self> {
        let mut tables = html::parse_tables(html);
        let expected = ParameterGroup::ALL.len();

        if tables.len() < expected {
            return Err(Error::SchemaFetch(format!(
                "expected {expected} column tables, found {}",
                tables.len()
            )));
        }
        if tables.len() > expected {
            tracing::warn!(
                found = tables.len(),
                "documentation has extra tables, using the first {expected}"
            );
            tables.truncate(expected);
        }

        for (group, table) in ParameterGroup::ALL.iter().zip(&tables) {
            if table.header.is_empty() {
                return Err(Error::SchemaFetch(format!("{group} table has no header row")));
            }
        }

        Ok(Self { tables })
    }

    fn table(&self, group: ParameterGroup) -> &HtmlTable {
        // `parse` guarantees one table per group, in `ParameterGroup::ALL` order.
        &self.tables[group as usize]
    }
}

/// Ordered column names for each of the five groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCatalog {
    groups: Vec<(ParameterGroup, Vec<String>)>,
}

impl ColumnCatalog {
    /// Build a catalog from explicit per-group lists.
    ///
    /// # Errors
    ///
    /// [`Error::SchemaFetch`] unless every group appears exactly once.
    pub fn new(groups: impl IntoIterator<Item = (ParameterGroup, Vec<String>)>) -> Result<Self> {
        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by_key(|(g, _)| *g);
        check_complete(groups.iter().map(|(g, _)| *g), &ParameterGroup::ALL)?;
        Ok(Self { groups })
    }

    pub fn from_document(doc: &SchemaDocument) -> Result<Self> {
        Self::new(ParameterGroup::ALL.map(|group| {
            let names = doc
                .table(group)
                .column(NAME_COLUMN)
                .flatten()
                .map(normalize_column_name)
                .filter(|name| !name.is_empty())
                .collect();
            (group, names)
        }))
    }

    pub fn columns(&self, group: ParameterGroup) -> &[String] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, names)| names.as_slice())
            .unwrap_or_default()
    }

    /// Column names for a selection.
    ///
    /// A single group keeps document order. `All` is the deduplicated union
    /// of every group; its order is first occurrence across groups, which
    /// callers must not rely on.
    pub fn parameter_names(&self, selection: GroupSelection) -> Vec<String> {
        match selection {
            GroupSelection::One(group) => self.columns(group).to_vec(),
            GroupSelection::All => {
                dedup_union(ParameterGroup::ALL.iter().map(|g| self.columns(*g)))
            }
        }
    }
}

/// Upper (`plus`, err1) and lower (`minus`, err2) error column names listed
/// for one group, as parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UncertaintyColumns {
    pub plus: Vec<String>,
    pub minus: Vec<String>,
}

impl UncertaintyColumns {
    /// Upper names followed by lower names.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.plus.iter().chain(self.minus.iter())
    }
}

const UNCERTAINTY_GROUPS: [ParameterGroup; 3] = [
    ParameterGroup::Default,
    ParameterGroup::Planet,
    ParameterGroup::Stellar,
];

/// Error column names for the groups that document them (default, planet,
/// stellar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncertaintyCatalog {
    groups: Vec<(ParameterGroup, UncertaintyColumns)>,
}

impl UncertaintyCatalog {
    /// Build a catalog from explicit per-group lists, applying the known typo
    /// corrections.
    ///
    /// # Errors
    ///
    /// [`Error::SchemaFetch`] unless exactly default, planet and stellar are
    /// present.
    pub fn new(
        groups: impl IntoIterator<Item = (ParameterGroup, UncertaintyColumns)>,
    ) -> Result<Self> {
        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by_key(|(g, _)| *g);
        check_complete(groups.iter().map(|(g, _)| *g), &UNCERTAINTY_GROUPS)?;

        for (_, cols) in groups.iter_mut() {
            correct_known_typos(&mut cols.minus);
            correct_known_typos(&mut cols.plus);
        }
        Ok(Self { groups })
    }

    pub fn from_document(doc: &SchemaDocument) -> Result<Self> {
        let mut groups = Vec::with_capacity(UNCERTAINTY_GROUPS.len());

        for group in UNCERTAINTY_GROUPS {
            let table = doc.table(group);
            if table.header.len() <= UNCERTAINTY_COLUMN {
                return Err(Error::SchemaFetch(format!(
                    "{group} table has no uncertainty column"
                )));
            }

            let mut cols = UncertaintyColumns::default();
            for (plus, minus) in table
                .column(UNCERTAINTY_COLUMN)
                .flatten()
                .filter_map(split_uncertainty_cell)
            {
                cols.plus.push(plus);
                cols.minus.push(minus);
            }

            if cols.plus.is_empty() {
                return Err(Error::SchemaFetch(format!(
                    "{group} table lists no (+)/(-) uncertainty columns"
                )));
            }
            groups.push((group, cols));
        }

        Self::new(groups)
    }

    /// `None` for photometry and color.
    pub fn get(&self, group: ParameterGroup) -> Option<&UncertaintyColumns> {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, cols)| cols)
    }

    /// Same contract as [`ColumnCatalog::parameter_names`]; photometry and
    /// color give an empty list.
    pub fn parameter_names(&self, selection: GroupSelection) -> Vec<String> {
        match selection {
            GroupSelection::One(group) => self
                .get(group)
                .map(|cols| cols.names().cloned().collect())
                .unwrap_or_default(),
            GroupSelection::All => {
                let lists: Vec<Vec<String>> = self
                    .groups
                    .iter()
                    .map(|(_, cols)| cols.names().cloned().collect())
                    .collect();
                dedup_union(lists.iter().map(Vec::as_slice))
            }
        }
    }
}

/// Fetches the documentation page through an injected [`TextSource`].
///
/// Every `fetch_*` call reads the page again; nothing is cached here.
pub struct SchemaResolver<S: TextSource> {
    source: S,
    url: String,
}

impl<S: TextSource> SchemaResolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_url(source, SCHEMA_URL)
    }

    pub fn with_url(source: S, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn fetch_document(&self) -> Result<SchemaDocument> {
        tracing::debug!(url = %self.url, "fetching column documentation");
        let html = self.source.get_text(&self.url).map_err(Error::schema)?;
        SchemaDocument::parse(&html)
    }

    pub fn fetch_column_catalog(&self) -> Result<ColumnCatalog> {
        ColumnCatalog::from_document(&self.fetch_document()?)
    }

    pub fn fetch_uncertainty_catalog(&self) -> Result<UncertaintyCatalog> {
        UncertaintyCatalog::from_document(&self.fetch_document()?)
    }
}

fn check_complete(
    found: impl Iterator<Item = ParameterGroup>,
    expected: &[ParameterGroup],
) -> Result<()> {
    let found: Vec<_> = found.collect();
    if found == expected {
        return Ok(());
    }
    let names = |gs: &[ParameterGroup]| {
        gs.iter().map(|g| g.name()).collect::<Vec<_>>().join(", ")
    };
    Err(Error::SchemaFetch(format!(
        "incomplete catalog: expected [{}], got [{}]",
        names(expected),
        names(found.as_slice())
    )))
}

fn dedup_union<'a>(lists: impl Iterator<Item = &'a [String]>) -> Vec<String> {
    let mut seen = HashSet::new();
    lists
        .flatten()
        .filter(|name| seen.insert(*name))
        .cloned()
        .collect()
}
