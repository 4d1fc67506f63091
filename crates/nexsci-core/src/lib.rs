//! Client core for the NExSci exoplanet archive.
//!
//! Data flows strictly forward through three stages:
//!
//! - **Schema** ([`schema`], [`group`]) - parse the published column
//!   documentation into per-group column and uncertainty catalogs
//! - **Query & fetch** ([`query`], [`archive`], [`table`]) - build the
//!   download URL, fetch the CSV, and read through a single cache file
//! - **Derivation** ([`transit`], [`measure`]) - pick the transit columns
//!   for one planet and derive Rp/Rs and a/Rs with asymmetric errors
//!
//! Network access goes through [`nexsci_fetch::TextSource`], so every stage
//! can run against pre-fetched documents.

pub mod archive;
pub mod dir;
mod error;
pub mod group;
mod html;
pub mod measure;
pub mod query;
pub mod schema;
pub mod table;
pub mod transit;
pub mod units;

pub use archive::{Archive, ArchiveUrls};
pub use error::{Error, Result};
pub use group::{GroupSelection, GroupSelector, ParameterGroup};
pub use measure::Measurement;
pub use schema::{ColumnCatalog, SchemaDocument, SchemaResolver, UncertaintyCatalog};
pub use table::PlanetTable;
pub use transit::{TransitParameter, TransitParameterSet};
