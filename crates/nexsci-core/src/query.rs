//! Download URL composition. Pure: no network access.

use crate::group::GroupSelection;
use crate::schema::{ColumnCatalog, UncertaintyCatalog};

pub const ARCHIVE_URL: &str =
    "http://exoplanetarchive.ipac.caltech.edu/cgi-bin/nstedAPI/nph-nstedAPI?table=exoplanets";

/// Comma-joined column list for a `select=` clause.
pub fn selector(names: &[String]) -> String {
    names.join(",")
}

/// `<base>&select=<params>,<uncertainty params>`.
///
/// The uncertainty part is left out when the selection has no documented
/// error columns (photometry, color).
pub fn build_download_url(
    base: &str,
    catalog: &ColumnCatalog,
    uncertainties: &UncertaintyCatalog,
    selection: GroupSelection,
) -> String {
    let params = selector(&catalog.parameter_names(selection));
    let unc_params = selector(&uncertainties.parameter_names(selection));

    if unc_params.is_empty() {
        format!("{base}&select={params}")
    } else {
        format!("{base}&select={params},{unc_params}")
    }
}
