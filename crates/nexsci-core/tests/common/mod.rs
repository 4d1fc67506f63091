#![allow(dead_code)]

use nexsci_core::ArchiveUrls;
use nexsci_fetch::{FetchError, TextSource};
use std::cell::Cell;

pub const SCHEMA_URL: &str = "http://test/docs/columns.html";
pub const ARCHIVE_URL: &str = "http://test/api?table=exoplanets";

pub fn urls() -> ArchiveUrls {
    ArchiveUrls {
        schema: SCHEMA_URL.to_string(),
        archive: ARCHIVE_URL.to_string(),
    }
}

// Uncertainty cell marker: expands to `(+) <name>err1<br>(-) <name>err2`.
const UNC: &str = "+/-";

fn table(rows: &[(&str, &str)]) -> String {
    let mut html = String::from(
        "<table border=1>\n<tr><th>Database Column Name</th><th>Table Label</th><th>Description</th><th>Uncertainty</th></tr>\n",
    );
    for (name, unc) in rows {
        let unc = if *unc == UNC {
            format!("(+) {name}err1<br>(-) {name}err2")
        } else {
            unc.to_string()
        };
        html.push_str(&format!(
            "<tr><td>{name}</td><td>label</td><td>description</td><td>{unc}</td></tr>\n"
        ));
    }
    html.push_str("</table>\n");
    html
}

/// Five documentation tables shaped like the archive's column page,
/// including footnote artifacts and the `pl_ratdorperr1` typo.
pub fn schema_html() -> String {
    let default = table(&[
        ("pl_hostname&dagger;", ""),
        ("pl_letter", ""),
        ("pl_orbper", UNC),
        ("pl_radj", UNC),
        ("st_rad", UNC),
    ]);
    let planet = table(&[
        ("pl_hostname", ""),
        ("pl_imppar", UNC),
        ("pl_orbeccen", UNC),
        ("pl_orbincl", UNC),
        ("pl_orbsmax", UNC),
        ("pl_trandur", UNC),
        ("pl_tranmid", UNC),
        ("pl_ratdor", "(+) pl_ratdorperr1 (-) pl_ratdorerr2"),
        ("pl_discmethod", "&nbsp;"),
    ]);
    let stellar = table(&[
        ("st_logg", UNC),
        ("st_metfe", UNC),
        ("st_rad", UNC),
        ("st_teff\u{e2}\u{20ac}\u{a0}", "(+) st_tefferr1 (-) st_tefferr2"),
    ]);
    let photometry = table(&[("st_optmag", ""), ("st_j", "")]);
    let color = table(&[("st_bmvj", "")]);

    format!(
        "<html><head><title>Exoplanet Archive API</title></head><body>\n<h2>Default</h2>{default}<h2>Planet</h2>{planet}<h2>Stellar</h2>{stellar}<h2>Photometry</h2>{photometry}<h2>Color</h2>{color}</body></html>"
    )
}

pub const TRANSIT_COLUMNS: [&str; 12] = [
    "pl_radj",
    "pl_trandur",
    "pl_tranmid",
    "pl_orbper",
    "pl_orbsmax",
    "pl_imppar",
    "pl_orbincl",
    "pl_orbeccen",
    "st_logg",
    "st_metfe",
    "st_rad",
    "st_teff",
];

/// Values for HD 209458 b, roughly as the archive lists them.
fn hd209458b() -> Vec<(&'static str, f64, f64, f64)> {
    vec![
        ("pl_radj", 1.38, 0.018, -0.018),
        ("pl_trandur", 0.1277, 0.0006, -0.0005),
        ("pl_tranmid", 2452826.628521, 0.000087, -0.000087),
        ("pl_orbper", 3.52474859, 0.00000038, -0.00000038),
        ("pl_orbsmax", 0.04707, 0.00046, -0.00047),
        ("pl_imppar", 0.507, 0.005, -0.005),
        ("pl_orbincl", 86.71, 0.05, -0.05),
        ("pl_orbeccen", 0.0, f64::NAN, f64::NAN),
        ("st_logg", 4.36, 0.02, -0.02),
        ("st_metfe", 0.0, 0.05, -0.05),
        ("st_rad", 1.2, 0.05, -0.05),
        ("st_teff", 6065.0, 50.0, -50.0),
    ]
}

fn cell(v: f64) -> String {
    if v.is_nan() { String::new() } else { v.to_string() }
}

/// Archive CSV with three planets; HD 209458 b carries full transit data.
pub fn table_csv() -> String {
    let mut headers = vec!["pl_hostname".to_string(), "pl_letter".to_string()];
    for c in TRANSIT_COLUMNS {
        headers.extend([c.to_string(), format!("{c}err1"), format!("{c}err2")]);
    }

    let mut lines = vec![headers.join(",")];

    let mut hd = vec!["HD 209458".to_string(), "b".to_string()];
    for (_, v, e1, e2) in hd209458b() {
        hd.extend([cell(v), cell(e1), cell(e2)]);
    }
    lines.push(hd.join(","));

    for (host, letter) in [("WASP-12", "b"), ("Kepler-9", "c")] {
        let mut row = vec![host.to_string(), letter.to_string()];
        row.extend(std::iter::repeat_n("1.0".to_string(), TRANSIT_COLUMNS.len() * 3));
        lines.push(row.join(","));
    }

    lines.join("\n") + "\n"
}

/// In-memory stand-in for the archive, counting reads per endpoint.
pub struct MockArchive {
    pub schema: String,
    pub csv: String,
    pub schema_calls: Cell<usize>,
    pub table_calls: Cell<usize>,
}

impl MockArchive {
    pub fn new() -> Self {
        Self::with(schema_html(), table_csv())
    }

    pub fn with(schema: String, csv: String) -> Self {
        Self {
            schema,
            csv,
            schema_calls: Cell::new(0),
            table_calls: Cell::new(0),
        }
    }

    pub fn network_calls(&self) -> usize {
        self.schema_calls.get() + self.table_calls.get()
    }
}

impl TextSource for MockArchive {
    fn get_text(&self, url: &str) -> nexsci_fetch::Result<String> {
        if url == SCHEMA_URL {
            self.schema_calls.set(self.schema_calls.get() + 1);
            Ok(self.schema.clone())
        } else if url.starts_with(ARCHIVE_URL) {
            self.table_calls.set(self.table_calls.get() + 1);
            Ok(self.csv.clone())
        } else {
            Err(FetchError::Network(format!("unreachable: {url}")))
        }
    }
}
