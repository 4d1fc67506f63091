//! The fetched archive table: one CSV row per known planet.

use std::collections::HashMap;

pub const HOSTNAME_COLUMN: &str = "pl_hostname";
pub const LETTER_COLUMN: &str = "pl_letter";

/// String cells under a header row. Values are parsed on access, so columns
/// the archive serves as text (host names, letters) and numbers share one
/// representation and the table round-trips through the cache unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetTable {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl PlanetTable {
    /// Rows are expected to be as wide as `headers`; a cell past the end of
    /// a short row reads as absent.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            headers,
            index,
            rows,
        }
    }

    /// Parse CSV text with a header row. `#` lines are comments.
    ///
    /// Every record must have as many fields as the header; a ragged body
    /// is a truncated or garbled response and is rejected.
    pub fn from_csv(text: &str) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect::<Vec<_>>()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(headers, rows))
    }

    pub fn to_csv(&self) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, i: usize) -> Option<Row<'_>> {
        self.rows.get(i).map(|cells| Row { table: self, cells })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row { table: self, cells })
    }

    /// A new table with the same header and only the rows `keep` accepts.
    pub fn filter(&self, mut keep: impl FnMut(&Row<'_>) -> bool) -> PlanetTable {
        let rows = self
            .rows()
            .filter(|row| keep(row))
            .map(|row| row.cells.to_vec())
            .collect();
        PlanetTable::new(self.headers.clone(), rows)
    }
}

/// A borrowed row with by-name access.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a PlanetTable,
    cells: &'a [String],
}

impl<'a> Row<'a> {
    pub fn has_column(&self, name: &str) -> bool {
        self.table.has_column(name)
    }

    /// Raw cell text; `None` when the column does not exist.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let i = *self.table.index.get(name)?;
        self.cells.get(i).map(String::as_str)
    }

    /// Numeric cell value; `None` when the column does not exist, NaN when
    /// the cell is empty or not a number.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name)
            .map(|cell| cell.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
# archive comment
pl_hostname,pl_letter,pl_orbper
WASP-1,b,2.5199
HAT-P-7, b ,
Kepler-9,c,38.9
";

    #[test]
    fn test_from_csv() {
        let table = PlanetTable::from_csv(CSV).unwrap();
        assert_eq!(table.headers(), ["pl_hostname", "pl_letter", "pl_orbper"]);
        assert_eq!(table.len(), 3);

        let row = table.row(1).unwrap();
        assert_eq!(row.get("pl_letter"), Some("b"));
        assert!(row.get_f64("pl_orbper").unwrap().is_nan());
        assert_eq!(row.get_f64("st_rad"), None);
    }

    #[test]
    fn test_csv_round_trip_keeps_cells() {
        let table = PlanetTable::from_csv(CSV).unwrap();
        let bytes = table.to_csv().unwrap();
        let again = PlanetTable::from_csv(std::str::from_utf8(&bytes).unwrap()).unwrap();
        assert_eq!(table, again);
    }

    #[test]
    fn test_filter_keeps_header() {
        let table = PlanetTable::from_csv(CSV).unwrap();
        let only = table.filter(|row| row.get("pl_letter") == Some("c"));
        assert_eq!(only.len(), 1);
        assert_eq!(only.headers(), table.headers());
        assert_eq!(only.row(0).unwrap().get("pl_hostname"), Some("Kepler-9"));
    }

    #[test]
    fn test_ragged_csv_is_rejected() {
        let err = PlanetTable::from_csv("pl_hostname,pl_letter,pl_orbper\nWASP-1,b\n").unwrap_err();
        assert!(matches!(err.kind(), csv::ErrorKind::UnequalLengths { .. }));
    }

    #[test]
    fn test_short_row_cell_is_absent() {
        let table = PlanetTable::new(vec!["a".into(), "b".into()], vec![vec!["1".into()]]);
        let row = table.row(0).unwrap();
        assert_eq!(row.get("a"), Some("1"));
        assert_eq!(row.get("b"), None);
    }
}
