use nexsci_core::{TransitParameter, TransitParameterSet};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Panel, Remove, Style, object::{Columns, Rows}},
};

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    pub header: Option<String>,
    pub footer: Option<String>,
    pub hide_col_names: bool,
}

impl Formatter {
    pub fn build<T: Tabled, I: IntoIterator<Item = T>>(self, data: I) -> Table {
        let mut table = Table::new(data);
        if self.hide_col_names {
            table.with(Remove::row(Rows::first()));
        }
        if let Some(header) = self.header {
            table.with(Panel::header(header));
        }
        if let Some(footer) = self.footer {
            table.with(Panel::footer(footer));
        }

        table.with(Style::blank());
        table
    }
}

#[derive(Debug, Tabled)]
pub struct TransitRow {
    #[tabled(rename = "parameter")]
    pub label: String,
    pub value: String,
    #[tabled(rename = "+err")]
    pub err1: String,
    #[tabled(rename = "-err")]
    pub err2: String,
    #[tabled(rename = "±quad")]
    pub quadrature: String,
}

impl TransitRow {
    pub fn new(entry: &TransitParameter, precision: usize) -> Self {
        let m = &entry.measurement;
        Self {
            label: entry.label.to_string(),
            value: number(m.value, precision),
            err1: number(m.err1, precision),
            err2: number(m.err2, precision),
            quadrature: number(m.quadrature(), precision),
        }
    }
}

/// NaN renders as `nan` so missing errors stay visible.
pub fn number(v: f64, precision: usize) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{v:.precision$}")
    }
}

pub fn transit_table(set: &TransitParameterSet, precision: usize, title: Option<String>) -> Table {
    let mut table = Formatter {
        header: title,
        ..Default::default()
    }
    .build(set.iter().map(|entry| TransitRow::new(entry, precision)));
    table.modify(Columns::new(1..), Alignment::right());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexsci_core::PlanetTable;

    fn set() -> TransitParameterSet {
        let mut headers = Vec::new();
        let mut cells = Vec::new();
        for column in [
            "pl_radj", "pl_trandur", "pl_tranmid", "pl_orbper", "pl_orbsmax", "pl_imppar",
            "pl_orbincl", "pl_orbeccen", "st_logg", "st_metfe", "st_rad", "st_teff",
        ] {
            headers.extend([column.to_string(), format!("{column}err1"), format!("{column}err2")]);
            cells.extend(["1.0".to_string(), "0.1".to_string(), "-0.1".to_string()]);
        }
        let table = PlanetTable::new(headers, vec![cells]);
        TransitParameterSet::from_row(&table.row(0).unwrap()).unwrap()
    }

    #[test]
    fn test_number_precision() {
        assert_eq!(number(1.23456, 4), "1.2346");
        assert_eq!(number(-0.5, 2), "-0.50");
        assert_eq!(number(f64::NAN, 4), "nan");
    }

    #[test]
    fn test_transit_row_quadrature() {
        let set = set();
        let entry = set.iter().next().unwrap();
        let row = TransitRow::new(entry, 3);
        assert_eq!(row.label, "b");
        assert_eq!(row.value, "1.000");
        assert_eq!(row.err2, "-0.100");
        assert_eq!(row.quadrature, "0.141");
    }

    #[test]
    fn test_transit_table_lists_every_label() {
        let set = set();
        let rendered = transit_table(&set, 2, Some("HD 1 b".into())).to_string();
        assert!(rendered.contains("HD 1 b"));
        assert!(rendered.contains("±quad"));
        for label in set.labels() {
            assert!(rendered.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_hidden_column_names() {
        let rows = vec![TransitRow::new(set().iter().next().unwrap(), 1)];
        let rendered = Formatter {
            hide_col_names: true,
            ..Default::default()
        }
        .build(rows)
        .to_string();
        assert!(!rendered.contains("parameter"));
    }
}
