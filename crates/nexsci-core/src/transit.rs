//! Transit parameters for one planet, including the derived Rp/Rs and a/Rs.

use crate::error::{Error, Result};
use crate::measure::Measurement;
use crate::table::Row;
use crate::units::{RSUN_TO_AU, RSUN_TO_RJUP};
use serde::Serialize;

/// Raw archive columns read for a transit fit, with their output labels.
const RAW_PARAMETERS: [(&str, &str); 12] = [
    ("pl_radj", "Rp[Rj]"),
    ("pl_trandur", "t14[d]"),
    ("pl_tranmid", "t0[d]"),
    ("pl_orbper", "P[d]"),
    ("pl_orbsmax", "a[au]"),
    ("pl_imppar", "b"),
    ("pl_orbincl", "inc[deg]"),
    ("pl_orbeccen", "ecc"),
    ("st_logg", "logg"),
    ("st_metfe", "[Fe/H]"),
    ("st_rad", "Rs[Rsun]"),
    ("st_teff", "Teff"),
];

const PLANET_RADIUS: &str = "pl_radj";
const STELLAR_RADIUS: &str = "st_rad";
const SEMI_MAJOR_AXIS: &str = "pl_orbsmax";

pub const RADIUS_RATIO_LABEL: &str = "Rp/Rs";
pub const SCALED_AXIS_LABEL: &str = "a/Rs";

/// `<name>err1` and `<name>err2`; a missing column gives NaN on that side.
pub fn extract_error_pair(row: &Row<'_>, name: &str) -> (f64, f64) {
    let side = |suffix: &str| {
        row.get_f64(&format!("{name}{suffix}"))
            .unwrap_or(f64::NAN)
    };
    (side("err1"), side("err2"))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitParameter {
    pub label: &'static str,
    /// Source column; `None` for derived entries.
    pub column: Option<&'static str>,
    #[serde(flatten)]
    pub measurement: Measurement,
}

/// Fourteen entries in fixed order: the twelve raw parameters sorted by
/// column name, then Rp/Rs and a/Rs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransitParameterSet {
    entries: Vec<TransitParameter>,
}

impl TransitParameterSet {
    /// Derive the set from one archive row.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] when a raw parameter column is absent. Empty
    /// cells and missing error columns become NaN instead.
    pub fn from_row(row: &Row<'_>) -> Result<Self> {
        let mut raw = RAW_PARAMETERS;
        raw.sort_by_key(|(column, _)| *column);

        let mut entries = Vec::with_capacity(raw.len() + 2);
        for (column, label) in raw {
            let value = row
                .get_f64(column)
                .ok_or_else(|| Error::MissingColumn(column.to_string()))?;
            let (err1, err2) = extract_error_pair(row, column);
            entries.push(TransitParameter {
                label,
                column: Some(column),
                measurement: Measurement::new(value, err1, err2),
            });
        }

        let mut set = Self { entries };
        let rp = set.raw(PLANET_RADIUS);
        let rs = set.raw(STELLAR_RADIUS);
        let a = set.raw(SEMI_MAJOR_AXIS);

        // Rp is already in Jupiter radii; Rs is in solar radii.
        set.push_derived(RADIUS_RATIO_LABEL, rp.ratio(rs.scale(RSUN_TO_RJUP)));
        set.push_derived(SCALED_AXIS_LABEL, a.ratio(rs.scale(RSUN_TO_AU)));
        Ok(set)
    }

    fn raw(&self, column: &str) -> Measurement {
        self.entries
            .iter()
            .find(|e| e.column == Some(column))
            .map(|e| e.measurement)
            .unwrap_or(Measurement::new(f64::NAN, f64::NAN, f64::NAN))
    }

    fn push_derived(&mut self, label: &'static str, measurement: Measurement) {
        self.entries.push(TransitParameter {
            label,
            column: None,
            measurement,
        });
    }

    pub fn get(&self, label: &str) -> Option<&Measurement> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.measurement)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransitParameter> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransitParameterSet {
    type Item = &'a TransitParameter;
    type IntoIter = std::slice::Iter<'a, TransitParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
