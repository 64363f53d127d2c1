//! Body-measurement records (the "Medidas" sheet)
//!
//! One [`MeasurementRecord`] per dated row. The sheet carries six numeric
//! columns alongside the date; any of them may be blank for a given session,
//! so every value is optional. Rows whose date failed to parse never reach
//! this type - the reader drops them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::Error;

/// One row of the measurements sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementRecord {
    /// Measurement date ("Fecha")
    pub date: NaiveDate,
    /// Body weight in kg ("Peso (kg)")
    pub weight_kg: Option<f64>,
    /// Chest circumference in cm ("Pecho (cm)")
    pub chest_cm: Option<f64>,
    /// Waist circumference in cm ("Cintura (cm)")
    pub waist_cm: Option<f64>,
    /// Glutes circumference in cm ("Gluteos (cm)")
    pub glutes_cm: Option<f64>,
    /// Arm circumference in cm ("Brazo (cm)")
    pub arm_cm: Option<f64>,
    /// Leg circumference in cm ("Pierna (cm)")
    pub leg_cm: Option<f64>,
}

impl MeasurementRecord {
    /// Create an empty record for a date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight_kg: None,
            chest_cm: None,
            waist_cm: None,
            glutes_cm: None,
            arm_cm: None,
            leg_cm: None,
        }
    }
}

/// The six numeric columns of the measurements sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Weight,
    Chest,
    Waist,
    Glutes,
    Arm,
    Leg,
}

impl Metric {
    /// All metrics, in sheet column order
    pub const ALL: [Metric; 6] = [
        Metric::Weight,
        Metric::Chest,
        Metric::Waist,
        Metric::Glutes,
        Metric::Arm,
        Metric::Leg,
    ];

    /// The sheet column header for this metric
    pub fn header(&self) -> &'static str {
        match self {
            Metric::Weight => "Peso (kg)",
            Metric::Chest => "Pecho (cm)",
            Metric::Waist => "Cintura (cm)",
            Metric::Glutes => "Gluteos (cm)",
            Metric::Arm => "Brazo (cm)",
            Metric::Leg => "Pierna (cm)",
        }
    }

    /// Extract this metric's value from a record
    pub fn value(&self, record: &MeasurementRecord) -> Option<f64> {
        match self {
            Metric::Weight => record.weight_kg,
            Metric::Chest => record.chest_cm,
            Metric::Waist => record.waist_cm,
            Metric::Glutes => record.glutes_cm,
            Metric::Arm => record.arm_cm,
            Metric::Leg => record.leg_cm,
        }
    }

    /// Store a value into this metric's field of a record
    pub fn set_value(&self, record: &mut MeasurementRecord, value: f64) {
        let field = match self {
            Metric::Weight => &mut record.weight_kg,
            Metric::Chest => &mut record.chest_cm,
            Metric::Waist => &mut record.waist_cm,
            Metric::Glutes => &mut record.glutes_cm,
            Metric::Arm => &mut record.arm_cm,
            Metric::Leg => &mut record.leg_cm,
        };
        *field = Some(value);
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Parse a metric from its short Spanish name (as used in selection
    /// controls), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "peso" => Ok(Metric::Weight),
            "pecho" => Ok(Metric::Chest),
            "cintura" => Ok(Metric::Waist),
            "gluteos" => Ok(Metric::Glutes),
            "brazo" => Ok(Metric::Arm),
            "pierna" => Ok(Metric::Leg),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}

/// Sort records by date, ascending. The sheet does not guarantee
/// chronological order on disk.
pub fn sort_by_date(records: &mut [MeasurementRecord]) {
    records.sort_by_key(|r| r.date);
}

/// Build the (date, value) series for one metric, for plotting.
///
/// Records where the metric is blank are skipped; the series keeps the
/// order of `records` (ascending by date once sorted after load).
pub fn measurement_series(records: &[MeasurementRecord], metric: Metric) -> Vec<(NaiveDate, f64)> {
    records
        .iter()
        .filter_map(|r| metric.value(r).map(|v| (r.date, v)))
        .collect()
}
