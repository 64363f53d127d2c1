//! Nutrition plan records (the "Nutricion" sheet)
//!
//! The sheet carries a "Fecha" column plus free-form meal columns whose names
//! vary per plan ("Desayuno", "Almuerzo", ...). Rather than fix a meal
//! schema, each record keeps its (column, text) pairs in sheet order.

use chrono::NaiveDate;

/// One dated row of the nutrition sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutritionRecord {
    /// Plan date ("Fecha")
    pub date: NaiveDate,
    /// (column header, cell text) pairs for the non-date columns, in sheet
    /// order; blank cells are omitted
    pub meals: Vec<(String, String)>,
}

impl NutritionRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
        }
    }

    /// Look up one meal column's text
    pub fn meal(&self, column: &str) -> Option<&str> {
        self.meals
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, text)| text.as_str())
    }
}

/// Sort records by date, ascending
pub fn sort_by_date(records: &mut [NutritionRecord]) {
    records.sort_by_key(|r| r.date);
}
