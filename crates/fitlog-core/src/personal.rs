//! Personal data (the "Datos" sheet)

/// The single-row personal-data sheet. Every field is tolerant of absence;
/// a sheet with only a name, or nothing at all, is still valid.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalData {
    /// User's name ("Nombre")
    pub name: Option<String>,
    /// Age in years ("Edad")
    pub age: Option<u32>,
    /// Height in cm ("Altura (cm)")
    pub height_cm: Option<f64>,
    /// Training goal ("Objetivo")
    pub goal: Option<String>,
}

impl PersonalData {
    /// Whether no field of the sheet was present
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.height_cm.is_none() && self.goal.is_none()
    }
}
