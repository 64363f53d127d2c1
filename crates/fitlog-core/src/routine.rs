//! The exercise routine (the "Rutina" sheet) and its filters
//!
//! The routine is a flat sequence of entries; the presentation layer narrows
//! it by day and then by muscle group to populate its selection controls.
//! All filters are pure queries over the cleaned sequence - nothing is
//! cached or mutated.
//!
//! Duplicate (day, exercise) rows are allowed and all of them are kept; the
//! sheet carries no uniqueness constraint.

use std::collections::BTreeSet;

/// One row of the routine sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutineEntry {
    /// Training day ("Día"), e.g. "Lunes"
    pub day: String,
    /// Muscle group ("Grupo Muscular"), e.g. "Pecho"
    pub muscle_group: String,
    /// Exercise name ("Ejercicio"); rows without one are dropped at load
    pub exercise: String,
    /// Number of sets ("Series")
    pub sets: Option<u32>,
    /// Repetitions per set ("Repeticiones")
    pub reps: Option<u32>,
    /// Working weight in kg ("Peso (kg)")
    pub weight_kg: Option<f64>,
    /// Rest between sets in minutes ("Descanso (min)")
    pub rest_min: Option<f64>,
}

impl RoutineEntry {
    /// Create an entry with only the identifying fields set
    pub fn new(
        day: impl Into<String>,
        muscle_group: impl Into<String>,
        exercise: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            muscle_group: muscle_group.into(),
            exercise: exercise.into(),
            sets: None,
            reps: None,
            weight_kg: None,
            rest_min: None,
        }
    }
}

/// A cleaned routine: the full entry sequence plus its derived views
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Routine {
    entries: Vec<RoutineEntry>,
}

impl Routine {
    /// Wrap a cleaned entry sequence
    pub fn new(entries: Vec<RoutineEntry>) -> Self {
        Self { entries }
    }

    /// The full cleaned sequence, in sheet order
    pub fn entries(&self) -> &[RoutineEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the routine has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct training days, sorted. Entries with a blank day are kept in
    /// the sequence but never offered as a selection value.
    pub fn days(&self) -> Vec<String> {
        let days: BTreeSet<_> = self
            .entries
            .iter()
            .filter(|e| !e.day.is_empty())
            .map(|e| e.day.clone())
            .collect();
        days.into_iter().collect()
    }

    /// Distinct muscle groups trained on `day`, sorted
    pub fn muscle_groups(&self, day: &str) -> Vec<String> {
        let groups: BTreeSet<_> = self
            .entries
            .iter()
            .filter(|e| e.day == day && !e.muscle_group.is_empty())
            .map(|e| e.muscle_group.clone())
            .collect();
        groups.into_iter().collect()
    }

    /// Distinct exercise names for (day, muscle group), sorted
    pub fn exercises(&self, day: &str, muscle_group: &str) -> Vec<String> {
        let names: BTreeSet<_> = self
            .filter_day_group(day, muscle_group)
            .into_iter()
            .map(|e| e.exercise.clone())
            .collect();
        names.into_iter().collect()
    }

    /// Entries for one training day, in sheet order
    pub fn filter_day(&self, day: &str) -> Vec<&RoutineEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Entries for one (day, muscle group) pair, in sheet order
    pub fn filter_day_group(&self, day: &str, muscle_group: &str) -> Vec<&RoutineEntry> {
        self.entries
            .iter()
            .filter(|e| e.day == day && e.muscle_group == muscle_group)
            .collect()
    }
}
