//! The per-user workbook reader
//!
//! A user's workbook holds four named sheets. Each sheet is loaded
//! independently: a missing or malformed "Nutricion" sheet must not stop the
//! measurements or the routine from loading, so every accessor returns its
//! own [`StoreResult`] and the caller decides how to surface a per-sheet
//! failure.
//!
//! Row cleaning follows the tolerant-read policy: rows whose date fails to
//! parse (dated sheets) or whose exercise name is blank (routine) are
//! dropped from that sheet's result only.

use std::fs;
use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use fitlog_core::{
    measurement, nutrition, MeasurementRecord, Metric, NutritionRecord, PersonalData, Routine,
    RoutineEntry, COL_FECHA,
};

use crate::convert;
use crate::error::{StoreError, StoreResult};
use crate::paths::DataDir;

/// Sheet name: personal data
pub const SHEET_DATOS: &str = "Datos";
/// Sheet name: nutrition plan
pub const SHEET_NUTRICION: &str = "Nutricion";
/// Sheet name: body measurements
pub const SHEET_MEDIDAS: &str = "Medidas";
/// Sheet name: exercise routine
pub const SHEET_RUTINA: &str = "Rutina";

// "Datos" columns
const COL_NOMBRE: &str = "Nombre";
const COL_EDAD: &str = "Edad";
const COL_ALTURA: &str = "Altura (cm)";
const COL_OBJETIVO: &str = "Objetivo";

// "Rutina" columns
const COL_DIA: &str = "Día";
const COL_GRUPO: &str = "Grupo Muscular";
const COL_EJERCICIO: &str = "Ejercicio";
const COL_SERIES: &str = "Series";
const COL_REPETICIONES: &str = "Repeticiones";
const COL_PESO: &str = "Peso (kg)";
const COL_DESCANSO_MIN: &str = "Descanso (min)";

/// A user's workbook, opened for reading
pub struct UserWorkbook {
    workbook: Xlsx<Cursor<Vec<u8>>>,
}

impl std::fmt::Debug for UserWorkbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserWorkbook").finish_non_exhaustive()
    }
}

impl UserWorkbook {
    /// Open the workbook for a user identifier.
    ///
    /// Returns [`StoreError::NotFound`] if no workbook exists for that user.
    pub fn open(dir: &DataDir, user_id: &str) -> StoreResult<Self> {
        let path = dir.user_workbook(user_id);
        if !path.exists() {
            return Err(StoreError::NotFound {
                user_id: user_id.to_string(),
                path,
            });
        }
        let bytes = fs::read(&path)?;
        Self::from_bytes(bytes)
    }

    /// Open a workbook from its raw bytes (the upload entry point). The
    /// contract is identical to [`UserWorkbook::open`] minus path
    /// resolution.
    pub fn from_bytes(bytes: Vec<u8>) -> StoreResult<Self> {
        let workbook = Xlsx::new(Cursor::new(bytes))?;
        Ok(Self { workbook })
    }

    /// Sheet names present in the workbook
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn sheet(&mut self, name: &str) -> StoreResult<Range<Data>> {
        self.workbook
            .worksheet_range(name)
            .map_err(|source| StoreError::Sheet {
                name: name.to_string(),
                source,
            })
    }

    /// Load the "Datos" sheet. One row of per-user facts; missing cells are
    /// simply `None`.
    pub fn personal_data(&mut self) -> StoreResult<PersonalData> {
        let range = self.sheet(SHEET_DATOS)?;
        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(row) => convert::header_map(row),
            None => return Ok(PersonalData::default()),
        };
        let mut data = PersonalData::default();
        if let Some(row) = rows.find(|row| !convert::is_blank_row(row)) {
            let cell = |name: &str| headers.get(name).and_then(|&col| row.get(col));
            data.name = cell(COL_NOMBRE).and_then(convert::cell_str);
            data.age = cell(COL_EDAD).and_then(convert::cell_u32);
            data.height_cm = cell(COL_ALTURA).and_then(convert::cell_f64);
            data.goal = cell(COL_OBJETIVO).and_then(convert::cell_str);
        }
        Ok(data)
    }

    /// Load the "Nutricion" sheet, sorted by date ascending. Rows with an
    /// unparsable date are dropped.
    pub fn nutrition(&mut self) -> StoreResult<Vec<NutritionRecord>> {
        let range = self.sheet(SHEET_NUTRICION)?;
        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            None => return Ok(Vec::new()),
        };
        let headers = convert::header_map(header_row);
        let Some(&date_col) = headers.get(COL_FECHA) else {
            log::warn!("sheet '{SHEET_NUTRICION}' has no '{COL_FECHA}' column");
            return Ok(Vec::new());
        };

        // Meal columns keep their sheet order.
        let meal_cols: Vec<(usize, String)> = header_row
            .iter()
            .enumerate()
            .filter(|(col, _)| *col != date_col)
            .filter_map(|(col, cell)| convert::cell_str(cell).map(|name| (col, name)))
            .collect();

        let mut records = Vec::new();
        for row in rows {
            let Some(date) = row.get(date_col).and_then(convert::cell_date) else {
                continue;
            };
            let mut record = NutritionRecord::new(date);
            for (col, name) in &meal_cols {
                if let Some(text) = row.get(*col).and_then(convert::cell_str) {
                    record.meals.push((name.clone(), text));
                }
            }
            records.push(record);
        }
        nutrition::sort_by_date(&mut records);
        Ok(records)
    }

    /// Load the "Medidas" sheet, sorted by date ascending. Rows with an
    /// unparsable date are dropped; blank numeric cells stay `None`.
    pub fn measurements(&mut self) -> StoreResult<Vec<MeasurementRecord>> {
        let range = self.sheet(SHEET_MEDIDAS)?;
        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(row) => convert::header_map(row),
            None => return Ok(Vec::new()),
        };
        let Some(&date_col) = headers.get(COL_FECHA) else {
            log::warn!("sheet '{SHEET_MEDIDAS}' has no '{COL_FECHA}' column");
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for row in rows {
            let Some(date) = row.get(date_col).and_then(convert::cell_date) else {
                continue;
            };
            let mut record = MeasurementRecord::new(date);
            for metric in Metric::ALL {
                if let Some(&col) = headers.get(metric.header()) {
                    if let Some(value) = row.get(col).and_then(convert::cell_f64) {
                        metric.set_value(&mut record, value);
                    }
                }
            }
            records.push(record);
        }
        measurement::sort_by_date(&mut records);
        Ok(records)
    }

    /// Load the "Rutina" sheet. Rows without an exercise name are dropped;
    /// everything else is kept in sheet order, duplicates included.
    pub fn routine(&mut self) -> StoreResult<Routine> {
        let range = self.sheet(SHEET_RUTINA)?;
        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(row) => convert::header_map(row),
            None => return Ok(Routine::default()),
        };
        let cell = |row: &[Data], name: &str| -> Option<Data> {
            headers.get(name).and_then(|&col| row.get(col)).cloned()
        };

        let mut entries = Vec::new();
        for row in rows {
            let Some(exercise) = cell(row, COL_EJERCICIO).as_ref().and_then(convert::cell_str)
            else {
                continue;
            };
            entries.push(RoutineEntry {
                day: cell(row, COL_DIA)
                    .as_ref()
                    .and_then(convert::cell_str)
                    .unwrap_or_default(),
                muscle_group: cell(row, COL_GRUPO)
                    .as_ref()
                    .and_then(convert::cell_str)
                    .unwrap_or_default(),
                exercise,
                sets: cell(row, COL_SERIES).as_ref().and_then(convert::cell_u32),
                reps: cell(row, COL_REPETICIONES)
                    .as_ref()
                    .and_then(convert::cell_u32),
                weight_kg: cell(row, COL_PESO).as_ref().and_then(convert::cell_f64),
                rest_min: cell(row, COL_DESCANSO_MIN)
                    .as_ref()
                    .and_then(convert::cell_f64),
            });
        }
        Ok(Routine::new(entries))
    }
}
