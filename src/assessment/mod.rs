//! The ranking grid and its form controller.
//!
//! An [`Assessment`] is a fixed grid of [`ROW_COUNT`] rows. Each
//! [`RankingRow`] has one cell per trait (cell `i` belongs to
//! `DiscTrait::ALL[i]`) holding the raw text the user typed plus an
//! "invalid" flag for the presentation layer to highlight.

pub mod controller;
pub mod validation;

pub use controller::{FormController, FormEffect, FormEvent, FormSnapshot};
pub use validation::{check_row, classify_cell, CellValue};

use crate::core::{DiscTrait, CELLS_PER_ROW, ROW_COUNT};
use crate::errors::{DiscError, Result};
use serde::Serialize;

/// One row of four ranked statements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RankingRow {
    cells: [String; CELLS_PER_ROW],
    invalid: [bool; CELLS_PER_ROW],
}

impl RankingRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from already-typed values, in D, I, S, C order.
    pub fn from_values<S: AsRef<str>>(values: [S; CELLS_PER_ROW]) -> Self {
        let mut row = Self::new();
        for (slot, value) in row.cells.iter_mut().zip(values.iter()) {
            *slot = value.as_ref().to_string();
        }
        row
    }

    /// Raw text of a cell, exactly as entered.
    pub fn value(&self, cell: usize) -> Option<&str> {
        self.cells.get(cell).map(String::as_str)
    }

    pub fn values(&self) -> &[String; CELLS_PER_ROW] {
        &self.cells
    }

    pub(crate) fn set_value(&mut self, cell: usize, value: String) -> Result<()> {
        let slot = self
            .cells
            .get_mut(cell)
            .ok_or_else(|| DiscError::invalid_input(format!("cell {} out of range", cell)))?;
        *slot = value;
        Ok(())
    }

    /// Trait owning a given cell.
    pub fn trait_of(cell: usize) -> Option<DiscTrait> {
        DiscTrait::from_index(cell)
    }

    pub fn is_invalid(&self, cell: usize) -> bool {
        self.invalid.get(cell).copied().unwrap_or(false)
    }

    pub fn invalid_flags(&self) -> [bool; CELLS_PER_ROW] {
        self.invalid
    }

    pub(crate) fn flag(&mut self, cell: usize) {
        if let Some(flag) = self.invalid.get_mut(cell) {
            *flag = true;
        }
    }

    pub(crate) fn clear_flags(&mut self) {
        self.invalid = [false; CELLS_PER_ROW];
    }

    pub(crate) fn clear(&mut self) {
        self.cells = Default::default();
        self.clear_flags();
    }

    /// Number of cells holding non-whitespace text.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.trim().is_empty()).count()
    }

    /// True when every cell has a value (valid or not).
    pub fn is_complete(&self) -> bool {
        self.filled_count() == CELLS_PER_ROW
    }
}

/// The full grid: exactly [`ROW_COUNT`] ranking rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Assessment {
    rows: [RankingRow; ROW_COUNT],
}

impl Assessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assessment from raw rows. The shape must be exactly
    /// 5 rows of 4 values; the values themselves are not validated here.
    pub fn from_raw_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        if rows.len() != ROW_COUNT {
            return Err(DiscError::invalid_input(format!(
                "expected {} rows, got {}",
                ROW_COUNT,
                rows.len()
            )));
        }

        let mut assessment = Self::new();
        for (row_idx, raw) in rows.iter().enumerate() {
            if raw.len() != CELLS_PER_ROW {
                return Err(DiscError::invalid_input(format!(
                    "row {} has {} values, expected {}",
                    row_idx + 1,
                    raw.len(),
                    CELLS_PER_ROW
                )));
            }
            for (cell, value) in raw.iter().enumerate() {
                assessment.set_value(row_idx, cell, value.as_ref().to_string())?;
            }
        }
        Ok(assessment)
    }

    pub fn rows(&self) -> &[RankingRow; ROW_COUNT] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&RankingRow> {
        self.rows.get(row)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut RankingRow> {
        self.rows.get_mut(row)
    }

    pub(crate) fn set_value(&mut self, row: usize, cell: usize, value: String) -> Result<()> {
        self.rows
            .get_mut(row)
            .ok_or_else(|| DiscError::invalid_input(format!("row {} out of range", row)))?
            .set_value(cell, value)
    }

    pub fn filled_count(&self) -> usize {
        self.rows.iter().map(RankingRow::filled_count).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.rows.iter_mut().for_each(RankingRow::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assessment_is_empty() {
        let assessment = Assessment::new();
        assert_eq!(assessment.rows().len(), 5);
        assert_eq!(assessment.filled_count(), 0);
        assert!(assessment.rows().iter().all(|r| !r.is_complete()));
    }

    #[test]
    fn test_filled_count_ignores_whitespace() {
        let row = RankingRow::from_values(["1", " ", "", "x"]);
        assert_eq!(row.filled_count(), 2);
        assert!(!row.is_complete());
    }

    #[test]
    fn test_from_raw_rows_rejects_wrong_shape() {
        let short = vec![vec!["1", "2", "3", "4"]; 4];
        assert!(Assessment::from_raw_rows(&short).is_err());

        let mut ragged = vec![vec!["1", "2", "3", "4"]; 5];
        ragged[2].pop();
        let err = Assessment::from_raw_rows(&ragged).unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_from_raw_rows_preserves_raw_text() {
        let mut rows = vec![vec!["4", "3", "2", "1"]; 5];
        rows[0] = vec!["7", "abc", "2.5", ""];
        let assessment = Assessment::from_raw_rows(&rows).unwrap();
        let first = assessment.row(0).unwrap();
        assert_eq!(first.value(0), Some("7"));
        assert_eq!(first.value(1), Some("abc"));
        assert_eq!(first.value(2), Some("2.5"));
        assert_eq!(first.value(3), Some(""));
    }

    #[test]
    fn test_set_value_out_of_grid_is_error() {
        let mut assessment = Assessment::new();
        assert!(assessment.set_value(5, 0, "1".into()).is_err());
        assert!(assessment.set_value(0, 4, "1".into()).is_err());
    }

    #[test]
    fn test_cell_trait_mapping() {
        assert_eq!(RankingRow::trait_of(0), Some(DiscTrait::D));
        assert_eq!(RankingRow::trait_of(3), Some(DiscTrait::C));
        assert_eq!(RankingRow::trait_of(4), None);
    }
}
