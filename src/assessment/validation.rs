//! Row validation with issue accumulation.
//!
//! A row is valid when all four cells hold an integer in 1..=4 and the four
//! values are pairwise distinct. [`check_row`] is pure and reports every
//! issue at once; flag application lives on the controller.

use super::RankingRow;
use crate::core::{CELLS_PER_ROW, MAX_RANK};
use crate::errors::{row_issues, RowIssue, RowValidation};

/// Interpretation of one cell's raw text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellValue {
    Blank,
    Rank(u32),
    /// Non-integer, or an integer outside 1..=4.
    Invalid,
}

impl CellValue {
    /// Points this cell contributes to the live tally.
    pub fn points(self) -> u32 {
        match self {
            Self::Rank(rank) => rank,
            Self::Blank | Self::Invalid => 0,
        }
    }
}

/// Classify raw cell text. Integral decimals such as `"3.0"` count as integers.
pub fn classify_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Blank;
    }

    match parse_integer(trimmed) {
        Some(n) if (1..=i64::from(MAX_RANK)).contains(&n) => CellValue::Rank(n as u32),
        _ => CellValue::Invalid,
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(n);
    }
    let f = text.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64).then_some(f as i64)
}

/// Validate a row, accumulating every issue found.
///
/// The distinctness check only runs once all four cells hold in-range values;
/// a row with blanks or bad values reports those cells instead.
pub fn check_row(row: &RankingRow) -> RowValidation<[u32; CELLS_PER_ROW]> {
    let mut issues = Vec::new();
    let mut ranks = [0u32; CELLS_PER_ROW];

    for (cell, raw) in row.values().iter().enumerate() {
        match classify_cell(raw) {
            CellValue::Blank => issues.push(RowIssue::IncompleteRow { cell }),
            CellValue::Invalid => issues.push(RowIssue::OutOfRangeValue {
                cell,
                raw: raw.trim().to_string(),
            }),
            CellValue::Rank(rank) => ranks[cell] = rank,
        }
    }

    if issues.is_empty() && !is_permutation(&ranks) {
        issues.push(RowIssue::DuplicateValue { values: ranks });
    }

    row_issues(ranks, issues)
}

fn is_permutation(ranks: &[u32; CELLS_PER_ROW]) -> bool {
    let mut seen = [false; CELLS_PER_ROW];
    ranks.iter().all(|&rank| {
        let slot = &mut seen[(rank - 1) as usize];
        !std::mem::replace(slot, true)
    })
}
