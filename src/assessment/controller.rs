//! Form controller: owns one [`Assessment`] for the lifetime of a form and
//! turns input events into validation flags, live scores and, on a valid
//! submit, a [`ResultState`] handoff.
//!
//! The controller is toolkit independent. A UI feeds it [`FormEvent`]s and
//! applies the returned [`FormEffect`]:
//!
//! | event            | work done                         | effect                     |
//! |------------------|-----------------------------------|----------------------------|
//! | `InputChanged`   | store value, revalidate, rescore  | `Refreshed(snapshot)`      |
//! | `SubmitClicked`  | validate all, score, pick dominant| `Navigate(payload)`/`Alert`|
//! | `ResetClicked`   | clear values and flags            | `Cleared(snapshot)`        |

use super::validation::{check_row, classify_cell};
use super::Assessment;
use crate::core::{DiscTrait, ScoreTally, CELLS_PER_ROW, ROW_COUNT, TOTAL_CELLS};
use crate::errors::{DiscError, Result};
use crate::handoff::{ResultPayload, ResultState};
use serde::Serialize;
use stillwater::Validation;
use tracing::{debug, info};

/// User interaction delivered to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged {
        row: usize,
        cell: usize,
        value: String,
    },
    SubmitClicked,
    ResetClicked,
}

/// What the presentation layer should do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEffect {
    /// Redraw flags, progress and live bars.
    Refreshed(FormSnapshot),
    /// Show a blocking message; nothing was transferred.
    Alert(String),
    /// Hand the payload to the result view.
    Navigate(ResultPayload),
    /// Form was cleared.
    Cleared(FormSnapshot),
}

/// Everything the form view needs to redraw itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub progress: u32,
    pub scores: ScoreTally,
    pub percentages: [(DiscTrait, u32); 4],
    pub invalid: [[bool; CELLS_PER_ROW]; ROW_COUNT],
    pub submit_enabled: bool,
}

#[derive(Debug, Default)]
pub struct FormController {
    assessment: Assessment,
    submit_enabled: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-filled assessment. Validation state is computed
    /// immediately so flags and submit eligibility are current.
    pub fn with_assessment(assessment: Assessment) -> Self {
        let mut controller = Self {
            assessment,
            submit_enabled: false,
        };
        controller.refresh();
        controller
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// Store a raw value for one cell. Nothing else is recomputed.
    pub fn record_input(&mut self, row: usize, cell: usize, value: impl Into<String>) -> Result<()> {
        self.assessment.set_value(row, cell, value.into())
    }

    /// Re-validate one row and update its cell flags.
    ///
    /// Blank and out-of-range cells are flagged individually; a duplicate
    /// check failure flags the whole row. Unknown rows are reported invalid.
    pub fn validate_row(&mut self, row: usize) -> bool {
        let Some(ranking_row) = self.assessment.row_mut(row) else {
            return false;
        };

        ranking_row.clear_flags();
        match check_row(ranking_row) {
            Validation::Success(_) => true,
            Validation::Failure(issues) => {
                for issue in issues {
                    debug!(row, %issue, "row issue");
                    for cell in issue.flagged_cells() {
                        ranking_row.flag(cell);
                    }
                }
                false
            }
        }
    }

    /// Sum each trait's in-range ranks across all rows. Blank or invalid
    /// cells count as zero so partial input can be previewed.
    pub fn compute_scores(&self) -> ScoreTally {
        let mut tally = ScoreTally::default();
        for row in self.assessment.rows() {
            for (t, raw) in DiscTrait::ALL.iter().zip(row.values().iter()) {
                tally.add(*t, classify_cell(raw).points());
            }
        }
        tally
    }

    /// Share of non-blank cells, rounded to a whole percent.
    pub fn compute_progress(&self) -> u32 {
        let filled = self.assessment.filled_count() as f64;
        (filled / TOTAL_CELLS as f64 * 100.0).round() as u32
    }

    /// Re-validate every row. Fails with the single aggregate error if any
    /// row is not a permutation of 1..4.
    pub fn validate_all(&mut self) -> Result<()> {
        let all_valid = (0..ROW_COUNT).fold(true, |ok, row| self.validate_row(row) && ok);
        if all_valid {
            Ok(())
        } else {
            Err(DiscError::Validation)
        }
    }

    pub fn can_submit(&self) -> bool {
        self.submit_enabled
    }

    /// Validate, score and build the handoff snapshot.
    ///
    /// On failure nothing is transferred and the caller should surface the
    /// error text to the user.
    pub fn submit(&mut self) -> Result<ResultState> {
        self.validate_all()?;
        let scores = self.compute_scores();
        let state = ResultState::from_scores(scores);
        info!(
            dominant = %state.dominant,
            d = scores.d,
            i = scores.i,
            s = scores.s,
            c = scores.c,
            "assessment submitted"
        );
        Ok(state)
    }

    /// Clear every value and flag. Submission stays disabled until the
    /// form is valid again.
    pub fn reset(&mut self) -> FormSnapshot {
        self.assessment.clear();
        self.submit_enabled = false;
        debug!("form reset");
        self.snapshot()
    }

    /// Live recompute after an edit: flags, progress, scores and submit
    /// eligibility.
    pub fn refresh(&mut self) -> FormSnapshot {
        self.submit_enabled = self.validate_all().is_ok();
        let snapshot = self.snapshot();
        debug!(
            progress = snapshot.progress,
            submit_enabled = snapshot.submit_enabled,
            "form refreshed"
        );
        snapshot
    }

    /// Current view state without revalidating.
    pub fn snapshot(&self) -> FormSnapshot {
        let scores = self.compute_scores();
        let mut invalid = [[false; CELLS_PER_ROW]; ROW_COUNT];
        for (flags, row) in invalid.iter_mut().zip(self.assessment.rows().iter()) {
            *flags = row.invalid_flags();
        }

        FormSnapshot {
            progress: self.compute_progress(),
            scores,
            percentages: scores.percentages(),
            invalid,
            submit_enabled: self.submit_enabled,
        }
    }

    /// Dispatch one UI event.
    pub fn handle_event(&mut self, event: FormEvent) -> Result<FormEffect> {
        match event {
            FormEvent::InputChanged { row, cell, value } => {
                self.record_input(row, cell, value)?;
                Ok(FormEffect::Refreshed(self.refresh()))
            }
            FormEvent::SubmitClicked => match self.submit() {
                Ok(state) => Ok(FormEffect::Navigate(state.to_payload())),
                Err(DiscError::Validation) => {
                    self.submit_enabled = false;
                    Ok(FormEffect::Alert(DiscError::Validation.to_string()))
                }
                Err(other) => Err(other),
            },
            FormEvent::ResetClicked => Ok(FormEffect::Cleared(self.reset())),
        }
    }
}
