//! Core domain types shared by the form controller and the result renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ranking rows in an assessment.
pub const ROW_COUNT: usize = 5;
/// Number of cells per ranking row, one per trait.
pub const CELLS_PER_ROW: usize = 4;
/// Highest rank a user can assign within a row.
pub const MAX_RANK: u32 = 4;
/// Highest score a single trait can reach (every row ranked 4).
pub const MAX_POSSIBLE_SCORE: u32 = ROW_COUNT as u32 * MAX_RANK;
/// Total number of cells in an assessment.
pub const TOTAL_CELLS: usize = ROW_COUNT * CELLS_PER_ROW;

/// One of the four DISC behavioral dimensions.
///
/// Declaration order is the tie-break priority: D wins over I, I over S,
/// S over C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscTrait {
    D,
    I,
    S,
    C,
}

impl DiscTrait {
    /// All traits in fixed display and tie-break order.
    pub const ALL: [DiscTrait; 4] = [DiscTrait::D, DiscTrait::I, DiscTrait::S, DiscTrait::C];

    /// Single-letter code used in the result handoff.
    pub const fn code(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::I => "I",
            Self::S => "S",
            Self::C => "C",
        }
    }

    /// Parse a trait code. Only the exact upper-case letters are accepted;
    /// surrounding whitespace makes a code invalid.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "D" => Some(Self::D),
            "I" => Some(Self::I),
            "S" => Some(Self::S),
            "C" => Some(Self::C),
            _ => None,
        }
    }

    /// Position in the fixed order (also the cell index within a row).
    pub const fn index(self) -> usize {
        match self {
            Self::D => 0,
            Self::I => 1,
            Self::S => 2,
            Self::C => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for DiscTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accumulated score per trait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    #[serde(rename = "D")]
    pub d: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "C")]
    pub c: u32,
}

impl ScoreTally {
    pub fn new(d: u32, i: u32, s: u32, c: u32) -> Self {
        Self { d, i, s, c }
    }

    pub fn get(&self, disc_trait: DiscTrait) -> u32 {
        match disc_trait {
            DiscTrait::D => self.d,
            DiscTrait::I => self.i,
            DiscTrait::S => self.s,
            DiscTrait::C => self.c,
        }
    }

    pub fn add(&mut self, disc_trait: DiscTrait, points: u32) {
        let slot = match disc_trait {
            DiscTrait::D => &mut self.d,
            DiscTrait::I => &mut self.i,
            DiscTrait::S => &mut self.s,
            DiscTrait::C => &mut self.c,
        };
        *slot = slot.saturating_add(points);
    }

    /// Scores in fixed trait order.
    pub fn iter(&self) -> impl Iterator<Item = (DiscTrait, u32)> + '_ {
        DiscTrait::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, score)| score).sum()
    }

    /// Highest-scoring trait; ties resolve to the earliest trait in [`DiscTrait::ALL`].
    pub fn dominant(&self) -> DiscTrait {
        crate::scoring::dominant_trait(self)
    }

    /// Display percentage per trait, in fixed trait order.
    pub fn percentages(&self) -> [(DiscTrait, u32); 4] {
        DiscTrait::ALL.map(|t| (t, crate::scoring::compute_percentage(self.get(t))))
    }
}
