// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ExerciseDefinition, ExerciseEntry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    Up { diff: f64 },
    Down { diff: f64 },
    Same,
}

impl Comparison {
    /// Signed label for the UI: `+2.5`, `-5`, or `±0`.
    pub fn label(self) -> String {
        match self {
            Self::Up { diff } => format!("+{}", format_weight(diff)),
            Self::Down { diff } => format!("-{}", format_weight(diff)),
            Self::Same => "±0".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousComparison {
    pub previous_max: f64,
    pub current_max: f64,
    pub comparison: Comparison,
}

/// Compares the heaviest set today with the heaviest set of the previous entry.
///
/// Only weighted exercises get a comparison, and only when both entries have sets.
pub fn compare_with_previous(
    definition: &ExerciseDefinition,
    current: &ExerciseEntry,
    previous: Option<&ExerciseEntry>,
) -> Option<PreviousComparison> {
    if !definition.is_weighted() {
        return None;
    }
    let previous_max = previous?.max_weight()?;
    let current_max = current.max_weight()?;

    let diff = round_centi(current_max - previous_max);
    let comparison = if diff > 0.0 {
        Comparison::Up { diff }
    } else if diff < 0.0 {
        Comparison::Down { diff: -diff }
    } else {
        Comparison::Same
    };

    Some(PreviousComparison {
        previous_max,
        current_max,
        comparison,
    })
}

/// Weight as shown to the user: no trailing `.0`, at most two decimals.
pub fn format_weight(value: f64) -> String {
    let rounded = round_centi(value);
    // Avoid printing `-0`.
    if rounded == 0.0 {
        return "0".to_owned();
    }
    rounded.to_string()
}

fn round_centi(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
