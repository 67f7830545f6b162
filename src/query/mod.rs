// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the workout session.
//!
//! Everything here is recomputed on every render; nothing is cached.

pub mod comparison;
pub mod ordering;

pub use comparison::{compare_with_previous, format_weight, Comparison, PreviousComparison};
pub use ordering::display_order;

use crate::model::{ExerciseDefinition, ExerciseEntry};

/// One exercise card, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRow {
    pub definition: ExerciseDefinition,
    pub entry: ExerciseEntry,
    pub comparison: Option<PreviousComparison>,
}

impl ExerciseRow {
    pub fn new(
        definition: &ExerciseDefinition,
        entry: &ExerciseEntry,
        previous: Option<&ExerciseEntry>,
    ) -> Self {
        Self {
            definition: definition.clone(),
            entry: entry.clone(),
            comparison: compare_with_previous(definition, entry, previous),
        }
    }

    pub fn completed(&self) -> bool {
        self.entry.completed()
    }
}
