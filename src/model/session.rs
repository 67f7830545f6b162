// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::date::RecordDate;
use super::ids::{ExerciseId, PackageId};
use super::record::{DailyRecord, ExerciseEntry};

/// The in-memory "today" the UI runs against.
///
/// This is the single mutable source of truth for the current day. Every change made through
/// [`crate::ops::apply_op`] is expected to be persisted right after.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    date: RecordDate,
    package: PackageId,
    entries: BTreeMap<ExerciseId, ExerciseEntry>,
}

impl WorkoutSession {
    pub fn new(
        date: RecordDate,
        package: PackageId,
        entries: BTreeMap<ExerciseId, ExerciseEntry>,
    ) -> Self {
        Self {
            date,
            package,
            entries,
        }
    }

    pub fn date(&self) -> RecordDate {
        self.date
    }

    pub fn package(&self) -> &PackageId {
        &self.package
    }

    pub fn entries(&self) -> &BTreeMap<ExerciseId, ExerciseEntry> {
        &self.entries
    }

    pub fn entry(&self, exercise_id: &str) -> Option<&ExerciseEntry> {
        self.entries.get(exercise_id)
    }

    pub(crate) fn entry_mut(&mut self, exercise_id: &str) -> Option<&mut ExerciseEntry> {
        self.entries.get_mut(exercise_id)
    }

    pub fn is_completed(&self, exercise_id: &str) -> bool {
        self.entry(exercise_id).is_some_and(ExerciseEntry::completed)
    }

    /// Snapshot of the session in its persisted shape.
    pub fn to_record(&self) -> DailyRecord {
        DailyRecord::new(self.date, self.package.clone(), self.entries.clone())
    }
}
