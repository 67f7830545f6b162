// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::date::RecordDate;
use super::ids::{ExerciseId, PackageId};

/// Number of sets a freshly created entry gets.
pub const DEFAULT_SET_COUNT: usize = 3;

/// Set weights of one entry. Almost always three values, so they live inline.
pub type Sets = SmallVec<[f64; DEFAULT_SET_COUNT]>;

/// One exercise's recorded state for one day.
///
/// The number of sets is fixed when the entry is created; mutations only replace values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    sets: Sets,
    completed: bool,
}

impl ExerciseEntry {
    pub fn new(sets: impl IntoIterator<Item = f64>, completed: bool) -> Self {
        Self {
            sets: sets.into_iter().collect(),
            completed,
        }
    }

    /// Fresh entry with every set at `weight`.
    pub fn uniform(weight: f64) -> Self {
        Self::new(std::iter::repeat(weight).take(DEFAULT_SET_COUNT), false)
    }

    pub fn sets(&self) -> &[f64] {
        &self.sets
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Mutable view of the set values. The slice cannot change the set count.
    pub fn sets_mut(&mut self) -> &mut [f64] {
        &mut self.sets
    }

    /// Heaviest set, or `None` for an entry without sets.
    pub fn max_weight(&self) -> Option<f64> {
        self.sets.iter().copied().reduce(f64::max)
    }
}

/// The full saved state for one calendar day.
///
/// Records written by this crate always name their package; hand-edited or older files may not.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    date: RecordDate,
    package: Option<PackageId>,
    exercises: BTreeMap<ExerciseId, ExerciseEntry>,
}

impl DailyRecord {
    pub fn new(
        date: RecordDate,
        package: PackageId,
        exercises: BTreeMap<ExerciseId, ExerciseEntry>,
    ) -> Self {
        Self {
            date,
            package: Some(package),
            exercises,
        }
    }

    pub fn without_package(
        date: RecordDate,
        exercises: BTreeMap<ExerciseId, ExerciseEntry>,
    ) -> Self {
        Self {
            date,
            package: None,
            exercises,
        }
    }

    pub fn date(&self) -> RecordDate {
        self.date
    }

    pub fn package(&self) -> Option<&PackageId> {
        self.package.as_ref()
    }

    pub fn exercises(&self) -> &BTreeMap<ExerciseId, ExerciseEntry> {
        &self.exercises
    }

    pub fn entry(&self, exercise_id: &str) -> Option<&ExerciseEntry> {
        self.exercises.get(exercise_id)
    }

    pub fn into_exercises(self) -> BTreeMap<ExerciseId, ExerciseEntry> {
        self.exercises
    }
}
