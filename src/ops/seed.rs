// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{
    DailyRecord, ExerciseDefinition, ExerciseEntry, PackageId, RecordDate, WorkoutSession,
};
use crate::store::{KeyValueStore, RecordRepository, RepoError};

/// Builds the session for `date` running `package`.
///
/// Entries already present in `existing` are kept untouched, including entries for exercises
/// outside `exercises`. Every catalog exercise without an entry is seeded from its most recent
/// past entry (sets copied, completion cleared) or, lacking history, from three sets at the
/// catalog default weight.
pub fn initialize_session<S: KeyValueStore>(
    date: RecordDate,
    package: PackageId,
    exercises: &[ExerciseDefinition],
    existing: Option<DailyRecord>,
    repo: &mut RecordRepository<S>,
) -> Result<WorkoutSession, RepoError> {
    let mut entries = existing
        .map(DailyRecord::into_exercises)
        .unwrap_or_else(BTreeMap::new);

    let mut seeded = 0usize;
    for definition in exercises {
        if entries.contains_key(&definition.id) {
            continue;
        }
        let entry = match repo.find_most_recent_entry(&definition.id)? {
            Some(previous) if previous.set_count() > 0 => {
                ExerciseEntry::new(previous.sets().iter().copied(), false)
            }
            _ => ExerciseEntry::uniform(definition.default_weight_or_zero()),
        };
        entries.insert(definition.id.clone(), entry);
        seeded += 1;
    }

    tracing::debug!(%date, %package, seeded, total = entries.len(), "initialized session");
    Ok(WorkoutSession::new(date, package, entries))
}
