// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use crate::model::{ExerciseEntry, ExerciseId};

/// Session-lifetime memo of "most recent entry before today" per exercise.
///
/// A resolved absence is stored as `None` so exercises without history are not rescanned.
/// Past records never change while the process runs, so entries are never invalidated.
#[derive(Debug, Clone, Default)]
pub struct PreviousRecordCache {
    resolved: HashMap<ExerciseId, Option<ExerciseEntry>>,
}

impl PreviousRecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.resolved.clear();
    }

    pub fn contains(&self, exercise_id: &ExerciseId) -> bool {
        self.resolved.contains_key(exercise_id)
    }

    /// `None` on a miss; `Some(None)` for a cached absence.
    pub fn get(&self, exercise_id: &ExerciseId) -> Option<Option<&ExerciseEntry>> {
        self.resolved.get(exercise_id).map(Option::as_ref)
    }

    pub fn insert(&mut self, exercise_id: ExerciseId, entry: Option<ExerciseEntry>) {
        self.resolved.insert(exercise_id, entry);
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PreviousRecordCache;
    use crate::model::fixtures::eid;
    use crate::model::ExerciseEntry;

    #[test]
    fn distinguishes_miss_from_cached_absence() {
        let mut cache = PreviousRecordCache::new();
        assert_eq!(cache.get(&eid("bench")), None);
        assert!(!cache.contains(&eid("bench")));

        cache.insert(eid("bench"), None);
        assert!(cache.contains(&eid("bench")));
        assert_eq!(cache.get(&eid("bench")), Some(None));

        cache.insert(eid("squat"), Some(ExerciseEntry::uniform(60.0)));
        assert_eq!(
            cache.get(&eid("squat")),
            Some(Some(&ExerciseEntry::uniform(60.0)))
        );
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
