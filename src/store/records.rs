// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::cache::PreviousRecordCache;
use super::{KeyValueStore, StoreError};
use crate::model::{DailyRecord, ExerciseEntry, ExerciseId, IdError, PackageId, RecordDate};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("cannot encode record for {date}: {source}")]
    Encode {
        date: RecordDate,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
enum ParseEntryError {
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Date-keyed workout records on top of a [`KeyValueStore`].
///
/// The repository exclusively owns reads and writes of record keys. It also owns the
/// previous-entry cache, which lives exactly as long as the repository (one process run).
#[derive(Debug)]
pub struct RecordRepository<S> {
    store: S,
    today: RecordDate,
    previous: PreviousRecordCache,
}

impl<S: KeyValueStore> RecordRepository<S> {
    pub fn new(store: S, today: RecordDate) -> Self {
        Self {
            store,
            today,
            previous: PreviousRecordCache::new(),
        }
    }

    pub fn today(&self) -> RecordDate {
        self.today
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn previous_cache(&self) -> &PreviousRecordCache {
        &self.previous
    }

    /// Loads the record stored for `date`.
    ///
    /// A stored payload that does not parse is logged and reported as absent.
    pub fn load(&self, date: RecordDate) -> Result<Option<DailyRecord>, RepoError> {
        let key = date.storage_key();
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };
        Ok(parse_or_skip(&key, date, &raw))
    }

    /// Stores `record` under its date key, replacing whatever was there.
    pub fn save(&mut self, record: &DailyRecord) -> Result<(), RepoError> {
        let date = record.date();
        let json = serde_json::to_string(&record_to_json(record))
            .map_err(|source| RepoError::Encode { date, source })?;
        self.store.set(&date.storage_key(), &json)?;

        if date != self.today {
            // Only past records feed the cache; rewriting one makes it stale.
            tracing::debug!(%date, "past record rewritten; clearing previous-entry cache");
            self.previous.clear();
        }
        tracing::debug!(%date, exercises = record.exercises().len(), "saved workout record");
        Ok(())
    }

    /// Most recent entry for `exercise_id` in any record before today.
    ///
    /// Record keys are visited newest first; unparseable records are skipped. The outcome,
    /// including "no history", is cached for the rest of the session.
    pub fn find_most_recent_entry(
        &mut self,
        exercise_id: &ExerciseId,
    ) -> Result<Option<ExerciseEntry>, RepoError> {
        if let Some(cached) = self.previous.get(exercise_id) {
            tracing::trace!(exercise = %exercise_id, "previous-entry cache hit");
            return Ok(cached.cloned());
        }

        let found = self.scan_for_entry(exercise_id)?;
        tracing::debug!(
            exercise = %exercise_id,
            found = found.is_some(),
            "resolved previous entry"
        );
        self.previous.insert(exercise_id.clone(), found.clone());
        Ok(found)
    }

    fn scan_for_entry(&self, exercise_id: &ExerciseId) -> Result<Option<ExerciseEntry>, RepoError> {
        let today_key = self.today.storage_key();
        let mut keys = self
            .record_keys()?
            .into_iter()
            .filter(|(key, _)| *key != today_key)
            .collect::<Vec<_>>();
        // `YYYY-MM-DD` keys sort lexically in date order.
        keys.sort_by(|(a, _), (b, _)| b.cmp(a));

        for (key, date) in keys {
            let Some(raw) = self.store.get(&key)? else {
                continue;
            };
            let Some(record) = parse_or_skip(&key, date, &raw) else {
                continue;
            };
            if let Some(entry) = record.entry(exercise_id.as_str()) {
                return Ok(Some(entry.clone()));
            }
        }
        Ok(None)
    }

    /// Every parseable record, oldest first.
    pub fn export_all(&self) -> Result<Vec<DailyRecord>, RepoError> {
        let mut records = Vec::new();
        for (key, date) in self.record_keys()? {
            let Some(raw) = self.store.get(&key)? else {
                continue;
            };
            if let Some(record) = parse_or_skip(&key, date, &raw) {
                records.push(record);
            }
        }
        records.sort_by_key(DailyRecord::date);
        Ok(records)
    }

    /// [`Self::export_all`] rendered as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String, RepoError> {
        let records = self.export_all()?;
        let json = records.iter().map(record_to_json).collect::<Vec<_>>();
        serde_json::to_string_pretty(&json).map_err(|source| RepoError::Encode {
            date: self.today,
            source,
        })
    }

    fn record_keys(&self) -> Result<Vec<(String, RecordDate)>, RepoError> {
        let keys = self
            .store
            .keys()?
            .into_iter()
            .filter_map(|key| {
                let date = record_key_date(&key)?;
                Some((key, date))
            })
            .collect();
        Ok(keys)
    }
}

fn record_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^workout_([0-9]{4}-[0-9]{2}-[0-9]{2})$").unwrap_or_else(|err| {
            unreachable!("record key pattern is a valid regex: {err}")
        })
    })
}

fn record_key_date(key: &str) -> Option<RecordDate> {
    let captures = record_key_pattern().captures(key)?;
    captures.get(1)?.as_str().parse().ok()
}

fn parse_or_skip(key: &str, key_date: RecordDate, raw: &str) -> Option<DailyRecord> {
    match record_from_json(key, key_date, raw) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!(key, error = %err, "skipping unparseable workout record");
            None
        }
    }
}

#[derive(Debug, Serialize)]
struct RecordJson<'a> {
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    package: Option<&'a str>,
    exercises: BTreeMap<&'a str, EntryJson<'a>>,
}

#[derive(Debug, Serialize)]
struct EntryJson<'a> {
    // serde_json writes non-finite values as null.
    sets: &'a [f64],
    completed: bool,
}

/// Stored record as read back. Only the top level has to be well formed; each exercise entry
/// is checked on its own.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    exercises: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct StoredEntry {
    #[serde(default)]
    sets: Vec<Option<f64>>,
    #[serde(default)]
    completed: Option<bool>,
}

fn record_to_json(record: &DailyRecord) -> RecordJson<'_> {
    RecordJson {
        date: record.date().to_string(),
        package: record.package().map(PackageId::as_str),
        exercises: record
            .exercises()
            .iter()
            .map(|(id, entry)| {
                (
                    id.as_str(),
                    EntryJson {
                        sets: entry.sets(),
                        completed: entry.completed(),
                    },
                )
            })
            .collect(),
    }
}

fn record_from_json(
    key: &str,
    key_date: RecordDate,
    raw: &str,
) -> Result<DailyRecord, serde_json::Error> {
    let stored: StoredRecord = serde_json::from_str(raw)?;

    let date = match stored.date {
        Some(text) => text.parse().unwrap_or_else(|_| {
            tracing::warn!(key, date = %text, "invalid embedded date; using the key date");
            key_date
        }),
        None => key_date,
    };
    let package = stored.package.and_then(|text| match PackageId::new(&text) {
        Ok(package) => Some(package),
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring invalid package id");
            None
        }
    });

    let mut exercises = BTreeMap::new();
    for (id, value) in stored.exercises.unwrap_or_default() {
        match entry_from_json(&id, value) {
            Ok((exercise_id, entry)) => {
                exercises.insert(exercise_id, entry);
            }
            Err(err) => {
                tracing::warn!(key, exercise = %id, error = %err, "skipping unparseable exercise entry");
            }
        }
    }

    Ok(match package {
        Some(package) => DailyRecord::new(date, package, exercises),
        None => DailyRecord::without_package(date, exercises),
    })
}

fn entry_from_json(
    id: &str,
    value: serde_json::Value,
) -> Result<(ExerciseId, ExerciseEntry), ParseEntryError> {
    let exercise_id = ExerciseId::new(id)?;
    let stored: StoredEntry = serde_json::from_value(value)?;
    // JSON has no NaN; writers emit null in its place.
    let sets = stored.sets.into_iter().map(|value| value.unwrap_or(0.0));
    let entry = ExerciseEntry::new(sets, stored.completed.unwrap_or(false));
    Ok((exercise_id, entry))
}
