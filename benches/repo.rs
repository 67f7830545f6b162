// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use liftlog::model::{DailyRecord, ExerciseEntry, ExerciseId, PackageId, RecordDate};
use liftlog::store::{FileStore, KeyValueStore, MemoryStore, RecordRepository};

const TODAY: &str = "2026-03-10";

fn today() -> RecordDate {
    TODAY.parse().expect("date")
}

/// `days` consecutive past records, newest first, each logging `bench` except the oldest one
/// which is the only record holding `squat`.
fn history<S: KeyValueStore>(store: S, days: usize) -> RecordRepository<S> {
    let mut repo = RecordRepository::new(store, today());
    let package = PackageId::new("A").expect("package");
    let mut date = today();
    for idx in 0..days {
        date = date.pred().expect("date in range");
        let id = if idx + 1 == days { "squat" } else { "bench" };
        let mut exercises = BTreeMap::new();
        exercises.insert(
            ExerciseId::new(id).expect("exercise id"),
            ExerciseEntry::new([40.0, 42.5, 40.0], true),
        );
        repo.save(&DailyRecord::new(date, package.clone(), exercises))
            .expect("save");
    }
    repo
}

// Case IDs stay stable so results remain comparable over time.
fn benches_previous_entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("repo.find_most_recent_entry");

    let squat = ExerciseId::new("squat").expect("exercise id");
    let bench = ExerciseId::new("bench").expect("exercise id");

    let memory = history(MemoryStore::new(), 365);
    group.bench_function("memory_cold_worst_case_365", |b| {
        b.iter_batched_ref(
            || RecordRepository::new(memory.store().clone(), today()),
            |repo| black_box(repo.find_most_recent_entry(black_box(&squat)).expect("lookup")),
            BatchSize::SmallInput,
        )
    });

    let mut warm = history(MemoryStore::new(), 365);
    warm.find_most_recent_entry(&bench).expect("lookup");
    group.bench_function("memory_cached_365", |b| {
        b.iter(|| black_box(warm.find_most_recent_entry(black_box(&bench)).expect("lookup")))
    });

    let tmp = tempfile::Builder::new()
        .prefix("liftlog-bench")
        .tempdir()
        .expect("tempdir");
    let _ = history(FileStore::new(tmp.path()), 90);
    group.bench_function("file_cold_worst_case_90", |b| {
        b.iter_batched_ref(
            || RecordRepository::new(FileStore::new(tmp.path()), today()),
            |repo| black_box(repo.find_most_recent_entry(black_box(&squat)).expect("lookup")),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, benches_previous_entry);
criterion_main!(benches);
