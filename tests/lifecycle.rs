// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use liftlog::controller::WorkoutController;
use liftlog::model::{Catalog, ExerciseEntry, ExerciseId, PackageId, RecordDate};
use liftlog::ops::{AdjustTarget, Op};
use liftlog::store::{FileStore, RecordRepository};

fn sample_catalog() -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("exercises.json");
    let raw = fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {path:?}: {err}"));
    Catalog::from_json(&path, &raw).expect("sample catalog parses")
}

fn day(value: &str) -> RecordDate {
    value.parse().expect("date")
}

fn eid(value: &str) -> ExerciseId {
    ExerciseId::new(value).expect("exercise id")
}

fn open_day(data_dir: &Path, date: &str) -> WorkoutController<FileStore> {
    let repo = RecordRepository::new(FileStore::new(data_dir), day(date));
    WorkoutController::open(sample_catalog(), repo, None).expect("open")
}

fn data_dir() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::Builder::new()
        .prefix("liftlog-lifecycle")
        .tempdir()
        .expect("tempdir");
    let dir = tmp.path().join("data");
    (tmp, dir)
}

#[test]
fn fresh_install_starts_from_catalog_defaults() {
    let (_tmp, dir) = data_dir();
    let controller = open_day(&dir, "2026-03-09");

    assert_eq!(controller.active_package(), &PackageId::new("A").unwrap());
    assert_eq!(
        controller.session().entry("bench_press"),
        Some(&ExerciseEntry::new([40.0; 3], false))
    );
    assert_eq!(
        controller.session().entry("dips"),
        Some(&ExerciseEntry::new([0.0; 3], false))
    );
    assert!(!dir.exists(), "opening must not write");
}

#[test]
fn yesterday_carries_over_and_today_progresses() {
    let (_tmp, dir) = data_dir();

    let mut monday = open_day(&dir, "2026-03-09");
    monday
        .apply(&Op::AdjustWeight {
            exercise_id: eid("bench_press"),
            delta: 10.0,
            target: AdjustTarget::All,
        })
        .unwrap();
    monday
        .apply(&Op::AdjustWeight {
            exercise_id: eid("bench_press"),
            delta: 2.5,
            target: AdjustTarget::Set(1),
        })
        .unwrap();
    monday
        .apply(&Op::ToggleCompleted {
            exercise_id: eid("bench_press"),
        })
        .unwrap();
    drop(monday);

    let mut tuesday = open_day(&dir, "2026-03-10");
    assert_eq!(
        tuesday.session().entry("bench_press"),
        Some(&ExerciseEntry::new([50.0, 52.5, 50.0], false))
    );

    tuesday
        .apply(&Op::SetWeight {
            exercise_id: eid("bench_press"),
            set_index: 1,
            value: 50.0,
        })
        .unwrap();
    tuesday
        .apply(&Op::AdjustWeight {
            exercise_id: eid("bench_press"),
            delta: 5.0,
            target: AdjustTarget::All,
        })
        .unwrap();
    assert_eq!(
        tuesday.session().entry("bench_press").unwrap().sets(),
        &[55.0, 55.0, 55.0]
    );

    let rows = tuesday.rows().unwrap();
    let bench = rows
        .iter()
        .find(|row| row.definition.id.as_str() == "bench_press")
        .unwrap();
    let comparison = bench.comparison.expect("history exists");
    assert_eq!(comparison.previous_max, 52.5);
    assert_eq!(comparison.comparison.label(), "+2.5");

    let monday_again = RecordRepository::new(FileStore::new(&dir), day("2026-03-10"))
        .load(day("2026-03-09"))
        .unwrap()
        .unwrap();
    assert_eq!(
        monday_again.entry("bench_press"),
        Some(&ExerciseEntry::new([50.0, 52.5, 50.0], true))
    );
}

#[test]
fn reopening_the_same_day_restores_state() {
    let (_tmp, dir) = data_dir();

    let mut first = open_day(&dir, "2026-03-10");
    first.switch_package(&PackageId::new("C").unwrap()).unwrap();
    first
        .apply(&Op::ToggleCompleted {
            exercise_id: eid("plank"),
        })
        .unwrap();
    let snapshot = first.session().clone();
    drop(first);

    let second = open_day(&dir, "2026-03-10");
    assert_eq!(second.active_package(), &PackageId::new("C").unwrap());
    assert_eq!(second.session(), &snapshot);
}

#[test]
fn corrupt_files_do_not_break_startup_or_export() {
    let (_tmp, dir) = data_dir();
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("workout_2026-03-08.json"), "{ truncated").unwrap();
    fs::write(dir.join("notes.txt"), "not a record").unwrap();

    let mut controller = open_day(&dir, "2026-03-10");
    controller.save_now().unwrap();

    let json = controller.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["date"], "2026-03-10");
    assert_eq!(records[0]["package"], "A");
}
