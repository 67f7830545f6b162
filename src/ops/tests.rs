// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use rstest::{fixture, rstest};

use super::{
    apply_op, coerce_weight, initialize_session, AdjustTarget, Applied, IgnoreReason, Op,
    WEIGHT_DELTAS,
};
use crate::model::fixtures::{date, eid, pid, record, two_package_catalog};
use crate::model::{ExerciseEntry, WorkoutSession};
use crate::store::{MemoryStore, RecordRepository};

const TODAY: &str = "2026-03-10";

#[fixture]
fn session() -> WorkoutSession {
    let mut entries = BTreeMap::new();
    entries.insert(eid("bench"), ExerciseEntry::new([50.0, 50.0, 50.0], false));
    entries.insert(eid("row"), ExerciseEntry::new([2.0, 0.5, 10.0], false));
    entries.insert(eid("pushup"), ExerciseEntry::new([0.0, 0.0, 0.0], false));
    WorkoutSession::new(date(TODAY), pid("α"), entries)
}

#[fixture]
fn repo() -> RecordRepository<MemoryStore> {
    RecordRepository::new(MemoryStore::new(), date(TODAY))
}

fn adjust(id: &str, delta: f64, target: AdjustTarget) -> Op {
    Op::AdjustWeight {
        exercise_id: eid(id),
        delta,
        target,
    }
}

#[rstest]
fn toggle_flips_completion_back_and_forth(mut session: WorkoutSession) {
    let op = Op::ToggleCompleted {
        exercise_id: eid("pushup"),
    };

    assert!(apply_op(&mut session, &op).changed());
    assert!(session.is_completed("pushup"));
    assert!(apply_op(&mut session, &op).changed());
    assert!(!session.is_completed("pushup"));
}

#[rstest]
fn unknown_exercise_is_a_silent_no_op(mut session: WorkoutSession) {
    let before = session.clone();
    let applied = apply_op(
        &mut session,
        &Op::ToggleCompleted {
            exercise_id: eid("curl"),
        },
    );

    assert_eq!(
        applied,
        Applied::Ignored(IgnoreReason::UnknownExercise {
            exercise_id: eid("curl")
        })
    );
    assert_eq!(session, before);
}

#[rstest]
fn adjust_all_moves_every_set(mut session: WorkoutSession) {
    apply_op(&mut session, &adjust("bench", 5.0, AdjustTarget::All));
    assert_eq!(session.entry("bench").unwrap().sets(), &[55.0, 55.0, 55.0]);
}

#[rstest]
fn adjust_single_set_leaves_others(mut session: WorkoutSession) {
    apply_op(&mut session, &adjust("bench", 2.5, AdjustTarget::Set(1)));
    assert_eq!(session.entry("bench").unwrap().sets(), &[50.0, 52.5, 50.0]);
}

#[rstest]
fn adjust_clamps_at_zero(mut session: WorkoutSession) {
    apply_op(&mut session, &adjust("row", -2.5, AdjustTarget::All));
    assert_eq!(session.entry("row").unwrap().sets(), &[0.0, 0.0, 7.5]);
}

#[rstest]
fn adjust_has_no_ceiling(mut session: WorkoutSession) {
    for _ in 0..100 {
        apply_op(&mut session, &adjust("bench", 5.0, AdjustTarget::Set(0)));
    }
    assert_eq!(session.entry("bench").unwrap().sets()[0], 550.0);
}

#[rstest]
fn adjust_never_goes_negative_over_the_palette(mut session: WorkoutSession) {
    for delta in WEIGHT_DELTAS.iter().rev().chain(WEIGHT_DELTAS.iter()).cycle().take(60) {
        apply_op(&mut session, &adjust("row", -delta.abs(), AdjustTarget::All));
        apply_op(&mut session, &adjust("row", *delta, AdjustTarget::Set(2)));
        assert!(session.entry("row").unwrap().sets().iter().all(|v| *v >= 0.0));
    }
}

#[rstest]
fn adjust_out_of_range_set_is_ignored(mut session: WorkoutSession) {
    let before = session.clone();
    let applied = apply_op(&mut session, &adjust("bench", 1.0, AdjustTarget::Set(3)));

    assert!(!applied.changed());
    assert!(matches!(
        applied,
        Applied::Ignored(IgnoreReason::SetOutOfRange {
            set_index: 3,
            set_count: 3,
            ..
        })
    ));
    assert_eq!(session, before);
}

#[rstest]
#[case::plain(42.5, 42.5)]
#[case::negative(-10.0, 0.0)]
#[case::nan(f64::NAN, 0.0)]
#[case::infinite(f64::INFINITY, 0.0)]
fn set_weight_replaces_value(
    mut session: WorkoutSession,
    #[case] value: f64,
    #[case] expected: f64,
) {
    let op = Op::SetWeight {
        exercise_id: eid("bench"),
        set_index: 2,
        value,
    };
    assert!(apply_op(&mut session, &op).changed());
    assert_eq!(session.entry("bench").unwrap().sets(), &[50.0, 50.0, expected]);
}

#[rstest]
fn set_weight_out_of_range_is_ignored(mut session: WorkoutSession) {
    let op = Op::set_weight_from_input(eid("bench"), 7, "80");
    assert!(!apply_op(&mut session, &op).changed());
    assert_eq!(session.entry("bench").unwrap().sets(), &[50.0, 50.0, 50.0]);
}

#[rstest]
#[case("40", 40.0)]
#[case("52.5", 52.5)]
#[case("  60 ", 60.0)]
#[case("52.5kg", 52.5)]
#[case(".5", 0.5)]
#[case("7.", 7.0)]
#[case("+3", 3.0)]
#[case("1e2", 100.0)]
#[case("1e", 1.0)]
#[case("12..5", 12.0)]
#[case("", 0.0)]
#[case("abc", 0.0)]
#[case(".", 0.0)]
#[case("-", 0.0)]
#[case("-12", 0.0)]
#[case("-0", 0.0)]
#[case("Infinity", 0.0)]
#[case("NaN", 0.0)]
#[case("1e999", 0.0)]
fn coerce_weight_reads_leading_number(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(coerce_weight(input), expected);
}

#[rstest]
fn fresh_day_without_history_uses_catalog_defaults(mut repo: RecordRepository<MemoryStore>) {
    let catalog = two_package_catalog();
    let session = initialize_session(
        date(TODAY),
        pid("α"),
        catalog.exercises(&pid("α")).unwrap(),
        None,
        &mut repo,
    )
    .unwrap();

    assert_eq!(session.entry("bench"), Some(&ExerciseEntry::new([40.0; 3], false)));
    assert_eq!(session.entry("row"), Some(&ExerciseEntry::new([0.0; 3], false)));
    assert_eq!(session.entry("pushup"), Some(&ExerciseEntry::new([0.0; 3], false)));
    assert_eq!(session.entries().len(), 3);
}

#[rstest]
fn history_is_copied_with_completion_cleared(mut repo: RecordRepository<MemoryStore>) {
    let yesterday = record("2026-03-09", "α", &[("bench", &[50.0, 52.5, 50.0], true)]);
    repo.save(&yesterday).unwrap();
    let catalog = two_package_catalog();

    let mut session = initialize_session(
        date(TODAY),
        pid("α"),
        catalog.exercises(&pid("α")).unwrap(),
        None,
        &mut repo,
    )
    .unwrap();
    assert_eq!(
        session.entry("bench"),
        Some(&ExerciseEntry::new([50.0, 52.5, 50.0], false))
    );

    apply_op(&mut session, &adjust("bench", 5.0, AdjustTarget::All));
    assert_eq!(
        repo.find_most_recent_entry(&eid("bench")).unwrap(),
        Some(ExerciseEntry::new([50.0, 52.5, 50.0], true))
    );
    assert_eq!(
        repo.load(date("2026-03-09")).unwrap().unwrap().entry("bench"),
        yesterday.entry("bench")
    );
}

#[rstest]
fn empty_history_sets_fall_back_to_default(mut repo: RecordRepository<MemoryStore>) {
    repo.save(&record("2026-03-09", "α", &[("bench", &[], true)]))
        .unwrap();
    let catalog = two_package_catalog();

    let session = initialize_session(
        date(TODAY),
        pid("α"),
        catalog.exercises(&pid("α")).unwrap(),
        None,
        &mut repo,
    )
    .unwrap();

    assert_eq!(session.entry("bench"), Some(&ExerciseEntry::new([40.0; 3], false)));
}

#[rstest]
fn existing_entries_survive_reinitialization(mut repo: RecordRepository<MemoryStore>) {
    repo.save(&record("2026-03-09", "α", &[("bench", &[90.0, 90.0, 90.0], true)]))
        .unwrap();
    let today = record(
        TODAY,
        "α",
        &[("bench", &[50.0, 50.0, 50.0], true), ("squat", &[70.0, 70.0], false)],
    );
    let catalog = two_package_catalog();

    let first = initialize_session(
        date(TODAY),
        pid("α"),
        catalog.exercises(&pid("α")).unwrap(),
        Some(today.clone()),
        &mut repo,
    )
    .unwrap();
    let second = initialize_session(
        date(TODAY),
        pid("α"),
        catalog.exercises(&pid("α")).unwrap(),
        Some(first.to_record()),
        &mut repo,
    )
    .unwrap();

    assert_eq!(first, second);
    assert_eq!(second.entry("bench"), today.entry("bench"));
    assert_eq!(second.entry("squat"), today.entry("squat"));
    assert_eq!(second.entries().len(), 4);
}
