// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::catalog::{Catalog, ExerciseDefinition, ExerciseKind};
use super::date::RecordDate;
use super::ids::{ExerciseId, PackageId};
use super::record::{DailyRecord, ExerciseEntry};

pub(crate) fn eid(value: &str) -> ExerciseId {
    ExerciseId::new(value).expect("exercise id")
}

pub(crate) fn pid(value: &str) -> PackageId {
    PackageId::new(value).expect("package id")
}

pub(crate) fn date(value: &str) -> RecordDate {
    value.parse().expect("record date")
}

pub(crate) fn weight(id: &str, name: &str, default_weight: Option<f64>) -> ExerciseDefinition {
    ExerciseDefinition {
        id: eid(id),
        name: name.to_owned(),
        kind: ExerciseKind::Weight,
        default_weight,
    }
}

pub(crate) fn bodyweight(id: &str, name: &str) -> ExerciseDefinition {
    ExerciseDefinition {
        id: eid(id),
        name: name.to_owned(),
        kind: ExerciseKind::Bodyweight,
        default_weight: None,
    }
}

/// Two packages: `α` (bench, row, push-up) and `β` (squat, deadlift, plank).
pub(crate) fn two_package_catalog() -> Catalog {
    let mut packages = BTreeMap::new();
    packages.insert(
        pid("α"),
        vec![
            weight("bench", "Bench Press", Some(40.0)),
            weight("row", "Barbell Row", None),
            bodyweight("pushup", "Push-up"),
        ],
    );
    packages.insert(
        pid("β"),
        vec![
            weight("squat", "Squat", Some(60.0)),
            weight("deadlift", "Deadlift", Some(80.0)),
            bodyweight("plank", "Plank"),
        ],
    );
    Catalog::new(packages).expect("fixture catalog")
}

pub(crate) fn record(
    day: &str,
    package: &str,
    entries: &[(&str, &[f64], bool)],
) -> DailyRecord {
    let exercises = entries
        .iter()
        .map(|(id, sets, completed)| (eid(id), ExerciseEntry::new(sets.iter().copied(), *completed)))
        .collect();
    DailyRecord::new(date(day), pid(package), exercises)
}
