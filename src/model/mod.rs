// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A catalog groups exercise definitions into packages; a daily record holds one entry per
//! exercise; the workout session is the mutable in-memory copy of today's record.

pub mod catalog;
pub mod date;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod record;
pub mod session;

pub use catalog::{Catalog, CatalogError, ExerciseDefinition, ExerciseKind};
pub use date::{ParseRecordDateError, RecordDate};
pub use ids::{ExerciseId, ExerciseIdTag, Id, IdError, PackageId, PackageIdTag};
pub use record::{DailyRecord, ExerciseEntry, Sets, DEFAULT_SET_COUNT};
pub use session::WorkoutSession;
