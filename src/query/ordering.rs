// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ExerciseDefinition, WorkoutSession};

/// Catalog exercises in display order: incomplete first, then completed.
///
/// The sort is stable, so catalog order holds within each group.
pub fn display_order<'a>(
    definitions: &'a [ExerciseDefinition],
    session: &WorkoutSession,
) -> Vec<&'a ExerciseDefinition> {
    let mut ordered = definitions.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|definition| session.is_completed(definition.id.as_str()));
    ordered
}
