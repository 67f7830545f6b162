// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the workout session.
//!
//! Ops never fail: a target that does not exist is reported as [`Applied::Ignored`] so callers
//! can skip persisting. Every [`Applied::Updated`] result is expected to be saved right away.

use std::fmt;

use crate::model::{ExerciseId, WorkoutSession};

mod seed;

pub use seed::initialize_session;

/// Weight adjustment palette, in the order the UI binds it to keys `1`..`6`.
pub const WEIGHT_DELTAS: [f64; 6] = [-5.0, -2.5, -1.0, 1.0, 2.5, 5.0];

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    ToggleCompleted {
        exercise_id: ExerciseId,
    },
    SetWeight {
        exercise_id: ExerciseId,
        set_index: usize,
        value: f64,
    },
    AdjustWeight {
        exercise_id: ExerciseId,
        delta: f64,
        target: AdjustTarget,
    },
}

impl Op {
    pub fn exercise_id(&self) -> &ExerciseId {
        match self {
            Self::ToggleCompleted { exercise_id }
            | Self::SetWeight { exercise_id, .. }
            | Self::AdjustWeight { exercise_id, .. } => exercise_id,
        }
    }

    /// `SetWeight` from raw text input, coerced with [`coerce_weight`].
    pub fn set_weight_from_input(exercise_id: ExerciseId, set_index: usize, input: &str) -> Self {
        Self::SetWeight {
            exercise_id,
            set_index,
            value: coerce_weight(input),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustTarget {
    Set(usize),
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Updated { exercise_id: ExerciseId },
    Ignored(IgnoreReason),
}

impl Applied {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownExercise { exercise_id: ExerciseId },
    SetOutOfRange { exercise_id: ExerciseId, set_index: usize, set_count: usize },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownExercise { exercise_id } => {
                write!(f, "exercise not in session (id={exercise_id})")
            }
            Self::SetOutOfRange {
                exercise_id,
                set_index,
                set_count,
            } => write!(
                f,
                "set index out of range (id={exercise_id}, index={set_index}, sets={set_count})"
            ),
        }
    }
}

pub fn apply_op(session: &mut WorkoutSession, op: &Op) -> Applied {
    let exercise_id = op.exercise_id();
    let Some(entry) = session.entry_mut(exercise_id.as_str()) else {
        return ignored(IgnoreReason::UnknownExercise {
            exercise_id: exercise_id.clone(),
        });
    };

    let set_count = entry.set_count();
    let out_of_range = |set_index: usize| {
        ignored(IgnoreReason::SetOutOfRange {
            exercise_id: exercise_id.clone(),
            set_index,
            set_count,
        })
    };

    match op {
        Op::ToggleCompleted { .. } => {
            entry.set_completed(!entry.completed());
        }
        Op::SetWeight {
            set_index, value, ..
        } => {
            let Some(slot) = entry.sets_mut().get_mut(*set_index) else {
                return out_of_range(*set_index);
            };
            *slot = clamp_weight(*value);
        }
        Op::AdjustWeight { delta, target, .. } => match target {
            AdjustTarget::Set(set_index) => {
                let Some(slot) = entry.sets_mut().get_mut(*set_index) else {
                    return out_of_range(*set_index);
                };
                *slot = adjusted(*slot, *delta);
            }
            AdjustTarget::All => {
                for slot in entry.sets_mut() {
                    *slot = adjusted(*slot, *delta);
                }
            }
        },
    }

    Applied::Updated {
        exercise_id: exercise_id.clone(),
    }
}

fn ignored(reason: IgnoreReason) -> Applied {
    tracing::debug!(%reason, "op ignored");
    Applied::Ignored(reason)
}

fn adjusted(current: f64, delta: f64) -> f64 {
    clamp_weight(current + delta)
}

/// Floor at zero, no ceiling. Non-finite values collapse to zero.
fn clamp_weight(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Turns free-form weight input into a set value.
///
/// The longest leading decimal number is used (`"52.5kg"` reads as `52.5`); surrounding
/// whitespace is ignored. Input without a leading number, or one that is negative or not
/// finite, becomes `0`.
pub fn coerce_weight(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().map(clamp_weight).unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests;
