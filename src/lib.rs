// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Liftlog: a local-first workout logger for the terminal.
//!
//! Exercises are grouped into packages (one per workout-day type). Each day's entries are kept
//! in a date-keyed record, and every weighted exercise is compared against the most recent
//! earlier record that contains it.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
pub mod tui;
