// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";
const RECORD_KEY_PREFIX: &str = "workout_";

/// A calendar day in the client's local time zone.
///
/// The canonical text form is zero-padded `YYYY-MM-DD`, so lexical order on the text form and
/// chronological order on the date coincide. Storage scans rely on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordDate(NaiveDate);

impl RecordDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Storage key for the record of this day (`workout_<YYYY-MM-DD>`).
    pub fn storage_key(self) -> String {
        format!("{RECORD_KEY_PREFIX}{self}")
    }

    /// Header form, e.g. `2026/10/16 (Fri)`.
    pub fn display_label(self) -> String {
        self.0.format("%Y/%m/%d (%a)").to_string()
    }

    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date {value:?}: expected YYYY-MM-DD")]
pub struct ParseRecordDateError {
    pub value: String,
}

impl FromStr for RecordDate {
    type Err = ParseRecordDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields; the key format does not.
        let well_formed = s.len() == 10
            && s.bytes().enumerate().all(|(idx, b)| match idx {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(ParseRecordDateError { value: s.to_owned() });
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ParseRecordDateError { value: s.to_owned() })
    }
}
