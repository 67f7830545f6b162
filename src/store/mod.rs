// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for workout records.
//!
//! A [`KeyValueStore`] is the storage medium (a data directory on disk, or memory in tests);
//! the [`RecordRepository`] layers the date-keyed record format and previous-entry lookup on
//! top of it.

use std::io;
use std::path::PathBuf;

pub mod cache;
pub mod file_store;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod memory;
pub mod records;

pub use cache::PreviousRecordCache;
pub use file_store::{FileStore, WriteDurability};
pub use memory::MemoryStore;
pub use records::{RecordRepository, RepoError};

/// String-keyed persistent storage with enumerable keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// All keys currently stored, in no particular order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage key {key:?}")]
    InvalidKey { key: String },
    #[error("refusing to write through symlink at {path:?}")]
    SymlinkRefused { path: PathBuf },
}
