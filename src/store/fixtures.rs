// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io;
use std::path::PathBuf;

use super::{KeyValueStore, MemoryStore, StoreError};

/// Serves reads from `inner` and rejects every write, like a data directory on a full or
/// read-only disk.
#[derive(Debug, Default)]
pub(crate) struct ReadOnlyStore {
    pub(crate) inner: MemoryStore,
}

impl ReadOnlyStore {
    pub(crate) fn new(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from(key),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
        })
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.inner.keys()
    }
}
