// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ids::{ExerciseId, PackageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Weight,
    Bodyweight,
}

impl ExerciseKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Bodyweight => "bodyweight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    pub id: ExerciseId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight: Option<f64>,
}

impl ExerciseDefinition {
    pub fn default_weight_or_zero(&self) -> f64 {
        self.default_weight.unwrap_or(0.0)
    }

    pub fn is_weighted(&self) -> bool {
        self.kind == ExerciseKind::Weight
    }
}

/// Static exercise catalog, loaded once at startup.
///
/// Packages are kept in ascending id order, which is also the tab order in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    packages: BTreeMap<PackageId, Vec<ExerciseDefinition>>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse catalog at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog defines no packages")]
    NoPackages,
    #[error("package {package} lists exercise {exercise} more than once")]
    DuplicateExercise {
        package: PackageId,
        exercise: ExerciseId,
    },
}

impl Catalog {
    pub fn new(packages: BTreeMap<PackageId, Vec<ExerciseDefinition>>) -> Result<Self, CatalogError> {
        if packages.is_empty() {
            return Err(CatalogError::NoPackages);
        }
        for (package, exercises) in &packages {
            let mut seen = BTreeSet::new();
            for exercise in exercises {
                if !seen.insert(exercise.id.as_str()) {
                    return Err(CatalogError::DuplicateExercise {
                        package: package.clone(),
                        exercise: exercise.id.clone(),
                    });
                }
            }
        }
        Ok(Self { packages })
    }

    pub fn from_json(path: &Path, raw: &str) -> Result<Self, CatalogError> {
        #[derive(Deserialize)]
        struct CatalogJson {
            packages: BTreeMap<PackageId, Vec<ExerciseDefinition>>,
        }

        let parsed: CatalogJson = serde_json::from_str(raw).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(parsed.packages)
    }

    /// Reads and validates the catalog file.
    ///
    /// This is the only asynchronous step of startup; callers await it before rendering.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json(path, &raw)?;
        tracing::info!(
            path = %path.display(),
            packages = catalog.packages.len(),
            "loaded exercise catalog"
        );
        Ok(catalog)
    }

    pub fn package_ids(&self) -> impl Iterator<Item = &PackageId> {
        self.packages.keys()
    }

    pub fn first_package_id(&self) -> &PackageId {
        self.packages
            .keys()
            .next()
            .unwrap_or_else(|| unreachable!("catalog is validated to have at least one package"))
    }

    pub fn contains_package(&self, package_id: &PackageId) -> bool {
        self.packages.contains_key(package_id)
    }

    pub fn exercises(&self, package_id: &PackageId) -> Option<&[ExerciseDefinition]> {
        self.packages.get(package_id).map(Vec::as_slice)
    }

    /// Returns the package after (or before, with `step < 0`) `current`, wrapping around.
    pub fn cycle_package(&self, current: &PackageId, step: isize) -> &PackageId {
        let ids = self.packages.keys().collect::<Vec<_>>();
        let len = ids.len() as isize;
        let idx = ids.iter().position(|id| *id == current).unwrap_or(0) as isize;
        let next = (idx + step).rem_euclid(len);
        ids[next as usize]
    }
}
