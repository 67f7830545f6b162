// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Application context: catalog, record repository and today's session in one place.
//!
//! Every successful mutation goes through [`WorkoutController`] and is persisted before the
//! call returns.

use crate::model::{Catalog, DailyRecord, ExerciseDefinition, PackageId, RecordDate, WorkoutSession};
use crate::ops::{apply_op, initialize_session, Applied, Op};
use crate::query::{display_order, ExerciseRow};
use crate::store::{KeyValueStore, RecordRepository, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("package {package} is not in the catalog")]
    UnknownPackage { package: PackageId },
    /// Writing today's record failed. The in-memory session still holds the change.
    #[error("record for {date}: {source}")]
    Save {
        date: RecordDate,
        #[source]
        source: RepoError,
    },
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug)]
pub struct WorkoutController<S> {
    catalog: Catalog,
    repo: RecordRepository<S>,
    session: WorkoutSession,
}

impl<S: KeyValueStore> WorkoutController<S> {
    /// Opens today's session.
    ///
    /// The active package is the one stored in today's record if the catalog still has it,
    /// otherwise `preferred_package`, otherwise the first catalog package. Nothing is written.
    pub fn open(
        catalog: Catalog,
        mut repo: RecordRepository<S>,
        preferred_package: Option<&PackageId>,
    ) -> Result<Self, ControllerError> {
        let today = repo.today();
        let existing = repo.load(today)?;

        let preferred = preferred_package.filter(|package| {
            let known = catalog.contains_package(package);
            if !known {
                tracing::warn!(%package, "configured default package is not in the catalog");
            }
            known
        });
        let package = existing
            .as_ref()
            .and_then(DailyRecord::package)
            .filter(|package| catalog.contains_package(package))
            .or(preferred)
            .unwrap_or_else(|| catalog.first_package_id())
            .clone();

        let session = initialize_session(
            today,
            package.clone(),
            package_exercises(&catalog, &package),
            existing,
            &mut repo,
        )?;
        tracing::info!(%today, %package, "opened workout session");

        Ok(Self {
            catalog,
            repo,
            session,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &WorkoutSession {
        &self.session
    }

    pub fn repository(&self) -> &RecordRepository<S> {
        &self.repo
    }

    pub fn today(&self) -> RecordDate {
        self.session.date()
    }

    pub fn active_package(&self) -> &PackageId {
        self.session.package()
    }

    pub fn active_exercises(&self) -> &[ExerciseDefinition] {
        package_exercises(&self.catalog, self.session.package())
    }

    /// Makes `package` the active package and persists the result.
    ///
    /// Returns `Ok(false)` when `package` is already active. When only the write fails, the
    /// switch stays in effect and [`ControllerError::Save`] is returned.
    pub fn switch_package(&mut self, package: &PackageId) -> Result<bool, ControllerError> {
        if package == self.session.package() {
            return Ok(false);
        }
        if !self.catalog.contains_package(package) {
            return Err(ControllerError::UnknownPackage {
                package: package.clone(),
            });
        }

        let today = self.today();
        let existing = match self.repo.load(today)? {
            Some(record) => record,
            // Nothing persisted yet; keep the seeded entries.
            None => self.session.to_record(),
        };
        self.session = initialize_session(
            today,
            package.clone(),
            package_exercises(&self.catalog, package),
            Some(existing),
            &mut self.repo,
        )?;
        tracing::info!(%package, "switched package");
        self.persist()?;
        Ok(true)
    }

    /// Switches to the neighbouring package in tab order, wrapping around.
    pub fn cycle_package(&mut self, step: isize) -> Result<bool, ControllerError> {
        let next = self
            .catalog
            .cycle_package(self.session.package(), step)
            .clone();
        self.switch_package(&next)
    }

    /// Applies `op` and persists the session if it changed.
    ///
    /// On a write failure the in-memory change is kept and the error is returned.
    pub fn apply(&mut self, op: &Op) -> Result<Applied, ControllerError> {
        let applied = apply_op(&mut self.session, op);
        if applied.changed() {
            self.persist()?;
        }
        Ok(applied)
    }

    /// Persists the session unconditionally.
    pub fn save_now(&mut self) -> Result<(), ControllerError> {
        self.persist()?;
        tracing::info!(date = %self.today(), "saved on request");
        Ok(())
    }

    /// Active package exercises in display order, with their previous-record comparison.
    pub fn rows(&mut self) -> Result<Vec<ExerciseRow>, ControllerError> {
        let definitions = package_exercises(&self.catalog, self.session.package());
        let mut rows = Vec::with_capacity(definitions.len());
        for definition in display_order(definitions, &self.session) {
            let Some(entry) = self.session.entry(definition.id.as_str()) else {
                continue;
            };
            let previous = self.repo.find_most_recent_entry(&definition.id)?;
            rows.push(ExerciseRow::new(definition, entry, previous.as_ref()));
        }
        Ok(rows)
    }

    pub fn export_json(&self) -> Result<String, ControllerError> {
        let json = self.repo.export_json()?;
        tracing::info!(bytes = json.len(), "exported workout history");
        Ok(json)
    }

    fn persist(&mut self) -> Result<(), ControllerError> {
        let record = self.session.to_record();
        self.repo.save(&record).map_err(|source| {
            tracing::error!(date = %record.date(), error = %source, "failed to save workout record");
            ControllerError::Save {
                date: record.date(),
                source,
            }
        })
    }
}

fn package_exercises<'a>(catalog: &'a Catalog, package: &PackageId) -> &'a [ExerciseDefinition] {
    catalog.exercises(package).unwrap_or_default()
}
