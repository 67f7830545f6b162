// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command line and layered settings.
//!
//! Precedence, lowest first: built-in defaults, `liftlog.toml` in the user config directory
//! (or the file given with `--config`), `LIFTLOG_*` environment variables, command line flags.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::model::{PackageId, RecordDate};
use crate::store::WriteDurability;

pub const APP_NAME: &str = "liftlog";
pub const ENV_PREFIX: &str = "LIFTLOG_";
pub const CONFIG_FILE_NAME: &str = "liftlog.toml";
pub const CATALOG_FILE_NAME: &str = "exercises.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version, about = "Terminal workout logger")]
pub struct Cli {
    /// Settings file to use instead of the one in the user config directory.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding one JSON file per logged day.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Exercise catalog (JSON).
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Package to start with when today has no record yet.
    #[arg(long, value_name = "ID")]
    pub default_package: Option<String>,

    /// fsync every write (slower, survives power loss on most filesystems).
    #[arg(long)]
    pub durable_writes: bool,

    /// Log a day other than today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<RecordDate>,

    /// Keep records in memory only; nothing is written to disk.
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every stored record as a JSON array and exit.
    Export,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub catalog: PathBuf,
    #[serde(default)]
    pub default_package: Option<PackageId>,
    #[serde(default)]
    pub durable_writes: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME);
        let data_dir = dirs
            .as_ref()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".liftlog"));
        let catalog = dirs
            .as_ref()
            .map(|dirs| dirs.config_dir().join(CATALOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CATALOG_FILE_NAME));
        Self {
            data_dir,
            catalog,
            default_package: None,
            durable_writes: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {path:?} does not exist")]
    MissingFile { path: PathBuf },
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

/// Values given on the command line. Unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    durable_writes: Option<bool>,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            catalog: cli.catalog.clone(),
            default_package: cli.default_package.clone(),
            durable_writes: cli.durable_writes.then_some(true),
        }
    }
}

impl Settings {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::MissingFile { path: path.clone() })
            }
            Some(path) => Some(path.clone()),
            None => default_config_path(),
        };
        Self::figment(file.as_deref(), &CliOverrides::from(cli))
            .extract()
            .map_err(|err| ConfigError::Figment(Box::new(err)))
    }

    fn figment(file: Option<&Path>, overrides: &CliOverrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(file) = file {
            // A missing default file is not an error; figment treats it as empty.
            figment = figment.merge(Toml::file(file));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::globals(overrides))
    }

    pub fn write_durability(&self) -> WriteDurability {
        if self.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
