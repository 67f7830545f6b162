// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Liftlog CLI entrypoint.
//!
//! Runs the interactive TUI for today (or `--date`). `liftlog export` prints the full history as
//! JSON instead.

use anyhow::Context;
use clap::Parser;

use liftlog::config::{Cli, Command, Settings};
use liftlog::controller::WorkoutController;
use liftlog::model::{Catalog, RecordDate};
use liftlog::store::{FileStore, KeyValueStore, MemoryStore, RecordRepository};

fn main() {
    if let Err(err) = run() {
        eprintln!("liftlog: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("loading settings")?;
    let today = cli.date.unwrap_or_else(RecordDate::today);

    match cli.command {
        Some(Command::Export) => export(&settings, today),
        None => interactive(&cli, &settings, today),
    }
}

fn file_store(settings: &Settings) -> FileStore {
    FileStore::new(&settings.data_dir).with_durability(settings.write_durability())
}

fn export(settings: &Settings, today: RecordDate) -> anyhow::Result<()> {
    liftlog::logging::init_stderr_logging(&settings.log_filter)?;
    let repo = RecordRepository::new(file_store(settings), today);
    let json = repo.export_json().context("exporting records")?;
    println!("{json}");
    Ok(())
}

fn interactive(cli: &Cli, settings: &Settings, today: RecordDate) -> anyhow::Result<()> {
    let log_dir = if cli.demo {
        std::env::temp_dir()
    } else {
        settings.data_dir.clone()
    };
    let _log_guard = liftlog::logging::init_file_logging(&log_dir, &settings.log_filter)?;
    tracing::info!(%today, demo = cli.demo, data_dir = %settings.data_dir.display(), "starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let catalog = match runtime.block_on(Catalog::load(&settings.catalog)) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "cannot load exercise catalog");
            liftlog::tui::run_load_failure(&err.to_string())?;
            return Err(err).context("loading exercise catalog");
        }
    };

    if cli.demo {
        launch(catalog, RecordRepository::new(MemoryStore::new(), today), settings)
    } else {
        launch(catalog, RecordRepository::new(file_store(settings), today), settings)
    }
}

fn launch<S: KeyValueStore>(
    catalog: Catalog,
    repo: RecordRepository<S>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let controller = WorkoutController::open(catalog, repo, settings.default_package.as_ref())
        .context("opening today's session")?;
    liftlog::tui::run(controller)?;
    tracing::info!("bye");
    Ok(())
}
