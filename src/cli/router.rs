//! Command routing and execution

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::api::ApiServer;
use crate::cli::args::{Commands, ReportKind};
use crate::config::GradebookConfig;
use crate::service::GradebookService;
use crate::storage::{BackendType, StorageFactory};

/// Execute a CLI command against the loaded configuration
pub async fn execute_command(command: Commands, mut config: GradebookConfig) -> Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            database,
            memory,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            apply_database(&mut config, database);
            if memory {
                config.storage.backend = BackendType::Memory;
            }
            run_serve(config).await
        }
        Commands::InitDb { database } => {
            apply_database(&mut config, database);
            run_init_db(config).await
        }
        Commands::Report { kind, database } => {
            apply_database(&mut config, database);
            let output = run_report(config, kind).await?;
            println!("{}", output);
            Ok(())
        }
    }
}

fn apply_database(config: &mut GradebookConfig, database: Option<PathBuf>) {
    if let Some(path) = database {
        config.storage.backend = BackendType::Sqlite;
        config.storage.database_path = path;
    }
}

async fn open_service(config: &GradebookConfig) -> Result<GradebookService> {
    let repository = StorageFactory::open_with_schema(&config.storage)
        .await
        .context("Failed to open gradebook storage")?;
    Ok(GradebookService::new(repository))
}

async fn run_serve(config: GradebookConfig) -> Result<()> {
    let service = open_service(&config).await?;
    ApiServer::new(service, config.host.clone(), config.port)
        .start()
        .await
        .with_context(|| format!("API server on {}:{} failed", config.host, config.port))
}

async fn run_init_db(config: GradebookConfig) -> Result<()> {
    open_service(&config).await?;
    info!(
        "Schema ready in {}",
        config.storage.database_path.display()
    );
    Ok(())
}

/// Compute `kind` and render it as pretty JSON
pub async fn run_report(config: GradebookConfig, kind: ReportKind) -> Result<String> {
    let service = open_service(&config).await?;
    let rendered = match kind {
        ReportKind::Average => serde_json::to_string_pretty(&service.average_grades_report().await?)?,
        ReportKind::Top => serde_json::to_string_pretty(&service.top_students_report().await?)?,
        ReportKind::Distribution => {
            serde_json::to_string_pretty(&service.grade_distribution_report().await?)?
        }
    };
    Ok(rendered)
}
