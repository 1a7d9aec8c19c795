//! RPG Sheet Engine - Main entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpgsheet_domain::SheetCalculator;
use rpgsheet_engine::cli::Command;
use rpgsheet_engine::infrastructure::config::AppConfig;
use rpgsheet_engine::infrastructure::file_source::FileSheetSource;
use rpgsheet_engine::use_cases::character_sheet::CharacterSheetUseCases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the JSON result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpgsheet_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = Command::parse(std::env::args().skip(1))?;

    let config = AppConfig::from_env()?;
    tracing::debug!(
        revision = %config.formula_revision,
        sheets_dir = %config.sheets_dir.display(),
        "Configuration loaded"
    );

    let source = Arc::new(FileSheetSource::new(config.sheets_dir.clone()));
    let use_cases = CharacterSheetUseCases::new(
        source,
        SheetCalculator::new(config.formula_revision),
    );

    let output = match &command {
        Command::Calculate { sheet } => {
            let result = use_cases
                .calculate(sheet)
                .await
                .with_context(|| format!("calculating sheet {sheet}"))?;
            render(&result, config.output_pretty)?
        }
        Command::Normalize { sheet } => {
            let prepared = use_cases
                .normalize(sheet)
                .await
                .with_context(|| format!("normalizing sheet {sheet}"))?;
            render(&prepared, config.output_pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

fn render(value: &impl serde::Serialize, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serializing output")?;
    Ok(text)
}
