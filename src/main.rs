use std::io::BufRead;
use std::sync::Arc;
use stg_core::constants::{DEFAULT_ABBREVIATIONS_FILENAME, DEFAULT_RECORDS_FILENAME};
use stg_core::{
    AbbreviationTable, CoreConfig, GuidelineRecord, QueryResolver, RecordStore, ResolveOutcome,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the STG query driver
///
/// Loads the structured guideline records and the abbreviation table, then
/// answers queries read line-by-line from standard input until end of input.
///
/// The record store is mandatory: a missing or malformed records file is a
/// deployment error and the process exits before answering anything. The
/// abbreviation table is optional and falls back to built-in defaults.
///
/// # Environment Variables
/// - `STG_RECORDS_FILE`: structured records path (default: "structured_guidelines.json")
/// - `STG_ABBREVIATIONS_FILE`: abbreviation table path (default: "abbreviations.json")
/// - `STG_MIN_CONFIDENCE`: minimum match confidence 0-100 (default: 0)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stg_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let records_path =
        std::env::var("STG_RECORDS_FILE").unwrap_or_else(|_| DEFAULT_RECORDS_FILENAME.into());
    let abbreviations_path = std::env::var("STG_ABBREVIATIONS_FILE")
        .unwrap_or_else(|_| DEFAULT_ABBREVIATIONS_FILENAME.into());
    let minimum_confidence = stg_core::config::minimum_confidence_from_env_value(
        std::env::var("STG_MIN_CONFIDENCE").ok(),
    )?;

    let config = CoreConfig::new(
        records_path.into(),
        abbreviations_path.into(),
        minimum_confidence,
    )?;

    tracing::info!(
        "++ Loading guideline records from {}",
        config.records_path().display()
    );
    let store = Arc::new(RecordStore::load_from_path(config.records_path())?);
    let abbreviations = Arc::new(AbbreviationTable::load_or_default(
        config.abbreviations_path(),
    )?);
    let resolver = QueryResolver::new(store, abbreviations, config.minimum_confidence());

    tracing::info!("++ Ready, reading queries from stdin");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        match resolver.resolve(query).outcome {
            ResolveOutcome::Resolved(record) => print_record(&record),
            ResolveOutcome::NotFound => {
                println!("No matching guideline entry. Try a more specific name.")
            }
        }
    }

    Ok(())
}

fn print_record(record: &GuidelineRecord) {
    println!("{} (Code: {})", record.condition, record.section_code);
    if !record.definition.is_empty() {
        println!("Definition: {}", record.definition);
    }
    if !record.investigations.is_empty() {
        println!("Investigations:");
        for item in &record.investigations {
            println!("- {}", item);
        }
    }
    if !record.treatment.is_empty() {
        println!("Treatment:");
        for item in &record.treatment {
            println!("- {}", item);
        }
    }
}
