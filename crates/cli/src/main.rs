use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use stg_core::constants::{DEFAULT_ABBREVIATIONS_FILENAME, DEFAULT_RECORDS_FILENAME};
use stg_core::{
    extract_records, AbbreviationTable, GuidelineRecord, QueryResolver, RecordStore,
    ResolveOutcome,
};

#[derive(Parser)]
#[command(name = "stg")]
#[command(about = "STG guideline knowledge base CLI")]
struct Cli {
    /// Path to the structured records file
    #[arg(long, default_value = DEFAULT_RECORDS_FILENAME)]
    records: PathBuf,

    /// Path to the abbreviation table file
    #[arg(long, default_value = DEFAULT_ABBREVIATIONS_FILENAME)]
    abbreviations: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured records from a guidelines text file
    Extract {
        /// Path to the extracted document text
        input: PathBuf,
        /// Path to write the structured records to
        output: PathBuf,
    },
    /// Resolve a free-text query against the record store
    Query {
        /// Query text (condition name, section code, or abbreviation)
        text: String,
        /// Minimum confidence (0-100) for approximate matches
        #[arg(long, default_value_t = 0.0)]
        min_confidence: f64,
    },
    /// List all condition titles in store order
    Titles,
    /// Show the abbreviation table
    Abbreviations,
    /// Add or overwrite an abbreviation
    SetAbbreviation {
        /// Short form, e.g. "tb"
        short: String,
        /// Canonical phrase, e.g. "tuberculosis"
        phrase: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract { input, output }) => {
            let document = std::fs::read_to_string(&input)?;
            let records = extract_records(&document);
            let store = RecordStore::from_records(records);
            store.save_to_path(&output)?;
            println!(
                "Extracted {} guideline entries to {}",
                store.len(),
                output.display()
            );
        }
        Some(Commands::Query {
            text,
            min_confidence,
        }) => {
            let store = Arc::new(RecordStore::load_from_path(&cli.records)?);
            let abbreviations = Arc::new(AbbreviationTable::load_or_default(&cli.abbreviations)?);
            let resolver = QueryResolver::new(store, abbreviations, min_confidence);

            match resolver.resolve(&text).outcome {
                ResolveOutcome::Resolved(record) => print_record(&record),
                ResolveOutcome::NotFound => {
                    println!("No matching guideline entry. Try a more specific name.")
                }
            }
        }
        Some(Commands::Titles) => {
            let store = RecordStore::load_from_path(&cli.records)?;
            if store.is_empty() {
                println!("No guideline entries found.");
            } else {
                for title in store.all_titles() {
                    println!("{}", title);
                }
            }
        }
        Some(Commands::Abbreviations) => {
            let abbreviations = AbbreviationTable::load_or_default(&cli.abbreviations)?;
            for (short, phrase) in abbreviations.snapshot() {
                println!("{}: {}", short, phrase);
            }
        }
        Some(Commands::SetAbbreviation { short, phrase }) => {
            let abbreviations = AbbreviationTable::load_or_default(&cli.abbreviations)?;
            match abbreviations.update(&short, &phrase) {
                Ok(()) => println!("Saved abbreviation {} -> {}", short.to_lowercase(), phrase.to_lowercase()),
                Err(e) => eprintln!("Error saving abbreviation: {}", e),
            }
        }
        None => {
            println!("Use 'stg --help' for commands");
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
