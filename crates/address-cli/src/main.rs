//! Address segmenter command line
//!
//! Reads a pasted address block from a file or stdin and prints the
//! segmented record as JSON.

use address_core::{
    validation::{validate_record, validate_record_with},
    AddressSegmenter, PinDirectory, PipelineOptions, SegmenterConfig,
};
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::io::Read;
use std::path::PathBuf;

/// Exit status when `--validate` finds problems
const EXIT_INVALID_RECORD: i32 = 2;

fn main() -> Result<()> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = Command::new("address-segment")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split a pasted postal address into structured fields")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("File holding the address text; reads stdin when omitted or '-'")
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON configuration file (ADDRESS__* environment variables override it)")
        )
        .arg(
            Arg::new("reduced")
                .long("reduced")
                .help("Skip care-of and landmark extraction")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("pin-directory")
                .long("pin-directory")
                .value_name("FILE")
                .help("JSON list of serviceable PIN codes used by --validate")
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .help("Check the record is shippable; exit with status 2 when it is not")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue)
        )
        .get_matches();

    let mut config = SegmenterConfig::load(matches.get_one::<String>("config"))?;
    if matches.get_flag("reduced") {
        config.pipeline = PipelineOptions::reduced();
    }
    if let Some(path) = matches.get_one::<String>("pin-directory") {
        config.pin_directory = Some(PathBuf::from(path));
    }

    let segmenter = AddressSegmenter::with_config(&config)
        .context("Failed to build address segmenter")?;
    log::debug!("Pipeline stages: {:?}", segmenter.options());

    let text = read_input(matches.get_one::<String>("input").map(String::as_str))?;
    let record = segmenter.segment(&text);

    let output = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", output);

    if matches.get_flag("validate") {
        let errors = match &config.pin_directory {
            Some(path) => {
                let directory = PinDirectory::from_file(path)
                    .with_context(|| format!("Failed to load PIN directory {}", path.display()))?;
                validate_record_with(&record, &directory)
            }
            None => validate_record(&record),
        };

        if !errors.is_empty() {
            for error in &errors {
                log::warn!("{}", error);
            }
            std::process::exit(EXIT_INVALID_RECORD);
        }
        log::info!("Record is valid for shipping");
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read address text from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read address text from {}", path)),
    }
}
