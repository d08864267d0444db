//! Command implementations for Rhymer CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::tokenizer::clean_word;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::RhymeEngine;
use crate::error::{Result, RhymerError};
use crate::phonetic::resolver::PhonemeResolver;
use crate::phonetic::tail::RhymeTail;

/// Label used for text read from standard input.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Execute a CLI command.
pub fn execute_command(args: RhymerArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_sources(analyze_args.clone(), &args),
        Command::Phones(phones_args) => show_phones(phones_args.clone(), &args),
        Command::Config(config_args) => show_config(config_args.clone(), &args),
    }
}

/// Analyze every input file, or stdin when none are given.
fn analyze_sources(args: AnalyzeArgs, cli_args: &RhymerArgs) -> Result<()> {
    let config = args.config.resolve()?;
    debug!("effective config: {}", config.to_json(false)?);

    let inputs = read_inputs(&args)?;
    let engine = RhymeEngine::new(config)?;

    let start = Instant::now();
    let reports = analyze_all(&engine, inputs);
    info!(
        "analyzed {} input(s) in {:?}, {} word(s) cached",
        reports.len(),
        start.elapsed(),
        engine.resolver().cache().len()
    );

    output_reports(&reports, cli_args)
}

/// Load `(source, text)` pairs for the analyze command.
fn read_inputs(args: &AnalyzeArgs) -> Result<Vec<(String, String)>> {
    if args.files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(vec![(STDIN_SOURCE.to_string(), text)]);
    }

    args.files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path).map_err(|e| {
                RhymerError::invalid_argument(format!("cannot read {}: {e}", path.display()))
            })?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}

/// Analyze inputs in parallel against one shared engine, keeping input order.
pub fn analyze_all(engine: &RhymeEngine, inputs: Vec<(String, String)>) -> Vec<SourceReport> {
    inputs
        .into_par_iter()
        .map(|(source, text)| {
            let result = engine.analyze(&text);
            debug!("{source}: scheme {}", result.scheme);
            SourceReport { source, result }
        })
        .collect()
}

/// Resolve each word and show its phonemes and rhyme tail.
fn show_phones(args: PhonesArgs, cli_args: &RhymerArgs) -> Result<()> {
    let resolver = PhonemeResolver::new();
    let reports: Vec<PhonesReport> = args
        .words
        .iter()
        .map(|word| phones_report(&resolver, word))
        .collect();

    output_phones(&reports, cli_args)
}

/// Build the phoneme report for one raw word.
pub fn phones_report(resolver: &PhonemeResolver, word: &str) -> PhonesReport {
    let phones = resolver.word_to_phones(word);
    let tail = RhymeTail::from_phones(&phones);
    PhonesReport {
        word: word.to_string(),
        cleaned: clean_word(word),
        bucket_key: tail.bucket_key(),
        phones,
        tail,
    }
}

/// Print the effective configuration.
fn show_config(args: ConfigArgs, cli_args: &RhymerArgs) -> Result<()> {
    let config = args.config.resolve()?;
    match cli_args.output_format {
        OutputFormat::Json => output_json(&config, cli_args),
        OutputFormat::Human => {
            println!("{}", config.to_json(true)?);
            Ok(())
        }
    }
}
