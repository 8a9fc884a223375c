use crossterm::style::Stylize;
use phrase_core::core::tokenizer::tokenize_str;
use phrase_core::Processor;
use std::env;
use std::fs::File;
use std::io::{self, stdin, stdout, BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_SNAPSHOT_PATH: &str = "phrases.zip";
const SNAPSHOT_ENV: &str = "PHRASE_SNAPSHOT";

const USAGE: &str = "\
usage:
  phrase_engine train [FILE...]     train on one phrase per line (stdin if no FILE)
  phrase_engine process [--json]    split stdin into corrected phrases
  phrase_engine check WORD...       print spelling candidates

The model is read from and saved to $PHRASE_SNAPSHOT (default: phrases.zip).";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let snapshot_path = env::var(SNAPSHOT_ENV).unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());

    let result = match args.first().map(String::as_str) {
        Some("train") => train(&snapshot_path, &args[1..]),
        Some("process") => process(&snapshot_path, args[1..].iter().any(|a| a == "--json")),
        Some("check") if args.len() > 1 => check(&snapshot_path, &args[1..]),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn train(snapshot_path: &str, files: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Processor::from_file_or_new(snapshot_path)?;

    let mut phrases = Vec::new();
    if files.is_empty() {
        read_phrases(stdin().lock(), &mut phrases)?;
    } else {
        for file in files {
            read_phrases(BufReader::new(File::open(file)?), &mut phrases)?;
        }
    }

    engine.train(&phrases);
    engine.save_snapshot()?;
    eprintln!("Trained on {} phrases, model saved to '{}'", phrases.len(), snapshot_path);
    Ok(())
}

fn read_phrases<R: BufRead>(reader: R, phrases: &mut Vec<String>) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            phrases.push(line);
        }
    }
    Ok(())
}

fn process(snapshot_path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_model(snapshot_path)?;

    let phrases = engine.process(stdin().lock())?;

    let mut out = stdout().lock();
    if json {
        serde_json::to_writer(&mut out, &phrases)?;
        writeln!(out)?;
    } else {
        for phrase in &phrases {
            writeln!(out, "{}", phrase.as_str().green())?;
        }
    }
    Ok(())
}

fn check(snapshot_path: &str, words: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_model(snapshot_path)?;
    let mut out = stdout().lock();
    for word in words {
        for (token, candidates) in token_candidates(&engine, word) {
            writeln!(out, "{}: {}", token.as_str().bold(), candidates.join(", "))?;
        }
    }
    Ok(())
}

/// Loads the model for read-only commands, warning when none has been trained.
fn open_model(snapshot_path: &str) -> phrase_core::Result<Processor> {
    if !Path::new(snapshot_path).exists() {
        eprintln!(
            "{} no model at '{}', run `phrase_engine train` first; using an empty model",
            "[WARN]".yellow().bold(),
            snapshot_path
        );
    }
    Processor::from_file_or_new(snapshot_path)
}

/// Spelling candidates for every token the tokenizer finds in `word`.
fn token_candidates(engine: &Processor, word: &str) -> Vec<(String, Vec<String>)> {
    tokenize_str(word)
        .into_iter()
        .map(|token| {
            let candidates = engine.check(&token).into_vec();
            (token, candidates)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_tokens_are_checked_separately() {
        let engine = Processor::new();
        engine.train(["rock band"]);

        let got = token_candidates(&engine, "Rokc2");
        assert_eq!(
            got,
            vec![
                ("rokc".to_string(), vec!["rokc".to_string()]),
                ("2".to_string(), vec!["2".to_string()]),
            ]
        );
        let got = token_candidates(&engine, "rok");
        assert_eq!(got, vec![("rok".to_string(), vec!["rock".to_string()])]);
    }

    #[test]
    fn missing_model_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.zip");
        let engine = open_model(path.to_str().unwrap()).unwrap();
        assert_eq!(engine.process_str("bass guitar"), vec!["bass", "guitar"]);
    }

    #[test]
    fn damaged_model_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.zip");
        std::fs::write(&path, b"garbage").unwrap();
        assert!(open_model(path.to_str().unwrap()).is_err());
    }
}

