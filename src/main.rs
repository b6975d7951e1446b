//! Quintwords CLI
//!
//! Loads a dictionary, runs the widening search, and writes the expanded
//! solutions as comma-separated rows.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use quintwords::{output, solve, Corpus, SearchContext, SearchParams, WORD_LENGTH};

const USAGE: &str = "\
quintwords - find five five-letter words using 25 distinct letters

USAGE:
    quintwords [OPTIONS] [DICTIONARY]

ARGS:
    <DICTIONARY>    newline-delimited word list [default: words_alpha.txt]

OPTIONS:
    -o, --output <FILE>    write comma-separated results here [default: results.csv]
    -w, --window <N>       use a uniform frontier window for every seed run
    -h, --help             print this help
";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut dictionary = String::from("words_alpha.txt");
    let mut output_path = String::from("results.csv");
    let mut window: Option<usize> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--output" | "-o" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output_path = path.clone(),
                    None => bail!("--output requires a file path"),
                }
            }
            "--window" | "-w" => {
                i += 1;
                let value = args.get(i).context("--window requires a number")?;
                window = Some(value.parse().context("--window expects a number")?);
            }
            arg if arg.starts_with('-') => {
                bail!("unknown option: {arg} (try --help)");
            }
            arg => {
                dictionary = arg.to_string();
            }
        }
        i += 1;
    }

    let start = Instant::now();

    let corpus = Corpus::from_path(&dictionary, WORD_LENGTH)?;
    println!(
        "Loaded {} words ({} unique letter sets).",
        corpus.len(),
        corpus.candidates().len()
    );

    let mut params = SearchParams::classic();
    if let Some(window) = window {
        for run in &mut params.runs {
            run.window = window;
        }
    }

    let ctx = SearchContext::from_corpus(&corpus);
    let solutions = solve(&ctx, &params)?;
    let rows = output::write_csv(&output_path, &corpus, &solutions)?;

    println!(
        "Found {} solutions ({} rows after anagram expansion).",
        solutions.len(),
        rows
    );
    println!("Wrote {output_path}");
    println!("Total time: {:.2?}", start.elapsed());
    Ok(())
}
