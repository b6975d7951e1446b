//! Result expansion and comma-separated output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::corpus::Corpus;
use crate::search::Solution;

/// Expand each canonical solution into every raw-word combination via the
/// anagram cross product, one comma-joined row per combination. Word
/// positions follow the solution's canonical mask order.
pub fn expand_rows(corpus: &Corpus, solutions: &[Solution]) -> Vec<String> {
    let mut rows = Vec::new();
    for solution in solutions {
        let groups: Vec<Vec<&str>> = solution
            .iter()
            .map(|&mask| corpus.words_for(mask))
            .collect();
        for combination in groups.into_iter().multi_cartesian_product() {
            rows.push(combination.join(","));
        }
    }
    rows
}

/// Write rows one per line.
pub fn write_rows(writer: &mut impl Write, rows: &[String]) -> Result<()> {
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    Ok(())
}

/// Expand solutions against the corpus and write them to `path`, returning
/// the number of rows written.
pub fn write_csv(path: impl AsRef<Path>, corpus: &Corpus, solutions: &[Solution]) -> Result<usize> {
    let path = path.as_ref();
    let rows = expand_rows(corpus, solutions);
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, &rows)?;
    writer.flush()?;
    Ok(rows.len())
}
