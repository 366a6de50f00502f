use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{CbResult, CipherBreakError};
use crate::model::NgramModel;

/// Parse a plain-text frequency table: one `<ngram><delimiter><count>` entry
/// per line. Strict: a line without a count field, or with a non-numeric
/// count, fails the whole load. N-grams are uppercased on the way in.
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> CbResult<Vec<(String, u64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            return Err(CipherBreakError::MalformedModel(format!(
                "line {}: missing count field",
                line + 1
            )));
        }

        let ngram = record[0].trim().to_ascii_uppercase();
        let count: u64 = record[1].trim().parse().map_err(|_| {
            CipherBreakError::MalformedModel(format!(
                "line {}: count '{}' is not an integer",
                line + 1,
                record[1].trim()
            ))
        })?;
        entries.push((ngram, count));
    }

    debug!("parsed {} n-gram entries", entries.len());
    Ok(entries)
}

/// Load a model from a table file on disk.
pub fn load_model<P: AsRef<Path>>(path: P, delimiter: u8) -> CbResult<NgramModel> {
    let file = File::open(path)?;
    NgramModel::from_counts(read_table(file, delimiter)?)
}
