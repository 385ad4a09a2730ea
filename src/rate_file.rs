//! Line-oriented `CODE:RATE` rate file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{RateError, Result};
use crate::exchange_rate::{format_number, parse_number};
use crate::rate_store::RateStore;

pub const DEFAULT_RATES_FILE: &str = "rates.txt";

/// Reads `path` into `store`, upserting one entry per `CODE:RATE` line.
///
/// Lines that do not split into exactly two fields are skipped. A rate that
/// is not a number aborts the load; entries from earlier lines stay in
/// `store`, later lines are never read.
pub fn load(path: &Path, store: &mut RateStore) -> Result<usize> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RateError::FileNotFound(path.to_path_buf()),
        _ => RateError::IoFailure {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut loaded = 0;
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| RateError::IoFailure {
            path: path.to_path_buf(),
            source,
        })?;

        let Some((code, rate)) = split_record(&line) else {
            debug!("Skipping malformed line {} in {}: {:?}", number + 1, path.display(), line);
            continue;
        };

        store.upsert(code, parse_number(rate)?);
        loaded += 1;
    }

    Ok(loaded)
}

/// Overwrites `path` with one `CODE:RATE` line per entry, in store order.
pub fn save(path: &Path, store: &RateStore) -> Result<()> {
    let io_failure = |source| RateError::IoFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_failure)?);
    for entry in store.iter() {
        writeln!(writer, "{}:{}", entry.code, format_number(entry.rate)).map_err(io_failure)?;
    }
    writer.flush().map_err(io_failure)?;

    info!("Saved {} rates to {}", store.len(), path.display());
    Ok(())
}

// Trailing empty fields are dropped before counting, so `USD:1.0:` is a
// record and `USD:` is not.
fn split_record(line: &str) -> Option<(&str, &str)> {
    let mut parts: Vec<&str> = line.split(':').collect();
    while parts.len() > 1 && parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [code, rate] => Some((*code, *rate)),
        _ => None,
    }
}
