//! Flat-file snapshots.
//!
//! One record per line, `<key>,<value>\n`. Only the first comma splits, so
//! values may contain commas but not newlines. No header, footer or
//! checksum.
//!
//! Loading goes through [`Backend::put`], so any backend can be rehydrated.
//! Lines that do not parse (not UTF-8, no comma, non-integer key) are
//! skipped, logged, and counted in [`LoadStats::skipped`]; they never abort
//! the load. Only a trailing `\n` is stripped, so a `\r` stays in the value.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{RecordError, Result, StoreError};
use crate::{Backend, Key};

/// Outcome of [`load_into`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Records applied through `put`.
    pub loaded: usize,
    /// Malformed records that were skipped.
    pub skipped: usize,
    /// `false` if there was no snapshot file.
    pub found: bool,
}

/// Splits one snapshot line into key and value.
///
/// The line must not include its terminating newline.
///
/// ```
/// use linkv::snapshot::parse_line;
///
/// assert_eq!(parse_line("5,hello"), Ok((5, "hello")));
/// assert_eq!(parse_line("-1,a,b"), Ok((-1, "a,b")));
/// assert!(parse_line("nokey").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<(Key, &str), RecordError> {
    let (key, value) = line.split_once(',').ok_or(RecordError::MissingComma)?;
    let key = key
        .parse::<Key>()
        .map_err(|_| RecordError::InvalidKey(key.to_owned()))?;
    Ok((key, value))
}

/// Writes `entries` in snapshot format. Returns the number of records.
pub fn write_entries<'a, W, I>(mut out: W, entries: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (Key, &'a str)>,
{
    let mut count = 0;
    for (key, value) in entries {
        writeln!(out, "{key},{value}")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Replays the snapshot at `path` into `backend`, in file order.
///
/// A missing file is not an error; the backend is left untouched.
///
/// # Errors
///
/// [`StoreError::Snapshot`] if the file exists but cannot be read, or any
/// error returned by the backend's `put`.
pub fn load_into<B>(backend: &mut B, path: &Path) -> Result<LoadStats>
where
    B: Backend + ?Sized,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot, starting empty");
            return Ok(LoadStats::default());
        }
        Err(e) => return Err(StoreError::snapshot(path)(e)),
    };

    let mut stats = LoadStats {
        found: true,
        ..LoadStats::default()
    };

    // Split on '\n' only; a '\r' before it belongs to the value.
    for (idx, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let raw = raw.map_err(StoreError::snapshot(path))?;
        let record = std::str::from_utf8(&raw)
            .map_err(|_| RecordError::InvalidUtf8)
            .and_then(parse_line);
        match record {
            Ok((key, value)) => {
                backend.put(key, value)?;
                stats.loaded += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), line = idx + 1, "skipping snapshot record: {e}");
                stats.skipped += 1;
            }
        }
    }

    info!(
        path = %path.display(),
        loaded = stats.loaded,
        skipped = stats.skipped,
        "snapshot loaded"
    );
    Ok(stats)
}

/// Writes `entries` to `path`, replacing any previous snapshot.
///
/// The records go to a sibling `.tmp` file first, which is then renamed
/// over `path`, so a failed save leaves the previous snapshot intact. The
/// temp file is removed when the save fails.
pub fn save<'a, I>(path: &Path, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = (Key, &'a str)>,
{
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    let file = File::create(tmp).map_err(StoreError::snapshot(tmp))?;
    let written = write_entries(BufWriter::new(file), entries)
        .map_err(StoreError::snapshot(tmp))
        .and_then(|count| {
            fs::rename(tmp, path)
                .map(|()| count)
                .map_err(StoreError::snapshot(path))
        });
    let count = match written {
        Ok(count) => count,
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(tmp) {
                debug!(path = %tmp.display(), "could not remove temp snapshot: {cleanup}");
            }
            return Err(e);
        }
    };

    info!(path = %path.display(), records = count, "snapshot saved");
    Ok(count)
}
