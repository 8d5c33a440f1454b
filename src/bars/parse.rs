use crate::error::RecordError;
use crate::git::FIELD_SEPARATOR;
use crate::model::CommitRecord;
use chrono::DateTime;
use tracing::{trace, warn};

/// Layout of git's `%ai` placeholder, e.g. `2018-11-02 10:00:00 +0530`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

pub fn parse_record(line: &str) -> Result<CommitRecord, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [timestamp, author] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    };

    let value = timestamp.trim();
    let timestamp =
        DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| RecordError::Timestamp {
            value: value.to_string(),
            source,
        })?;

    Ok(CommitRecord {
        timestamp,
        author: author.trim().to_string(),
    })
}

/// Parses every line, logging and skipping the ones that are malformed.
pub fn parse_records<'a, I>(lines: I) -> impl Iterator<Item = CommitRecord> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            if line.trim().is_empty() {
                trace!(line = index + 1, "skipping blank log line");
                return None;
            }
            match parse_record(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "skipping malformed log line");
                    None
                }
            }
        })
}
