//! Tolerant CSV reader: header-driven parsing of work-breakdown rows.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::code::split_line;
use crate::domain::entities::Record;
use crate::domain::error::{WbsError, WbsResult};

/// Resolved column positions for one input file.
///
/// Header lookup is case-insensitive; when two columns fold to the same name
/// the leftmost occurrence wins.
struct Columns {
    code: usize,
    title: usize,
    description: Option<usize>,
    primary_resp: Option<usize>,
    secondary_resp: Option<usize>,
    estimated_duration: Option<usize>,
}

impl Columns {
    fn resolve(header_fields: &[String]) -> WbsResult<Self> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (i, name) in header_fields.iter().enumerate() {
            positions.entry(name.trim().to_lowercase()).or_insert(i);
        }
        let find = |names: &[&str]| names.iter().find_map(|n| positions.get(*n)).copied();

        let (code, title) = match (find(&["code"]), find(&["title"])) {
            (Some(code), Some(title)) => (code, title),
            _ => {
                return Err(WbsError::malformed(
                    "missing required headers: code, title",
                ))
            }
        };

        Ok(Self {
            code,
            title,
            description: find(&["description"]),
            primary_resp: find(&["primaryresp", "primaryresponsible"]),
            secondary_resp: find(&["secondaryresp", "secondaryresponsible"]),
            estimated_duration: find(&["estimateduration", "estimatedduration"]),
        })
    }
}

/// Read and parse a CSV file into records.
///
/// Fails with `NotFound` if the path does not exist; otherwise delegates to
/// [`parse_records`].
pub fn read_records(path: &Path) -> WbsResult<Vec<Record>> {
    if !path.exists() {
        return Err(WbsError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    parse_records(&text)
}

/// Parse CSV text into the ordered sequence of records.
///
/// The first non-blank line is the header; columns may appear in any order.
/// Required columns are `code` and `title`; data rows lacking either fail with
/// their 1-based line number. Blank lines are skipped.
pub fn parse_records(input: &str) -> WbsResult<Vec<Record>> {
    let mut lines = input.lines().enumerate();

    let (_, header_line) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or_else(|| WbsError::malformed("empty CSV"))?;

    let header_fields = split_line(header_line.trim());
    let columns = Columns::resolve(&header_fields)?;
    debug!("resolved {} header columns", header_fields.len());

    let mut records = Vec::new();
    for (lineno, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields = split_line(line);
        let field = |idx: usize| fields.get(idx).cloned().unwrap_or_default();
        let optional = |idx: Option<usize>| idx.map(&field).unwrap_or_default();

        let code = field(columns.code);
        let title = field(columns.title);
        if code.is_empty() || title.is_empty() {
            return Err(WbsError::malformed_at("missing code/title", lineno + 1));
        }

        records.push(Record {
            code,
            title,
            description: optional(columns.description),
            primary_resp: optional(columns.primary_resp),
            secondary_resp: optional(columns.secondary_resp),
            estimated_duration: optional(columns.estimated_duration),
        });
    }

    debug!("parsed {} records", records.len());
    Ok(records)
}
