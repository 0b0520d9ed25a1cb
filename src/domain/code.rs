//! Pure functions over hierarchical work-breakdown codes ("1", "1.2", "1.2.3").

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)*$").unwrap());

/// True iff the whole string matches the code grammar `\d+(\.\d+)*`.
/// The empty string is not a valid code.
pub fn is_valid_code(code: &str) -> bool {
    CODE_RE.is_match(code)
}

/// Parent of a hierarchical code: everything before the last `.`.
///
/// `"1.2.3"` -> `"1.2"`, `"1"` -> `""`. Does not validate its input.
pub fn parent_code(code: &str) -> &str {
    match code.rfind('.') {
        Some(pos) => &code[..pos],
        None => "",
    }
}

/// Depth of a code: 1 for a top-level code, +1 per dot-separated segment.
/// Only the empty string has level 0.
pub fn level_of(code: &str) -> usize {
    if code.is_empty() {
        return 0;
    }
    code.matches('.').count() + 1
}

/// Escape a string for embedding inside a quoted DOT label: backslash and
/// double quote get a leading backslash, everything else passes through.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Numeric segment-wise ordering of two valid codes.
///
/// A code that is a prefix of another sorts first ("1" < "1.1"), and segments
/// compare as integers ("1.2" < "1.10"). Callers must have validated both
/// codes; non-numeric segments compare as 0.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    let seg = |s: &str| s.parse::<u64>().unwrap_or(0);
    a.split('.').map(seg).cmp(b.split('.').map(seg))
}

/// Split one CSV line into fields.
///
/// Comma-separated, but a field may be wrapped in double quotes: commas inside
/// quotes are literal and `""` inside quotes is an escaped quote.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
