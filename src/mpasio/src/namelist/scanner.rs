// mpasio/src/namelist/scanner.rs

//! Line scanner for flat `key = value` namelist assignments.
//!
//! Each line is matched once against an anchored pattern. Only the first
//! assignment on a line is recognized: `a = 1, b = 2` yields the key `a`
//! with the value `1, b = 2`. Lines without an `=` (record delimiters such
//! as `&nml_record` and `/`, blank lines, plain comments) produce nothing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // key: everything before the first `=`, trimmed.
    // value: everything after it, with runs of leading/trailing quotes and
    // surrounding whitespace removed.
    static ref ASSIGNMENT: Regex =
        Regex::new(r#"^\s*(.*?)\s*=\s*['"]*(.*?)['"]*\s*$"#).unwrap();
}

/// A single `key = value` assignment found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Match a single line (without its terminator).
pub fn scan_line(line: &str) -> Option<Assignment<'_>> {
    let caps = ASSIGNMENT.captures(line)?;
    Some(Assignment {
        key: caps.get(1)?.as_str(),
        value: caps.get(2)?.as_str(),
    })
}

/// Iterate over every assignment in `content`, in line order.
///
/// `\n` and `\r\n` terminators are both accepted, and a last line without a
/// terminator is still scanned.
pub fn scan(content: &str) -> impl Iterator<Item = Assignment<'_>> {
    content.lines().filter_map(scan_line)
}
