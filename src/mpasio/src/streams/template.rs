// mpasio/src/streams/template.rs

//! Filename template resolution.
//!
//! Stream filename templates carry date/time placeholders such as `$Y` or
//! `$h`. Each placeholder stands for a fixed-width run of digits in real file
//! names, so resolving a template turns every placeholder into that many
//! `[0-9]` glob classes. The result is a glob pattern; expanding it against
//! the filesystem is left to the caller.

use std::path::Path;

/// Glob character class for a single digit.
pub const DIGIT_CLASS: &str = "[0-9]";

/// Date/time placeholders understood in filename templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `$Y`, four-digit year
    Year,
    /// `$M`, two-digit month
    Month,
    /// `$D`, two-digit day
    Day,
    /// `$S`, five-digit seconds of day
    SecondOfDay,
    /// `$h`, two-digit hour
    Hour,
    /// `$m`, two-digit minute
    Minute,
    /// `$s`, two-digit second
    Second,
}

impl Wildcard {
    pub const ALL: [Wildcard; 7] = [
        Wildcard::Year,
        Wildcard::Month,
        Wildcard::Day,
        Wildcard::SecondOfDay,
        Wildcard::Hour,
        Wildcard::Minute,
        Wildcard::Second,
    ];

    /// Letter following the `$`.
    pub fn symbol(self) -> char {
        match self {
            Wildcard::Year => 'Y',
            Wildcard::Month => 'M',
            Wildcard::Day => 'D',
            Wildcard::SecondOfDay => 'S',
            Wildcard::Hour => 'h',
            Wildcard::Minute => 'm',
            Wildcard::Second => 's',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.symbol() == symbol)
    }

    /// Number of digits the placeholder stands for.
    pub fn width(self) -> usize {
        match self {
            Wildcard::Year => 4,
            Wildcard::SecondOfDay => 5,
            Wildcard::Month
            | Wildcard::Day
            | Wildcard::Hour
            | Wildcard::Minute
            | Wildcard::Second => 2,
        }
    }

    /// The placeholder as written in a template, e.g. `$Y`.
    pub fn token(self) -> String {
        format!("${}", self.symbol())
    }

    /// Glob pattern matching exactly [`Wildcard::width`] digits.
    pub fn glob(self) -> String {
        DIGIT_CLASS.repeat(self.width())
    }
}

/// Replace every placeholder in `template` with its digit glob.
///
/// The template is scanned once from left to right, so text produced by a
/// replacement is never looked at again. A `$` that is not followed by one of
/// the known letters is copied through, as is any existing glob syntax.
///
/// ```
/// use mpasio::streams::template::expand_wildcards;
///
/// assert_eq!(expand_wildcards("hist.$Y-$M.nc"), "hist.[0-9][0-9][0-9][0-9]-[0-9][0-9].nc");
/// ```
pub fn expand_wildcards(template: &str) -> String {
    let mut expanded = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(wildcard) = chars.peek().copied().and_then(Wildcard::from_symbol) {
                chars.next();
                expanded.push_str(&wildcard.glob());
                continue;
            }
        }
        expanded.push(c);
    }
    expanded
}

/// Prefix a relative pattern with `absdir`; absolute patterns are returned
/// unchanged.
pub fn anchor_path(pattern: &str, absdir: &Path) -> String {
    if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        format!("{}/{}", absdir.display(), pattern)
    }
}

/// Expand placeholders and anchor the result at `absdir`.
pub fn resolve(template: &str, absdir: &Path) -> String {
    anchor_path(&expand_wildcards(template), absdir)
}
