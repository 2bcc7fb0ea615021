// mpasio/src/lib.rs

//! Readers for MPAS model configuration files.
//!
//! This library provides:
//! - A namelist reader that flattens `key = value` lines into a read-only
//!   mapping, with typed accessors
//! - A streams reader that looks up stream attributes in the streams XML file
//! - Resolution of stream filename templates (`$Y`, `$M`, ...) into absolute
//!   glob patterns
//!
//! Neither format is ever written back.

pub mod error;
pub mod namelist;
pub mod streams;

#[cfg(feature = "cli")]
pub mod cli;

use std::path::Path;

pub use error::{MpasIoError, Result};
pub use namelist::{convert_namelist_to_map, NameList, NamelistMap};
pub use streams::{StreamRecord, StreamsDocument, StreamsFile, Wildcard};

/// Read a namelist file.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), mpasio::MpasIoError> {
///     let nml = mpasio::read_namelist("namelist.ocean")?;
///     let dt = nml.get("config_dt")?;
///     println!("time step: {}", dt);
///     Ok(())
/// }
/// ```
pub fn read_namelist<P: AsRef<Path>>(path: P) -> Result<NameList> {
    NameList::new(path)
}

/// Read a streams file.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), mpasio::MpasIoError> {
///     let streams = mpasio::read_streams("streams.ocean")?;
///     let pattern = streams.read_path("timeSeriesStatsMonthlyOutput", "filename_template")?;
///     println!("monthly files: {}", pattern);
///     Ok(())
/// }
/// ```
pub fn read_streams<P: AsRef<Path>>(path: P) -> Result<StreamsFile> {
    StreamsFile::new(path)
}

#[cfg(feature = "json")]
/// Convert a namelist mapping to a JSON object string.
pub fn to_json(nml: &NamelistMap) -> Result<String> {
    serde_json::to_string_pretty(nml).map_err(MpasIoError::from)
}
