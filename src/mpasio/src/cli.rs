// mpasio/src/cli.rs

//! Command handlers for the `mpasio` binary.
//!
//! Each handler returns the text to print so it can be checked without
//! capturing stdout.

use crate::{NameList, StreamsFile};
use anyhow::Context;
use clap::ValueEnum;
use log::info;
use std::path::Path;

/// How `get` should interpret a namelist value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueKind {
    #[default]
    Str,
    Int,
    Float,
    Bool,
}

fn load_namelist(path: &Path) -> anyhow::Result<NameList> {
    NameList::new(path).context(format!("Error reading namelist {}", path.display()))
}

fn load_streams(path: &Path) -> anyhow::Result<StreamsFile> {
    StreamsFile::new(path).context(format!("Error reading streams file {}", path.display()))
}

/// Look up one namelist value, converted as requested.
pub fn get_value(namelist: &Path, key: &str, kind: ValueKind) -> anyhow::Result<String> {
    let nml = load_namelist(namelist)?;
    let value = match kind {
        ValueKind::Str => nml.get(key)?.to_string(),
        ValueKind::Int => nml.get_int(key)?.to_string(),
        ValueKind::Float => nml.get_float(key)?.to_string(),
        ValueKind::Bool => nml.get_bool(key)?.to_string(),
    };
    Ok(value)
}

/// Every namelist entry as a JSON object.
pub fn dump_namelist(namelist: &Path) -> anyhow::Result<String> {
    let nml = load_namelist(namelist)?;
    info!("Dumping {} entries from {}", nml.len(), namelist.display());
    Ok(crate::to_json(nml.as_map())?)
}

/// Raw attribute of a stream.
pub fn read_attribute(streams: &Path, stream: &str, attribute: &str) -> anyhow::Result<String> {
    let file = load_streams(streams)?;
    match file.read(stream, attribute) {
        Some(value) => Ok(value.to_string()),
        None => anyhow::bail!(
            "No attribute '{}' on stream '{}' in {}",
            attribute,
            stream,
            streams.display()
        ),
    }
}

/// Attribute of a stream resolved to an absolute glob pattern.
pub fn resolve_path(streams: &Path, stream: &str, attribute: &str) -> anyhow::Result<String> {
    let file = load_streams(streams)?;
    Ok(file.read_path(stream, attribute)?)
}

/// Names of all streams, one per line.
pub fn list_streams(streams: &Path) -> anyhow::Result<String> {
    let file = load_streams(streams)?;
    Ok(file.stream_names().collect::<Vec<_>>().join("\n"))
}
