// mpasio/src/namelist/mod.rs

//! Flat namelist reading.
//!
//! The reader treats a namelist as a flat list of `key = value` lines and
//! ignores record structure entirely; values stay as raw strings until a
//! typed accessor is called.

pub mod map;
pub mod reader;
pub mod scanner;

pub use map::NamelistMap;
pub use reader::{convert_namelist_to_map, NameList};
