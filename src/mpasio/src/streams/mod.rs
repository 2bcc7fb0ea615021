// mpasio/src/streams/mod.rs

//! Streams XML reading and filename template resolution.

pub mod document;
pub mod reader;
pub mod template;

pub use document::{StreamRecord, StreamsDocument};
pub use reader::StreamsFile;
pub use template::Wildcard;
