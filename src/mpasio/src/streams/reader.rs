// mpasio/src/streams/reader.rs

//! Streams file reader.

use super::document::{StreamRecord, StreamsDocument};
use super::template;
use crate::error::{MpasIoError, Result};
use log::{debug, trace};
use std::path::{Component, Path, PathBuf};

/// A streams XML file held in memory.
///
/// `absdir` is the absolute directory containing the file. Relative filename
/// templates are anchored there by [`StreamsFile::read_path`].
#[derive(Debug, Clone)]
pub struct StreamsFile {
    path: Option<PathBuf>,
    absdir: PathBuf,
    document: StreamsDocument,
}

impl StreamsFile {
    /// Read and parse a streams file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs_err::read_to_string(path)?;
        let document = StreamsDocument::parse(&content).map_err(|source| MpasIoError::Xml {
            path: Some(path.to_path_buf()),
            source,
        })?;
        let absdir = absolute_dir(path)?;
        debug!(
            "Read {} streams from {} (absdir {})",
            document.len(),
            path.display(),
            absdir.display()
        );
        Ok(Self {
            path: Some(path.to_path_buf()),
            absdir,
            document,
        })
    }

    /// Parse streams XML that did not come from a file. Relative templates
    /// are anchored at `absdir` exactly as given.
    pub fn parse<P: Into<PathBuf>>(xml: &str, absdir: P) -> Result<Self> {
        let document =
            StreamsDocument::parse(xml).map_err(|source| MpasIoError::Xml { path: None, source })?;
        Ok(Self {
            path: None,
            absdir: absdir.into(),
            document,
        })
    }

    /// Attribute `attrib_name` of the first stream named `stream_name`.
    ///
    /// Returns `None` when no stream has that name or the stream lacks the
    /// attribute.
    pub fn read(&self, stream_name: &str, attrib_name: &str) -> Option<&str> {
        self.document.find(stream_name)?.attribute(attrib_name)
    }

    /// Attribute `attrib_name` of `stream_name` as an absolute glob pattern.
    ///
    /// Date/time placeholders (`$Y`, `$M`, `$D`, `$S`, `$h`, `$m`, `$s`) become
    /// fixed-width `[0-9]` classes and a relative result is prefixed with
    /// [`StreamsFile::absdir`]. Unlike [`StreamsFile::read`], a missing stream
    /// or attribute is an error.
    pub fn read_path(&self, stream_name: &str, attrib_name: &str) -> Result<String> {
        let template = self
            .read(stream_name, attrib_name)
            .ok_or_else(|| MpasIoError::missing_attribute(stream_name, attrib_name))?;
        let resolved = template::resolve(template, &self.absdir);
        trace!(
            "Resolved {}/{} template '{}' to '{}'",
            stream_name,
            attrib_name,
            template,
            resolved
        );
        Ok(resolved)
    }

    /// The file this document was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn absdir(&self) -> &Path {
        &self.absdir
    }

    pub fn stream(&self, name: &str) -> Option<&StreamRecord> {
        self.document.find(name)
    }

    pub fn has_stream(&self, name: &str) -> bool {
        self.stream(name).is_some()
    }

    pub fn streams(&self) -> impl Iterator<Item = &StreamRecord> {
        self.document.iter()
    }

    pub fn stream_names(&self) -> impl Iterator<Item = &str> {
        self.document.names()
    }

    pub fn document(&self) -> &StreamsDocument {
        &self.document
    }
}

/// Directory containing `path`, made absolute against the working directory
/// and normalized lexically. Symlinks are left alone.
fn absolute_dir(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    let normalized = normalize(&absolute);
    Ok(match normalized.parent() {
        Some(parent) => parent.to_path_buf(),
        None => normalized,
    })
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAMS: &str = r#"<streams>
<stream name="forcing" type="input" filename_template="files/$Y-$M-$D.nc"/>
<stream name="absolute" type="input" filename_template="/abs/$Y.nc"/>
</streams>"#;

    #[test]
    fn test_read() {
        let streams = StreamsFile::parse(STREAMS, "/data/run").unwrap();
        assert_eq!(streams.read("forcing", "type"), Some("input"));
        assert_eq!(streams.read("missing", "type"), None);
        assert_eq!(streams.read("forcing", "missing"), None);
    }

    #[test]
    fn test_read_path_relative() {
        let streams = StreamsFile::parse(STREAMS, "/data/run").unwrap();
        assert_eq!(
            streams.read_path("forcing", "filename_template").unwrap(),
            "/data/run/files/[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9].nc"
        );
    }

    #[test]
    fn test_read_path_absolute() {
        let streams = StreamsFile::parse(STREAMS, "/data/run").unwrap();
        assert_eq!(
            streams.read_path("absolute", "filename_template").unwrap(),
            "/abs/[0-9][0-9][0-9][0-9].nc"
        );
    }

    #[test]
    fn test_read_path_missing_is_an_error() {
        let streams = StreamsFile::parse(STREAMS, "/data/run").unwrap();
        let err = streams.read_path("forcing", "reference_time").unwrap_err();
        assert!(matches!(
            err,
            MpasIoError::MissingAttribute { ref stream, ref attribute }
                if stream == "forcing" && attribute == "reference_time"
        ));
        assert!(matches!(
            streams.read_path("missing", "filename_template"),
            Err(MpasIoError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_stream_listing() {
        let streams = StreamsFile::parse(STREAMS, "/data/run").unwrap();
        let names: Vec<_> = streams.stream_names().collect();
        assert_eq!(names, vec!["forcing", "absolute"]);
        assert!(streams.has_stream("forcing"));
        assert!(!streams.has_stream("output"));
        assert!(streams.path().is_none());
    }

    #[test]
    fn test_streams_with_doctype() {
        let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE streams>\n\
                   <streams><stream name=\"forcing\" type=\"input\"/></streams>";
        let streams = StreamsFile::parse(xml, "/data/run").unwrap();
        assert_eq!(streams.read("forcing", "type"), Some("input"));
    }

    #[test]
    fn test_malformed_xml() {
        let err = StreamsFile::parse("<streams>", "/data/run").unwrap_err();
        assert!(matches!(err, MpasIoError::Xml { path: None, .. }));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/data/./run/../run2/streams.ocean")),
            PathBuf::from("/data/run2/streams.ocean")
        );
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_absolute_dir() {
        assert_eq!(
            absolute_dir(Path::new("/data/run/streams.ocean")).unwrap(),
            PathBuf::from("/data/run")
        );
        assert_eq!(
            absolute_dir(Path::new("/data/run/sub/../streams.ocean")).unwrap(),
            PathBuf::from("/data/run")
        );
        assert_eq!(absolute_dir(Path::new("/streams.ocean")).unwrap(), PathBuf::from("/"));

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            absolute_dir(Path::new("streams.ocean")).unwrap(),
            normalize(&cwd)
        );
    }
}
