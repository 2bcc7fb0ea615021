// mpasio/src/streams/document.rs

//! Flat representation of a streams XML document.

/// One top-level element of a streams document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRecord {
    /// Element tag, e.g. `stream` or `immutable_stream`
    tag: String,
    /// Attributes in document order
    attributes: Vec<(String, String)>,
}

impl StreamRecord {
    pub fn new<S: Into<String>>(tag: S, attributes: Vec<(String, String)>) -> Self {
        Self {
            tag: tag.into(),
            attributes,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `name` attribute, if the element has one.
    pub fn name(&self) -> Option<&str> {
        self.attribute("name")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Ordered list of the stream elements found under the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamsDocument {
    streams: Vec<StreamRecord>,
}

impl StreamsDocument {
    /// Parse XML text. Only element children of the root are kept; comments,
    /// text and processing instructions are dropped, as are nested elements.
    /// A `<!DOCTYPE>` declaration is accepted.
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(xml, options)?;
        let streams = doc
            .root_element()
            .children()
            .filter(|node| node.is_element())
            .map(|node| {
                let attributes = node
                    .attributes()
                    .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                    .collect();
                StreamRecord::new(node.tag_name().name(), attributes)
            })
            .collect();
        Ok(Self { streams })
    }

    /// First stream whose `name` attribute equals `name`.
    ///
    /// Names are expected to be unique; a later duplicate is never returned.
    pub fn find(&self, name: &str) -> Option<&StreamRecord> {
        self.streams
            .iter()
            .find(|stream| stream.name() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StreamRecord> {
        self.streams.iter()
    }

    /// Names of all streams that carry one, in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.streams.iter().filter_map(StreamRecord::name)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAMS: &str = r#"<streams>
<immutable_stream name="mesh"
                  type="input"
                  filename_template="mesh.nc"
                  input_interval="initial_only" />

<!-- comment between streams -->
<stream name="output"
        type="output"
        filename_template="output/output.$Y-$M.nc"
        output_interval="0001_00:00:00">
    <var name="temperature"/>
</stream>
<stream name="output" type="input"/>
</streams>
"#;

    #[test]
    fn test_parse_records() {
        let doc = StreamsDocument::parse(STREAMS).unwrap();
        assert_eq!(doc.len(), 3);

        let tags: Vec<_> = doc.iter().map(StreamRecord::tag).collect();
        assert_eq!(tags, vec!["immutable_stream", "stream", "stream"]);

        let mesh = doc.find("mesh").unwrap();
        assert_eq!(mesh.attribute("input_interval"), Some("initial_only"));
        let attrs: Vec<_> = mesh.attributes().map(|(k, _)| k).collect();
        assert_eq!(
            attrs,
            vec!["name", "type", "filename_template", "input_interval"]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let doc = StreamsDocument::parse(STREAMS).unwrap();
        let output = doc.find("output").unwrap();
        assert_eq!(output.attribute("type"), Some("output"));
    }

    #[test]
    fn test_nested_elements_are_not_streams() {
        let doc = StreamsDocument::parse(STREAMS).unwrap();
        assert!(doc.find("temperature").is_none());
    }

    #[test]
    fn test_entities_are_decoded() {
        let xml = r#"<streams><stream name="a&amp;b" note="x &lt; y"/></streams>"#;
        let doc = StreamsDocument::parse(xml).unwrap();
        assert_eq!(doc.find("a&b").unwrap().attribute("note"), Some("x < y"));
    }

    #[test]
    fn test_doctype_is_accepted() {
        let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE streams>\n\
                   <streams><stream name=\"forcing\" type=\"input\"/></streams>";
        let doc = StreamsDocument::parse(xml).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.find("forcing").unwrap().attribute("type"), Some("input"));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(StreamsDocument::parse("<streams><stream name=\"a\"></streams>").is_err());
        assert!(StreamsDocument::parse("").is_err());
    }
}
