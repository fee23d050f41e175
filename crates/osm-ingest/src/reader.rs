//! Streaming element reader.
//!
//! Only one element is held in memory at a time. `tag` children become
//! [`ChildEntry::Tag`], `nd` children become [`ChildEntry::NodeRef`]; any
//! other child (relation `member`, ...) is skipped.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use osm_model::{ChildEntry, RawElement};
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};

/// Element tags yielded when no filter is given.
pub const DEFAULT_ELEMENT_TAGS: &[&str] = &["node", "way"];

/// Iterator over the top-level elements of an OSM document.
#[derive(Debug)]
pub struct OsmReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    tags: Vec<String>,
    current: Option<RawElement>,
    done: bool,
}

/// Open an OSM XML file for streaming.
pub fn open_osm_file(path: &Path) -> Result<OsmReader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened OSM file");
    Ok(OsmReader::new(BufReader::new(file)))
}

impl<R: BufRead> OsmReader<R> {
    pub fn new(inner: R) -> Self {
        let mut reader = Reader::from_reader(inner);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            tags: DEFAULT_ELEMENT_TAGS.iter().map(|t| (*t).to_string()).collect(),
            current: None,
            done: false,
        }
    }

    /// Replace the set of element tags to yield.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn wants(&self, name: &[u8]) -> bool {
        self.tags.iter().any(|tag| tag.as_bytes() == name)
    }

    fn xml_error(&self, source: quick_xml::Error) -> IngestError {
        IngestError::Xml {
            position: self.reader.buffer_position(),
            source,
        }
    }

    fn read_element(&mut self) -> Result<Option<RawElement>> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_event_into(&mut self.buf)
                .map(Event::into_owned);
            let event = match read {
                Ok(event) => event,
                Err(source) => return Err(self.xml_error(source)),
            };
            let decoder = self.reader.decoder();

            match event {
                Event::Start(start) | Event::Empty(start) if self.current.is_some() => {
                    let child = child_entry(&start, decoder, self.current.as_ref())
                        .map_err(|err| self.map_child_error(err))?;
                    if let (Some(child), Some(current)) = (child, self.current.as_mut()) {
                        current.children.push(child);
                    }
                }
                Event::Start(start) if self.wants(start.name().as_ref()) => {
                    let element = element_from(&start, decoder).map_err(|e| self.xml_error(e))?;
                    self.current = Some(element);
                }
                Event::Empty(start) if self.wants(start.name().as_ref()) => {
                    let element = element_from(&start, decoder).map_err(|e| self.xml_error(e))?;
                    trace!(tag = %element.tag, id = element.id().unwrap_or(""), "read element");
                    return Ok(Some(element));
                }
                Event::End(end) => {
                    let closes_current = self
                        .current
                        .as_ref()
                        .is_some_and(|current| current.tag.as_bytes() == end.name().as_ref());
                    if closes_current {
                        let element = self.current.take();
                        if let Some(element) = &element {
                            trace!(
                                tag = %element.tag,
                                id = element.id().unwrap_or(""),
                                children = element.children.len(),
                                "read element"
                            );
                        }
                        return Ok(element);
                    }
                }
                Event::Eof => {
                    return match self.current.take() {
                        Some(element) => Err(IngestError::UnexpectedEof {
                            id: element.id().unwrap_or("").to_string(),
                            element: element.tag,
                        }),
                        None => Ok(None),
                    };
                }
                _ => {}
            }
        }
    }

    fn map_child_error(&self, err: ChildError) -> IngestError {
        match err {
            ChildError::Xml(source) => self.xml_error(source),
            ChildError::Missing(err) => err,
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = Result<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_element() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

enum ChildError {
    Xml(quick_xml::Error),
    Missing(IngestError),
}

impl From<quick_xml::Error> for ChildError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err)
    }
}

fn attributes(
    start: &BytesStart<'_>,
    decoder: Decoder,
) -> std::result::Result<BTreeMap<String, String>, quick_xml::Error> {
    let mut attributes = BTreeMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        attributes.insert(key, value);
    }
    Ok(attributes)
}

fn element_from(
    start: &BytesStart<'_>,
    decoder: Decoder,
) -> std::result::Result<RawElement, quick_xml::Error> {
    Ok(RawElement {
        tag: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        attributes: attributes(start, decoder)?,
        children: Vec::new(),
    })
}

fn child_entry(
    start: &BytesStart<'_>,
    decoder: Decoder,
    parent: Option<&RawElement>,
) -> std::result::Result<Option<ChildEntry>, ChildError> {
    let child: &'static str = match start.name().as_ref() {
        b"tag" => "tag",
        b"nd" => "nd",
        other => {
            trace!(child = %String::from_utf8_lossy(other), "skipping child element");
            return Ok(None);
        }
    };
    let mut attrs = attributes(start, decoder)?;
    let mut take = |attribute: &'static str| {
        attrs.remove(attribute).ok_or_else(|| {
            ChildError::Missing(IngestError::MissingChildAttribute {
                element: parent.map(|p| p.tag.clone()).unwrap_or_default(),
                id: parent
                    .and_then(RawElement::id)
                    .unwrap_or_default()
                    .to_string(),
                child,
                attribute,
            })
        })
    };

    let entry = if child == "tag" {
        let key = take("k")?;
        let value = take("v")?;
        ChildEntry::Tag { key, value }
    } else {
        ChildEntry::NodeRef { id: take("ref")? }
    };
    Ok(Some(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_skips_relations() {
        let xml = r#"<osm>
  <relation id="3"><member type="way" ref="2" role="outer"/><tag k="type" v="multipolygon"/></relation>
  <node id="1" lat="1.0" lon="2.0"/>
</osm>"#;
        let elements: Vec<RawElement> = OsmReader::new(xml.as_bytes())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag, "node");
        assert!(elements[0].children.is_empty());
    }

    #[test]
    fn test_relations_can_be_requested() {
        let xml = r#"<osm><relation id="3"><member type="way" ref="2" role="outer"/><tag k="type" v="route"/></relation></osm>"#;
        let elements: Vec<RawElement> = OsmReader::new(xml.as_bytes())
            .with_tags(["relation"])
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].children, vec![ChildEntry::tag("type", "route")]);
    }
}
