//! Tolerant pom.xml dependency extraction.
//!
//! The input is read with quick-xml into a small element tree. End-tag
//! mismatches are tolerated and a read error simply ends the tree where it
//! stands, so truncated or sloppy markup still yields whatever dependencies
//! were fully declared before the damage. Tag names compare ASCII
//! case-insensitively.

use crate::pom_scanning::domain::Dependency;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::Event;
use quick_xml::Reader;

const DEPENDENCY_TAG: &str = "dependency";
const ARTIFACT_ID_TAG: &str = "artifactId";
const VERSION_TAG: &str = "version";

/// Index of the synthetic element that owns top-level content
const ROOT: usize = 0;

#[derive(Debug)]
enum Node {
    Text(String),
    Element(usize),
}

#[derive(Debug)]
struct Element {
    name: String,
    content: Vec<Node>,
    /// One past the index of the last descendant
    end: usize,
}

/// Element tree of a parsed document, stored in document order.
/// The descendants of element `i` are exactly `i + 1..elements[i].end`.
#[derive(Debug)]
struct PomDocument {
    elements: Vec<Element>,
}

impl PomDocument {
    fn parse(xml: &str) -> Self {
        let mut document = Self {
            elements: vec![Element {
                name: String::new(),
                content: Vec::new(),
                end: ROOT + 1,
            }],
        };
        let mut open: Vec<usize> = vec![ROOT];

        let mut reader = Reader::from_str(xml);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        loop {
            let current = open.last().copied().unwrap_or(ROOT);
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    open.push(document.open_element(current, name));
                }
                Ok(Event::Empty(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    document.open_element(current, name);
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    document.close_element(&mut open, &name);
                }
                Ok(Event::Text(e)) => {
                    let text = match e.decode() {
                        Ok(cow) => unescape(&cow)
                            .map(|c| c.into_owned())
                            .unwrap_or_else(|_| cow.into_owned()),
                        Err(_) => String::from_utf8_lossy(e.as_ref()).into_owned(),
                    };
                    document.push_text(current, &text);
                }
                Ok(Event::CData(e)) => {
                    document.push_text(current, &String::from_utf8_lossy(&e));
                }
                Ok(Event::GeneralRef(e)) => {
                    let text = match e.resolve_char_ref() {
                        Ok(Some(c)) => c.to_string(),
                        _ => {
                            let name = e.decode().map(|n| n.into_owned()).unwrap_or_default();
                            resolve_predefined_entity(&name)
                                .map(str::to_string)
                                .unwrap_or_else(|| format!("&{};", name))
                        }
                    };
                    document.push_text(current, &text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                // Keep everything read so far.
                Err(_) => break,
            }
        }

        document.finish(&open);
        document
    }

    fn open_element(&mut self, parent: usize, name: String) -> usize {
        let index = self.elements.len();
        self.elements.push(Element {
            name,
            content: Vec::new(),
            end: index + 1,
        });
        self.elements[parent].content.push(Node::Element(index));
        index
    }

    /// Closes the innermost open element with a matching name, implicitly
    /// closing anything opened inside it. Unmatched end tags are ignored.
    fn close_element(&mut self, open: &mut Vec<usize>, name: &str) {
        let matching = open.iter().rposition(|&index| {
            index != ROOT && self.elements[index].name.eq_ignore_ascii_case(name)
        });
        if let Some(position) = matching {
            self.finish(&open[position..]);
            open.truncate(position);
        }
    }

    /// Marks `open` elements as ending after everything read so far
    fn finish(&mut self, open: &[usize]) {
        let end = self.elements.len();
        for &index in open {
            self.elements[index].end = end;
        }
    }

    fn push_text(&mut self, element: usize, text: &str) {
        let content = &mut self.elements[element].content;
        if let Some(Node::Text(existing)) = content.last_mut() {
            existing.push_str(text);
        } else {
            content.push(Node::Text(text.to_string()));
        }
    }

    /// All elements with the given tag, in document order
    fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = usize> + 'a {
        (ROOT + 1..self.elements.len())
            .filter(move |&index| self.elements[index].name.eq_ignore_ascii_case(tag))
    }

    /// First element below `ancestor` with the given tag, in document order
    fn find_descendant(&self, ancestor: usize, tag: &str) -> Option<usize> {
        (ancestor + 1..self.elements[ancestor].end)
            .find(|&index| self.elements[index].name.eq_ignore_ascii_case(tag))
    }

    /// Trimmed text of the first element below `ancestor` with the given tag.
    /// Missing elements and blank text both come back as `None`.
    fn descendant_text(&self, ancestor: usize, tag: &str) -> Option<String> {
        self.find_descendant(ancestor, tag)
            .map(|element| self.text(element))
            .filter(|text| !text.is_empty())
    }

    /// Concatenated text of `element` and its descendants, trimmed
    fn text(&self, element: usize) -> String {
        let mut buffer = String::new();
        let mut pending = vec![self.elements[element].content.iter()];

        while let Some(nodes) = pending.last_mut() {
            match nodes.next() {
                Some(Node::Text(text)) => buffer.push_str(text),
                Some(Node::Element(child)) => pending.push(self.elements[*child].content.iter()),
                None => {
                    pending.pop();
                }
            }
        }

        buffer.trim().to_string()
    }
}

/// PomParser extracts (artifactId, version) pairs from pom.xml content
pub struct PomParser;

impl PomParser {
    /// Extracts every dependency that declares both an artifactId and a version
    ///
    /// Version values of the form `${name}` are replaced by the text of the
    /// first element named `name` anywhere in the document. When no such
    /// element exists the literal `${name}` is kept. Dependencies missing
    /// either field are skipped. Output follows document order.
    ///
    /// This never fails; unreadable input produces an empty or partial list.
    pub fn extract_dependencies(xml: &str) -> Vec<Dependency> {
        let document = PomDocument::parse(xml);

        document
            .find_all(DEPENDENCY_TAG)
            .filter_map(|dependency| {
                let artifact_id = document.descendant_text(dependency, ARTIFACT_ID_TAG)?;
                let version = document.descendant_text(dependency, VERSION_TAG)?;
                let version = Self::resolve_property(&document, version);
                Some(Dependency::new(artifact_id, version))
            })
            .collect()
    }

    fn resolve_property(document: &PomDocument, version: String) -> String {
        let Some(name) = Self::property_reference(&version) else {
            return version;
        };

        document.descendant_text(ROOT, name).unwrap_or(version)
    }

    /// Returns `name` when `value` is exactly `${name}` with a non-empty name
    fn property_reference(value: &str) -> Option<&str> {
        value
            .strip_prefix("${")
            .and_then(|rest| rest.strip_suffix('}'))
            .filter(|name| !name.is_empty())
    }
}
