//! The parsed-document handle all pipeline calls go through.

use roxmltree::{Document, Node};

use crate::error::Error;

/// A parsed SPML document.
///
/// All lookups run against the parsed tree; nothing is cached between calls,
/// so every load is a pure function of the document and a channel name.
#[derive(Debug)]
pub struct SpmlDocument<'input> {
    doc: Document<'input>,
}

/// First-child-matching-tag iteration, the only tree traversal the format
/// needs.
pub(crate) fn child_elements<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .children()
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

impl<'input> SpmlDocument<'input> {
    /// Parse an SPML document from XML text.
    pub fn parse(text: &'input str) -> Result<Self, Error> {
        Ok(SpmlDocument {
            doc: Document::parse(text)?,
        })
    }

    pub(crate) fn axes_node(&self) -> Option<Node<'_, 'input>> {
        child_elements(self.doc.root_element(), "Axes").next()
    }

    pub(crate) fn data_channels_node(&self) -> Option<Node<'_, 'input>> {
        child_elements(self.doc.root_element(), "DataChannels").next()
    }

    /// Find a `DataChannel` by name, returning its group name and node.
    ///
    /// Duplicate channel names are not an error: the first match in document
    /// order wins, as upstream readers have always behaved.
    pub(crate) fn find_channel<'a>(&'a self, name: &str) -> Option<(&'a str, Node<'a, 'input>)> {
        let channels = self.data_channels_node()?;
        for group in child_elements(channels, "DataChannelGroup") {
            for channel in child_elements(group, "DataChannel") {
                if channel.attribute("name") == Some(name) {
                    return Some((group.attribute("name").unwrap_or(""), channel));
                }
            }
        }
        None
    }

    pub(crate) fn find_read_method(&self, name: &str) -> Option<Node<'_, 'input>> {
        let channels = self.data_channels_node()?;
        child_elements(channels, "ReadMethod").find(|m| m.attribute("name") == Some(name))
    }

    pub(crate) fn find_axis(&self, name: &str) -> Option<Node<'_, 'input>> {
        let axes = self.axes_node()?;
        for group in child_elements(axes, "AxisGroup") {
            for axis in child_elements(group, "Axis") {
                if axis.attribute("name") == Some(name) {
                    return Some(axis);
                }
            }
        }
        None
    }
}
