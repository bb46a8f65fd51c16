//! The channel catalog scanner.

use crate::document::{child_elements, SpmlDocument};

impl<'input> SpmlDocument<'input> {
    /// List every `(group name, channel name)` pair in document order.
    ///
    /// One forward walk, no decoding. This never fails: a document without a
    /// `DataChannels` section yields an empty list, and unnamed groups or
    /// channels are skipped.
    pub fn list_channels(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        let Some(channels) = self.data_channels_node() else {
            return entries;
        };
        for group in child_elements(channels, "DataChannelGroup") {
            let Some(group_name) = group.attribute("name") else {
                continue;
            };
            for channel in child_elements(group, "DataChannel") {
                if let Some(name) = channel.attribute("name") {
                    entries.push((group_name.to_owned(), name.to_owned()));
                }
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_groups_and_channels_in_order() {
        let text = r#"<SPML><DataChannels>
            <DataChannelGroup name="Forward">
              <DataChannel name="Topography" dataFormat="FLOAT32" coding="ASCII">0</DataChannel>
              <DataChannel name="Phase" dataFormat="FLOAT32" coding="ASCII">0</DataChannel>
            </DataChannelGroup>
            <DataChannelGroup name="Backward">
              <DataChannel name="Topography" dataFormat="FLOAT32" coding="ASCII">0</DataChannel>
            </DataChannelGroup>
        </DataChannels></SPML>"#;
        let doc = SpmlDocument::parse(text).unwrap();
        assert_eq!(
            doc.list_channels(),
            vec![
                ("Forward".to_owned(), "Topography".to_owned()),
                ("Forward".to_owned(), "Phase".to_owned()),
                ("Backward".to_owned(), "Topography".to_owned()),
            ]
        );
    }

    #[test]
    fn no_data_channels_is_empty() {
        let doc = SpmlDocument::parse("<SPML><Axes/></SPML>").unwrap();
        assert!(doc.list_channels().is_empty());
    }

    #[test]
    fn unnamed_entries_are_skipped() {
        let text = r#"<SPML><DataChannels>
            <DataChannelGroup>
              <DataChannel name="Orphan">0</DataChannel>
            </DataChannelGroup>
            <DataChannelGroup name="G">
              <DataChannel>0</DataChannel>
              <DataChannel name="Kept">0</DataChannel>
            </DataChannelGroup>
        </DataChannels></SPML>"#;
        let doc = SpmlDocument::parse(text).unwrap();
        assert_eq!(doc.list_channels(), vec![("G".to_owned(), "Kept".to_owned())]);
    }
}
