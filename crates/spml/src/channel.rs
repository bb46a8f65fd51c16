//! Data channel descriptors and the channel loader.

use log::debug;

use spml_codec::{decode, ByteOrder, Coding, ElementType};

use crate::axis::ResolvedAxis;
use crate::document::SpmlDocument;
use crate::error::Error;
use crate::MAX_EXPECTED_ELEMENTS;

/// Encoding attributes and payload of a single `DataChannel` element,
/// borrowing from the parsed document.
#[derive(Debug, Clone)]
pub struct DataChannelDescriptor<'doc> {
    pub name: &'doc str,
    pub group: &'doc str,
    pub element_type: ElementType,
    pub coding: Coding,
    /// Absent on ASCII channels, which carry no byte order.
    pub byte_order: Option<ByteOrder>,
    pub unit: Option<&'doc str>,
    /// Name of the read method describing this channel's axes; absent for
    /// one-dimensional channels.
    pub read_method: Option<&'doc str>,
    /// Raw text payload, still encoded.
    pub payload: &'doc str,
}

/// A fully decoded channel: samples plus resolved axis metadata.
#[derive(Debug, Clone)]
pub struct DecodedChannel {
    /// Decoded samples, one `f64` per element.
    pub samples: Vec<f64>,
    /// Dimension sizes in read-method axis order; `[samples.len()]` for a
    /// one-dimensional channel.
    pub dims: Vec<usize>,
    /// Resolved axes, empty for a one-dimensional channel.
    pub axes: Vec<ResolvedAxis>,
    /// The channel's value unit, verbatim.
    pub unit: Option<String>,
}

impl<'input> SpmlDocument<'input> {
    /// Look up a channel by name and resolve its encoding attributes.
    ///
    /// The first name match across all groups in document order wins;
    /// duplicate names are not detected.
    pub fn channel_descriptor(&self, name: &str) -> Result<DataChannelDescriptor<'_>, Error> {
        let (group, node) = self
            .find_channel(name)
            .ok_or_else(|| Error::ChannelNotFound(name.into()))?;

        let element_type = ElementType::from_attr(node.attribute("dataFormat"))?;
        let coding = Coding::from_attr(node.attribute("coding"))?;
        let byte_order = node
            .attribute("byteOrder")
            .map(ByteOrder::from_attr)
            .transpose()?;

        Ok(DataChannelDescriptor {
            name: node.attribute("name").unwrap_or(""),
            group,
            element_type,
            coding,
            byte_order,
            unit: node.attribute("unit"),
            read_method: node.attribute("channelReadMethodName"),
            payload: node.text().unwrap_or(""),
        })
    }

    /// Decode a channel's payload and resolve its dimensions.
    ///
    /// With `axis_source_only` the channel is treated as a bare coordinate
    /// sequence: axis resolution is skipped and the decoded length becomes
    /// the single dimension. Otherwise, a channel with a read method gets its
    /// axes resolved and the decoded count checked against the product of the
    /// axis sizes.
    pub fn load_channel(
        &self,
        name: &str,
        axis_source_only: bool,
    ) -> Result<DecodedChannel, Error> {
        let desc = self.channel_descriptor(name)?;
        debug!(
            "loading channel {:?} from group {:?}: {:?}/{:?}, axis_source_only={}",
            desc.name, desc.group, desc.coding, desc.element_type, axis_source_only
        );

        if axis_source_only || desc.read_method.is_none() {
            let samples = decode(
                desc.payload,
                desc.coding,
                desc.element_type,
                desc.byte_order,
                None,
            )?;
            return Ok(DecodedChannel {
                dims: vec![samples.len()],
                samples,
                axes: Vec::new(),
                unit: desc.unit.map(str::to_owned),
            });
        }

        let axes = self.resolve_axes(name)?;
        let mut expected: usize = 1;
        for axis in &axes {
            expected = expected.saturating_mul(axis.coords.len());
        }
        if expected > MAX_EXPECTED_ELEMENTS {
            return Err(Error::ElementBudgetExceeded {
                requested: expected,
                budget: MAX_EXPECTED_ELEMENTS,
            });
        }

        let samples = decode(
            desc.payload,
            desc.coding,
            desc.element_type,
            desc.byte_order,
            Some(expected),
        )?;
        Ok(DecodedChannel {
            dims: axes.iter().map(|a| a.coords.len()).collect(),
            samples,
            axes,
            unit: desc.unit.map(str::to_owned),
        })
    }
}
