//! Axis descriptors and the read-method/axis resolution walk.
//!
//! A channel's dimensionality is declared indirectly: the channel names a
//! `ReadMethod`, the read method lists `ReadAxis` names in order, and each
//! name matches an `Axis` element that either computes uniform coordinates
//! from `start`/`step`/`size` or pulls them from a one-dimensional data
//! channel. The channel-as-axis-source indirection is at most one level deep,
//! which bounds the recursion by construction.

use log::debug;
use roxmltree::Node;

use crate::document::{child_elements, SpmlDocument};
use crate::error::Error;
use crate::MAX_EXPECTED_ELEMENTS;

/// How an axis produces its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisKind {
    /// Coordinates computed as `start + i * step` for `i` in `0..size`.
    Uniform { start: f64, step: f64, size: usize },
    /// Coordinates stored in a one-dimensional data channel.
    Referenced { channel: String },
}

/// A parsed `Axis` element.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDescriptor {
    pub name: String,
    pub unit: Option<String>,
    pub kind: AxisKind,
}

/// A parsed `ReadMethod` element: an ordered list of axis names.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadMethod {
    pub name: String,
    pub axes: Vec<String>,
}

/// An axis with its coordinates materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAxis {
    pub name: String,
    pub unit: Option<String>,
    pub coords: Vec<f64>,
}

fn uniform_attr(node: Node<'_, '_>, axis: &str, attribute: &'static str) -> Result<f64, Error> {
    node.attribute(attribute)
        .and_then(|v| v.parse::<f64>().ok())
        .ok_or_else(|| Error::AxisDefinitionIncomplete {
            axis: axis.into(),
            attribute,
        })
}

impl AxisDescriptor {
    pub(crate) fn parse(node: Node<'_, '_>) -> Result<Self, Error> {
        let name = node.attribute("name").unwrap_or("").to_owned();
        let unit = node.attribute("unit").map(str::to_owned);

        if let Some(channel) = node.attribute("dataChannelName") {
            return Ok(AxisDescriptor {
                name,
                unit,
                kind: AxisKind::Referenced {
                    channel: channel.to_owned(),
                },
            });
        }

        let start = uniform_attr(node, &name, "start")?;
        let step = uniform_attr(node, &name, "step")?;
        let size = node
            .attribute("size")
            .and_then(|v| v.parse::<usize>().ok())
            .ok_or_else(|| Error::AxisDefinitionIncomplete {
                axis: name.clone(),
                attribute: "size",
            })?;
        Ok(AxisDescriptor {
            name,
            unit,
            kind: AxisKind::Uniform { start, step, size },
        })
    }
}

impl ReadMethod {
    pub(crate) fn parse(node: Node<'_, '_>) -> Self {
        ReadMethod {
            name: node.attribute("name").unwrap_or("").to_owned(),
            axes: child_elements(node, "ReadAxis")
                .filter_map(|n| n.attribute("name"))
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl<'input> SpmlDocument<'input> {
    /// Resolve the ordered axes of a channel.
    ///
    /// A channel without a read-method reference is one-dimensional and
    /// yields an empty result; its length comes from the decoded payload.
    /// Any missing structural node aborts resolution immediately; no
    /// partial axis list is ever returned.
    pub fn resolve_axes(&self, channel_name: &str) -> Result<Vec<ResolvedAxis>, Error> {
        let desc = self.channel_descriptor(channel_name)?;
        let Some(method_name) = desc.read_method else {
            return Ok(Vec::new());
        };

        let method_node =
            self.find_read_method(method_name)
                .ok_or_else(|| Error::ReadMethodNotFound {
                    channel: channel_name.into(),
                    read_method: method_name.into(),
                })?;
        let method = ReadMethod::parse(method_node);
        debug!(
            "channel {channel_name:?} uses read method {:?} with axes {:?}",
            method.name, method.axes
        );

        let mut resolved = Vec::with_capacity(method.axes.len());
        for axis_name in &method.axes {
            let node = self
                .find_axis(axis_name)
                .ok_or_else(|| Error::AxisNotFound(axis_name.clone()))?;
            let descriptor = AxisDescriptor::parse(node)?;

            let coords = match &descriptor.kind {
                AxisKind::Uniform { start, step, size } => {
                    if *size > MAX_EXPECTED_ELEMENTS {
                        return Err(Error::ElementBudgetExceeded {
                            requested: *size,
                            budget: MAX_EXPECTED_ELEMENTS,
                        });
                    }
                    (0..*size).map(|i| start + i as f64 * step).collect()
                }
                AxisKind::Referenced { channel } => {
                    // The axis source must be a bare coordinate sequence; a
                    // source with its own read method would resolve axes
                    // again, one level too deep.
                    let source = self.channel_descriptor(channel)?;
                    if source.read_method.is_some() {
                        return Err(Error::AxisRecursionTooDeep {
                            axis: axis_name.clone(),
                            channel: channel.clone(),
                        });
                    }
                    self.load_channel(channel, true)?.samples
                }
            };
            resolved.push(ResolvedAxis {
                name: descriptor.name,
                unit: descriptor.unit,
                coords,
            });
        }
        Ok(resolved)
    }
}
