//! SPML (Scanning Probe Microscopy Markup Language) channel decoding.
//!
//! An SPML file is an XML document embedding named, typed,
//! optionally-compressed numeric data channels whose dimensionality is
//! declared through a separate axis system. This crate turns a requested
//! channel name into a decoded sample grid with resolved physical axis
//! metadata, on top of the payload codec in `spml-codec`.
//!
//! ```
//! use spml::SpmlDocument;
//!
//! let text = r#"<SPML>
//!   <Axes><AxisGroup>
//!     <Axis name="X" unit="m" start="0" step="1" size="3"/>
//!     <Axis name="Y" unit="m" start="0" step="1" size="2"/>
//!   </AxisGroup></Axes>
//!   <DataChannels>
//!     <ReadMethod name="RM1"><ReadAxis name="X"/><ReadAxis name="Y"/></ReadMethod>
//!     <DataChannelGroup name="G1">
//!       <DataChannel name="Z" dataFormat="FLOAT32" coding="ASCII" unit="m"
//!                    channelReadMethodName="RM1">1 2 3 4 5 6</DataChannel>
//!     </DataChannelGroup>
//!   </DataChannels>
//! </SPML>"#;
//!
//! let doc = SpmlDocument::parse(text).unwrap();
//! assert_eq!(doc.list_channels(), vec![("G1".to_owned(), "Z".to_owned())]);
//!
//! let image = doc.assemble_image_channel("Z").unwrap();
//! assert_eq!(image.dims, [3, 2]);
//! assert_eq!(image.physical_size, [2.0, 1.0]);
//! assert_eq!(image.samples, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! ```

pub mod assemble;
pub mod axis;
pub mod catalog;
pub mod channel;
pub mod detect;
pub mod document;
pub mod error;
pub mod si;

pub use assemble::ImageChannel;
pub use axis::{AxisDescriptor, AxisKind, ReadMethod, ResolvedAxis};
pub use channel::{DataChannelDescriptor, DecodedChannel};
pub use detect::detect;
pub use document::SpmlDocument;
pub use error::Error;
pub use si::parse_si_prefix;

// Re-export the codec types callers see in descriptors and errors.
pub use spml_codec::{ByteOrder, Coding, DecodeError, ElementType, ZlibError};

/// Soft budget on the element count an axis system may declare, guarding
/// against a malicious `size` requesting unbounded allocation.
pub const MAX_EXPECTED_ELEMENTS: usize = 1 << 26;
