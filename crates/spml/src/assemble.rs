//! The channel assembler: a decoded channel shaped for a 2-D data container.

use log::debug;

use crate::document::SpmlDocument;
use crate::error::Error;
use crate::si::{length_unit_multiplier, parse_si_prefix};

/// A two-dimensional channel with SI-normalized samples and physical extents.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageChannel {
    /// Samples in read-method axis order, scaled to the SI base of the value
    /// unit.
    pub samples: Vec<f64>,
    /// Sample counts along each axis.
    pub dims: [usize; 2],
    /// Physical extent of each axis in meters.
    pub physical_size: [f64; 2],
    /// Axis units after conversion to SI.
    pub axis_units: [String; 2],
    /// The value unit with any SI prefix folded into the samples.
    pub value_unit: String,
}

impl<'input> SpmlDocument<'input> {
    /// Load a channel, require exactly two axes, and convert everything to
    /// SI.
    ///
    /// Every axis must resolve to at least two coordinates; anything shorter
    /// has no extent and fails as [`Error::DegenerateAxis`].
    /// `physical_size[i]` is `|coords.last() - coords.first()|` scaled by the
    /// axis length unit's multiplier; an axis unit outside the table (m, mm,
    /// um, nm, pm), including a missing one, is a hard
    /// [`Error::UnknownPhysicalUnit`]. The value unit's SI prefix scales
    /// every sample by the matching power of ten; a channel without a value
    /// unit is treated as dimensionless.
    pub fn assemble_image_channel(&self, name: &str) -> Result<ImageChannel, Error> {
        let channel = self.load_channel(name, false)?;
        match channel.axes.len() {
            2 => {}
            found @ (0 | 1) => return Err(Error::InsufficientAxes { found }),
            actual => return Err(Error::DimensionMismatch { expected: 2, actual }),
        }

        let mut dims = [0usize; 2];
        let mut physical_size = [0.0f64; 2];
        let mut axis_units: [String; 2] = Default::default();
        for (i, axis) in channel.axes.iter().enumerate() {
            // An extent needs two endpoints; a 0- or 1-point axis would
            // silently produce a zero-sized image.
            if axis.coords.len() < 2 {
                return Err(Error::DegenerateAxis {
                    axis: axis.name.clone(),
                    len: axis.coords.len(),
                });
            }
            let unit = axis.unit.as_deref().unwrap_or("");
            let multiplier = length_unit_multiplier(unit)
                .ok_or_else(|| Error::UnknownPhysicalUnit(unit.into()))?;
            let extent = (axis.coords[axis.coords.len() - 1] - axis.coords[0]).abs();
            dims[i] = axis.coords.len();
            physical_size[i] = extent * multiplier;
            axis_units[i] = "m".to_owned();
        }

        let (value_unit, power) = parse_si_prefix(channel.unit.as_deref().unwrap_or(""));
        let samples = if power == 0 {
            channel.samples
        } else {
            let scale = 10f64.powi(power);
            channel.samples.into_iter().map(|v| v * scale).collect()
        };
        debug!(
            "assembled {name:?}: dims {dims:?}, physical size {physical_size:?} m, \
             value unit {value_unit:?} (10^{power})"
        );

        Ok(ImageChannel {
            samples,
            dims,
            physical_size,
            axis_units,
            value_unit,
        })
    }
}
