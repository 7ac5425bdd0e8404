//! HSV color profiles used as detection windows by the vision pipeline.

use crate::{Error, Result};

/// Default spread between a profile's center hue and its threshold bounds.
pub const DEFAULT_SENSITIVITY: i32 = 30;

/// A named HSV detection window.
///
/// The vision pipeline thresholds each frame between [`lower_bound`] and
/// [`upper_bound`] to segment the tracked color. The core only carries these
/// parameters through; it never touches pixels itself.
///
/// [`lower_bound`]: HsvColor::lower_bound
/// [`upper_bound`]: HsvColor::upper_bound
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HsvColor {
    name: String,
    hue: i32,
    saturation: i32,
    value: i32,
    sensitivity: i32,
}

impl HsvColor {
    /// Create a profile with [`DEFAULT_SENSITIVITY`].
    pub fn new(name: impl Into<String>, hue: i32, saturation: i32, value: i32) -> Self {
        Self {
            name: name.into(),
            hue,
            saturation,
            value,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    /// Override the hue spread between the lower and upper bounds.
    pub fn with_sensitivity(mut self, sensitivity: i32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Look up a built-in profile by name.
    ///
    /// Known names: `"green"`, `"blue"`, `"red"`.
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "green" => Ok(Self::new("green", 60, 50, 50)),
            "blue" => Ok(Self::new("blue", 110, 50, 50)),
            "red" => Ok(Self::new("red", 20, 50, 50)),
            other => Err(Error::UnknownColor(other.to_string())),
        }
    }

    /// Profile name, used as the tracked identity label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower HSV threshold `[hue - sensitivity, saturation, value]`.
    ///
    /// The hue component may go negative (e.g. red at low hue values); the
    /// vision pipeline is responsible for wrapping into its hue range.
    pub fn lower_bound(&self) -> [i32; 3] {
        [self.hue - self.sensitivity, self.saturation, self.value]
    }

    /// Upper HSV threshold `[hue + sensitivity, 255, 255]`.
    pub fn upper_bound(&self) -> [i32; 3] {
        [self.hue + self.sensitivity, 255, 255]
    }
}
