use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};

/// Resolved padding, one value per side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    /// Rejects negative or non-finite sides.
    ///
    /// `normalize_padding` and `inner_rect` accept anything; hosts that load
    /// padding from user configuration can call this first.
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidPadding { side, value });
            }
        }
        Ok(self)
    }
}

/// Caller-facing padding input: a single number for every side or a partial
/// per-side object.
///
/// Deserializes from either a JSON number (`8`) or an object
/// (`{"top": 4, "left": 12}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingSpec {
    Uniform(f64),
    Sides {
        #[serde(default)]
        top: Option<f64>,
        #[serde(default)]
        right: Option<f64>,
        #[serde(default)]
        bottom: Option<f64>,
        #[serde(default)]
        left: Option<f64>,
    },
}

impl From<f64> for PaddingSpec {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Padding> for PaddingSpec {
    fn from(padding: Padding) -> Self {
        Self::Sides {
            top: Some(padding.top),
            right: Some(padding.right),
            bottom: Some(padding.bottom),
            left: Some(padding.left),
        }
    }
}

/// Resolves a padding specification. Missing input and missing sides are `0`.
#[must_use]
pub fn normalize_padding(input: Option<PaddingSpec>) -> Padding {
    match input {
        None => Padding::default(),
        Some(PaddingSpec::Uniform(value)) => Padding::uniform(value),
        Some(PaddingSpec::Sides {
            top,
            right,
            bottom,
            left,
        }) => Padding {
            top: top.unwrap_or(0.0),
            right: right.unwrap_or(0.0),
            bottom: bottom.unwrap_or(0.0),
            left: left.unwrap_or(0.0),
        },
    }
}

/// Drawable area left inside an outer `width x height` box.
///
/// Width and height are clamped to `0` when the padding exceeds the outer
/// size. Negative padding is not rejected here.
#[must_use]
pub fn inner_rect(width: f64, height: f64, padding: Padding) -> Rect {
    Rect {
        x: padding.left,
        y: padding.top,
        width: (width - padding.horizontal()).max(0.0),
        height: (height - padding.vertical()).max(0.0),
    }
}
