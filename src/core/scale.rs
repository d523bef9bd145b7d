use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::axis_ticks::nice_ticks;
use crate::error::{ChartError, ChartResult};

/// Value a scale maps: a number for linear scales, a category for point and
/// band scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleValue {
    Number(f64),
    Category(String),
}

impl ScaleValue {
    /// Numeric view of the value. Categories are parsed; blank text is `0`
    /// and unparsable text is `NaN`.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Category(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// Category view of the value. Numbers use their display form.
    #[must_use]
    pub fn as_category(&self) -> Cow<'_, str> {
        match self {
            Self::Number(_) => Cow::Owned(self.to_string()),
            Self::Category(text) => Cow::Borrowed(text),
        }
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.is_infinite() => {
                f.write_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Category(text) => f.write_str(text),
        }
    }
}

impl From<f64> for ScaleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ScaleValue {
    fn from(value: &str) -> Self {
        Self::Category(value.to_owned())
    }
}

impl From<String> for ScaleValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

/// Discriminant of a `Scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
    Point,
    Band,
}

/// Affine mapping from a numeric domain to a pixel range. No clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Maps a domain value to the range. Values outside the domain
    /// extrapolate; a degenerate domain maps everything to the range midpoint.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            trace!(
                domain = d0,
                "degenerate linear domain, mapping to range midpoint"
            );
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Maps a range position back to the domain. A degenerate range returns
    /// the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r0 == r1 {
            return d0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// "Nice" tick values (1, 2 or 5 times a power of ten) covering the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Evenly spaced slots for `n` categories inside `range`.
///
/// Shared by point scales (`padding_inner = 1`) and band scales. Slots are
/// centered in the range; a reversed range yields reversed positions.
#[derive(Debug, Clone, PartialEq)]
struct OrdinalSlots {
    positions: Vec<f64>,
    step: f64,
    bandwidth: f64,
}

impl OrdinalSlots {
    fn layout(n: usize, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self {
        if n == 0 {
            return Self {
                positions: Vec::new(),
                step: 0.0,
                bandwidth: 0.0,
            };
        }

        let reverse = range.1 < range.0;
        let (start, stop) = if reverse {
            (range.1, range.0)
        } else {
            (range.0, range.1)
        };
        let count = n as f64;
        let step = (stop - start) / (count - padding_inner + padding_outer * 2.0).max(1.0);
        let first = start + (stop - start - step * (count - padding_inner)) * 0.5;

        let mut positions: Vec<f64> = (0..n).map(|i| first + step * i as f64).collect();
        if reverse {
            positions.reverse();
        }

        Self {
            positions,
            step,
            bandwidth: step * (1.0 - padding_inner),
        }
    }
}

/// Collects the domain as given and indexes each category by its first
/// occurrence. Repeated entries still own a slot.
fn index_categories<I, S>(domain: I) -> (Vec<String>, IndexMap<String, usize>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let domain: Vec<String> = domain.into_iter().map(Into::into).collect();
    let mut lookup = IndexMap::with_capacity(domain.len());
    for (index, category) in domain.iter().enumerate() {
        lookup.entry(category.clone()).or_insert(index);
    }
    (domain, lookup)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Maps categories to evenly spaced points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    domain: Vec<String>,
    lookup: IndexMap<String, usize>,
    range: (f64, f64),
    padding: f64,
    slots: OrdinalSlots,
}

impl PointScale {
    /// `padding` is clamped to `[0, 1]` and expressed in steps.
    #[must_use]
    pub fn new<I, S>(domain: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (domain, lookup) = index_categories(domain);
        let padding = clamp_unit(padding);
        let slots = OrdinalSlots::layout(domain.len(), range, 1.0, padding);
        Self {
            domain,
            lookup,
            range,
            padding,
            slots,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between adjacent points.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.slots.step
    }

    /// Position of `category`. Unknown categories map to the first position;
    /// an empty domain maps everything to the range midpoint.
    #[must_use]
    pub fn map(&self, category: &str) -> f64 {
        let index = self.lookup.get(category).copied().unwrap_or(0);
        match self.slots.positions.get(index) {
            Some(position) => *position,
            None => (self.range.0 + self.range.1) / 2.0,
        }
    }
}

/// Maps categories to contiguous bands of equal width.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    lookup: IndexMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    slots: OrdinalSlots,
}

impl BandScale {
    /// Paddings are clamped to `[0, 1]`. `padding_inner` is the fraction of a
    /// step left empty between bands; `padding_outer` is expressed in steps.
    #[must_use]
    pub fn new<I, S>(domain: I, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (domain, lookup) = index_categories(domain);
        let padding_inner = clamp_unit(padding_inner);
        let padding_outer = clamp_unit(padding_outer);
        let slots = OrdinalSlots::layout(domain.len(), range, padding_inner, padding_outer);
        Self {
            domain,
            lookup,
            range,
            padding_inner,
            padding_outer,
            slots,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn padding_inner(&self) -> f64 {
        self.padding_inner
    }

    #[must_use]
    pub fn padding_outer(&self) -> f64 {
        self.padding_outer
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.slots.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.slots.bandwidth
    }

    /// Start offset of the band for `category`. Unknown categories map to the
    /// first band; an empty domain maps to the range start.
    #[must_use]
    pub fn map(&self, category: &str) -> f64 {
        let index = self.lookup.get(category).copied().unwrap_or(0);
        match self.slots.positions.get(index) {
            Some(position) => *position,
            None => self.range.0,
        }
    }
}

/// A mapping strategy from a data domain to a pixel range.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Point(PointScale),
    Band(BandScale),
}

impl Scale {
    #[must_use]
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::Linear(LinearScale::new(domain, range))
    }

    #[must_use]
    pub fn point<I, S>(domain: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Point(PointScale::new(domain, range, padding))
    }

    #[must_use]
    pub fn band<I, S>(domain: I, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Band(BandScale::new(domain, range, padding_inner, padding_outer))
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear(_) => ScaleKind::Linear,
            Self::Point(_) => ScaleKind::Point,
            Self::Band(_) => ScaleKind::Band,
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Point(scale) => scale.range(),
            Self::Band(scale) => scale.range(),
        }
    }

    /// Band width for band scales, `0` otherwise.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        match self {
            Self::Band(scale) => scale.bandwidth(),
            Self::Linear(_) | Self::Point(_) => 0.0,
        }
    }

    /// Maps any value through the active variant. Numbers given to ordinal
    /// scales are looked up by their display form; categories given to a
    /// linear scale are parsed as numbers.
    #[must_use]
    pub fn map(&self, value: &ScaleValue) -> f64 {
        match self {
            Self::Linear(scale) => scale.map(value.as_number()),
            Self::Point(scale) => scale.map(&value.as_category()),
            Self::Band(scale) => scale.map(&value.as_category()),
        }
    }
}

/// Serializable description of a scale, tagged by `"type"`.
///
/// ```json
/// { "type": "band", "domain": ["a", "b"], "range": [0, 100], "padding_inner": 0.2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScaleConfig {
    Linear {
        domain: (f64, f64),
        range: (f64, f64),
    },
    Point {
        domain: Vec<String>,
        range: (f64, f64),
        #[serde(default)]
        padding: f64,
    },
    Band {
        domain: Vec<String>,
        range: (f64, f64),
        #[serde(default)]
        padding_inner: f64,
        #[serde(default)]
        padding_outer: f64,
    },
}

impl ScaleConfig {
    /// Validates the configuration and builds the scale.
    ///
    /// Unlike the infallible constructors, out-of-range paddings and
    /// non-finite bounds are rejected instead of clamped.
    pub fn build(&self) -> ChartResult<Scale> {
        match self {
            Self::Linear { domain, range } => {
                validate_pair("domain", *domain)?;
                validate_pair("range", *range)?;
                Ok(Scale::linear(*domain, *range))
            }
            Self::Point {
                domain,
                range,
                padding,
            } => {
                validate_pair("range", *range)?;
                validate_unit("padding", *padding)?;
                Ok(Scale::point(domain.iter().cloned(), *range, *padding))
            }
            Self::Band {
                domain,
                range,
                padding_inner,
                padding_outer,
            } => {
                validate_pair("range", *range)?;
                validate_unit("padding_inner", *padding_inner)?;
                validate_unit("padding_outer", *padding_outer)?;
                Ok(Scale::band(
                    domain.iter().cloned(),
                    *range,
                    *padding_inner,
                    *padding_outer,
                ))
            }
        }
    }
}

fn validate_pair(name: &str, pair: (f64, f64)) -> ChartResult<()> {
    if !pair.0.is_finite() || !pair.1.is_finite() {
        return Err(ChartError::InvalidScale(format!("{name} must be finite")));
    }
    Ok(())
}

fn validate_unit(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ChartError::InvalidScale(format!(
            "{name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}
