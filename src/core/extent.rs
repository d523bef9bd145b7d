use serde::{Deserialize, Serialize};
use tracing::trace;

/// Relative pad applied around a lone sample so the extent has non-zero width.
const SINGLE_VALUE_PAD_RATIO: f64 = 0.1;
/// Pad used when the lone sample is `0`.
const SINGLE_ZERO_PAD: f64 = 1.0;

/// Tuning for `extent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtentOptions {
    /// Returned when there are no finite samples.
    pub fallback: (f64, f64),
    /// Widens the extent so it contains `0`.
    pub include_zero: bool,
    /// Expands both ends by `padding * (max - min)`.
    pub padding: f64,
}

impl Default for ExtentOptions {
    fn default() -> Self {
        Self {
            fallback: (0.0, 1.0),
            include_zero: false,
            padding: 0.0,
        }
    }
}

impl ExtentOptions {
    #[must_use]
    pub fn with_include_zero(mut self, include_zero: bool) -> Self {
        self.include_zero = include_zero;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, min: f64, max: f64) -> Self {
        self.fallback = (min, max);
        self
    }
}

/// Numeric `(min, max)` domain of a sample.
///
/// Non-finite samples are skipped. Steps run in a fixed order: raw extent,
/// then zero inclusion, then padding.
#[must_use]
pub fn extent(values: &[f64], options: ExtentOptions) -> (f64, f64) {
    let mut finite = values.iter().copied().filter(|value| value.is_finite());
    let Some(first) = finite.next() else {
        trace!("extent of empty sample, using fallback");
        return options.fallback;
    };

    let (mut min, mut max, count) =
        finite.fold((first, first, 1usize), |(min, max, count), value| {
            (min.min(value), max.max(value), count + 1)
        });

    if count == 1 {
        let pad = if first == 0.0 {
            SINGLE_ZERO_PAD
        } else {
            first.abs() * SINGLE_VALUE_PAD_RATIO
        };
        min = first - pad;
        max = first + pad;
    }

    if options.include_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    if options.padding != 0.0 && options.padding.is_finite() {
        let span = max - min;
        min -= options.padding * span;
        max += options.padding * span;
    }

    (min, max)
}
