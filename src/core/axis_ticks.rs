use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::scale::{Scale, ScaleValue};

pub const DEFAULT_TICK_COUNT: usize = 5;
/// Largest tick count honored by linear tick generation; larger requests are
/// treated as this many.
pub const MAX_TICK_COUNT: usize = 1_000;
/// Upper bound on generated tick values. A tick span past it falls back to
/// the two domain endpoints.
const MAX_GENERATED_TICKS: f64 = 10_000.0;

/// Thresholds for rounding a raw step up to 10, 5 or 2 times a power of ten.
const STEP_ERROR_TEN: f64 = 7.071_067_811_865_476; // sqrt(50)
const STEP_ERROR_FIVE: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const STEP_ERROR_TWO: f64 = std::f64::consts::SQRT_2;

/// Axis tick in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: ScaleValue,
    pub position: f64,
    pub label: String,
}

/// Tick generation controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickOptions {
    /// Approximate number of ticks for linear scales.
    pub tick_count: usize,
    /// Explicit tick values, used verbatim and in order.
    pub tick_values: Option<Vec<ScaleValue>>,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            tick_values: None,
        }
    }
}

impl TickOptions {
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_tick_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScaleValue>,
    {
        self.tick_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Optional label formatter.
pub type TickFormat<'a> = &'a dyn Fn(&ScaleValue) -> String;

/// Derives axis ticks from a scale.
///
/// Explicit `tick_values` win. Otherwise linear scales get "nice" ticks near
/// `tick_count`, and point/band scales get one tick per domain entry. Band
/// ticks sit at the band center.
#[must_use]
pub fn ticks(scale: &Scale, options: &TickOptions, format: Option<TickFormat<'_>>) -> Vec<Tick> {
    let values: Vec<ScaleValue> = match (&options.tick_values, scale) {
        (Some(values), _) => values.clone(),
        (None, Scale::Linear(linear)) => linear
            .ticks(options.tick_count)
            .into_iter()
            .map(ScaleValue::Number)
            .collect(),
        (None, Scale::Point(point)) => point
            .domain()
            .iter()
            .cloned()
            .map(ScaleValue::Category)
            .collect(),
        (None, Scale::Band(band)) => band
            .domain()
            .iter()
            .cloned()
            .map(ScaleValue::Category)
            .collect(),
    };

    let center_offset = scale.bandwidth() / 2.0;
    values
        .into_iter()
        .map(|value| {
            let position = scale.map(&value) + center_offset;
            let label = match format {
                Some(format) => format(&value),
                None => value.to_string(),
            };
            Tick {
                value,
                position,
                label,
            }
        })
        .collect()
}

/// Integer tick indices plus increment. A negative `inc` means "divide by
/// `-inc`", which keeps fractional ticks such as `0.3` exact.
#[derive(Debug, Clone, Copy)]
struct TickSpec {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= STEP_ERROR_TEN {
        10.0
    } else if error >= STEP_ERROR_FIVE {
        5.0
    } else if error >= STEP_ERROR_TWO {
        2.0
    } else {
        1.0
    };

    let spec = if power < 0.0 {
        let inc = 10_f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        TickSpec { i1, i2, inc: -inc }
    } else {
        let inc = 10_f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        TickSpec { i1, i2, inc }
    };

    if spec.i2 < spec.i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    spec
}

/// Step between "nice" ticks for `[start, stop]` with roughly `count` ticks.
///
/// Returns `0` for non-finite or empty input. `count` is capped at
/// `MAX_TICK_COUNT`.
#[must_use]
pub fn nice_tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let count = count.min(MAX_TICK_COUNT);
    let (lo, hi) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    let spec = tick_spec(lo, hi, count as f64);
    if spec.inc < 0.0 {
        1.0 / -spec.inc
    } else {
        spec.inc
    }
}

/// "Nice" tick values inside `[start, stop]`, ordered like the input bounds.
///
/// A degenerate interval yields the single value `start`. `count` is capped
/// at `MAX_TICK_COUNT`.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let count = count.min(MAX_TICK_COUNT);

    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if spec.i1.is_nan() || spec.i2.is_nan() || spec.i2 < spec.i1 {
        return Vec::new();
    }

    let span = spec.i2 - spec.i1 + 1.0;
    if !span.is_finite() || span > MAX_GENERATED_TICKS {
        trace!(
            start,
            stop,
            span,
            "tick span too large, using domain endpoints"
        );
        return vec![start, stop];
    }

    let n = span as usize;
    (0..n)
        .map(|i| {
            let index = if reverse {
                spec.i2 - i as f64
            } else {
                spec.i1 + i as f64
            };
            if spec.inc < 0.0 {
                index / -spec.inc
            } else {
                index * spec.inc
            }
        })
        .collect()
}
