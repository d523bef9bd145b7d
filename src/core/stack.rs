use serde::{Deserialize, Serialize};

/// Input sample of a series to stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint<X> {
    pub x: X,
    pub y: f64,
}

impl<X> SeriesPoint<X> {
    #[must_use]
    pub fn new(x: X, y: f64) -> Self {
        Self { x, y }
    }
}

/// Band of one series at one `x`: `y0` is the base, `y1` the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedPoint<X> {
    pub x: X,
    pub y0: f64,
    pub y1: f64,
}

impl<X> StackedPoint<X> {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Accumulates series into cumulative bands.
///
/// Series are aligned by index, not by `x`; callers pre-align them. The first
/// series sits on `0`, every later series on the top of the previous one at
/// the same index (or on `0` past the end of a shorter previous series).
#[must_use]
pub fn stack_series_data<X: Clone>(
    series_list: &[Vec<SeriesPoint<X>>],
) -> Vec<Vec<StackedPoint<X>>> {
    let mut stacked: Vec<Vec<StackedPoint<X>>> = Vec::with_capacity(series_list.len());
    for series in series_list {
        let below = stacked.last();
        let layer = series
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let y0 = below
                    .and_then(|previous| previous.get(index))
                    .map_or(0.0, |previous| previous.y1);
                StackedPoint {
                    x: point.x.clone(),
                    y0,
                    y1: y0 + point.y,
                }
            })
            .collect();
        stacked.push(layer);
    }
    stacked
}
