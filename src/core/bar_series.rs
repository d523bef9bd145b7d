use serde::{Deserialize, Serialize};

/// Vertical placement of a bar: top edge and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarExtent {
    pub y: f64,
    pub height: f64,
}

/// Caps `width` at `max_width`. A missing or non-positive cap leaves the
/// width unchanged.
#[must_use]
pub fn clamp_bar_width(width: f64, max_width: Option<f64>) -> f64 {
    match max_width {
        Some(max_width) if max_width > 0.0 => width.min(max_width),
        _ => width,
    }
}

/// Grows a visible bar shorter than `min_height` so it stays clickable.
///
/// Bars above the baseline (`y < baseline_y`) keep their baseline edge and
/// extend upward; bars below keep their top edge at the baseline and extend
/// downward. Zero-height bars, bars already tall enough and a non-positive
/// `min_height` are returned unchanged.
#[must_use]
pub fn ensure_bar_min_height(y: f64, height: f64, baseline_y: f64, min_height: f64) -> BarExtent {
    if min_height <= 0.0 || height >= min_height || height == 0.0 {
        return BarExtent { y, height };
    }

    if y < baseline_y {
        BarExtent {
            y: y + height - min_height,
            height: min_height,
        }
    } else {
        BarExtent {
            y,
            height: min_height,
        }
    }
}
