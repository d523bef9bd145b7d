use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Curve, ExtentOptions, LabelLineOptions, MAX_TICK_COUNT, Padding, PaddingSpec, PieOptions,
    Scale, ScaleConfig, TickOptions, normalize_padding,
};
use crate::error::{ChartError, ChartResult};

/// Host-facing geometry configuration.
///
/// Every field is optional in JSON so hosts can persist only what they
/// override:
///
/// ```json
/// {
///   "padding": { "top": 8, "left": 32 },
///   "x_scale": { "type": "band", "domain": ["q1", "q2"], "range": [0, 400], "padding_inner": 0.2 },
///   "y_scale": { "type": "linear", "domain": [0, 100], "range": [300, 0] },
///   "curve": "monotone"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometryConfig {
    pub padding: Option<PaddingSpec>,
    pub x_scale: Option<ScaleConfig>,
    pub y_scale: Option<ScaleConfig>,
    pub extent: ExtentOptions,
    pub ticks: TickOptions,
    pub pie: PieOptions,
    pub label_line: LabelLineOptions,
    pub curve: Curve,
}

impl ChartGeometryConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse geometry config json: {e}"))
        })?;
        config.validate()?;
        debug!(
            has_x_scale = config.x_scale.is_some(),
            has_y_scale = config.y_scale.is_some(),
            curve = ?config.curve,
            "loaded geometry config"
        );
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize geometry config: {e}"))
        })
    }

    /// Checks padding, scales and numeric options without building anything
    /// the caller keeps.
    pub fn validate(&self) -> ChartResult<()> {
        self.resolved_padding()?;
        self.build_x_scale()?;
        self.build_y_scale()?;

        let (min, max) = self.extent.fallback;
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "extent fallback must be finite".to_owned(),
            ));
        }
        if !self.extent.padding.is_finite() || self.extent.padding < 0.0 {
            return Err(ChartError::InvalidData(
                "extent padding must be finite and >= 0".to_owned(),
            ));
        }
        if self.ticks.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "tick count must be <= {MAX_TICK_COUNT}, got {}",
                self.ticks.tick_count
            )));
        }
        if !self.pie.start_angle.is_finite()
            || !self.pie.end_angle.is_finite()
            || !self.pie.pad_angle.is_finite()
            || self.pie.pad_angle < 0.0
        {
            return Err(ChartError::InvalidData(
                "pie angles must be finite and pad angle >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Normalized and validated padding.
    pub fn resolved_padding(&self) -> ChartResult<Padding> {
        normalize_padding(self.padding).validate()
    }

    pub fn build_x_scale(&self) -> ChartResult<Option<Scale>> {
        self.x_scale.as_ref().map(ScaleConfig::build).transpose()
    }

    pub fn build_y_scale(&self) -> ChartResult<Option<Scale>> {
        self.y_scale.as_ref().map(ScaleConfig::build).transpose()
    }
}
