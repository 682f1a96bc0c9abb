use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX,
    MIN_SWIPE_THRESHOLD_PX,
};

use serde::Deserialize;

/// Touch gesture tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum upward travel (in touch coordinate units) for a swipe-up
    pub swipe_threshold_px: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // NaN fails both comparisons, so check the inclusive range positively
        if !(MIN_SWIPE_THRESHOLD_PX..=MAX_SWIPE_THRESHOLD_PX).contains(&self.swipe_threshold_px) {
            return Err(ConfigError::gesture(format!(
                "gesture.swipe_threshold_px must be {}-{}, got {}",
                MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX, self.swipe_threshold_px
            )));
        }

        Ok(())
    }
}
