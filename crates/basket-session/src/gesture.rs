use basket_config::GestureConfig;
use log::debug;

/// Discrete gesture recognized from a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SwipeUp,
}

/// Turns a touch-start/touch-end pair into a [`Gesture::SwipeUp`].
///
/// Single-shot per touch sequence: every armed touch-end clears the recorded
/// start. Only the vertical coordinate is considered; no velocity, no
/// multi-touch. A missing or non-finite coordinate is a silent no-op.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    threshold_px: f64,
    enabled: bool,
    start_y: Option<f64>,
    is_swiping: bool,
}

impl SwipeRecognizer {
    /// `enabled` is false for anonymous visitors; touches are then ignored.
    pub fn new(threshold_px: f64, enabled: bool) -> Self {
        Self {
            threshold_px,
            enabled,
            start_y: None,
            is_swiping: false,
        }
    }

    pub fn from_config(config: &GestureConfig, enabled: bool) -> Self {
        Self::new(config.swipe_threshold_px, enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_swiping(&self) -> bool {
        self.is_swiping
    }

    pub fn start_y(&self) -> Option<f64> {
        self.start_y
    }

    pub fn on_touch_start(&mut self, y: Option<f64>) {
        if !self.enabled {
            return;
        }

        self.start_y = y.filter(|y| y.is_finite());
        self.is_swiping = true;
    }

    /// Returns the recognized gesture, if any.
    pub fn on_touch_end(&mut self, y: Option<f64>) -> Option<Gesture> {
        if !self.enabled || !self.is_swiping {
            return None;
        }

        let start_y = self.start_y.take();
        self.is_swiping = false;

        let (start_y, end_y) = (start_y?, y.filter(|y| y.is_finite())?);

        // Screen coordinates grow downward, so upward travel is start - end
        let delta = start_y - end_y;
        if delta > self.threshold_px {
            debug!("Swipe up recognized: {delta}px");
            Some(Gesture::SwipeUp)
        } else {
            debug!("Touch ignored: {delta}px below {}px", self.threshold_px);
            None
        }
    }
}
