use serde::{Deserialize, Serialize};

/// Upper clamp for the drift threshold; a full deflection on one axis
/// (1.0) must always register as intentional input.
pub const DRIFT_THRESHOLD_MAX: f32 = 0.98;

/// Which body reference drives the movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LocomotionMode {
    #[default]
    Head,
    Hip,
    Chest,
}

/// User-facing settings, owned and persisted by the host mod layer and
/// read-only from the core's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Locomotion mode.
    #[serde(default)]
    pub mode: LocomotionMode,
    /// Use skeleton bones even when a matching tracker exists.
    #[serde(default)]
    pub force_use_skeleton: bool,
    /// Enable joystick drift compensation.
    #[serde(default)]
    pub drift_compensation: bool,
    /// Combined axis magnitude below which input is treated as drift.
    #[serde(default = "default_drift_threshold")]
    pub drift_threshold: f32,
}

fn default_drift_threshold() -> f32 {
    0.3
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            mode: LocomotionMode::default(),
            force_use_skeleton: false,
            drift_compensation: false,
            drift_threshold: default_drift_threshold(),
        }
    }
}

impl LocomotionConfig {
    /// Threshold clamped into `[0, DRIFT_THRESHOLD_MAX]`. Out-of-range
    /// values are clamped at use, never rejected.
    pub fn effective_drift_threshold(&self) -> f32 {
        self.drift_threshold.clamp(0.0, DRIFT_THRESHOLD_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LocomotionConfig::default();
        assert_eq!(config.mode, LocomotionMode::Head);
        assert!(!config.force_use_skeleton);
        assert!(!config.drift_compensation);
        assert!((config.drift_threshold - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_drift_threshold_clamp() {
        let mut config = LocomotionConfig::default();
        config.drift_threshold = 5.0;
        assert!((config.effective_drift_threshold() - DRIFT_THRESHOLD_MAX).abs() < 1e-6);
        config.drift_threshold = -1.0;
        assert_eq!(config.effective_drift_threshold(), 0.0);
        config.drift_threshold = 0.5;
        assert!((config.effective_drift_threshold() - 0.5).abs() < 1e-6);
    }
}
