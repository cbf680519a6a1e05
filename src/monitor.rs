use crate::host::HostBody;

/// Correction ticks between ground-truth rechecks of the full-body flag.
///
/// FBT status changes rarely, so querying the IK classification every
/// tick is wasted work; amortizing bounds staleness to ~100 ticks, a few
/// seconds at typical simulation rates.
pub const RECHECK_INTERVAL: u32 = 100;

/// Keeps the "is full-body-tracked" flag fresh.
///
/// Two triggers: [`mark_tracked`](Self::mark_tracked) sets the flag
/// unconditionally on calibration, and every `RECHECK_INTERVAL`-th
/// [`tick`](Self::tick) re-derives it from the host's IK classification.
/// The counter wraps on recheck and is not reset by calibration.
#[derive(Debug, Default)]
pub struct TrackingMonitor {
    is_tracked: bool,
    ticks: u32,
}

impl TrackingMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracked(&self) -> bool {
        self.is_tracked
    }

    /// Calibration just completed, so the rig is full-body by definition.
    pub fn mark_tracked(&mut self) {
        self.is_tracked = true;
    }

    /// Advance the per-tick counter, rechecking the classification on
    /// every `RECHECK_INTERVAL`-th call.
    pub fn tick(&mut self, host: &impl HostBody) {
        self.ticks += 1;
        if self.ticks < RECHECK_INTERVAL {
            return;
        }
        self.ticks = 0;
        let was_tracked = self.is_tracked;
        self.is_tracked = host.ik_classification().is_full_body();
        if self.is_tracked != was_tracked {
            log::debug!("tracking recheck: full-body = {}", self.is_tracked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockHost;
    use crate::types::IkClassification;

    #[test]
    fn test_mark_tracked() {
        let mut monitor = TrackingMonitor::new();
        assert!(!monitor.is_tracked());
        monitor.mark_tracked();
        assert!(monitor.is_tracked());
    }

    #[test]
    fn test_cached_until_interval() {
        // Classification is not full-body, but the cached flag holds
        // through tick 99.
        let host = MockHost::new(); // classification defaults to Unknown
        let mut monitor = TrackingMonitor::new();
        monitor.mark_tracked();
        for _ in 0..RECHECK_INTERVAL - 1 {
            monitor.tick(&host);
        }
        assert!(monitor.is_tracked());
    }

    #[test]
    fn test_recheck_on_hundredth_tick() {
        let host = MockHost::new();
        let mut monitor = TrackingMonitor::new();
        monitor.mark_tracked();
        for _ in 0..RECHECK_INTERVAL {
            monitor.tick(&host);
        }
        assert!(!monitor.is_tracked());
    }

    #[test]
    fn test_recheck_picks_up_full_body() {
        let mut host = MockHost::new();
        host.classification = IkClassification::SixPoint;
        let mut monitor = TrackingMonitor::new();
        for _ in 0..RECHECK_INTERVAL {
            monitor.tick(&host);
        }
        assert!(monitor.is_tracked());

        // Next window: pucks lost, classification drops again.
        host.classification = IkClassification::ThreePoint;
        for _ in 0..RECHECK_INTERVAL {
            monitor.tick(&host);
        }
        assert!(!monitor.is_tracked());
    }

    #[test]
    fn test_counter_not_reset_by_calibration() {
        let mut host = MockHost::new();
        host.classification = IkClassification::SixPoint;
        let mut monitor = TrackingMonitor::new();
        for _ in 0..RECHECK_INTERVAL - 10 {
            monitor.tick(&host);
        }
        monitor.mark_tracked();
        // Only 10 more ticks until the recheck fires despite calibration.
        host.classification = IkClassification::ThreePoint;
        for _ in 0..10 {
            monitor.tick(&host);
        }
        assert!(!monitor.is_tracked());
    }
}
