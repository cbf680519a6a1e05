use crate::calibrate::{self, ReferenceFrame};
use crate::config::{LocomotionConfig, LocomotionMode};
use crate::host::HostBody;
use crate::monitor::TrackingMonitor;
use crate::types::Pose;
use crate::{LocomotionError, Result};
use glam::{Quat, Vec3};

/// Per-player correction context owned by the host hook layer.
///
/// All mutable core state lives here: the calibrated hip/chest frames,
/// the amortized full-body flag, and the initialization latch. The hook
/// layer passes the session into every call on the host's main
/// simulation thread; there is no interior locking.
///
/// Until [`initialize`](Self::initialize) succeeds the session is inert
/// and [`correct`](Self::correct) passes raw vectors through untouched,
/// leaving the host's vanilla locomotion in effect.
#[derive(Debug, Default)]
pub struct LocomotionSession {
    head_ready: bool,
    hip_frame: Option<ReferenceFrame>,
    chest_frame: Option<ReferenceFrame>,
    monitor: TrackingMonitor,
}

impl LocomotionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit readiness step, invoked once by the host when the VR
    /// runtime is up. Resolves the head anchor; failure leaves the
    /// session inert.
    pub fn initialize(&mut self, host: &impl HostBody) -> Result<()> {
        if host.head_pose().is_none() {
            return Err(LocomotionError::HeadAnchorUnavailable);
        }
        self.head_ready = true;
        log::info!("head anchor resolved, locomotion correction active");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.head_ready
    }

    pub fn is_tracked(&self) -> bool {
        self.monitor.is_tracked()
    }

    /// Calibration-complete handler: discard the old hip/chest frames,
    /// build fresh ones from the current tracking snapshot, and mark the
    /// rig tracked immediately (the periodic recheck confirms later).
    pub fn on_calibration_complete(&mut self, host: &impl HostBody, config: &LocomotionConfig) {
        self.monitor.mark_tracked();
        let calibration = calibrate::calibrate(host, config);
        self.hip_frame = calibration.hip;
        self.chest_frame = calibration.chest;
    }

    /// Per-tick transform: replace the host's raw head-relative velocity
    /// with one expressed relative to the configured body reference.
    ///
    /// Magnitude is preserved exactly: everything past the drift gate
    /// is a pure rotation. The drift gate returns zero outright when the
    /// combined axis deflection is below the configured threshold, and
    /// skips the tracking recheck counter along with everything else.
    pub fn correct(&mut self, host: &impl HostBody, config: &LocomotionConfig, raw: Vec3) -> Vec3 {
        if !self.head_ready {
            return raw;
        }

        if config.drift_compensation {
            let (vertical, horizontal) = host.axis_input();
            if config.effective_drift_threshold() > vertical.abs() + horizontal.abs() {
                return Vec3::ZERO;
            }
        }

        // The head must resolve every tick; if it stops doing so, the
        // fail-safe is an untouched passthrough.
        let Some(head) = host.head_pose() else {
            return raw;
        };

        let frame = self.select_frame(host, config).unwrap_or(head);
        let corrected = reorient(raw, &head, &frame);

        // The recheck clock runs on corrected ticks only.
        self.monitor.tick(host);
        corrected
    }

    /// Pick the hip or chest frame when the mode asks for it, the rig is
    /// currently tracked, the frame was calibrated, and its source still
    /// resolves. Any miss means the head fallback.
    fn select_frame(&self, host: &impl HostBody, config: &LocomotionConfig) -> Option<Pose> {
        if !self.monitor.is_tracked() {
            return None;
        }
        let frame = match config.mode {
            LocomotionMode::Hip => self.hip_frame.as_ref(),
            LocomotionMode::Chest => self.chest_frame.as_ref(),
            LocomotionMode::Head => None,
        }?;
        frame.current_pose(host)
    }
}

/// Strip the head's full orientation out of `velocity`, then re-express
/// it relative to `frame`.
///
/// The double cross product projects the head forward onto the
/// horizontal plane, cancelling pitch and roll while keeping yaw; the
/// inverse of the look rotation along that flattened vector undoes the
/// host's head-relative locomotion. The frame's rotation is then
/// reapplied with its own residual tilt removed the same way its
/// calibration offset was built: up axis mapped back onto world up.
fn reorient(velocity: Vec3, head: &Pose, frame: &Pose) -> Vec3 {
    let flat = Vec3::Y.cross(head.forward()).cross(Vec3::Y);
    // Head looking straight up or down flattens to nothing; treat the
    // look rotation as identity rather than produce NaNs.
    let look = match flat.try_normalize() {
        Some(direction) => Quat::from_rotation_arc(Vec3::Z, direction),
        None => Quat::IDENTITY,
    };
    let input_direction = look.inverse() * velocity;

    Quat::from_rotation_arc(frame.up(), Vec3::Y) * frame.rotation * input_direction
}
