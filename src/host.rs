use crate::types::{BodyPoint, DeviceHandle, IkClassification, Pose, TrackerDevice};

/// Capability interface the host hook layer implements to expose the
/// VR runtime and the player's rig to the core.
///
/// All methods are snapshot queries on the host's main simulation
/// thread; the core never retains borrows across ticks. Missing data is
/// `None`, never an error; the core falls back per query.
pub trait HostBody {
    /// Current world pose of the head anchor (HMD eye/camera transform).
    ///
    /// Checked once during [`crate::LocomotionSession::initialize`]; if
    /// it resolves there, it is queried again every correction tick and
    /// at calibration time.
    fn head_pose(&self) -> Option<Pose>;

    /// Full enumerated device list at calibration time, reserved
    /// HMD/controller prefix included. Empty when the runtime has no
    /// devices to report.
    fn tracker_devices(&self) -> Vec<TrackerDevice>;

    /// Current world pose of one device, queried per tick to follow a
    /// calibrated reference frame's moving source.
    fn tracker_pose(&self, handle: DeviceHandle) -> Option<Pose>;

    /// Current world pose of a skeleton bone, or `None` when the avatar
    /// has no such bone.
    fn bone_pose(&self, point: BodyPoint) -> Option<Pose>;

    /// Raw analog axes as `(vertical, horizontal)`, each normally in
    /// `[-1, 1]`, queried every tick for the drift gate.
    fn axis_input(&self) -> (f32, f32);

    /// IK rig classification, queried on the periodic tracking recheck.
    fn ik_classification(&self) -> IkClassification;
}
