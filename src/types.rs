use glam::{Quat, Vec3};

/// World-space transform of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in meters.
    pub position: Vec3,
    /// Unit rotation quaternion.
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Local +Y axis in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local +Z axis in world space (Unity forward convention).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Semantic reference location on the player's skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPoint {
    Head,
    Hips,
    Chest,
}

/// Opaque identity of one piece of tracking hardware, stable for the
/// lifetime of the host's device enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle(pub u32);

/// One tracked hardware device as reported by the host at calibration time.
///
/// The host's device list is enumerated with the first two entries
/// reserved for the HMD and hand controllers; tracking pucks begin after
/// them (see [`crate::assign::RESERVED_DEVICES`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerDevice {
    pub handle: DeviceHandle,
    pub pose: Pose,
}

/// IK rig classification reported by the host at recheck time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IkClassification {
    Unknown,
    /// Head and two hands.
    ThreePoint,
    /// Head, hands, and hip tracker.
    FourPoint,
    /// Head, hands, hip, and both feet.
    SixPoint,
}

impl IkClassification {
    /// True for the rigs that count as full-body tracked (four- or six-point).
    pub fn is_full_body(self) -> bool {
        matches!(self, IkClassification::FourPoint | IkClassification::SixPoint)
    }
}
