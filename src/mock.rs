use crate::host::HostBody;
use crate::types::{BodyPoint, DeviceHandle, IkClassification, Pose, TrackerDevice};
use glam::{Quat, Vec3};
use std::collections::HashMap;

/// Scriptable [`HostBody`] implementation for tests and examples.
///
/// Starts with a head anchor at standing eye height facing +Z, the two
/// reserved HMD/controller device slots, no skeleton bones, full axis
/// deflection (so the drift gate stays open), and an `Unknown` IK
/// classification. Fields are public; tests mutate them between ticks to
/// script pucks moving, avatars swapping, or tracking dropping out.
#[derive(Debug, Clone)]
pub struct MockHost {
    pub head: Option<Pose>,
    pub devices: Vec<TrackerDevice>,
    pub bones: HashMap<BodyPoint, Pose>,
    pub axes: (f32, f32),
    pub classification: IkClassification,
}

impl MockHost {
    pub fn new() -> Self {
        let reserved = TrackerDevice {
            handle: DeviceHandle(0),
            pose: Pose::IDENTITY,
        };
        Self {
            head: Some(Pose::new(Vec3::new(0.0, 1.7, 0.0), Quat::IDENTITY)),
            devices: vec![
                reserved,
                TrackerDevice {
                    handle: DeviceHandle(1),
                    ..reserved
                },
            ],
            bones: HashMap::new(),
            axes: (1.0, 0.0),
            classification: IkClassification::Unknown,
        }
    }

    /// Remove the head anchor, as when no HMD is present.
    pub fn without_head(mut self) -> Self {
        self.head = None;
        self
    }

    /// Add a skeleton bone pose.
    pub fn with_bone(mut self, point: BodyPoint, pose: Pose) -> Self {
        self.bones.insert(point, pose);
        self
    }

    /// Append a tracking puck after the reserved slots.
    pub fn with_device(mut self, handle: u32, pose: Pose) -> Self {
        self.devices.push(TrackerDevice {
            handle: DeviceHandle(handle),
            pose,
        });
        self
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBody for MockHost {
    fn head_pose(&self) -> Option<Pose> {
        self.head
    }

    fn tracker_devices(&self) -> Vec<TrackerDevice> {
        self.devices.clone()
    }

    fn tracker_pose(&self, handle: DeviceHandle) -> Option<Pose> {
        self.devices
            .iter()
            .find(|d| d.handle == handle)
            .map(|d| d.pose)
    }

    fn bone_pose(&self, point: BodyPoint) -> Option<Pose> {
        self.bones.get(&point).copied()
    }

    fn axis_input(&self) -> (f32, f32) {
        self.axes
    }

    fn ik_classification(&self) -> IkClassification {
        self.classification
    }
}
