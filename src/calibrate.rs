use crate::assign;
use crate::config::LocomotionConfig;
use crate::host::HostBody;
use crate::types::{BodyPoint, DeviceHandle, Pose, TrackerDevice};
use glam::{Quat, Vec3};

/// What a calibrated reference frame follows after calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    Tracker(DeviceHandle),
    Bone(BodyPoint),
}

/// Orientation reference created at calibration time.
///
/// Stores the source identity and a rotation offset fixed against the
/// source's pose at calibration. The world pose re-derived per query
/// follows the moving source; the offset itself never changes until the
/// next calibration replaces the whole frame.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFrame {
    source: FrameSource,
    /// Offset in the source's local space, so the world rotation is
    /// `source.rotation * local_rotation` at any later tick.
    local_rotation: Quat,
}

impl ReferenceFrame {
    fn new(source: FrameSource, source_pose: &Pose, world_rotation: Quat) -> Self {
        Self {
            source,
            local_rotation: source_pose.rotation.inverse() * world_rotation,
        }
    }

    pub fn source(&self) -> FrameSource {
        self.source
    }

    /// Current world pose: the source's position, with its rotation
    /// composed with the fixed offset. `None` when the source no longer
    /// resolves (puck off, avatar swapped).
    pub fn current_pose(&self, host: &impl HostBody) -> Option<Pose> {
        let parent = match self.source {
            FrameSource::Tracker(handle) => host.tracker_pose(handle),
            FrameSource::Bone(point) => host.bone_pose(point),
        }?;
        Some(Pose::new(
            parent.position,
            parent.rotation * self.local_rotation,
        ))
    }
}

/// Frames produced by one calibration pass. Either may be `None` when
/// no source pose resolved for that body point.
#[derive(Debug, Default)]
pub struct Calibration {
    pub hip: Option<ReferenceFrame>,
    pub chest: Option<ReferenceFrame>,
}

/// Build fresh hip and chest reference frames from the current tracking
/// snapshot.
///
/// The offset rotation is canonical per calibration, derived from the
/// head alone: the rotation mapping the head's up axis onto world up,
/// composed with the head's full rotation. Both frames share it
/// regardless of their own source's tilt. An unresolvable head leaves
/// both frames unset; the corrector then stays on its head fallback.
pub fn calibrate(host: &impl HostBody, config: &LocomotionConfig) -> Calibration {
    let Some(head) = host.head_pose() else {
        log::warn!("calibration: head anchor did not resolve, keeping head fallback");
        return Calibration::default();
    };
    let world_rotation = Quat::from_rotation_arc(head.up(), Vec3::Y) * head.rotation;

    let devices = host.tracker_devices();

    let hip_tracker = assign::find_tracker(&devices, BodyPoint::Hips, host);
    let hip = build_frame(BodyPoint::Hips, hip_tracker, host, config, world_rotation);

    // A puck can only serve one body point; if the chest scan lands on
    // the puck the hips already claimed, the chest takes its bone.
    let claimed = match hip {
        Some(frame) => frame.source(),
        None => FrameSource::Bone(BodyPoint::Hips),
    };
    let chest_tracker = assign::find_tracker(&devices, BodyPoint::Chest, host)
        .filter(|t| FrameSource::Tracker(t.handle) != claimed);
    let chest = build_frame(BodyPoint::Chest, chest_tracker, host, config, world_rotation);

    log::info!(
        "calibration: hip frame {:?}, chest frame {:?}",
        hip.map(|f| f.source()),
        chest.map(|f| f.source()),
    );

    Calibration { hip, chest }
}

fn build_frame(
    point: BodyPoint,
    tracker: Option<TrackerDevice>,
    host: &impl HostBody,
    config: &LocomotionConfig,
    world_rotation: Quat,
) -> Option<ReferenceFrame> {
    match tracker {
        Some(tracker) if !config.force_use_skeleton => Some(ReferenceFrame::new(
            FrameSource::Tracker(tracker.handle),
            &tracker.pose,
            world_rotation,
        )),
        _ => host
            .bone_pose(point)
            .map(|bone| ReferenceFrame::new(FrameSource::Bone(point), &bone, world_rotation)),
    }
}
